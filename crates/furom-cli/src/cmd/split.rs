// crates/furom-cli/src/cmd/split.rs

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use furom_core::bitmap::raster::save_view;
use furom_core::container::extract::{self, Artifact, ArtifactKind, ArtifactSink};
use furom_core::{OffsetTable, PixelGrid, Record};

use crate::io::files;

#[derive(Args, Debug)]
pub struct SplitArgs {
    /// Binary dump to split
    #[arg(long)]
    pub rom: String,

    /// Where audioNNNN.a18 files go
    #[arg(long, default_value = "a18_files")]
    pub audio_dir: String,

    /// Where img_NNNN.bmp files go
    #[arg(long, default_value = "imgs")]
    pub image_dir: String,
}

/// Writes artifacts to two directories and logs every decision.
struct DirSink {
    audio_dir: PathBuf,
    image_dir: PathBuf,
}

impl DirSink {
    fn path_for(&self, artifact: &Artifact) -> PathBuf {
        match artifact.kind {
            ArtifactKind::Audio => self.audio_dir.join(artifact.file_name()),
            ArtifactKind::Image => self.image_dir.join(artifact.file_name()),
        }
    }
}

impl ArtifactSink for DirSink {
    fn audio(&mut self, artifact: &Artifact, bytes: &[u8]) -> furom_core::Result<()> {
        let path = self.path_for(artifact);
        std::fs::write(&path, bytes)?;
        tracing::info!(
            "audio track {}: {} bytes -> {}",
            artifact.seq,
            bytes.len(),
            path.display()
        );
        Ok(())
    }

    fn image(&mut self, artifact: &Artifact, view: &PixelGrid) -> furom_core::Result<()> {
        let path = self.path_for(artifact);
        save_view(view, &path)?;
        tracing::info!(
            "image at offset {:#x} -> {}",
            artifact.record.start,
            path.display()
        );
        Ok(())
    }

    fn skipped(&mut self, record: &Record) {
        tracing::debug!(
            "record {} [{:#x}..{:#x}) {} bytes: unknown, skipped",
            record.index,
            record.start,
            record.end,
            record.len()
        );
    }
}

pub fn run(args: SplitArgs) -> anyhow::Result<()> {
    let blob = files::read_bytes(&args.rom)?;
    let table = load_table(&args.rom, &blob)?;
    tracing::info!("offset table: {} entries, blob {} bytes", table.len(), blob.len());

    let mut sink = DirSink {
        audio_dir: PathBuf::from(&args.audio_dir),
        image_dir: PathBuf::from(&args.image_dir),
    };
    files::ensure_dir(&sink.audio_dir)?;
    files::ensure_dir(&sink.image_dir)?;

    let summary = extract::extract(&table, &blob, &mut sink)?;

    eprintln!(
        "split ok: rom={} records={} audio={} images={} skipped={}",
        args.rom,
        table.len(),
        summary.audio,
        summary.images,
        summary.skipped
    );
    Ok(())
}

/// Parse the table, failing the whole run if it is malformed, and warn about
/// duplicate offsets (boundaries still follow table order).
pub fn load_table(rom: &str, blob: &[u8]) -> anyhow::Result<OffsetTable> {
    let table = OffsetTable::parse(blob).with_context(|| format!("offset table of {rom}"))?;
    let dups = table.duplicate_offsets();
    if !dups.is_empty() {
        tracing::warn!(
            "offset table has duplicate entries {:x?}; record bounds follow table order",
            dups
        );
    }
    for r in table.records().iter().filter(|r| r.is_inverted()) {
        tracing::warn!(
            "record {} starts at {:#x} but next entry is {:#x}; record has no bytes",
            r.index,
            r.start,
            r.end
        );
    }
    Ok(table)
}


// crates/furom-cli/src/cmd/patch.rs

use std::path::Path;

use anyhow::Context;
use clap::Args;
use furom_core::bitmap::raster::{load_grid, IngestMode};
use furom_core::container::build::replace_record;
use furom_core::encode_image;

use crate::io::files;

#[derive(Args, Debug)]
pub struct PatchArgs {
    /// Dump to patch
    #[arg(long)]
    pub rom: String,

    /// Table index of the record to replace
    #[arg(long)]
    pub index: usize,

    /// Replacement payload. .bmp/.png rasters are encoded first (strict 64x32);
    /// anything else is used as raw bytes.
    #[arg(long)]
    pub r#in: String,

    /// Output dump path
    #[arg(long)]
    pub out: String,
}

pub fn run(args: PatchArgs) -> anyhow::Result<()> {
    let blob = files::read_bytes(&args.rom)?;
    let payload = load_payload(Path::new(&args.r#in))?;

    let patched = replace_record(&blob, args.index, &payload)
        .with_context(|| format!("patch record {} of {}", args.index, args.rom))?;
    files::write_bytes(Path::new(&args.out), &patched)?;

    eprintln!(
        "patch ok: rom={} index={} bytes={} out={}",
        args.rom,
        args.index,
        payload.len(),
        args.out
    );
    Ok(())
}

fn load_payload(path: &Path) -> anyhow::Result<Vec<u8>> {
    let is_raster = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("bmp") || e.eq_ignore_ascii_case("png"))
        .unwrap_or(false);

    if is_raster {
        let grid = load_grid(path, IngestMode::Strict)
            .with_context(|| format!("load raster {}", path.display()))?;
        return Ok(encode_image(&grid).to_vec());
    }
    std::fs::read(path).with_context(|| format!("read {}", path.display()))
}

// crates/furom-cli/src/cmd/img2bin.rs

use std::path::Path;

use anyhow::Context;
use clap::Args;
use furom_core::bitmap::raster::{load_grid, IngestMode};
use furom_core::encode_image;

use crate::io::files;

const RASTER_EXTS: &[&str] = &["bmp", "png"];

#[derive(Args, Debug)]
pub struct Img2BinArgs {
    /// Raster file, or a directory of .bmp/.png files
    #[arg(long)]
    pub r#in: String,

    /// Output .bin file, or a directory when --in is a directory
    #[arg(long)]
    pub out: String,

    /// Resize rasters that are not 64x32 instead of rejecting them (lossy)
    #[arg(long, default_value_t = false)]
    pub lenient: bool,
}

pub fn run(args: Img2BinArgs) -> anyhow::Result<()> {
    let mode = if args.lenient {
        IngestMode::Lenient
    } else {
        IngestMode::Strict
    };

    let input = Path::new(&args.r#in);
    if input.is_dir() {
        return run_dir(input, Path::new(&args.out), mode);
    }

    let n = convert_one(input, Path::new(&args.out), mode)?;
    eprintln!("img2bin ok: in={} out={} bytes={}", args.r#in, args.out, n);
    Ok(())
}

/// Per-file failures are logged and skipped; the batch keeps going.
fn run_dir(input: &Path, out_dir: &Path, mode: IngestMode) -> anyhow::Result<()> {
    let rasters = files::list_with_ext(input, RASTER_EXTS)?;
    if rasters.is_empty() {
        anyhow::bail!("no .bmp/.png files found in {}", input.display());
    }
    files::ensure_dir(out_dir)?;

    tracing::info!("converting {} raster files ({:?})", rasters.len(), mode);
    let mut converted = 0usize;
    for path in &rasters {
        let out = files::sibling_name(out_dir, path, "bin");
        match convert_one(path, &out, mode) {
            Ok(n) => {
                converted += 1;
                tracing::info!("converted {} -> {} ({} bytes)", path.display(), out.display(), n);
            }
            Err(e) => tracing::warn!("error converting {}: {:#}", path.display(), e),
        }
    }

    eprintln!(
        "img2bin ok: converted={}/{} out_dir={}",
        converted,
        rasters.len(),
        out_dir.display()
    );
    Ok(())
}

fn convert_one(input: &Path, output: &Path, mode: IngestMode) -> anyhow::Result<usize> {
    let grid = load_grid(input, mode).with_context(|| format!("load raster {}", input.display()))?;
    let packed = encode_image(&grid);
    files::write_bytes(output, &packed)?;
    Ok(packed.len())
}

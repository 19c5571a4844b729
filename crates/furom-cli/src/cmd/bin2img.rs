// crates/furom-cli/src/cmd/bin2img.rs

use std::path::Path;

use anyhow::Context;
use clap::Args;
use furom_core::bitmap::orient::to_raster_orientation;
use furom_core::bitmap::raster::save_grid;
use furom_core::decode_image;

use crate::io::files;

#[derive(Args, Debug)]
pub struct Bin2ImgArgs {
    /// 256-byte packed image record
    #[arg(long)]
    pub r#in: String,

    /// Output raster (.bmp or .png)
    #[arg(long)]
    pub out: String,

    /// Also print the image as text art
    #[arg(long, default_value_t = false)]
    pub print: bool,
}

pub fn run(args: Bin2ImgArgs) -> anyhow::Result<()> {
    let bytes = files::read_bytes(&args.r#in)?;
    let grid = decode_image(&bytes).with_context(|| format!("decode {}", args.r#in))?;

    save_grid(&grid, Path::new(&args.out)).with_context(|| format!("write {}", args.out))?;

    if args.print {
        print!("{}", to_raster_orientation(&grid));
    }
    eprintln!(
        "bin2img ok: in={} out={} on_pixels={}",
        args.r#in,
        args.out,
        grid.count_on()
    );
    Ok(())
}

// crates/furom-cli/src/cmd/inspect.rs

use clap::Args;
use furom_core::bitmap::codec::decode_image;
use furom_core::bitmap::orient::to_raster_orientation;
use furom_core::checksum::crc32;
use furom_core::container::extract::{plan, Decision};
use furom_core::RecordKind;

use crate::cmd::split::load_table;
use crate::io::files;

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Binary dump to inspect
    #[arg(long)]
    pub rom: String,

    /// Also print each image record as text art
    #[arg(long, default_value_t = false)]
    pub preview: bool,
}

pub fn run(args: InspectArgs) -> anyhow::Result<()> {
    let blob = files::read_bytes(&args.rom)?;
    let table = load_table(&args.rom, &blob)?;
    let p = plan(&table, &blob);

    println!("rom          = {}", args.rom);
    println!("blob_bytes   = {}", blob.len());
    println!("records      = {}", table.len());
    println!("header_bytes = {}", table.header_len());
    println!("audio        = {}", p.counters.audio);
    println!("images       = {}", p.counters.image);
    println!("unknown      = {}", p.skipped().count());
    println!("--- records ---");

    for decision in &p.decisions {
        let r = decision.record();
        let kind = decision.kind();
        let name = match decision {
            Decision::Extract(a) => a.file_name(),
            Decision::Skip(_) => String::from("-"),
        };
        let bytes = r.bytes(&blob);
        println!(
            "#{:<4} {:#010x}..{:#010x} len={:<7} kind={:<7} crc32={:08x} -> {}",
            r.index,
            r.start,
            r.end,
            r.len(),
            kind,
            crc32(bytes),
            name
        );

        if args.preview && kind == RecordKind::Image {
            let grid = decode_image(bytes)?;
            print!("{}", to_raster_orientation(&grid));
        }
    }

    Ok(())
}

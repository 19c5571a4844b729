// crates/furom-cli/src/cmd/pack.rs

use std::path::Path;

use clap::Args;
use furom_core::container::build::build_container;

use crate::io::files;

#[derive(Args, Debug)]
pub struct PackArgs {
    /// Output dump path
    #[arg(long)]
    pub out: String,

    /// Record files, in table order
    #[arg(required = true)]
    pub records: Vec<String>,
}

pub fn run(args: PackArgs) -> anyhow::Result<()> {
    let mut records = Vec::with_capacity(args.records.len());
    for path in &args.records {
        records.push(files::read_bytes(path)?);
    }

    let blob = build_container(&records)?;
    files::write_bytes(Path::new(&args.out), &blob)?;

    eprintln!(
        "pack ok: out={} records={} bytes={}",
        args.out,
        records.len(),
        blob.len()
    );
    Ok(())
}

// crates/furom-cli/src/main.rs

use clap::{Parser, Subcommand};

mod cmd;
mod io;

#[derive(Parser)]
#[command(name = "furom")]
#[command(about = "Firmware dump splitter and 64x32 bitmap codec", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Split a dump into audio (.a18) and image (.bmp) artifacts
    Split(cmd::split::SplitArgs),

    /// Print the offset table and how each record classifies
    Inspect(cmd::inspect::InspectArgs),

    /// Render one 256-byte image record as a viewable raster
    Bin2img(cmd::bin2img::Bin2ImgArgs),

    /// Re-encode raster(s) into 256-byte image records
    Img2bin(cmd::img2bin::Img2BinArgs),

    /// Build a dump from record files, in the given order
    Pack(cmd::pack::PackArgs),

    /// Replace one record of a dump with a same-sized payload
    Patch(cmd::patch::PatchArgs),

    /// Decode a directory of .a18 files to .wav via the external codec
    A18Decode(cmd::a18::A18DecodeArgs),

    /// Encode a directory of .wav files to .a18 via the external codec
    A18Encode(cmd::a18::A18EncodeArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.cmd {
        Commands::Split(args) => cmd::split::run(args),
        Commands::Inspect(args) => cmd::inspect::run(args),
        Commands::Bin2img(args) => cmd::bin2img::run(args),
        Commands::Img2bin(args) => cmd::img2bin::run(args),
        Commands::Pack(args) => cmd::pack::run(args),
        Commands::Patch(args) => cmd::patch::run(args),
        Commands::A18Decode(args) => cmd::a18::run_decode(args),
        Commands::A18Encode(args) => cmd::a18::run_encode(args),
    }
}

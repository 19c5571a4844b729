// crates/furom-cli/src/cmd/a18.rs

use std::path::{Path, PathBuf};

use clap::Args;
use furom_a18::{decode_file, encode_wav_file, CodecStatus, CommandCodec};

use crate::io::files;

#[derive(Args, Debug)]
pub struct A18DecodeArgs {
    /// External codec program (called as `<codec> dec <in> <out>`)
    #[arg(long)]
    pub codec: PathBuf,

    /// Fixed argument passed to the codec before the verb (repeatable)
    #[arg(long = "codec-arg")]
    pub codec_args: Vec<String>,

    /// Directory of .a18 files
    #[arg(long, default_value = "a18_files")]
    pub in_dir: String,

    /// Directory for decoded .wav files
    #[arg(long, default_value = "wavs")]
    pub out_dir: String,
}

#[derive(Args, Debug)]
pub struct A18EncodeArgs {
    /// External codec program (called as `<codec> enc <in> <out> <buffer> <size> <mode>`)
    #[arg(long)]
    pub codec: PathBuf,

    /// Fixed argument passed to the codec before the verb (repeatable)
    #[arg(long = "codec-arg")]
    pub codec_args: Vec<String>,

    /// Directory of .wav files
    #[arg(long, default_value = "convert_wavs")]
    pub in_dir: String,

    /// Directory for encoded .a18 files
    #[arg(long, default_value = "converted_a18")]
    pub out_dir: String,
}

pub fn run_decode(args: A18DecodeArgs) -> anyhow::Result<()> {
    let codec = CommandCodec::new(&args.codec).with_args(&args.codec_args);
    run_batch(
        "a18-decode",
        Path::new(&args.in_dir),
        Path::new(&args.out_dir),
        ("a18", "wav"),
        |input, output| decode_file(&codec, input, output),
    )
}

pub fn run_encode(args: A18EncodeArgs) -> anyhow::Result<()> {
    let codec = CommandCodec::new(&args.codec).with_args(&args.codec_args);
    run_batch(
        "a18-encode",
        Path::new(&args.in_dir),
        Path::new(&args.out_dir),
        ("wav", "a18"),
        |input, output| encode_wav_file(&codec, input, output),
    )
}

/// Convert every `<from>` file in `in_dir` to `<to>` in `out_dir`.
/// A failing file is reported and skipped.
fn run_batch<F>(
    label: &str,
    in_dir: &Path,
    out_dir: &Path,
    (from, to): (&str, &str),
    mut convert: F,
) -> anyhow::Result<()>
where
    F: FnMut(&Path, &Path) -> furom_a18::Result<CodecStatus>,
{
    if !in_dir.is_dir() {
        anyhow::bail!("input directory {} not found", in_dir.display());
    }
    let inputs = files::list_with_ext(in_dir, &[from])?;
    if inputs.is_empty() {
        anyhow::bail!("no .{} files found in {}", from, in_dir.display());
    }
    files::ensure_dir(out_dir)?;

    let mut ok = 0usize;
    for input in &inputs {
        let output = files::sibling_name(out_dir, input, to);
        tracing::info!("converting {} -> {}", input.display(), output.display());
        match convert(input, &output) {
            Ok(status) => {
                ok += 1;
                if !status.is_zero() {
                    tracing::debug!("{}: codec status {}", input.display(), status.0);
                }
            }
            Err(e) => tracing::warn!("failed {}: {}", input.display(), e),
        }
    }

    eprintln!(
        "{} ok: converted={}/{} out_dir={}",
        label,
        ok,
        inputs.len(),
        out_dir.display()
    );
    Ok(())
}

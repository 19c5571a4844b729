// crates/furom-a18/src/codec.rs

use std::path::Path;

use crate::buffer::prepare_encode_buffer;
use crate::error::{CodecError, Result};

/// Mode flag passed on every encode call. The device tooling never uses another.
pub const ENCODE_MODE: u32 = 0;

/// Raw numeric result returned by the codec.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CodecStatus(pub u32);

impl CodecStatus {
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }
}

/// Call contract of the external A18 codec.
///
/// Implementations may bind it any way they like (FFI, subprocess, RPC); the
/// codec reads `input` and writes `output` itself.
pub trait AudioCodec {
    /// A18 -> WAV.
    fn decode_audio(&self, input: &Path, output: &Path) -> Result<CodecStatus>;

    /// WAV -> A18. `buffer` is always `size` bytes long.
    fn encode_audio(
        &self,
        input: &Path,
        output: &Path,
        buffer: &[u8],
        size: u32,
    ) -> Result<CodecStatus>;
}

/// Decode one file and check that something was written.
pub fn decode_file<C>(codec: &C, input: &Path, output: &Path) -> Result<CodecStatus>
where
    C: AudioCodec + ?Sized,
{
    clear_output(output)?;
    let status = codec.decode_audio(input, output)?;
    ensure_output(output)?;
    Ok(status)
}

/// Encode one WAV file, building the fixed-size buffer from its payload.
///
/// The status value is not trusted on its own: success means the output file
/// exists and is non-empty.
pub fn encode_wav_file<C>(codec: &C, input: &Path, output: &Path) -> Result<CodecStatus>
where
    C: AudioCodec + ?Sized,
{
    let wav = std::fs::read(input)?;
    let buf = prepare_encode_buffer(&wav)?;
    if buf.truncated() {
        tracing::debug!(
            "{}: payload {} bytes, truncated to {}",
            input.display(),
            buf.info.payload_bytes(),
            buf.payload_len
        );
    }

    clear_output(output)?;
    let status = codec.encode_audio(input, output, &buf.bytes, buf.size())?;
    ensure_output(output)?;
    Ok(status)
}

/// A file left from an earlier run must not count as this run's output.
fn clear_output(output: &Path) -> Result<()> {
    match std::fs::remove_file(output) {
        Err(e) if e.kind() != std::io::ErrorKind::NotFound => Err(e.into()),
        _ => Ok(()),
    }
}

fn ensure_output(output: &Path) -> Result<()> {
    match std::fs::metadata(output) {
        Ok(m) if m.len() > 0 => Ok(()),
        _ => Err(CodecError::EmptyOutput(output.to_path_buf())),
    }
}

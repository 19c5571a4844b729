// crates/furom-a18/src/buffer.rs

use std::io::Cursor;

use crate::error::Result;

/// The codec only ever accepts a buffer of exactly this many bytes.
pub const MAGIC_BUFFER_SIZE: usize = 16_000;

/// Size of a canonical RIFF/WAVE PCM header; the payload starts right after it.
pub const WAV_HEADER_LEN: usize = 44;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct WavInfo {
    /// Samples across all channels (frames * channels).
    pub total_samples: u32,
    pub sample_rate: u32,
    pub channels: u16,
    /// Bytes per sample.
    pub sample_width: u16,
}

impl WavInfo {
    pub fn payload_bytes(&self) -> usize {
        self.total_samples as usize * self.sample_width as usize
    }
}

/// Zero-padded, fixed-size encode input.
#[derive(Clone, Debug)]
pub struct EncodeBuffer {
    pub info: WavInfo,
    pub bytes: Vec<u8>,
    /// How many leading bytes of `bytes` came from the WAV payload.
    pub payload_len: usize,
}

impl EncodeBuffer {
    pub fn size(&self) -> u32 {
        self.bytes.len() as u32
    }

    pub fn truncated(&self) -> bool {
        self.info.payload_bytes() > self.payload_len
    }
}

pub fn wav_info(wav: &[u8]) -> Result<WavInfo> {
    let reader = hound::WavReader::new(Cursor::new(wav))?;
    let spec = reader.spec();
    Ok(WavInfo {
        total_samples: reader.len(),
        sample_rate: spec.sample_rate,
        channels: spec.channels,
        sample_width: spec.bits_per_sample.div_ceil(8),
    })
}

/// Copy the raw PCM payload (after the 44-byte header) into a zeroed
/// `MAGIC_BUFFER_SIZE` buffer, truncating anything past it.
///
/// The length taken is `min(total_samples * sample_width, MAGIC_BUFFER_SIZE)`,
/// further limited by what the file actually holds.
pub fn prepare_encode_buffer(wav: &[u8]) -> Result<EncodeBuffer> {
    let info = wav_info(wav)?;

    let mut bytes = vec![0u8; MAGIC_BUFFER_SIZE];
    let available = wav.len().saturating_sub(WAV_HEADER_LEN);
    let payload_len = info.payload_bytes().min(MAGIC_BUFFER_SIZE).min(available);
    if payload_len > 0 {
        bytes[..payload_len].copy_from_slice(&wav[WAV_HEADER_LEN..WAV_HEADER_LEN + payload_len]);
    }

    Ok(EncodeBuffer {
        info,
        bytes,
        payload_len,
    })
}

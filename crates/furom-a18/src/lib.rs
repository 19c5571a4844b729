//! Boundary to the external A18 audio codec.
//!
//! The codec itself is a black box. This crate fixes its call contract
//! ([`AudioCodec`]), prepares the fixed-size encode buffer from a WAV file,
//! and ships one concrete binding that drives an external program.

pub mod buffer;
pub mod codec;
pub mod command;
pub mod error;

pub use crate::buffer::{prepare_encode_buffer, EncodeBuffer, WavInfo, MAGIC_BUFFER_SIZE};
pub use crate::codec::{decode_file, encode_wav_file, AudioCodec, CodecStatus, ENCODE_MODE};
pub use crate::command::CommandCodec;
pub use crate::error::{CodecError, Result};

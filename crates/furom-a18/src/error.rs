use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CodecError>;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("wav error: {0}")]
    Wav(#[from] hound::Error),

    #[error("failed to launch codec {program}: {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    #[error("codec terminated without an exit status")]
    Terminated,

    #[error("codec produced no output: {}", .0.display())]
    EmptyOutput(PathBuf),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

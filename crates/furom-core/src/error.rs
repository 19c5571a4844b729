use thiserror::Error;

pub type Result<T> = std::result::Result<T, FuromError>;

#[derive(Debug, Error)]
pub enum FuromError {
    #[error("truncated input: need {need} bytes, got {got}")]
    TruncatedInput { need: u64, got: usize },

    #[error("format error: {0}")]
    Format(String),

    #[error("dimension mismatch: expected {expected_w}x{expected_h}, got {got_w}x{got_h}")]
    DimensionMismatch {
        expected_w: u32,
        expected_h: u32,
        got_w: u32,
        got_h: u32,
    },

    #[error("offset table entry {index} = {offset} exceeds blob length {blob_len}")]
    OffsetOutOfRange {
        index: usize,
        offset: u32,
        blob_len: usize,
    },

    #[error("record index {index} out of range (table has {count} entries)")]
    RecordIndexOutOfRange { index: usize, count: usize },

    #[error("record {index} is {record_len} bytes, replacement is {payload_len} bytes")]
    RecordSizeMismatch {
        index: usize,
        record_len: usize,
        payload_len: usize,
    },

    #[error("raster error: {0}")]
    Raster(#[from] image::ImageError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

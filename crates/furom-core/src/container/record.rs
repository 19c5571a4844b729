// crates/furom-core/src/container/record.rs

use std::fmt;

use crate::bitmap::codec::PACKED_LEN;

/// Bytes 4..6 of every audio record.
pub const AUDIO_MARKER: [u8; 2] = [0x80, 0x3E];
pub const AUDIO_MARKER_OFFSET: usize = 4;

/// One table entry's byte range inside the blob.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Record {
    /// Position in the offset table.
    pub index: usize,
    pub start: usize,
    pub end: usize,
}

impl Record {
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `end < start`: the table listed a later offset before an earlier one.
    pub fn is_inverted(&self) -> bool {
        self.end < self.start
    }

    /// The record's bytes, or an empty slice for an inverted or out-of-blob range.
    pub fn bytes<'a>(&self, blob: &'a [u8]) -> &'a [u8] {
        blob.get(self.start..self.end).unwrap_or(&[])
    }

    /// The two bytes at the marker position, read from the blob (not clipped to
    /// the record), or `None` if the blob ends first.
    pub fn marker(&self, blob: &[u8]) -> Option<[u8; 2]> {
        let at = self.start.checked_add(AUDIO_MARKER_OFFSET)?;
        let m = blob.get(at..at + 2)?;
        Some([m[0], m[1]])
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Audio,
    Image,
    Unknown,
}

impl RecordKind {
    pub fn label(self) -> &'static str {
        match self {
            RecordKind::Audio => "audio",
            RecordKind::Image => "image",
            RecordKind::Unknown => "unknown",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Audio wins over length: a 256-byte record carrying the marker is audio.
///
/// The marker is checked before the range is looked at, so an inverted record
/// with a marker at `start + 4` is still audio (with no bytes).
pub fn classify(record: &Record, blob: &[u8]) -> RecordKind {
    if record.marker(blob) == Some(AUDIO_MARKER) {
        return RecordKind::Audio;
    }
    if !record.is_inverted() && record.len() == PACKED_LEN {
        return RecordKind::Image;
    }
    RecordKind::Unknown
}

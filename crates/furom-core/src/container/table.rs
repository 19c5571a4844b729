// crates/furom-core/src/container/table.rs

use std::io::Cursor;

use byteorder::{LittleEndian, ReadBytesExt};

use crate::container::record::Record;
use crate::error::{FuromError, Result};

/// The container's leading index of record start positions.
///
/// Layout (little-endian):
/// count:u32
/// offsets: count x u32   (absolute positions inside the same blob)
/// record bytes...
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OffsetTable {
    offsets: Vec<u32>,
    blob_len: usize,
}

impl OffsetTable {
    /// Parse and validate the table at the head of `blob`.
    ///
    /// Any offset past the end of the blob makes the whole table untrustworthy,
    /// so it is rejected rather than clamped.
    pub fn parse(blob: &[u8]) -> Result<Self> {
        let offsets = parse_offsets(blob)?;
        for (index, &offset) in offsets.iter().enumerate() {
            if offset as usize > blob.len() {
                return Err(FuromError::OffsetOutOfRange {
                    index,
                    offset,
                    blob_len: blob.len(),
                });
            }
        }
        Ok(Self {
            offsets,
            blob_len: blob.len(),
        })
    }

    pub fn offsets(&self) -> &[u32] {
        &self.offsets
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    pub fn blob_len(&self) -> usize {
        self.blob_len
    }

    /// Bytes occupied by the count word plus the offsets.
    pub fn header_len(&self) -> usize {
        4 + 4 * self.offsets.len()
    }

    pub fn records(&self) -> Vec<Record> {
        record_bounds(&self.offsets, self.blob_len)
    }

    /// Offset values appearing more than once, in first-seen order.
    ///
    /// Boundaries are still derived by table adjacency; this only lets callers
    /// warn that the neighbouring records are probably not what was intended.
    pub fn duplicate_offsets(&self) -> Vec<u32> {
        let mut dups = Vec::new();
        for (i, &off) in self.offsets.iter().enumerate() {
            if self.offsets[..i].contains(&off) && !dups.contains(&off) {
                dups.push(off);
            }
        }
        dups
    }
}

/// Read `count` and then `count` little-endian u32 offsets from the head of `blob`.
pub fn parse_offsets(blob: &[u8]) -> Result<Vec<u32>> {
    if blob.len() < 4 {
        return Err(FuromError::TruncatedInput {
            need: 4,
            got: blob.len(),
        });
    }

    let mut rdr = Cursor::new(blob);
    let count = rdr.read_u32::<LittleEndian>()?;

    let need = 4u64 + 4u64 * count as u64;
    if (blob.len() as u64) < need {
        return Err(FuromError::TruncatedInput {
            need,
            got: blob.len(),
        });
    }

    let mut offsets = Vec::with_capacity(count as usize);
    for _ in 0..count {
        offsets.push(rdr.read_u32::<LittleEndian>()?);
    }
    Ok(offsets)
}

/// Derive `[start, end)` for every table entry.
///
/// `end` is the *next entry in table order*, not the next larger offset; the
/// last entry runs to `blob_len`. Out-of-order tables therefore produce
/// inverted ranges, which are kept as-is for the classifier to drop.
pub fn record_bounds(offsets: &[u32], blob_len: usize) -> Vec<Record> {
    offsets
        .iter()
        .enumerate()
        .map(|(index, &start)| {
            let end = offsets
                .get(index + 1)
                .map(|&next| next as usize)
                .unwrap_or(blob_len);
            Record {
                index,
                start: start as usize,
                end,
            }
        })
        .collect()
}

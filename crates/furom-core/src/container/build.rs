// crates/furom-core/src/container/build.rs

use byteorder::{LittleEndian, WriteBytesExt};

use crate::container::table::OffsetTable;
use crate::error::{FuromError, Result};

/// Assemble a container: count, offsets, then the records back-to-back in the
/// given order. Parsing the result yields the same records.
pub fn build_container<R: AsRef<[u8]>>(records: &[R]) -> Result<Vec<u8>> {
    let header_len = 4 + 4 * records.len();
    let body_len: usize = records.iter().map(|r| r.as_ref().len()).sum();
    let total = header_len + body_len;
    if total > u32::MAX as usize {
        return Err(FuromError::Format(format!(
            "container would be {} bytes; offsets are u32",
            total
        )));
    }

    let mut out = Vec::with_capacity(total);
    out.write_u32::<LittleEndian>(records.len() as u32)?;

    let mut at = header_len;
    for r in records {
        out.write_u32::<LittleEndian>(at as u32)?;
        at += r.as_ref().len();
    }
    for r in records {
        out.extend_from_slice(r.as_ref());
    }

    Ok(out)
}

/// Return a copy of `blob` with record `index` replaced by `payload`.
///
/// The offset table is not rewritten, so the payload must be exactly as long
/// as the record it replaces.
pub fn replace_record(blob: &[u8], index: usize, payload: &[u8]) -> Result<Vec<u8>> {
    let table = OffsetTable::parse(blob)?;
    let records = table.records();
    let record = records
        .get(index)
        .ok_or(FuromError::RecordIndexOutOfRange {
            index,
            count: records.len(),
        })?;

    if record.is_inverted() || record.len() != payload.len() {
        return Err(FuromError::RecordSizeMismatch {
            index,
            record_len: record.len(),
            payload_len: payload.len(),
        });
    }

    let mut out = blob.to_vec();
    out[record.start..record.end].copy_from_slice(payload);
    Ok(out)
}

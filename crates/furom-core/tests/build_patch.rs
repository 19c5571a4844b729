// crates/furom-core/tests/build_patch.rs

use furom_core::container::build::{build_container, replace_record};
use furom_core::{FuromError, OffsetTable};

#[test]
fn built_container_parses_back_to_the_same_records() {
    let records: Vec<Vec<u8>> = vec![vec![1u8; 10], vec![], vec![2u8; 256], vec![3u8; 7]];
    let blob = build_container(&records).unwrap();

    let table = OffsetTable::parse(&blob).unwrap();
    assert_eq!(table.len(), 4);
    assert_eq!(table.offsets()[0] as usize, table.header_len());

    let got: Vec<&[u8]> = table.records().iter().map(|r| r.bytes(&blob)).collect();
    let want: Vec<&[u8]> = records.iter().map(|r| r.as_slice()).collect();
    assert_eq!(got, want);
}

#[test]
fn empty_container_is_just_a_zero_count() {
    let blob = build_container::<Vec<u8>>(&[]).unwrap();
    assert_eq!(blob, vec![0, 0, 0, 0]);
}

#[test]
fn replace_swaps_bytes_in_place() {
    let blob = build_container(&[vec![0u8; 4], vec![9u8; 256], vec![0u8; 3]]).unwrap();
    let patched = replace_record(&blob, 1, &[7u8; 256]).unwrap();

    assert_eq!(patched.len(), blob.len());
    let table = OffsetTable::parse(&patched).unwrap();
    let recs = table.records();
    assert_eq!(recs[1].bytes(&patched), &[7u8; 256][..]);
    assert_eq!(recs[0].bytes(&patched), recs[0].bytes(&blob));
    assert_eq!(recs[2].bytes(&patched), recs[2].bytes(&blob));
}

#[test]
fn replace_rejects_wrong_size_and_index() {
    let blob = build_container(&[vec![0u8; 256]]).unwrap();
    assert!(matches!(
        replace_record(&blob, 0, &[0u8; 255]),
        Err(FuromError::RecordSizeMismatch { index: 0, record_len: 256, payload_len: 255 })
    ));
    assert!(matches!(
        replace_record(&blob, 1, &[0u8; 256]),
        Err(FuromError::RecordIndexOutOfRange { index: 1, count: 1 })
    ));
}

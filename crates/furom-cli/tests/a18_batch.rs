// crates/furom-cli/tests/a18_batch.rs
#![cfg(unix)]

use std::path::Path;
use std::process::Command;

fn p(path: &Path) -> &str {
    path.to_str().unwrap()
}

/// Fake codec run through `sh`: `dec` copies, `enc` copies the buffer file;
/// fails on `bad0002`.
fn write_fake_codec(dir: &Path) -> std::path::PathBuf {
    let script = dir.join("codec.sh");
    std::fs::write(
        &script,
        "case \"$2\" in *bad0002*) exit 1 ;; esac\ncase \"$1\" in\n  dec) cp \"$2\" \"$3\" ;;\n  enc) cp \"$4\" \"$3\" ;;\nesac\n",
    )
    .unwrap();
    script
}

#[test]
fn decode_batch_reports_and_skips_failures() {
    let dir = tempfile::tempdir().unwrap();
    let codec = write_fake_codec(dir.path());
    let in_dir = dir.path().join("a18_files");
    let out_dir = dir.path().join("wavs");
    std::fs::create_dir(&in_dir).unwrap();
    std::fs::write(in_dir.join("audio0001.a18"), b"one").unwrap();
    std::fs::write(in_dir.join("bad0002.a18"), b"two").unwrap();

    let out = Command::new(env!("CARGO_BIN_EXE_furom"))
        .args([
            "a18-decode",
            "--codec",
            "sh",
            "--codec-arg",
            p(&codec),
            "--in-dir",
            p(&in_dir),
            "--out-dir",
            p(&out_dir),
        ])
        .output()
        .unwrap();
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(out.status.success(), "{}", stderr);
    assert!(stderr.contains("converted=1/2"), "{}", stderr);
    assert_eq!(std::fs::read(out_dir.join("audio0001.wav")).unwrap(), b"one");
}

#[test]
fn missing_input_dir_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let out = Command::new(env!("CARGO_BIN_EXE_furom"))
        .args([
            "a18-encode",
            "--codec",
            "true",
            "--in-dir",
            p(&dir.path().join("nope")),
            "--out-dir",
            p(&dir.path().join("out")),
        ])
        .output()
        .unwrap();
    assert!(!out.status.success());
}

/// Canonical 44-byte header, 16-bit mono PCM.
fn tiny_wav(samples: &[i16]) -> Vec<u8> {
    let data_len = (samples.len() * 2) as u32;
    let mut b = Vec::new();
    b.extend_from_slice(b"RIFF");
    b.extend_from_slice(&(36 + data_len).to_le_bytes());
    b.extend_from_slice(b"WAVEfmt ");
    b.extend_from_slice(&16u32.to_le_bytes());
    b.extend_from_slice(&1u16.to_le_bytes()); // PCM
    b.extend_from_slice(&1u16.to_le_bytes()); // mono
    b.extend_from_slice(&16_000u32.to_le_bytes());
    b.extend_from_slice(&32_000u32.to_le_bytes());
    b.extend_from_slice(&2u16.to_le_bytes());
    b.extend_from_slice(&16u16.to_le_bytes());
    b.extend_from_slice(b"data");
    b.extend_from_slice(&data_len.to_le_bytes());
    for s in samples {
        b.extend_from_slice(&s.to_le_bytes());
    }
    b
}

#[test]
fn encode_batch_hands_codec_a_magic_sized_buffer() {
    let dir = tempfile::tempdir().unwrap();
    let codec = write_fake_codec(dir.path());
    let in_dir = dir.path().join("convert_wavs");
    let out_dir = dir.path().join("converted_a18");
    std::fs::create_dir(&in_dir).unwrap();
    std::fs::write(in_dir.join("hello.wav"), tiny_wav(&[1, -1, 300, -300])).unwrap();

    let out = Command::new(env!("CARGO_BIN_EXE_furom"))
        .args([
            "a18-encode",
            "--codec",
            "sh",
            "--codec-arg",
            p(&codec),
            "--in-dir",
            p(&in_dir),
            "--out-dir",
            p(&out_dir),
        ])
        .output()
        .unwrap();
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(out.status.success(), "{}", stderr);
    assert!(stderr.contains("converted=1/1"), "{}", stderr);

    let a18 = std::fs::read(out_dir.join("hello.a18")).unwrap();
    assert_eq!(a18.len(), 16_000);
    assert_eq!(&a18[..8], &[1, 0, 0xFF, 0xFF, 0x2C, 0x01, 0xD4, 0xFE]);
    assert!(a18[8..].iter().all(|&b| b == 0));
}

// crates/furom-a18/tests/codec_contract.rs

use std::cell::RefCell;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use furom_a18::{
    decode_file, encode_wav_file, AudioCodec, CodecError, CodecStatus, CommandCodec, Result,
    MAGIC_BUFFER_SIZE,
};

/// Records calls; "encodes" by writing the buffer, "decodes" by copying.
#[derive(Default)]
struct FakeCodec {
    calls: RefCell<Vec<(String, PathBuf, PathBuf, u32)>>,
    write_nothing: bool,
}

impl AudioCodec for FakeCodec {
    fn decode_audio(&self, input: &Path, output: &Path) -> Result<CodecStatus> {
        self.calls
            .borrow_mut()
            .push(("dec".into(), input.to_path_buf(), output.to_path_buf(), 0));
        if !self.write_nothing {
            std::fs::copy(input, output)?;
        }
        Ok(CodecStatus(0))
    }

    fn encode_audio(
        &self,
        input: &Path,
        output: &Path,
        buffer: &[u8],
        size: u32,
    ) -> Result<CodecStatus> {
        assert_eq!(buffer.len(), size as usize);
        self.calls
            .borrow_mut()
            .push(("enc".into(), input.to_path_buf(), output.to_path_buf(), size));
        if !self.write_nothing {
            std::fs::write(output, buffer)?;
        }
        Ok(CodecStatus(7))
    }
}

fn write_wav(path: &Path, n: usize) {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: 16_000,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut cur = Cursor::new(Vec::new());
    {
        let mut w = hound::WavWriter::new(&mut cur, spec).unwrap();
        for i in 0..n {
            w.write_sample(i as i16).unwrap();
        }
        w.finalize().unwrap();
    }
    std::fs::write(path, cur.into_inner()).unwrap();
}

#[test]
fn encode_passes_magic_sized_buffer() {
    let dir = tempfile::tempdir().unwrap();
    let wav = dir.path().join("a.wav");
    let out = dir.path().join("a.a18");
    write_wav(&wav, 50);

    let codec = FakeCodec::default();
    let status = encode_wav_file(&codec, &wav, &out).unwrap();
    assert_eq!(status, CodecStatus(7));

    let calls = codec.calls.borrow();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "enc");
    assert_eq!(calls[0].3 as usize, MAGIC_BUFFER_SIZE);
    assert_eq!(std::fs::metadata(&out).unwrap().len() as usize, MAGIC_BUFFER_SIZE);
}

#[test]
fn missing_output_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("x.a18");
    std::fs::write(&input, [1u8, 2, 3]).unwrap();
    let out = dir.path().join("x.wav");

    let codec = FakeCodec {
        write_nothing: true,
        ..Default::default()
    };
    let err = decode_file(&codec, &input, &out).unwrap_err();
    assert!(matches!(err, CodecError::EmptyOutput(p) if p == out));
}

#[test]
fn output_from_an_earlier_run_does_not_count() {
    let dir = tempfile::tempdir().unwrap();
    let wav = dir.path().join("a.wav");
    let out = dir.path().join("a.a18");
    write_wav(&wav, 64);
    std::fs::write(&out, b"stale").unwrap();

    let codec = FakeCodec {
        write_nothing: true,
        ..Default::default()
    };
    let err = encode_wav_file(&codec, &wav, &out).unwrap_err();
    assert!(matches!(err, CodecError::EmptyOutput(_)));
    assert!(!out.exists());

    std::fs::write(&out, b"stale").unwrap();
    let err = decode_file(&codec, &wav, &out).unwrap_err();
    assert!(matches!(err, CodecError::EmptyOutput(_)));
}

#[test]
fn decode_through_trait_object() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("y.a18");
    std::fs::write(&input, [9u8; 12]).unwrap();
    let out = dir.path().join("y.wav");

    let codec: Box<dyn AudioCodec> = Box::new(FakeCodec::default());
    decode_file(codec.as_ref(), &input, &out).unwrap();
    assert_eq!(std::fs::read(&out).unwrap(), vec![9u8; 12]);
}

#[cfg(unix)]
#[test]
fn command_codec_runs_external_program() {
    let dir = tempfile::tempdir().unwrap();
    let script = dir.path().join("codec.sh");
    std::fs::write(
        &script,
        "case \"$1\" in\n  dec) cp \"$2\" \"$3\" ;;\n  enc) cp \"$4\" \"$3\"; [ \"$5\" = 16000 ] || exit 3; exit \"$6\" ;;\nesac\n",
    )
    .unwrap();
    let codec = CommandCodec::new("sh").with_args([script.as_os_str()]);

    let a18 = dir.path().join("t.a18");
    std::fs::write(&a18, b"a18-bytes").unwrap();
    let wav_out = dir.path().join("t.wav");
    let status = decode_file(&codec, &a18, &wav_out).unwrap();
    assert!(status.is_zero());
    assert_eq!(std::fs::read(&wav_out).unwrap(), b"a18-bytes");

    let wav_in = dir.path().join("u.wav");
    write_wav(&wav_in, 10);
    let a18_out = dir.path().join("u.a18");
    let status = encode_wav_file(&codec, &wav_in, &a18_out).unwrap();
    assert_eq!(status, CodecStatus(0));
    assert_eq!(std::fs::read(&a18_out).unwrap().len(), MAGIC_BUFFER_SIZE);
}

#[test]
fn command_codec_reports_missing_program() {
    let dir = tempfile::tempdir().unwrap();
    let codec = CommandCodec::new(dir.path().join("no-such-codec"));
    let err = codec
        .decode_audio(&dir.path().join("a"), &dir.path().join("b"))
        .unwrap_err();
    assert!(matches!(err, CodecError::Spawn { .. }));
}

// crates/furom-a18/src/command.rs

use std::ffi::{OsStr, OsString};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::codec::{AudioCodec, CodecStatus, ENCODE_MODE};
use crate::error::{CodecError, Result};

/// Drives the codec as an external program.
///
/// Invocation (after any fixed leading `args`):
/// - decode: `dec <in> <out>`
/// - encode: `enc <in> <out> <buffer-file> <size> <mode>`
///
/// The buffer is handed over as a temporary file. The exit code is the status.
#[derive(Clone, Debug)]
pub struct CommandCodec {
    program: PathBuf,
    args: Vec<OsString>,
}

impl CommandCodec {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Fixed arguments placed before the verb (e.g. a script for an interpreter).
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    fn run(&self, cmd_args: &[&OsStr]) -> Result<CodecStatus> {
        let status = Command::new(&self.program)
            .args(&self.args)
            .args(cmd_args)
            .status()
            .map_err(|source| CodecError::Spawn {
                program: self.program.display().to_string(),
                source,
            })?;

        let code = status.code().ok_or(CodecError::Terminated)?;
        Ok(CodecStatus(code as u32))
    }
}

impl AudioCodec for CommandCodec {
    fn decode_audio(&self, input: &Path, output: &Path) -> Result<CodecStatus> {
        self.run(&[OsStr::new("dec"), input.as_os_str(), output.as_os_str()])
    }

    fn encode_audio(
        &self,
        input: &Path,
        output: &Path,
        buffer: &[u8],
        size: u32,
    ) -> Result<CodecStatus> {
        let mut tmp = tempfile::NamedTempFile::new()?;
        tmp.write_all(buffer)?;
        tmp.flush()?;

        let size = size.to_string();
        let mode = ENCODE_MODE.to_string();
        self.run(&[
            OsStr::new("enc"),
            input.as_os_str(),
            output.as_os_str(),
            tmp.path().as_os_str(),
            OsStr::new(&size),
            OsStr::new(&mode),
        ])
    }
}

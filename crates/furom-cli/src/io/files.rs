// crates/furom-cli/src/io/files.rs

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

pub fn read_bytes(path: &str) -> Result<Vec<u8>> {
    std::fs::read(path).with_context(|| format!("read {path}"))
}

pub fn write_bytes(path: &Path, bytes: &[u8]) -> Result<()> {
    std::fs::write(path, bytes).with_context(|| format!("write {}", path.display()))
}

pub fn ensure_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir).with_context(|| format!("create dir {}", dir.display()))
}

/// Files in `dir` whose extension matches one of `exts` (case-insensitive),
/// sorted by file name so batch order is stable.
pub fn list_with_ext(dir: &Path, exts: &[&str]) -> Result<Vec<PathBuf>> {
    let mut out = Vec::new();
    for entry in std::fs::read_dir(dir).with_context(|| format!("read dir {}", dir.display()))? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let matches = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| exts.iter().any(|x| e.eq_ignore_ascii_case(x)))
            .unwrap_or(false);
        if matches {
            out.push(path);
        }
    }
    out.sort();
    Ok(out)
}

/// `dir/<stem of input>.<ext>`
pub fn sibling_name(dir: &Path, input: &Path, ext: &str) -> PathBuf {
    let mut name = input.file_stem().unwrap_or(input.as_os_str()).to_os_string();
    name.push(".");
    name.push(ext);
    dir.join(name)
}

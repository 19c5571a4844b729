// crates/furom-cli/src/io/mod.rs

pub mod files;

// crates/furom-core/src/container/mod.rs

pub mod build;
pub mod extract;
pub mod record;
pub mod table;

// crates/furom-cli/src/cmd/mod.rs

pub mod a18;
pub mod bin2img;
pub mod img2bin;
pub mod inspect;
pub mod pack;
pub mod patch;
pub mod split;

// crates/furom-core/src/bitmap/mod.rs

pub mod codec;
pub mod grid;
pub mod orient;
pub mod permutation;
pub mod raster;

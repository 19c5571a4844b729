pub mod checksum;
pub mod error;

pub mod bitmap;
pub mod container;

pub use crate::bitmap::codec::{decode_image, encode_image, PACKED_LEN};
pub use crate::bitmap::grid::PixelGrid;
pub use crate::container::record::{Record, RecordKind};
pub use crate::container::table::OffsetTable;
pub use crate::error::{FuromError, Result};

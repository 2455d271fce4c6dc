//! PNG carriers: RGB pixel grids, textual metadata and their codec.

pub mod carrier;
pub mod lsb_codec;

pub use carrier::{PngCarrier, TextChunk, PARAMETERS_KEYWORD};

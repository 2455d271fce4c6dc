//! JPEG carriers: quantized-coefficient grids and their codec.

pub mod carrier;
pub mod coefficients;
pub mod lsb_codec;

pub use carrier::JpegCarrier;
pub use coefficients::CoefficientGrid;

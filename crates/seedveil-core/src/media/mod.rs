//! Carrier media: formats, containers and the per-format codecs.

pub mod container;
pub mod format;
pub mod jpeg;
pub mod png;
pub mod types;

pub use container::JpegContainer;
pub use format::CarrierFormat;
pub use types::Carrier;

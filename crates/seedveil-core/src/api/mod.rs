//! Builder-style entry points for interactive callers.

pub mod hide;
pub mod reveal;

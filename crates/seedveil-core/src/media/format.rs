//! Carrier format tagging.

use std::path::Path;

/// Carrier format, decided once at the file boundary and routed from there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarrierFormat {
    Jpeg,
    Png,
    Unsupported,
}

impl CarrierFormat {
    /// Tag a path by its file extension, case-insensitive. Anything besides
    /// `.jpg`, `.jpeg` and `.png` is `Unsupported`.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("jpg") | Some("jpeg") => Self::Jpeg,
            Some("png") => Self::Png,
            _ => Self::Unsupported,
        }
    }
}

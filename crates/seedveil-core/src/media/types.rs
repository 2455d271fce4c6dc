//! Carrier loading, codec routing and persistence.

use std::fs;
use std::path::Path;

use log::error;

use super::container::JpegContainer;
use super::format::CarrierFormat;
use super::jpeg::JpegCarrier;
use super::png::{PngCarrier, PARAMETERS_KEYWORD};
use crate::error::SeedveilError;
use crate::permutation::Seed;
use crate::result::Result;

/// An in-memory carrier, ready for coding.
#[derive(Debug, Clone)]
pub enum Carrier {
    Jpeg(JpegCarrier),
    Png(PngCarrier),
}

impl Carrier {
    /// Load a carrier from disk. JPEG files need a host-supplied container
    /// codec, see [`Carrier::from_file_with`].
    pub fn from_file(path: &Path) -> Result<Self> {
        Self::from_file_with(path, None)
    }

    /// Load a carrier, tagging the format once from the file suffix.
    pub fn from_file_with(path: &Path, jpeg: Option<&dyn JpegContainer>) -> Result<Self> {
        let bytes = fs::read(path).map_err(|source| SeedveilError::ReadError { source })?;
        match CarrierFormat::from_path(path) {
            CarrierFormat::Png => Ok(Self::Png(PngCarrier::decode(&bytes)?)),
            CarrierFormat::Jpeg => match jpeg {
                Some(container) => Ok(Self::Jpeg(container.decode(&bytes)?)),
                None => Err(SeedveilError::JpegContainerMissing),
            },
            CarrierFormat::Unsupported => Err(SeedveilError::UnsupportedMedia),
        }
    }

    pub fn save_as(&self, path: &Path) -> Result<()> {
        self.save_with(path, None)
    }

    pub fn save_with(&self, path: &Path, jpeg: Option<&dyn JpegContainer>) -> Result<()> {
        let bytes = match self {
            Self::Png(carrier) => carrier.encode()?,
            Self::Jpeg(carrier) => match jpeg {
                Some(container) => container.encode(carrier)?,
                None => return Err(SeedveilError::JpegContainerMissing),
            },
        };
        fs::write(path, bytes).map_err(|source| {
            error!("Error writing carrier to {}: {source}", path.display());
            SeedveilError::WriteError { source }
        })
    }

    /// Hide `message` with the codec matching the carrier kind.
    pub fn embed_message(&mut self, message: &str, seed: Seed) -> Result<()> {
        match self {
            Self::Jpeg(carrier) => carrier.embed_message(message, seed),
            Self::Png(carrier) => {
                carrier.embed_message(message, seed);
                Ok(())
            }
        }
    }

    /// Recover the message hidden under `seed`.
    pub fn extract_message(&self, seed: Seed) -> Result<String> {
        match self {
            Self::Jpeg(carrier) => carrier.extract_message(seed),
            Self::Png(carrier) => Ok(carrier.extract_message(seed)),
        }
    }

    /// Number of message bits this carrier can hold.
    pub fn capacity_bits(&self) -> usize {
        match self {
            Self::Jpeg(carrier) => carrier.capacity_bits(),
            Self::Png(carrier) => carrier.capacity_bits(),
        }
    }

    /// Existing `"parameters"` text on the carrier, for formats that have
    /// textual metadata.
    pub fn parameters_text(&self) -> Option<&str> {
        match self {
            Self::Png(carrier) => carrier.text(PARAMETERS_KEYWORD),
            Self::Jpeg(_) => None,
        }
    }
}

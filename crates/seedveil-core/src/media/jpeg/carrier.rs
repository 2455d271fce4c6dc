//! In-memory JPEG carrier.

use super::coefficients::CoefficientGrid;
use super::lsb_codec;
use crate::bits;
use crate::error::SeedveilError;
use crate::permutation::Seed;
use crate::result::Result;

/// A decoded JPEG, one coefficient grid per component.
///
/// Only component 0 carries hidden bits. The remaining components ride
/// along untouched and are handed back to the container codec verbatim.
#[derive(Debug, Clone)]
pub struct JpegCarrier {
    components: Vec<CoefficientGrid>,
}

impl JpegCarrier {
    pub fn new(components: Vec<CoefficientGrid>) -> Self {
        Self { components }
    }

    /// Carrier with a single component, the common case in tests.
    pub fn single(grid: CoefficientGrid) -> Self {
        Self {
            components: vec![grid],
        }
    }

    pub fn components(&self) -> &[CoefficientGrid] {
        &self.components
    }

    /// The coded component.
    pub fn luma(&self) -> Option<&CoefficientGrid> {
        self.components.first()
    }

    pub fn luma_mut(&mut self) -> Option<&mut CoefficientGrid> {
        self.components.first_mut()
    }

    /// Number of message bits this carrier can hold.
    pub fn capacity_bits(&self) -> usize {
        self.luma().map(lsb_codec::capacity_bits).unwrap_or(0)
    }

    /// Hide `message` in the coded component.
    pub fn embed_message(&mut self, message: &str, seed: Seed) -> Result<()> {
        let grid = self
            .luma_mut()
            .ok_or(SeedveilError::InvalidImageMedia)?;
        lsb_codec::embed(grid, &bits::to_bits(message), seed);
        Ok(())
    }

    /// Recover the message hidden under `seed`.
    pub fn extract_message(&self, seed: Seed) -> Result<String> {
        let grid = self.luma().ok_or(SeedveilError::InvalidImageMedia)?;
        Ok(lsb_codec::extract(grid, seed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_first_component_is_coded() {
        let mut carrier = JpegCarrier::new(vec![
            CoefficientGrid::filled(16, 16, 4),
            CoefficientGrid::filled(8, 8, 4),
        ]);
        carrier.embed_message("hi", 42).unwrap();

        assert_eq!(carrier.components()[1], CoefficientGrid::filled(8, 8, 4));
        assert_eq!(carrier.extract_message(42).unwrap(), "hi");
    }

    #[test]
    fn a_carrier_without_components_is_rejected() {
        let mut carrier = JpegCarrier::new(Vec::new());
        assert!(matches!(
            carrier.embed_message("hi", 1),
            Err(SeedveilError::InvalidImageMedia)
        ));
        assert!(matches!(
            carrier.extract_message(1),
            Err(SeedveilError::InvalidImageMedia)
        ));
        assert_eq!(carrier.capacity_bits(), 0);
    }
}

//! Container-level io contracts.

use super::jpeg::JpegCarrier;
use crate::result::Result;

/// Coefficient-preserving JPEG container codec, supplied by the host.
///
/// The PNG container ships with this crate, JPEG container parsing does
/// not: it needs a codec that exposes the quantized coefficients, which
/// hosts usually already have. Implementations must round-trip the
/// coefficients losslessly. A single recompressed coefficient destroys the
/// hidden payload.
pub trait JpegContainer {
    /// Parse a JPEG byte stream into its coefficient components.
    fn decode(&self, bytes: &[u8]) -> Result<JpegCarrier>;

    /// Serialize the components back into a JPEG byte stream.
    fn encode(&self, carrier: &JpegCarrier) -> Result<Vec<u8>>;
}

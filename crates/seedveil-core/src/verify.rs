//! Post-embed round-trip verification.

use log::{info, warn};

/// Outcome of re-extracting a just-embedded message.
///
/// A mismatch is a diagnostic, not a failure: the carrier that produced it
/// is still the valid output. The usual cause is a message longer than the
/// carrier could hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verification {
    Verified,
    Mismatch { expected: String, recovered: String },
}

impl Verification {
    pub fn is_verified(&self) -> bool {
        matches!(self, Verification::Verified)
    }
}

/// Compare the embedded message against its recovered counterpart and log
/// the outcome.
pub fn verify(original: &str, recovered: &str) -> Verification {
    if original == recovered {
        info!("verification successful, embedded and extracted messages match");
        Verification::Verified
    } else {
        warn!("verification failed, embedded and extracted messages do not match");
        warn!("original message: {original}");
        warn!("extracted message: {recovered}");
        Verification::Mismatch {
            expected: original.to_string(),
            recovered: recovered.to_string(),
        }
    }
}

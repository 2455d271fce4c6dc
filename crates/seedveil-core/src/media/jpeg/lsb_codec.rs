//! Sign-preserving LSB codec over quantized coefficients.
//!
//! Message bits replace the least significant bit of the coefficient
//! magnitude, leaving the sign untouched. Coefficients with magnitude 0 or
//! 1 never carry bits: a 0 has no sign to preserve and a 1 could collapse
//! to 0 and become unreadable. The block DC terms are skipped as well since
//! changes there are the most visible.

use log::warn;

use super::coefficients::CoefficientGrid;
use crate::bits;
use crate::permutation::{self, Seed};

/// True for positions the codec must not touch: magnitudes below 2 and the
/// DC slot of each 8x8 block.
fn excluded(grid: &CoefficientGrid, idx: usize) -> bool {
    if grid.values()[idx].unsigned_abs() <= 1 {
        return true;
    }
    let (row, col) = grid.position(idx);
    row % 8 == 0 && col % 8 == 0
}

/// Indices the codec may modify, in row-major carrier order.
pub fn eligible_positions(grid: &CoefficientGrid) -> Vec<usize> {
    permutation::eligible_indices(grid.len(), |idx| excluded(grid, idx))
}

/// Number of message bits this grid can carry.
pub fn capacity_bits(grid: &CoefficientGrid) -> usize {
    eligible_positions(grid).len()
}

/// Write `bits` into the grid in seed order.
///
/// Bits beyond the carrier's capacity are dropped. The truncation is
/// deliberate and silent at this level apart from a log line, the caller's
/// verification pass reports the resulting mismatch.
pub fn embed(grid: &mut CoefficientGrid, bits: &[bool], seed: Seed) {
    let order = permutation::seeded_order(eligible_positions(grid), seed);
    if bits.len() > order.len() {
        warn!(
            "message needs {} bits but the carrier holds {}, embedding a truncated prefix",
            bits.len(),
            order.len()
        );
    }

    let values = grid.values_mut();
    for (&idx, &bit) in order.iter().zip(bits.iter()) {
        let value = values[idx];
        let magnitude = value.abs() - value.abs() % 2 + i16::from(bit);
        values[idx] = magnitude * value.signum();
    }
}

/// Read one bit from every eligible position in seed order.
///
/// The extractor cannot know the embedded length, so the whole order is
/// drained and the terminator is located afterwards by the bit unpacker.
pub fn extract_bits(grid: &CoefficientGrid, seed: Seed) -> Vec<bool> {
    let order = permutation::seeded_order(eligible_positions(grid), seed);
    let values = grid.values();
    order.iter().map(|&idx| values[idx].abs() % 2 == 1).collect()
}

/// Recover the embedded message.
pub fn extract(grid: &CoefficientGrid, seed: Seed) -> String {
    bits::from_bits(&extract_bits(grid, seed))
}

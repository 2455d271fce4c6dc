//! Pixel-channel LSB codec for RGB carriers.
//!
//! Bits land directly in the least significant bit of the color channels,
//! three slots per pixel, visited in a seed-keyed pixel order.

use image::RgbImage;
use log::warn;

use crate::permutation::{self, Seed};

/// All pixel coordinates in carrier order: x outer, y inner. This input
/// order feeds the shuffle and the extractor rebuilds it the same way, so
/// it must not change.
fn pixel_positions(image: &RgbImage) -> Vec<(u32, u32)> {
    let mut positions = Vec::with_capacity((image.width() * image.height()) as usize);
    for x in 0..image.width() {
        for y in 0..image.height() {
            positions.push((x, y));
        }
    }
    positions
}

/// Three channel slots per pixel, no exclusions.
pub fn capacity_bits(image: &RgbImage) -> usize {
    image.width() as usize * image.height() as usize * 3
}

/// Write `bits` into the channel LSBs in seed order, filling R, G and B of
/// one pixel before moving on to the next. Bits beyond the carrier's
/// capacity are dropped.
pub fn embed(image: &mut RgbImage, bits: &[bool], seed: Seed) {
    if bits.len() > capacity_bits(image) {
        warn!(
            "message needs {} bits but the carrier holds {}, embedding a truncated prefix",
            bits.len(),
            capacity_bits(image)
        );
    }

    let order = permutation::seeded_order(pixel_positions(image), seed);
    let mut stream = bits.iter();
    'pixels: for &(x, y) in &order {
        let pixel = image.get_pixel_mut(x, y);
        for channel in 0..3 {
            match stream.next() {
                Some(&bit) => pixel.0[channel] = (pixel.0[channel] & 0xFE) | u8::from(bit),
                None => break 'pixels,
            }
        }
    }
}

/// Read channel LSBs in seed order, assembling bytes as they complete.
///
/// The walk returns the moment a completed byte is all zero and never reads
/// past the terminator. (The coefficient codec's extractor drains its whole
/// position order before looking for the terminator instead. The two
/// behaviors differ on purpose and stay separate.)
pub fn extract(image: &RgbImage, seed: Seed) -> String {
    let order = permutation::seeded_order(pixel_positions(image), seed);
    let mut message = Vec::new();
    let mut byte = 0u8;
    let mut bit_count = 0u8;
    for &(x, y) in &order {
        let pixel = image.get_pixel(x, y);
        for channel in 0..3 {
            byte = (byte << 1) | (pixel.0[channel] & 1);
            bit_count += 1;
            if bit_count == 8 {
                if byte == 0 {
                    return String::from_utf8_lossy(&message).into_owned();
                }
                message.push(byte);
                byte = 0;
                bit_count = 0;
            }
        }
    }
    String::from_utf8_lossy(&message).into_owned()
}

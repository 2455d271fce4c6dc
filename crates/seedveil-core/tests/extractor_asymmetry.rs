//! The two extractors deliberately disagree on when to stop reading.
//!
//! The coefficient extractor drains every eligible position and only then
//! looks for the terminator in the assembled bit stream. The pixel
//! extractor decodes incrementally and returns the moment a completed byte
//! is zero, never reading past the terminator. Whether the upstream scheme
//! meant this asymmetry or not is unknowable from the outside, so both
//! behaviors are pinned here separately instead of being unified.

use image::{Rgb, RgbImage};
use seedveil_core::bits;
use seedveil_core::media::jpeg::{lsb_codec as jpeg_codec, CoefficientGrid};
use seedveil_core::media::png::lsb_codec as png_codec;

#[test]
fn coefficient_extractor_drains_the_full_position_order() {
    let mut grid = CoefficientGrid::filled(16, 16, 4);
    jpeg_codec::embed(&mut grid, &bits::to_bits("hi"), 42);

    // 24 message bits are embedded, yet every eligible position is read
    let raw = jpeg_codec::extract_bits(&grid, 42);
    assert_eq!(raw.len(), jpeg_codec::capacity_bits(&grid));
    assert!(raw.len() > bits::to_bits("hi").len());

    // the terminator is still found in the assembled stream
    assert_eq!(jpeg_codec::extract(&grid, 42), "hi");
}

#[test]
fn pixel_extractor_stops_at_the_first_zero_byte() {
    let mut image = RgbImage::from_pixel(4, 4, Rgb([128, 128, 128]));
    png_codec::embed(&mut image, &bits::to_bits("ok"), 7);

    // everything after the terminator is noise to the pixel extractor
    assert_eq!(png_codec::extract(&image, 7), "ok");
}

#[test]
fn both_extractors_agree_on_well_formed_carriers() {
    let message = "same message, two codecs";

    let mut grid = CoefficientGrid::filled(32, 32, 4);
    jpeg_codec::embed(&mut grid, &bits::to_bits(message), 5);

    let mut image = RgbImage::from_pixel(16, 16, Rgb([128, 128, 128]));
    png_codec::embed(&mut image, &bits::to_bits(message), 5);

    assert_eq!(jpeg_codec::extract(&grid, 5), message);
    assert_eq!(png_codec::extract(&image, 5), message);
}

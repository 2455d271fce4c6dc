//! Drives the JPEG path end to end through a host-supplied container codec.
//!
//! The container here is a test double with a trivial byte layout. Real
//! hosts plug in a codec that parses the actual JPEG container, the only
//! thing the core cares about is lossless coefficient round-tripping.

use std::fs;

use seedveil_core::media::jpeg::{CoefficientGrid, JpegCarrier};
use seedveil_core::{Carrier, HookSettings, JpegContainer, Result, SaveHookRegistry};
use tempfile::TempDir;

struct RawCoefficientContainer;

impl JpegContainer for RawCoefficientContainer {
    fn decode(&self, bytes: &[u8]) -> Result<JpegCarrier> {
        let rows = u32::from_le_bytes(bytes[0..4].try_into().unwrap()) as usize;
        let cols = u32::from_le_bytes(bytes[4..8].try_into().unwrap()) as usize;
        let values = bytes[8..]
            .chunks_exact(2)
            .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
            .collect();
        Ok(JpegCarrier::single(CoefficientGrid::from_values(
            rows, cols, values,
        )))
    }

    fn encode(&self, carrier: &JpegCarrier) -> Result<Vec<u8>> {
        let grid = carrier.luma().unwrap();
        let mut bytes = Vec::with_capacity(8 + grid.len() * 2);
        bytes.extend((grid.rows() as u32).to_le_bytes());
        bytes.extend((grid.cols() as u32).to_le_bytes());
        for value in grid.values() {
            bytes.extend(value.to_le_bytes());
        }
        Ok(bytes)
    }
}

fn write_jpeg_fixture(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("photo.jpg");
    let carrier = JpegCarrier::single(CoefficientGrid::filled(16, 16, 4));
    let bytes = RawCoefficientContainer.encode(&carrier).unwrap();
    fs::write(&path, bytes).unwrap();
    path
}

#[test]
fn api_round_trip_with_a_supplied_container() {
    let dir = TempDir::new().unwrap();
    let plain = write_jpeg_fixture(&dir);
    let secret = dir.path().join("secret.jpg");

    let verification = seedveil_core::api::hide::prepare()
        .with_message("hi")
        .with_seed(42)
        .with_image(&plain)
        .with_output(&secret)
        .with_jpeg_container(Box::new(RawCoefficientContainer))
        .execute()
        .unwrap();
    assert!(verification.is_verified());

    let revealed = seedveil_core::api::reveal::prepare()
        .with_secret_image(&secret)
        .with_seed(42)
        .with_jpeg_container(Box::new(RawCoefficientContainer))
        .execute()
        .unwrap();
    assert_eq!(revealed, "hi");

    let garbage = seedveil_core::api::reveal::prepare()
        .with_secret_image(&secret)
        .with_seed(43)
        .with_jpeg_container(Box::new(RawCoefficientContainer))
        .execute()
        .unwrap();
    assert_ne!(garbage, "hi");
}

#[test]
fn hook_round_trip_with_a_supplied_container() {
    let dir = TempDir::new().unwrap();
    let path = write_jpeg_fixture(&dir);

    let mut registry = SaveHookRegistry::new();
    registry
        .register(HookSettings {
            message: "watermark".to_string(),
            seed: 5,
            include_carrier_metadata: true,
        })
        .unwrap();

    let verification = registry
        .image_saved_with(&path, Some(&RawCoefficientContainer))
        .unwrap()
        .unwrap();
    assert!(verification.is_verified());

    // coefficient carriers have no text metadata, so only the configured
    // message is embedded
    let carrier = Carrier::from_file_with(&path, Some(&RawCoefficientContainer)).unwrap();
    assert_eq!(carrier.extract_message(5).unwrap(), "watermark");
}

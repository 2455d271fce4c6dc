//! # Seedveil Core
//!
//! Seed-keyed image steganography: hide a text message in the least
//! significant information of an image, leave the image visually unchanged,
//! and recover the message later with the same integer seed.
//!
//! Two carrier kinds are supported. PNG carriers take the bits directly in
//! the LSBs of their RGB channels. JPEG carriers take them in the magnitude
//! LSBs of quantized DCT coefficients, skipping the block DC terms and any
//! magnitude below 2 so the change is invisible and survives entropy
//! coding. In both cases the write order is a pseudo-random permutation of
//! the eligible positions keyed by the seed, and the message ends with a
//! single NUL byte.
//!
//! # Usage example
//!
//! ```rust
//! use seedveil_core::PngCarrier;
//!
//! let temp_dir = tempfile::tempdir().expect("Failed to create temporary directory");
//! let plain = temp_dir.path().join("plain.png");
//! let secret = temp_dir.path().join("secret.png");
//!
//! // a small flat-gray carrier
//! let carrier = PngCarrier::new(image::RgbImage::from_pixel(
//!     16,
//!     16,
//!     image::Rgb([128, 128, 128]),
//! ));
//! std::fs::write(&plain, carrier.encode().unwrap()).unwrap();
//!
//! let verification = seedveil_core::api::hide::prepare()
//!     .with_message("Hello, World!")
//!     .with_seed(42)
//!     .with_image(&plain)
//!     .with_output(&secret)
//!     .execute()
//!     .expect("Failed to hide message in image");
//! assert!(verification.is_verified());
//!
//! let message = seedveil_core::api::reveal::prepare()
//!     .with_secret_image(&secret)
//!     .with_seed(42)
//!     .execute()
//!     .expect("Failed to reveal message from image");
//! assert_eq!(message, "Hello, World!");
//! ```
//!
//! # Known weakness
//!
//! There is no framing or authenticity check beyond the NUL terminator.
//! Extracting from a carrier that holds no message, or with a wrong seed,
//! yields garbage text rather than an error. The seed obfuscates where the
//! bits live, it is not cryptography: encrypt the message before embedding
//! where that matters.

#![warn(clippy::redundant_else)]

pub mod api;
pub mod bits;
pub mod commands;
pub mod error;
pub mod hook;
pub mod media;
pub mod permutation;
pub mod result;
pub mod verify;

pub use crate::error::SeedveilError;
pub use crate::hook::{HookHandle, HookSettings, SaveHookRegistry};
pub use crate::media::container::JpegContainer;
pub use crate::media::format::CarrierFormat;
pub use crate::media::jpeg::{CoefficientGrid, JpegCarrier};
pub use crate::media::png::{PngCarrier, TextChunk, PARAMETERS_KEYWORD};
pub use crate::media::types::Carrier;
pub use crate::permutation::Seed;
pub use crate::result::Result;
pub use crate::verify::{verify, Verification};

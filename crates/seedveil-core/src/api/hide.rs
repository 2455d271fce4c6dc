use std::path::{Path, PathBuf};

use crate::error::SeedveilError;
use crate::media::container::JpegContainer;
use crate::media::types::Carrier;
use crate::permutation::Seed;
use crate::verify::{verify, Verification};

pub fn prepare() -> HideApi {
    HideApi::default()
}

#[derive(Default)]
pub struct HideApi {
    message: Option<String>,
    image: Option<PathBuf>,
    output: Option<PathBuf>,
    seed: Seed,
    jpeg_container: Option<Box<dyn JpegContainer>>,
}

impl HideApi {
    pub fn with_message(mut self, message: &str) -> Self {
        self.message = Some(message.to_string());
        self
    }

    pub fn use_message<S: AsRef<str>>(mut self, message: Option<S>) -> Self {
        self.message = message.map(|s| s.as_ref().to_string());
        self
    }

    /// Set the seed that keys the embedding positions. The same seed is
    /// needed again to reveal the message.
    pub fn with_seed(mut self, seed: Seed) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_image<A: AsRef<Path>>(mut self, image: A) -> Self {
        self.image = Some(image.as_ref().to_path_buf());
        self
    }

    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    /// Supply a container codec so `.jpg` carriers can be loaded and saved.
    pub fn with_jpeg_container(mut self, container: Box<dyn JpegContainer>) -> Self {
        self.jpeg_container = Some(container);
        self
    }

    /// Embed, verify and save. The verification outcome is a diagnostic:
    /// on a mismatch the output file is still written.
    pub fn execute(self) -> Result<Verification, SeedveilError> {
        let Some(message) = self.message else {
            return Err(SeedveilError::MissingMessage);
        };
        let Some(image) = self.image else {
            return Err(SeedveilError::CarrierNotSet);
        };
        let Some(output) = self.output else {
            return Err(SeedveilError::TargetNotSet);
        };

        let jpeg = self.jpeg_container.as_deref();
        let mut carrier = Carrier::from_file_with(&image, jpeg)?;
        carrier.embed_message(&message, self.seed)?;
        let recovered = carrier.extract_message(self.seed)?;
        let verification = verify(&message, &recovered);
        carrier.save_with(&output, jpeg)?;

        Ok(verification)
    }
}

use std::path::{Path, PathBuf};

use crate::error::SeedveilError;
use crate::media::container::JpegContainer;
use crate::media::types::Carrier;
use crate::permutation::Seed;

pub fn prepare() -> RevealApi {
    RevealApi::default()
}

#[derive(Default)]
pub struct RevealApi {
    secret_image: Option<PathBuf>,
    seed: Seed,
    jpeg_container: Option<Box<dyn JpegContainer>>,
}

impl RevealApi {
    pub fn with_secret_image<A: AsRef<Path>>(mut self, image: A) -> Self {
        self.secret_image = Some(image.as_ref().to_path_buf());
        self
    }

    /// Set the seed that was used when the message was hidden.
    pub fn with_seed(mut self, seed: Seed) -> Self {
        self.seed = seed;
        self
    }

    /// Supply a container codec so `.jpg` carriers can be loaded.
    pub fn with_jpeg_container(mut self, container: Box<dyn JpegContainer>) -> Self {
        self.jpeg_container = Some(container);
        self
    }

    /// Load the carrier and read the message hidden under the seed.
    ///
    /// There is no way to tell a revealed message from noise: a wrong seed
    /// or a carrier without a message yields garbage text, not an error.
    pub fn execute(self) -> Result<String, SeedveilError> {
        let Some(image) = self.secret_image else {
            return Err(SeedveilError::CarrierNotSet);
        };

        let carrier = Carrier::from_file_with(&image, self.jpeg_container.as_deref())?;
        carrier.extract_message(self.seed)
    }
}

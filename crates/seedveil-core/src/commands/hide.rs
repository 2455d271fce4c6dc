use std::path::Path;

use crate::permutation::Seed;
use crate::result::Result;
use crate::verify::Verification;

pub fn hide(image: &Path, output: &Path, message: &str, seed: Seed) -> Result<Verification> {
    crate::api::hide::prepare()
        .with_image(image)
        .with_output(output)
        .with_message(message)
        .with_seed(seed)
        .execute()
}

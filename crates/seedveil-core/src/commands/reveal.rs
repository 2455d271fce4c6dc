use std::path::Path;

use crate::permutation::Seed;
use crate::result::Result;

pub fn reveal(secret_image: &Path, seed: Seed) -> Result<String> {
    crate::api::reveal::prepare()
        .with_secret_image(secret_image)
        .with_seed(seed)
        .execute()
}

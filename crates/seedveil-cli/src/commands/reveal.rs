use std::path::PathBuf;

use clap::Args;
use seedveil_core::{Result, Seed};

/// Reveals a hidden text message from a PNG image
#[derive(Args, Debug)]
pub struct RevealArgs {
    /// Source image that contains secret data
    #[arg(
        short = 'i',
        long = "in",
        value_name = "image source file",
        required = true
    )]
    pub input_image: PathBuf,

    /// Seed that was used when the message was hidden
    #[arg(
        short,
        long,
        value_name = "seed",
        default_value_t = 0,
        allow_negative_numbers = true
    )]
    pub seed: Seed,
}

impl RevealArgs {
    pub fn run(self) -> Result<()> {
        let message = seedveil_core::commands::reveal(&self.input_image, self.seed)?;
        println!("{message}");
        Ok(())
    }
}

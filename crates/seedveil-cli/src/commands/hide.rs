use std::path::PathBuf;

use clap::Args;
use seedveil_core::{Result, Seed, Verification};

/// Hides a text message in a PNG image
#[derive(Args, Debug)]
pub struct HideArgs {
    /// Carrier image such as a PNG file, used readonly.
    #[arg(short = 'i', long = "in", value_name = "image file", required = true)]
    pub image: PathBuf,

    /// Final image will be stored as file
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output image file",
        required = true
    )]
    pub write_to_file: PathBuf,

    /// The text message that will be hidden
    #[arg(short, long, value_name = "text message", required = true)]
    pub message: String,

    /// Seed that keys the embedding positions, needed again to reveal
    #[arg(
        short,
        long,
        value_name = "seed",
        default_value_t = 0,
        allow_negative_numbers = true
    )]
    pub seed: Seed,
}

impl HideArgs {
    pub fn run(self) -> Result<()> {
        let verification = seedveil_core::commands::hide(
            &self.image,
            &self.write_to_file,
            &self.message,
            self.seed,
        )?;

        match verification {
            Verification::Verified => {
                println!("Verification successful, embedded and extracted messages match.")
            }
            Verification::Mismatch { .. } => eprintln!(
                "Verification failed, the recovered message does not match. \
                 The carrier is likely too small for the whole message."
            ),
        }

        Ok(())
    }
}

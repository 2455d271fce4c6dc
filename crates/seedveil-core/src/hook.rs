//! Post-save embedding hook.
//!
//! A host's save pipeline notifies the registry after an image lands on
//! disk, and the active hook re-writes that file in place with its
//! configured message embedded. At most one hook is active at a time:
//! registration hands out a handle, and only that handle releases the slot
//! again. The registry is a plain value owned by the host, there is no
//! process-wide state.

use std::path::Path;

use log::{info, warn};

use crate::error::SeedveilError;
use crate::media::container::JpegContainer;
use crate::media::types::Carrier;
use crate::permutation::Seed;
use crate::result::Result;
use crate::verify::{verify, Verification};

/// Configuration of one embedding hook.
#[derive(Debug, Clone)]
pub struct HookSettings {
    /// The message to hide in every saved image.
    pub message: String,
    /// Seed that keys the embedding positions.
    pub seed: Seed,
    /// Fold the carrier's own `"parameters"` text into the hidden message,
    /// the way generation tools annotate their output.
    pub include_carrier_metadata: bool,
}

impl HookSettings {
    /// The message this hook actually embeds for `carrier`.
    fn effective_message(&self, carrier: &Carrier) -> String {
        if !self.include_carrier_metadata {
            return self.message.clone();
        }
        match carrier.parameters_text() {
            Some(parameters) if !parameters.is_empty() => {
                if self.message.is_empty() {
                    parameters.to_string()
                } else {
                    format!("{} {}", self.message, parameters)
                }
            }
            _ => self.message.clone(),
        }
    }
}

/// Proof of an active registration, required to unregister it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HookHandle(u64);

/// Owner of the single active embedding hook.
#[derive(Debug, Default)]
pub struct SaveHookRegistry {
    active: Option<(HookHandle, HookSettings)>,
    next_id: u64,
}

impl SaveHookRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Activate an embedding hook. Fails while another one holds the slot.
    pub fn register(&mut self, settings: HookSettings) -> Result<HookHandle> {
        if self.active.is_some() {
            return Err(SeedveilError::HookAlreadyRegistered);
        }
        let handle = HookHandle(self.next_id);
        self.next_id += 1;
        self.active = Some((handle, settings));
        Ok(handle)
    }

    /// Release the hook owned by `handle`.
    pub fn unregister(&mut self, handle: HookHandle) -> Result<()> {
        match self.active {
            Some((active, _)) if active == handle => {
                self.active = None;
                Ok(())
            }
            _ => Err(SeedveilError::StaleHookHandle),
        }
    }

    pub fn is_registered(&self) -> bool {
        self.active.is_some()
    }

    /// Notify the registry that `path` was saved.
    ///
    /// With an active hook the image is re-written in place with the hook's
    /// message embedded, and the verification diagnostic comes back.
    /// Without one, nothing happens. JPEG files additionally need a
    /// container codec, see [`SaveHookRegistry::image_saved_with`].
    pub fn image_saved(&self, path: &Path) -> Result<Option<Verification>> {
        self.image_saved_with(path, None)
    }

    pub fn image_saved_with(
        &self,
        path: &Path,
        jpeg: Option<&dyn JpegContainer>,
    ) -> Result<Option<Verification>> {
        let Some((_, settings)) = self.active.as_ref() else {
            return Ok(None);
        };

        let mut carrier = Carrier::from_file_with(path, jpeg)?;
        let message = settings.effective_message(&carrier);
        if message.is_empty() {
            warn!("hook message is blank, skipping {}", path.display());
            return Ok(None);
        }

        carrier.embed_message(&message, settings.seed)?;
        let recovered = carrier.extract_message(settings.seed)?;
        let verification = verify(&message, &recovered);
        carrier.save_with(path, jpeg)?;
        info!("applied steganography to {}", path.display());

        Ok(Some(verification))
    }
}

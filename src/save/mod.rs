//! Save and load through a [`BlobStore`].

pub mod codec;
pub mod store;

pub use codec::{decode, decode_with, encode};
pub use store::{BlobStore, FileStore, MemoryStore};

use crate::core::config::GameConfig;
use crate::core::constants::{LEGACY_SAVE_KEY, SAVE_KEY};
use crate::core::error::StoreError;
use crate::core::player_state::PlayerState;

/// Load the saved state, falling back to a save written under the legacy blob name
/// and then to a fresh state. Read failures are logged, never returned.
pub fn load_state(store: &dyn BlobStore, config: &GameConfig) -> PlayerState {
    for key in [SAVE_KEY, LEGACY_SAVE_KEY] {
        match store.read(key) {
            Ok(Some(blob)) => {
                log::info!("Loaded save `{}` ({} bytes)", key, blob.len());
                return decode_with(&blob, config);
            }
            Ok(None) => {}
            Err(e) => {
                log::error!("Failed to read save `{}`: {}", key, e);
                return PlayerState::default();
            }
        }
    }
    log::info!("No save found, starting fresh");
    PlayerState::default()
}

/// Encode and write the state under the current blob name.
pub fn save_state(store: &mut dyn BlobStore, state: &PlayerState) -> Result<(), StoreError> {
    let blob = encode(state)?;
    store.write(SAVE_KEY, &blob)
}

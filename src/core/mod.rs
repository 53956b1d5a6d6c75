//! Core state, configuration, scheduling and error types.

pub mod config;
pub mod constants;
pub mod error;
pub mod game_loop;
pub mod player_state;

pub use config::GameConfig;
pub use error::{ProgressionError, StoreError};
pub use game_loop::{Cadence, CadenceStep};
pub use player_state::PlayerState;

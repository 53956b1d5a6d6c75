//! Caller-visible failures.
//!
//! Running out of fish or pearls is not an error: purchases report it through
//! their outcome value. These types cover identifiers the catalog does not know and
//! failures of the external blob store.

use crate::cosmetics::CosmeticCategory;
use thiserror::Error;

/// A mutation was asked to act on something that does not exist or is not allowed.
/// The state is unchanged whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProgressionError {
    #[error("unknown upgrade id `{0}`")]
    UnknownUpgrade(String),

    #[error("unknown cosmetic category `{0}`")]
    UnknownCategory(String),

    #[error("unknown cosmetic `{item}` in category {category}")]
    UnknownCosmetic {
        category: CosmeticCategory,
        item: String,
    },

    #[error("cosmetic `{item}` in category {category} is still locked")]
    CosmeticLocked {
        category: CosmeticCategory,
        item: String,
    },
}

/// Failure reading or writing a save blob.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("save store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not encode save blob: {0}")]
    Encoding(#[from] serde_json::Error),

    #[error("could not determine a save directory")]
    NoSaveDirectory,
}

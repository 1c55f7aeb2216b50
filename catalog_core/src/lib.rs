//! catalog_core - Item, enchantment and potion catalogs for loot generation
//!
//! The loot engine never reads catalog data directly. It goes through the
//! registry traits in [`registry`], which [`Catalog`] implements over a TOML
//! file or the bundled vanilla data.

mod catalog;
pub mod item;
pub mod registry;
pub mod types;

pub use catalog::{Catalog, CatalogConfig};
pub use item::{Enchantment, EnchantmentKind, ItemKind, ItemStack, PotionKind};
pub use registry::{normalize_identifier, EnchantmentRegistry, ItemRegistry, PotionRegistry};
pub use types::{EnchantTarget, ItemCategory};

use std::path::PathBuf;
use thiserror::Error;

/// Error loading catalog configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading '{path:?}': {error}")]
    Io {
        error: std::io::Error,
        path: Option<PathBuf>,
    },
    #[error("Parse error in '{path:?}': {error}")]
    Parse {
        error: toml::de::Error,
        path: Option<PathBuf>,
    },
    #[error("Validation error: {0}")]
    Validation(String),
}

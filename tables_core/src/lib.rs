//! tables_core - Loot table parsing and generation
//!
//! A loot table is a list of pools. Each pool is rolled a number of times and
//! every roll draws one weighted entry; item entries become stacks that are
//! then run through the entry's functions.
//!
//! ```rust,ignore
//! use catalog_core::Catalog;
//! use tables_core::{LootContext, LootSettings, LootTableRegistry};
//!
//! let catalog = Catalog::vanilla()?;
//! let settings = LootSettings::default();
//! let registry = LootTableRegistry::from_settings(&settings)?;
//! let ctx = LootContext::new(&catalog, &settings);
//! let stacks = registry.generate("chests/simple_dungeon.json", &ctx, &mut rand::thread_rng())?;
//! ```

mod config;
mod context;
mod function;
mod registry;
mod settings;
mod table;
mod value;

#[cfg(test)]
mod test_support;

pub use config::{EnchantConfig, EntryConfig, FunctionConfig, PoolConfig, TableConfig};
pub use context::LootContext;
pub use function::{apply_functions, EnchantSpec, LootFunction};
pub use registry::LootTableRegistry;
pub use settings::LootSettings;
pub use table::{Entry, LootTable, Pool};
pub use value::{RangeOrigin, ValueRange};

use catalog_core::ItemStack;
use rand::Rng;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Error loading engine settings
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
}

/// Error resolving a loot table for generation
#[derive(Debug, Error)]
pub enum TableError {
    #[error("Unknown loot table: {0}")]
    NotFound(String),
    #[error("Malformed loot table '{path}': {error}")]
    Malformed {
        path: String,
        error: Arc<serde_json::Error>,
    },
    #[error("IO error reading '{path:?}': {error}")]
    Io {
        error: std::io::Error,
        path: Option<PathBuf>,
    },
}

/// Parse a table from raw bytes and generate its contents
///
/// `path` only names the table in diagnostics.
pub fn generate<R: Rng>(
    path: &str,
    bytes: &[u8],
    ctx: &LootContext<'_>,
    rng: &mut R,
) -> Result<Vec<ItemStack>, TableError> {
    match LootTable::parse(bytes) {
        Ok(table) => Ok(table.generate(ctx, rng)),
        Err(e) => {
            log::error!("Error loading loot table '{}': {}", path, e);
            Err(TableError::Malformed {
                path: path.to_string(),
                error: Arc::new(e),
            })
        }
    }
}

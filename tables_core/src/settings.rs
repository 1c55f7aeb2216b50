//! Engine settings

use crate::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Tunable loot engine settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LootSettings {
    /// Rolled `enchant_with_levels` values above this may pick a random level
    #[serde(default = "default_enchant_level_threshold")]
    pub enchant_level_threshold: i32,
    /// Directory loot table files are loaded from
    #[serde(default = "default_table_root")]
    pub table_root: PathBuf,
}

impl Default for LootSettings {
    fn default() -> Self {
        LootSettings {
            enchant_level_threshold: default_enchant_level_threshold(),
            table_root: default_table_root(),
        }
    }
}

fn default_enchant_level_threshold() -> i32 {
    15
}
fn default_table_root() -> PathBuf {
    PathBuf::from("loot_tables")
}

impl LootSettings {
    /// Load settings from a TOML file
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            error: e,
            path: Some(path.to_path_buf()),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            error: e,
            path: Some(path.to_path_buf()),
        })
    }

    /// Parse settings from a TOML string
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse { error: e, path: None })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = LootSettings::default();
        assert_eq!(settings.enchant_level_threshold, 15);
        assert_eq!(settings.table_root, PathBuf::from("loot_tables"));
    }

    #[test]
    fn test_parse_partial() {
        let settings = LootSettings::parse("enchant_level_threshold = 20").unwrap();
        assert_eq!(settings.enchant_level_threshold, 20);
        assert_eq!(settings.table_root, PathBuf::from("loot_tables"));
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(LootSettings::parse("").unwrap(), LootSettings::default());
    }

    #[test]
    fn test_parse_error() {
        let result = LootSettings::parse("enchant_level_threshold = \"high\"");
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }
}

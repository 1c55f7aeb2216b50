use crate::context::LootContext;
use crate::settings::LootSettings;
use crate::table::LootTable;
use crate::TableError;
use catalog_core::ItemStack;
use rand::Rng;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// A registered table, or the reason its source could not be parsed
#[derive(Debug, Clone)]
enum TableSlot {
    Ready(LootTable),
    Malformed(Arc<serde_json::Error>),
}

/// Registry of loot tables keyed by their path relative to the table root
///
/// Keys use `/` separators and drop the `.json` extension, so
/// `chests/dungeon.json` and `chests/dungeon` name the same table.
#[derive(Debug, Default)]
pub struct LootTableRegistry {
    tables: HashMap<String, TableSlot>,
}

impl LootTableRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Load all tables under the configured table root
    pub fn from_settings(settings: &LootSettings) -> Result<Self, TableError> {
        Self::load(&settings.table_root)
    }

    /// Load all `.json` tables from a directory (recursively)
    ///
    /// Files that fail to parse are kept as malformed entries and reported when
    /// requested, so one bad file does not take down the rest.
    pub fn load(dir: &Path) -> Result<Self, TableError> {
        let mut registry = Self::new();
        registry.load_dir(dir, dir)?;
        log::debug!(
            "Loaded {} loot tables from {}",
            registry.tables.len(),
            dir.display()
        );
        Ok(registry)
    }

    /// Load tables from a directory recursively
    fn load_dir(&mut self, root: &Path, dir: &Path) -> Result<(), TableError> {
        if !dir.exists() {
            log::warn!("Loot table directory {} does not exist", dir.display());
            return Ok(());
        }

        let entries = std::fs::read_dir(dir).map_err(|e| TableError::Io {
            error: e,
            path: Some(dir.to_path_buf()),
        })?;

        for entry in entries {
            let entry = entry.map_err(|e| TableError::Io {
                error: e,
                path: Some(dir.to_path_buf()),
            })?;
            let path = entry.path();

            if path.is_dir() {
                self.load_dir(root, &path)?;
            } else if path.extension().is_some_and(|ext| ext == "json") {
                self.load_file(root, &path)?;
            }
        }

        Ok(())
    }

    /// Load a single table file
    fn load_file(&mut self, root: &Path, path: &Path) -> Result<(), TableError> {
        let bytes = std::fs::read(path).map_err(|e| TableError::Io {
            error: e,
            path: Some(path.to_path_buf()),
        })?;

        let relative = path.strip_prefix(root).unwrap_or(path);
        let key = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");

        self.insert_bytes(&key, &bytes);
        Ok(())
    }

    /// Parse and register a table. Returns false if the source was malformed.
    pub fn insert_bytes(&mut self, path: &str, bytes: &[u8]) -> bool {
        let key = table_key(path);
        match LootTable::parse(bytes) {
            Ok(table) => {
                self.tables.insert(key, TableSlot::Ready(table));
                true
            }
            Err(e) => {
                log::warn!("Malformed loot table '{}': {}", key, e);
                self.tables.insert(key, TableSlot::Malformed(Arc::new(e)));
                false
            }
        }
    }

    /// Register an already parsed table
    pub fn insert(&mut self, path: &str, table: LootTable) {
        self.tables.insert(table_key(path), TableSlot::Ready(table));
    }

    /// Get a table by path, if it is registered and parsed
    pub fn get(&self, path: &str) -> Option<&LootTable> {
        match self.tables.get(&table_key(path)) {
            Some(TableSlot::Ready(table)) => Some(table),
            _ => None,
        }
    }

    /// Check if a table path is registered, parsed or not
    pub fn contains(&self, path: &str) -> bool {
        self.tables.contains_key(&table_key(path))
    }

    /// List all table paths
    pub fn table_ids(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(|s| s.as_str())
    }

    fn lookup(&self, path: &str) -> Result<&LootTable, TableError> {
        let key = table_key(path);
        match self.tables.get(&key) {
            Some(TableSlot::Ready(table)) => Ok(table),
            Some(TableSlot::Malformed(error)) => Err(TableError::Malformed {
                path: key,
                error: Arc::clone(error),
            }),
            None => Err(TableError::NotFound(key)),
        }
    }

    /// Generate the contents of a table by path
    ///
    /// Unknown and malformed tables fail the whole call; the failure is logged
    /// and returned so the caller can fall back (e.g. to an empty container).
    pub fn generate<R: Rng>(
        &self,
        path: &str,
        ctx: &LootContext<'_>,
        rng: &mut R,
    ) -> Result<Vec<ItemStack>, TableError> {
        match self.lookup(path) {
            Ok(table) => Ok(table.generate(ctx, rng)),
            Err(e) => {
                log::error!("Error loading loot table '{}': {}", path, e);
                Err(e)
            }
        }
    }
}

/// Canonical registry key for a table path
fn table_key(path: &str) -> String {
    let path = path.trim().replace('\\', "/");
    let path = path.strip_prefix("minecraft:").unwrap_or(&path);
    let path = path.trim_start_matches('/');
    let path = path.strip_prefix("loot_tables/").unwrap_or(path);
    let path = path.strip_suffix(".json").unwrap_or(path);
    path.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_catalog;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::io::Write;
    use tempfile::TempDir;

    fn create_test_table(dir: &Path, name: &str, content: &str) {
        let path = dir.join(format!("{}.json", name));
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
    }

    const STICKS: &str = r#"{"pools":[{"rolls":1,"entries":[{"type":"item","name":"stick",
        "functions":[{"function":"set_count","count":{"min":2,"max":2}}]}]}]}"#;

    #[test]
    fn test_table_key() {
        assert_eq!(table_key("chests/dungeon.json"), "chests/dungeon");
        assert_eq!(table_key("chests/dungeon"), "chests/dungeon");
        assert_eq!(table_key("loot_tables/chests/dungeon.json"), "chests/dungeon");
        assert_eq!(table_key("minecraft:chests/dungeon"), "chests/dungeon");
        assert_eq!(table_key("chests\\dungeon.json"), "chests/dungeon");
    }

    #[test]
    fn test_load_nested_tables() {
        let dir = TempDir::new().unwrap();
        create_test_table(dir.path(), "chests/dungeon", STICKS);
        create_test_table(dir.path(), "entities/zombie", STICKS);

        let registry = LootTableRegistry::load(dir.path()).unwrap();
        assert!(registry.contains("chests/dungeon.json"));
        assert!(registry.contains("entities/zombie"));
        assert_eq!(registry.table_ids().count(), 2);
    }

    #[test]
    fn test_ignores_other_files() {
        let dir = TempDir::new().unwrap();
        create_test_table(dir.path(), "chests/dungeon", STICKS);
        std::fs::write(dir.path().join("README.md"), "not a table").unwrap();

        let registry = LootTableRegistry::load(dir.path()).unwrap();
        assert_eq!(registry.table_ids().count(), 1);
    }

    #[test]
    fn test_missing_directory_is_empty() {
        let registry = LootTableRegistry::load(Path::new("/nonexistent/loot_tables")).unwrap();
        assert_eq!(registry.table_ids().count(), 0);
    }

    #[test]
    fn test_from_settings() {
        let dir = TempDir::new().unwrap();
        create_test_table(dir.path(), "chests/dungeon", STICKS);

        let settings = LootSettings {
            table_root: dir.path().to_path_buf(),
            ..LootSettings::default()
        };
        let registry = LootTableRegistry::from_settings(&settings).unwrap();
        assert!(registry.get("chests/dungeon").is_some());
    }

    #[test]
    fn test_generate_by_path() {
        let dir = TempDir::new().unwrap();
        create_test_table(dir.path(), "chests/dungeon", STICKS);

        let registry = LootTableRegistry::load(dir.path()).unwrap();
        let catalog = test_catalog();
        let settings = LootSettings::default();
        let ctx = LootContext::new(&catalog, &settings);
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let stacks = registry
            .generate("chests/dungeon.json", &ctx, &mut rng)
            .unwrap();
        assert_eq!(stacks.len(), 1);
        assert_eq!(stacks[0].item.id, "stick");
        assert_eq!(stacks[0].count, 2);
    }

    #[test]
    fn test_unknown_table_error() {
        let registry = LootTableRegistry::new();
        let catalog = test_catalog();
        let settings = LootSettings::default();
        let ctx = LootContext::new(&catalog, &settings);
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let result = registry.generate("chests/nonexistent.json", &ctx, &mut rng);
        assert!(matches!(result, Err(TableError::NotFound(path)) if path == "chests/nonexistent"));
    }

    #[test]
    fn test_malformed_table_reported_on_request() {
        let dir = TempDir::new().unwrap();
        create_test_table(dir.path(), "chests/broken", r#"{"pools": "chest"}"#);
        create_test_table(dir.path(), "chests/dungeon", STICKS);

        let registry = LootTableRegistry::load(dir.path()).unwrap();
        assert!(registry.contains("chests/broken"));
        assert!(registry.get("chests/broken").is_none());

        let catalog = test_catalog();
        let settings = LootSettings::default();
        let ctx = LootContext::new(&catalog, &settings);
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let result = registry.generate("chests/broken", &ctx, &mut rng);
        assert!(matches!(result, Err(TableError::Malformed { .. })));

        // The healthy table is unaffected
        assert!(registry.generate("chests/dungeon", &ctx, &mut rng).is_ok());
    }

    #[test]
    fn test_insert_bytes() {
        let mut registry = LootTableRegistry::new();
        assert!(registry.insert_bytes("chests/dungeon.json", STICKS.as_bytes()));
        assert!(!registry.insert_bytes("chests/broken.json", b"not json"));
        assert!(registry.get("chests/dungeon").is_some());
        assert!(registry.contains("chests/broken"));
    }

    #[test]
    fn test_insert_parsed() {
        let mut registry = LootTableRegistry::new();
        registry.insert("gameplay/fishing", STICKS.parse().unwrap());
        assert!(registry.get("gameplay/fishing.json").is_some());
    }
}

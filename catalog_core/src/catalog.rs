use crate::item::{EnchantmentKind, ItemKind, PotionKind};
use crate::registry::{normalize_identifier, EnchantmentRegistry, ItemRegistry, PotionRegistry};
use crate::ConfigError;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Bundled vanilla catalog data
const VANILLA: &str = include_str!("../data/vanilla.toml");

/// TOML layout of a catalog file
#[derive(Debug, Deserialize)]
pub struct CatalogConfig {
    #[serde(default = "default_namespace")]
    pub namespace: String,
    #[serde(default)]
    pub items: Vec<ItemKind>,
    #[serde(default)]
    pub enchantments: Vec<EnchantmentKind>,
    #[serde(default)]
    pub potions: Vec<PotionKind>,
}

fn default_namespace() -> String {
    "minecraft".to_string()
}

/// In-memory catalog implementing every registry adapter
#[derive(Debug, Clone)]
pub struct Catalog {
    namespace: String,
    items: HashMap<String, ItemKind>,
    /// Kept in declaration order, which enchantment rolls depend on
    enchantments: Vec<EnchantmentKind>,
    enchantment_index: HashMap<String, usize>,
    potions: HashMap<String, PotionKind>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(&default_namespace())
    }
}

impl Catalog {
    /// Create an empty catalog for a namespace
    pub fn new(namespace: &str) -> Self {
        Catalog {
            namespace: namespace.trim().to_ascii_lowercase(),
            items: HashMap::new(),
            enchantments: Vec::new(),
            enchantment_index: HashMap::new(),
            potions: HashMap::new(),
        }
    }

    /// The catalog shipped with the engine
    pub fn vanilla() -> Result<Self, ConfigError> {
        Self::parse(VANILLA)
    }

    /// Load a catalog from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            error: e,
            path: Some(path.to_path_buf()),
        })?;
        let config: CatalogConfig = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            error: e,
            path: Some(path.to_path_buf()),
        })?;
        Self::from_config(config)
    }

    /// Parse a catalog from a TOML string
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: CatalogConfig = toml::from_str(content)
            .map_err(|e| ConfigError::Parse { error: e, path: None })?;
        Self::from_config(config)
    }

    pub fn from_config(config: CatalogConfig) -> Result<Self, ConfigError> {
        let mut catalog = Self::new(&config.namespace);
        for item in config.items {
            catalog.register_item(item)?;
        }
        for enchantment in config.enchantments {
            catalog.register_enchantment(enchantment)?;
        }
        for potion in config.potions {
            catalog.register_potion(potion)?;
        }
        log::debug!(
            "Loaded catalog '{}': {} items, {} enchantments, {} potions",
            catalog.namespace,
            catalog.items.len(),
            catalog.enchantments.len(),
            catalog.potions.len()
        );
        Ok(catalog)
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Normalize an identifier the way lookups do
    pub fn normalize(&self, id: &str) -> String {
        normalize_identifier(&self.namespace, id)
    }

    pub fn register_item(&mut self, mut item: ItemKind) -> Result<(), ConfigError> {
        let exists = self.items.contains_key(&self.normalize(&item.id));
        item.id = self.checked_id("item", &item.id, exists)?;
        self.items.insert(item.id.clone(), item);
        Ok(())
    }

    pub fn register_enchantment(
        &mut self,
        mut enchantment: EnchantmentKind,
    ) -> Result<(), ConfigError> {
        let exists = self
            .enchantment_index
            .contains_key(&self.normalize(&enchantment.id));
        enchantment.id = self.checked_id("enchantment", &enchantment.id, exists)?;
        if enchantment.max_level < 1 {
            return Err(ConfigError::Validation(format!(
                "Enchantment '{}' has max_level {}, expected at least 1",
                enchantment.id, enchantment.max_level
            )));
        }
        self.enchantment_index
            .insert(enchantment.id.clone(), self.enchantments.len());
        self.enchantments.push(enchantment);
        Ok(())
    }

    pub fn register_potion(&mut self, mut potion: PotionKind) -> Result<(), ConfigError> {
        let exists = self.potions.contains_key(&self.normalize(&potion.id));
        potion.id = self.checked_id("potion", &potion.id, exists)?;
        self.potions.insert(potion.id.clone(), potion);
        Ok(())
    }

    fn checked_id(&self, what: &str, id: &str, exists: bool) -> Result<String, ConfigError> {
        let normalized = self.normalize(id);
        if normalized.is_empty() {
            return Err(ConfigError::Validation(format!("Empty {} id", what)));
        }
        if exists {
            return Err(ConfigError::Validation(format!(
                "Duplicate {} id: {}",
                what, normalized
            )));
        }
        Ok(normalized)
    }

    /// List all item IDs
    pub fn item_ids(&self) -> impl Iterator<Item = &str> {
        self.items.keys().map(|s| s.as_str())
    }

    /// List all potion IDs
    pub fn potion_ids(&self) -> impl Iterator<Item = &str> {
        self.potions.keys().map(|s| s.as_str())
    }
}

impl ItemRegistry for Catalog {
    fn resolve_item(&self, id: &str) -> Option<ItemKind> {
        self.items.get(&self.normalize(id)).cloned()
    }
}

impl EnchantmentRegistry for Catalog {
    fn resolve_enchantment(&self, id: &str) -> Option<EnchantmentKind> {
        self.enchantment_index
            .get(&self.normalize(id))
            .map(|&i| self.enchantments[i].clone())
    }

    fn enchantments(&self) -> &[EnchantmentKind] {
        &self.enchantments
    }
}

impl PotionRegistry for Catalog {
    fn resolve_potion(&self, id: &str) -> Option<PotionKind> {
        self.potions.get(&self.normalize(id)).cloned()
    }
}

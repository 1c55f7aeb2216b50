use crate::value::ValueRange;
use serde::Deserialize;

/// JSON layout of a loot table file
#[derive(Debug, Default, Deserialize)]
pub struct TableConfig {
    #[serde(default)]
    pub pools: Vec<PoolConfig>,
}

/// Configuration for one pool
#[derive(Debug, Default, Deserialize)]
pub struct PoolConfig {
    #[serde(default)]
    pub rolls: ValueRange,
    #[serde(default)]
    pub entries: Vec<EntryConfig>,
}

/// Configuration for a single entry in a pool
#[derive(Debug, Default, Deserialize)]
pub struct EntryConfig {
    #[serde(rename = "type", default)]
    pub entry_type: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub weight: i32,
    #[serde(default)]
    pub functions: Vec<FunctionConfig>,
}

/// A function declaration. Fields not used by the named function are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct FunctionConfig {
    #[serde(default)]
    pub function: String,
    #[serde(default)]
    pub count: ValueRange,
    #[serde(default)]
    pub levels: ValueRange,
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub enchants: Vec<EnchantConfig>,
}

/// One `{id, level}` pair of a `specific_enchants` function
#[derive(Debug, Default, Deserialize)]
pub struct EnchantConfig {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub level: ValueRange,
}

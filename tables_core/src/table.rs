use crate::config::{EntryConfig, PoolConfig, TableConfig};
use crate::context::LootContext;
use crate::function::{apply_functions, LootFunction};
use crate::value::ValueRange;
use catalog_core::ItemStack;
use rand::Rng;

/// A loot table: pools rolled independently, in order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LootTable {
    pools: Vec<Pool>,
}

/// Weighted entries plus the number of times to draw from them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pool {
    rolls: ValueRange,
    entries: Vec<Entry>,
}

/// One weighted candidate within a pool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    entry_type: EntryType,
    name: String,
    weight: i32,
    functions: Vec<LootFunction>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum EntryType {
    Item,
    /// Any other entry type. Selecting it drops nothing.
    Other(String),
}

impl LootTable {
    /// Parse a loot table from JSON bytes
    pub fn parse(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        let config: TableConfig = serde_json::from_slice(bytes)?;
        Ok(Self::from_config(config))
    }

    pub fn from_config(config: TableConfig) -> Self {
        LootTable {
            pools: config.pools.into_iter().map(Pool::from_config).collect(),
        }
    }

    pub fn pools(&self) -> &[Pool] {
        &self.pools
    }

    /// Roll every pool and collect the generated stacks in order
    pub fn generate<R: Rng>(&self, ctx: &LootContext<'_>, rng: &mut R) -> Vec<ItemStack> {
        let mut stacks = Vec::new();

        for pool in &self.pools {
            let rolls = pool.rolls.roll(rng);
            for _ in 0..rolls {
                if let Some(stack) = pool.roll_entry(ctx, rng) {
                    stacks.push(stack);
                }
            }
        }

        stacks
    }
}

impl std::str::FromStr for LootTable {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s.as_bytes())
    }
}

impl Pool {
    fn from_config(config: PoolConfig) -> Self {
        Pool {
            rolls: config.rolls,
            entries: config.entries.into_iter().map(Entry::from_config).collect(),
        }
    }

    pub fn rolls(&self) -> ValueRange {
        self.rolls
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Sum of effective entry weights
    pub fn total_weight(&self) -> i64 {
        self.entries.iter().map(|e| e.effective_weight()).sum()
    }

    /// Index of the entry selected by a draw `r` in `[0, total_weight)`
    fn select(&self, r: i64) -> Option<&Entry> {
        let mut cumulative = 0;
        self.entries.iter().find(|entry| {
            cumulative += entry.effective_weight();
            r < cumulative
        })
    }

    /// Draw one entry and build its stack.
    ///
    /// Returns `None` when the pool is empty, the winner is not an item entry,
    /// or its item is unknown to the catalog. The draw is consumed either way.
    pub fn roll_entry<R: Rng>(&self, ctx: &LootContext<'_>, rng: &mut R) -> Option<ItemStack> {
        let total_weight = self.total_weight();
        if total_weight <= 0 {
            return None;
        }

        let entry = self.select(rng.gen_range(0..total_weight))?;
        if entry.entry_type != EntryType::Item {
            return None;
        }

        let item = match ctx.items.resolve_item(&entry.name) {
            Some(item) => item,
            None => {
                log::warn!("Loot table item not found: {}", entry.name);
                return None;
            }
        };

        Some(apply_functions(
            ItemStack::new(item, 1),
            &entry.functions,
            ctx,
            rng,
        ))
    }
}

impl Entry {
    fn from_config(config: EntryConfig) -> Self {
        let entry_type = if config.entry_type == "item" {
            EntryType::Item
        } else {
            EntryType::Other(config.entry_type)
        };

        Entry {
            entry_type,
            name: config.name,
            weight: config.weight,
            functions: config
                .functions
                .into_iter()
                .map(LootFunction::from_config)
                .collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_item(&self) -> bool {
        self.entry_type == EntryType::Item
    }

    /// The authored entry type
    pub fn entry_type(&self) -> &str {
        match &self.entry_type {
            EntryType::Item => "item",
            EntryType::Other(name) => name.as_str(),
        }
    }

    pub fn functions(&self) -> &[LootFunction] {
        &self.functions
    }

    /// Weight used for selection; unset or non-positive weights count as 1
    pub fn effective_weight(&self) -> i64 {
        i64::from(self.weight.max(1))
    }
}

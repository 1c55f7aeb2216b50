use crate::settings::LootSettings;
use catalog_core::{EnchantmentRegistry, ItemRegistry, PotionRegistry};

/// Registries and settings a generation call reads from
///
/// Randomness is not part of the context; every rolling operation takes its
/// own generator so concurrent callers never share one.
#[derive(Clone, Copy)]
pub struct LootContext<'a> {
    pub items: &'a dyn ItemRegistry,
    pub enchantments: &'a dyn EnchantmentRegistry,
    pub potions: &'a dyn PotionRegistry,
    pub settings: &'a LootSettings,
}

impl<'a> LootContext<'a> {
    /// Build a context from one catalog implementing every registry
    pub fn new<C>(catalog: &'a C, settings: &'a LootSettings) -> Self
    where
        C: ItemRegistry + EnchantmentRegistry + PotionRegistry,
    {
        LootContext {
            items: catalog,
            enchantments: catalog,
            potions: catalog,
            settings,
        }
    }
}

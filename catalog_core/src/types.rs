use serde::{Deserialize, Serialize};
use std::fmt;

/// Broad item categories the catalog uses for enchantment compatibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ItemCategory {
    // Weapons
    Sword,
    Trident,
    Bow,
    Crossbow,
    // Tools
    Axe,
    Pickaxe,
    Shovel,
    Hoe,
    Shears,
    FishingRod,
    // Armour
    Helmet,
    Chestplate,
    Leggings,
    Boots,
    // Containers
    Potion,
    SplashPotion,
    Book,
    #[default]
    Misc,
}

impl ItemCategory {
    pub fn is_melee_weapon(&self) -> bool {
        matches!(self, ItemCategory::Sword | ItemCategory::Axe)
    }

    pub fn is_digger(&self) -> bool {
        matches!(
            self,
            ItemCategory::Axe
                | ItemCategory::Pickaxe
                | ItemCategory::Shovel
                | ItemCategory::Hoe
                | ItemCategory::Shears
        )
    }

    pub fn is_armour(&self) -> bool {
        matches!(
            self,
            ItemCategory::Helmet
                | ItemCategory::Chestplate
                | ItemCategory::Leggings
                | ItemCategory::Boots
        )
    }

    /// Whether items of this category lose durability with use
    pub fn is_durable(&self) -> bool {
        self.is_armour()
            || self.is_digger()
            || matches!(
                self,
                ItemCategory::Sword
                    | ItemCategory::Trident
                    | ItemCategory::Bow
                    | ItemCategory::Crossbow
                    | ItemCategory::FishingRod
            )
    }

    /// Drinkable or throwable potion containers
    pub fn is_potion_container(&self) -> bool {
        matches!(self, ItemCategory::Potion | ItemCategory::SplashPotion)
    }
}

/// Item groups an enchantment may be applied to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnchantTarget {
    Armour,
    Helmet,
    Leggings,
    Boots,
    Sword,
    /// Swords and axes
    Weapon,
    /// Diggers and shears
    Tool,
    Bow,
    Crossbow,
    Trident,
    FishingRod,
    /// Anything with durability
    Breakable,
}

impl EnchantTarget {
    pub fn accepts(&self, category: ItemCategory) -> bool {
        match self {
            EnchantTarget::Armour => category.is_armour(),
            EnchantTarget::Helmet => category == ItemCategory::Helmet,
            EnchantTarget::Leggings => category == ItemCategory::Leggings,
            EnchantTarget::Boots => category == ItemCategory::Boots,
            EnchantTarget::Sword => category == ItemCategory::Sword,
            EnchantTarget::Weapon => category.is_melee_weapon(),
            EnchantTarget::Tool => category.is_digger(),
            EnchantTarget::Bow => category == ItemCategory::Bow,
            EnchantTarget::Crossbow => category == ItemCategory::Crossbow,
            EnchantTarget::Trident => category == ItemCategory::Trident,
            EnchantTarget::FishingRod => category == ItemCategory::FishingRod,
            EnchantTarget::Breakable => category.is_durable(),
        }
    }
}

impl fmt::Display for EnchantTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnchantTarget::Armour => write!(f, "Armour"),
            EnchantTarget::Helmet => write!(f, "Helmet"),
            EnchantTarget::Leggings => write!(f, "Leggings"),
            EnchantTarget::Boots => write!(f, "Boots"),
            EnchantTarget::Sword => write!(f, "Sword"),
            EnchantTarget::Weapon => write!(f, "Weapon"),
            EnchantTarget::Tool => write!(f, "Tool"),
            EnchantTarget::Bow => write!(f, "Bow"),
            EnchantTarget::Crossbow => write!(f, "Crossbow"),
            EnchantTarget::Trident => write!(f, "Trident"),
            EnchantTarget::FishingRod => write!(f, "Fishing Rod"),
            EnchantTarget::Breakable => write!(f, "Breakable"),
        }
    }
}

use crate::types::{EnchantTarget, ItemCategory};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An item type known to the catalog
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemKind {
    /// Normalized identifier, without namespace
    pub id: String,
    #[serde(default)]
    pub category: ItemCategory,
}

impl ItemKind {
    pub fn new(id: impl Into<String>, category: ItemCategory) -> Self {
        ItemKind {
            id: id.into(),
            category,
        }
    }
}

/// An enchantment type known to the catalog
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EnchantmentKind {
    pub id: String,
    pub max_level: i32,
    /// Item groups this enchantment can be applied to
    #[serde(default)]
    pub targets: Vec<EnchantTarget>,
}

impl EnchantmentKind {
    pub fn is_compatible(&self, item: &ItemKind) -> bool {
        self.targets.iter().any(|t| t.accepts(item.category))
    }

    pub fn max_level(&self) -> i32 {
        self.max_level
    }
}

/// A potion variant (e.g. `long_swiftness`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PotionKind {
    pub id: String,
}

/// An enchantment instance attached to a stack
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enchantment {
    pub kind: EnchantmentKind,
    pub level: i32,
}

/// A concrete stack of items produced by loot generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStack {
    pub item: ItemKind,
    pub count: i32,
    /// Attached enchantments, at most one per enchantment id
    #[serde(default)]
    pub enchantments: Vec<Enchantment>,
    /// Potion variant carried by a potion container
    #[serde(default)]
    pub potion: Option<PotionKind>,
}

impl ItemStack {
    /// Create a plain stack. Negative counts are clamped to zero.
    pub fn new(item: ItemKind, count: i32) -> Self {
        ItemStack {
            item,
            count: count.max(0),
            enchantments: Vec::new(),
            potion: None,
        }
    }

    pub fn with_count(mut self, count: i32) -> Self {
        self.count = count.max(0);
        self
    }

    /// Attach an enchantment, keeping the ones already present.
    ///
    /// Attaching an enchantment id that is already on the stack replaces its level.
    pub fn with_enchantment(mut self, kind: EnchantmentKind, level: i32) -> Self {
        match self.enchantments.iter_mut().find(|e| e.kind.id == kind.id) {
            Some(existing) => existing.level = level,
            None => self.enchantments.push(Enchantment { kind, level }),
        }
        self
    }

    pub fn with_potion(mut self, potion: PotionKind) -> Self {
        self.potion = Some(potion);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Level of the given enchantment, if attached
    pub fn enchantment_level(&self, id: &str) -> Option<i32> {
        self.enchantments
            .iter()
            .find(|e| e.kind.id == id)
            .map(|e| e.level)
    }
}

impl fmt::Display for ItemStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x {}", self.count, self.item.id)?;
        if let Some(ref potion) = self.potion {
            write!(f, " ({})", potion.id)?;
        }
        if !self.enchantments.is_empty() {
            let enchants: Vec<String> = self
                .enchantments
                .iter()
                .map(|e| format!("{} {}", e.kind.id, e.level))
                .collect();
            write!(f, " [{}]", enchants.join(", "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sharpness() -> EnchantmentKind {
        EnchantmentKind {
            id: "sharpness".to_string(),
            max_level: 5,
            targets: vec![EnchantTarget::Weapon],
        }
    }

    fn unbreaking() -> EnchantmentKind {
        EnchantmentKind {
            id: "unbreaking".to_string(),
            max_level: 3,
            targets: vec![EnchantTarget::Breakable],
        }
    }

    #[test]
    fn test_enchantments_stack() {
        let sword = ItemKind::new("iron_sword", ItemCategory::Sword);
        let stack = ItemStack::new(sword, 1)
            .with_enchantment(sharpness(), 2)
            .with_enchantment(unbreaking(), 1);

        assert_eq!(stack.enchantments.len(), 2);
        assert_eq!(stack.enchantment_level("sharpness"), Some(2));
        assert_eq!(stack.enchantment_level("unbreaking"), Some(1));
    }

    #[test]
    fn test_same_enchantment_replaces_level() {
        let sword = ItemKind::new("iron_sword", ItemCategory::Sword);
        let stack = ItemStack::new(sword, 1)
            .with_enchantment(sharpness(), 2)
            .with_enchantment(sharpness(), 4);

        assert_eq!(stack.enchantments.len(), 1);
        assert_eq!(stack.enchantment_level("sharpness"), Some(4));
    }

    #[test]
    fn test_compatibility() {
        let sword = ItemKind::new("iron_sword", ItemCategory::Sword);
        let stick = ItemKind::new("stick", ItemCategory::Misc);
        assert!(sharpness().is_compatible(&sword));
        assert!(!sharpness().is_compatible(&stick));
        assert!(!unbreaking().is_compatible(&stick));
    }

    #[test]
    fn test_negative_count_clamped() {
        let stick = ItemKind::new("stick", ItemCategory::Misc);
        let stack = ItemStack::new(stick, 3).with_count(-2);
        assert_eq!(stack.count, 0);
        assert!(stack.is_empty());
    }

    #[test]
    fn test_display() {
        let sword = ItemKind::new("iron_sword", ItemCategory::Sword);
        let stack = ItemStack::new(sword, 1).with_enchantment(sharpness(), 3);
        assert_eq!(stack.to_string(), "1x iron_sword [sharpness 3]");
    }
}

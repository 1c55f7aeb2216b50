//! Lookup services the loot engine resolves identifiers through

use crate::item::{EnchantmentKind, ItemKind, PotionKind};

/// Resolves item identifiers to item kinds
pub trait ItemRegistry: Send + Sync {
    fn resolve_item(&self, id: &str) -> Option<ItemKind>;
}

/// Resolves enchantment identifiers and exposes the full enchantment list
pub trait EnchantmentRegistry: Send + Sync {
    fn resolve_enchantment(&self, id: &str) -> Option<EnchantmentKind>;

    /// Every enchantment, in catalog order
    fn enchantments(&self) -> &[EnchantmentKind];
}

/// Resolves potion variant identifiers
pub trait PotionRegistry: Send + Sync {
    fn resolve_potion(&self, id: &str) -> Option<PotionKind>;
}

/// Normalize an identifier for lookup: trimmed, lowercased, namespace stripped.
///
/// `normalize_identifier("minecraft", "minecraft:Iron_Sword")` yields `iron_sword`.
pub fn normalize_identifier(namespace: &str, id: &str) -> String {
    let id = id.trim().to_ascii_lowercase();
    match id.split_once(':') {
        Some((ns, rest)) if ns == namespace => rest.to_string(),
        _ => id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_namespace() {
        assert_eq!(normalize_identifier("minecraft", "minecraft:stick"), "stick");
        assert_eq!(normalize_identifier("minecraft", "stick"), "stick");
    }

    #[test]
    fn test_lowercases() {
        assert_eq!(
            normalize_identifier("minecraft", " Minecraft:Fire_Aspect "),
            "fire_aspect"
        );
    }

    #[test]
    fn test_foreign_namespace_kept() {
        assert_eq!(normalize_identifier("minecraft", "modpack:ruby"), "modpack:ruby");
    }
}

use catalog_core::Catalog;

/// A minimal catalog for engine tests.
///
/// Enchantment order is significant for `enchant_with_levels` tests: swords hit
/// `sharpness` first, pickaxes hit `silk_touch` first.
const TEST_CATALOG: &str = r#"
[[items]]
id = "stick"

[[items]]
id = "book"
category = "book"

[[items]]
id = "iron_sword"
category = "sword"

[[items]]
id = "diamond_pickaxe"
category = "pickaxe"

[[items]]
id = "potion"
category = "potion"

[[items]]
id = "splash_potion"
category = "splash_potion"

[[enchantments]]
id = "protection"
max_level = 4
targets = ["armour"]

[[enchantments]]
id = "sharpness"
max_level = 5
targets = ["weapon"]

[[enchantments]]
id = "silk_touch"
max_level = 1
targets = ["tool"]

[[enchantments]]
id = "unbreaking"
max_level = 3
targets = ["breakable"]

[[enchantments]]
id = "mending"
max_level = 1
targets = ["breakable"]

[[potions]]
id = "healing"

[[potions]]
id = "swiftness"
"#;

pub(crate) fn test_catalog() -> Catalog {
    Catalog::parse(TEST_CATALOG).expect("test catalog parses")
}

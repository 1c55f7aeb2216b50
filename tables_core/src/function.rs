//! Functions applied to a freshly rolled stack

use crate::config::FunctionConfig;
use crate::context::LootContext;
use crate::value::ValueRange;
use catalog_core::{EnchantmentKind, ItemStack};
use rand::Rng;

/// A post-processing step declared on an entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LootFunction {
    /// Replace the stack quantity
    SetCount { count: ValueRange },
    /// Attach one random compatible enchantment at level 1
    EnchantRandomly,
    /// Attach the first compatible enchantment, scaled by the rolled levels
    EnchantWithLevels { levels: ValueRange },
    /// Attach each listed enchantment that the catalog knows
    SpecificEnchants { enchants: Vec<EnchantSpec> },
    /// Turn a potion container into a specific potion variant
    SetPotion { id: String },
    /// Unrecognized function name; applying it does nothing
    Unknown(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnchantSpec {
    pub id: String,
    pub level: ValueRange,
}

impl LootFunction {
    pub fn from_config(config: FunctionConfig) -> Self {
        match config.function.as_str() {
            "set_count" => LootFunction::SetCount {
                count: config.count,
            },
            "enchant_randomly" => LootFunction::EnchantRandomly,
            "enchant_with_levels" => LootFunction::EnchantWithLevels {
                levels: config.levels,
            },
            "specific_enchants" => LootFunction::SpecificEnchants {
                enchants: config
                    .enchants
                    .into_iter()
                    .map(|e| EnchantSpec {
                        id: e.id,
                        level: e.level,
                    })
                    .collect(),
            },
            "set_potion" => LootFunction::SetPotion { id: config.id },
            _ => {
                log::debug!("Ignoring unknown loot function '{}'", config.function);
                LootFunction::Unknown(config.function)
            }
        }
    }

    pub fn name(&self) -> &str {
        match self {
            LootFunction::SetCount { .. } => "set_count",
            LootFunction::EnchantRandomly => "enchant_randomly",
            LootFunction::EnchantWithLevels { .. } => "enchant_with_levels",
            LootFunction::SpecificEnchants { .. } => "specific_enchants",
            LootFunction::SetPotion { .. } => "set_potion",
            LootFunction::Unknown(name) => name.as_str(),
        }
    }

    /// Apply this function, returning the transformed stack
    pub fn apply<R: Rng>(&self, stack: ItemStack, ctx: &LootContext<'_>, rng: &mut R) -> ItemStack {
        match self {
            LootFunction::SetCount { count } => stack.with_count(count.roll(rng)),
            LootFunction::EnchantRandomly => enchant_randomly(stack, ctx, rng),
            LootFunction::EnchantWithLevels { levels } => {
                let levels = levels.roll(rng);
                enchant_with_levels(stack, levels, ctx, rng)
            }
            LootFunction::SpecificEnchants { enchants } => {
                let mut stack = stack;
                for spec in enchants {
                    match ctx.enchantments.resolve_enchantment(&spec.id) {
                        Some(kind) => {
                            let level = spec.level.roll(rng).max(1);
                            stack = stack.with_enchantment(kind, level);
                        }
                        None => log::debug!("Skipping unknown enchantment: {}", spec.id),
                    }
                }
                stack
            }
            LootFunction::SetPotion { id } => match ctx.potions.resolve_potion(id) {
                Some(potion) if stack.item.category.is_potion_container() => {
                    // A new stack of the same container, other attributes are not kept
                    ItemStack::new(stack.item, stack.count).with_potion(potion)
                }
                Some(_) => stack,
                None => {
                    log::debug!("Skipping unknown potion: {}", id);
                    stack
                }
            },
            LootFunction::Unknown(_) => stack,
        }
    }
}

/// Run a function list over a stack, in declaration order
pub fn apply_functions<R: Rng>(
    stack: ItemStack,
    functions: &[LootFunction],
    ctx: &LootContext<'_>,
    rng: &mut R,
) -> ItemStack {
    functions
        .iter()
        .fold(stack, |stack, function| function.apply(stack, ctx, rng))
}

fn enchant_randomly<R: Rng>(stack: ItemStack, ctx: &LootContext<'_>, rng: &mut R) -> ItemStack {
    let compatible: Vec<&EnchantmentKind> = ctx
        .enchantments
        .enchantments()
        .iter()
        .filter(|e| e.is_compatible(&stack.item))
        .collect();

    if compatible.is_empty() {
        return stack;
    }

    let kind = compatible[rng.gen_range(0..compatible.len())].clone();
    stack.with_enchantment(kind, 1)
}

/// Only the first compatible enchantment in catalog order is considered.
fn enchant_with_levels<R: Rng>(
    stack: ItemStack,
    levels: i32,
    ctx: &LootContext<'_>,
    rng: &mut R,
) -> ItemStack {
    if levels <= 0 {
        return stack;
    }

    let kind = match ctx
        .enchantments
        .enchantments()
        .iter()
        .find(|e| e.is_compatible(&stack.item))
    {
        Some(kind) => kind.clone(),
        None => return stack,
    };

    let max_level = kind.max_level();
    let level = if levels > ctx.settings.enchant_level_threshold && max_level > 1 {
        rng.gen_range(1..=max_level)
    } else {
        1
    };
    stack.with_enchantment(kind, level)
}

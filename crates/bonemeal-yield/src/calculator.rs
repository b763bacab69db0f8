//! Bone meal yield calculation.
//!
//! - [`estimate_single`] returns one corpse's bone meal contribution:
//!   `max(1, floor(mass * stage_factor * race_factor))`
//! - [`compute_yield`] runs a whole recipe batch, reclaiming meat and leather
//!   from fresh corpses and appending the summed bone meal stack last
//!
//! Both share [`estimate_single`], so a stat preview always matches what the
//! recipe actually grants for that corpse.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use tracing::{debug, warn};

use bonemeal_types::{ByproductKind, IngredientDescriptor, OutputStack, YieldResult};

use crate::config::YieldConfig;

/// Bone meal contributed by a single corpse.
///
/// Never less than 1, so even the lightest creature yields something.
pub fn estimate_single(config: &YieldConfig, ingredient: &IngredientDescriptor) -> u32 {
    let raw = config
        .effective_mass(ingredient.base_mass)
        .saturating_mul(config.stage_factor(ingredient.decay))
        .saturating_mul(config.race_factor(ingredient.race_class()));
    floor_to_u32(raw).max(1)
}

/// Compute the stacks granted for grinding `ingredients`.
///
/// Output order: reclaimed byproducts in ingredient order, then one stack of
/// [`YieldConfig::product`] holding the summed bone meal. An empty batch
/// yields a single zero-count product stack. A config with no product yields
/// an empty result and computes nothing.
pub fn compute_yield(config: &YieldConfig, ingredients: &[IngredientDescriptor]) -> YieldResult {
    let Some(product) = config.product.as_ref() else {
        warn!(
            ingredient_count = ingredients.len(),
            "grind recipe has no product def, skipping"
        );
        return YieldResult::empty();
    };

    let mut total: u32 = 0;
    let mut stacks = Vec::new();

    for ingredient in ingredients {
        total = total.saturating_add(estimate_single(config, ingredient));

        // Desiccated remains have nothing left to reclaim.
        if ingredient.decay.is_skeletal() {
            continue;
        }
        stacks.extend(reclaim_byproducts(config, ingredient));
    }

    debug!(
        ingredient_count = ingredients.len(),
        byproduct_stacks = stacks.len(),
        product = %product,
        total,
        "grind yield computed"
    );

    stacks.push(OutputStack::new(product.clone(), total));
    YieldResult::from_stacks(stacks)
}

/// Scaled meat and leather stacks for one fresh corpse.
fn reclaim_byproducts<'a>(
    config: &'a YieldConfig,
    ingredient: &'a IngredientDescriptor,
) -> impl Iterator<Item = OutputStack> + 'a {
    ingredient
        .byproducts
        .iter()
        .filter_map(move |entry| match entry.kind {
            ByproductKind::Meat => {
                let def = config.meat_def.as_ref().unwrap_or(&entry.def).clone();
                Some(OutputStack::new(def, scale_count(entry.count, config.yield_meat)))
            }
            ByproductKind::Leather => Some(OutputStack::new(
                entry.def.clone(),
                scale_count(entry.count, config.yield_leather),
            )),
            ByproductKind::Other => None,
        })
}

/// `floor(count * fraction)`.
fn scale_count(count: u32, fraction: Decimal) -> u32 {
    floor_to_u32(Decimal::from(count).saturating_mul(fraction))
}

/// Floor a [`Decimal`] into `u32`, clamping negatives to 0 and large values
/// to `u32::MAX`.
fn floor_to_u32(value: Decimal) -> u32 {
    let floored = value.floor();
    if floored < Decimal::ZERO {
        0
    } else {
        floored.to_u32().unwrap_or(u32::MAX)
    }
}

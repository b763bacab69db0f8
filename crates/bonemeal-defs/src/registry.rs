//! Recipe lookup and crafting-output replacement.
//!
//! When a craft finishes, the host hands over the recipe name, the consumed
//! ingredients, and the products it would grant by default.
//! [`RecipeRegistry::replace_products`] swaps those defaults for the bone
//! meal yield only when the recipe is the grind recipe and its extension
//! names a product. Every other case passes the defaults through untouched.

use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use bonemeal_types::{IngredientDescriptor, OutputStack, RecipeDefName, StatSubject, YieldMetric};
use bonemeal_yield::{YieldConfig, compute_yield, estimate_stat};

use crate::config::ModDefs;

/// Def name of the recipe whose output is replaced.
pub const GRIND_RECIPE: &str = "GrindCorpseToBoneMeal";

/// Read-only view over loaded recipe defs.
#[derive(Debug, Clone, Default)]
pub struct RecipeRegistry {
    defs: ModDefs,
}

impl RecipeRegistry {
    /// Wrap loaded defs.
    pub const fn new(defs: ModDefs) -> Self {
        Self { defs }
    }

    /// The underlying defs.
    pub const fn defs(&self) -> &ModDefs {
        &self.defs
    }

    /// Yield extension attached to `recipe`, if any.
    pub fn extension(&self, recipe: &RecipeDefName) -> Option<&YieldConfig> {
        self.defs.recipes.get(recipe).and_then(|r| r.grind.as_ref())
    }

    /// Yield config of the grind recipe, or the stock config when the recipe
    /// or its extension is missing.
    ///
    /// Used by stat previews, which should still show numbers when the defs
    /// are incomplete.
    pub fn grind_config(&self) -> YieldConfig {
        self.extension(&RecipeDefName::from(GRIND_RECIPE))
            .cloned()
            .unwrap_or_default()
    }

    /// Decide which stacks a finished craft grants.
    ///
    /// Returns the computed yield for the grind recipe with a configured
    /// product; otherwise returns `defaults` unchanged.
    pub fn replace_products(
        &self,
        recipe: &RecipeDefName,
        ingredients: &[IngredientDescriptor],
        defaults: Vec<OutputStack>,
    ) -> Vec<OutputStack> {
        if recipe.as_str() != GRIND_RECIPE {
            return defaults;
        }

        let Some(config) = self.extension(recipe) else {
            warn!(%recipe, "grind recipe has no yield extension, keeping default products");
            return defaults;
        };
        if config.product.is_none() {
            warn!(%recipe, "grind extension has no product def, keeping default products");
            return defaults;
        }

        info!(%recipe, ingredient_count = ingredients.len(), "grind started");
        let result = compute_yield(config, ingredients);
        debug!(%recipe, stacks = result.stacks().len(), "default products replaced");
        result.into_stacks()
    }

    /// Preview one metric for `subject` against the grind recipe's config.
    pub fn preview(&self, subject: &StatSubject, metric: YieldMetric) -> Decimal {
        estimate_stat(&self.grind_config(), subject, metric)
    }
}

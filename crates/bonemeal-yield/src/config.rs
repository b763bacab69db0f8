//! Tunable multipliers for the grind recipe.
//!
//! A [`YieldConfig`] is attached to the recipe def as a mod extension and is
//! read-only for the lifetime of a calculation. Every field has a default, so
//! an extension that only overrides one multiplier is valid.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use bonemeal_types::{DecayStage, RaceClass, ThingDefName};

use crate::error::YieldError;

/// Item def granted as the recipe's main product unless overridden.
pub const DEFAULT_PRODUCT_DEF: &str = "BoneMeal";

/// Configuration for the bone meal yield of one recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YieldConfig {
    /// Item def of the bone meal stack. `None` marks the recipe as
    /// misconfigured; the calculator then produces nothing.
    #[serde(default = "default_product")]
    pub product: Option<ThingDefName>,

    /// Item def granted for reclaimed meat. `None` keeps each corpse's own
    /// meat def.
    #[serde(default)]
    pub meat_def: Option<ThingDefName>,

    /// Multiply by the corpse's base mass. When off, every corpse counts as
    /// mass 1.
    #[serde(default = "default_true")]
    pub scale_by_body_size: bool,

    /// Apply [`yield_skeleton`](Self::yield_skeleton) to desiccated remains.
    /// When off, desiccated remains use the fresh stage factor.
    #[serde(default = "default_true")]
    pub treat_desiccated_as_skeleton: bool,

    /// Stage factor for fresh corpses (default: 0.65).
    #[serde(default = "default_yield_body")]
    pub yield_body: Decimal,

    /// Stage factor for desiccated remains (default: 0.8).
    #[serde(default = "default_yield_skeleton")]
    pub yield_skeleton: Decimal,

    /// Race factor for humanlike corpses (default: 1.0).
    #[serde(default = "default_yield_humanlike")]
    pub yield_humanlike: Decimal,

    /// Race factor for animal corpses (default: 0.8).
    #[serde(default = "default_yield_animal")]
    pub yield_animal: Decimal,

    /// Race factor for every other corpse (default: 0.7).
    #[serde(default = "default_yield_any")]
    pub yield_any: Decimal,

    /// Fraction of butcher leather reclaimed (default: 0.5).
    #[serde(default = "default_yield_leather")]
    pub yield_leather: Decimal,

    /// Fraction of butcher meat reclaimed (default: 0.25).
    #[serde(default = "default_yield_meat")]
    pub yield_meat: Decimal,
}

impl Default for YieldConfig {
    fn default() -> Self {
        Self {
            product: default_product(),
            meat_def: None,
            scale_by_body_size: true,
            treat_desiccated_as_skeleton: true,
            yield_body: default_yield_body(),
            yield_skeleton: default_yield_skeleton(),
            yield_humanlike: default_yield_humanlike(),
            yield_animal: default_yield_animal(),
            yield_any: default_yield_any(),
            yield_leather: default_yield_leather(),
            yield_meat: default_yield_meat(),
        }
    }
}

impl YieldConfig {
    /// Stage factor for a corpse in the given decay stage.
    pub const fn stage_factor(&self, decay: DecayStage) -> Decimal {
        if decay.is_skeletal() && self.treat_desiccated_as_skeleton {
            self.yield_skeleton
        } else {
            self.yield_body
        }
    }

    /// Race factor for a corpse of the given class.
    pub const fn race_factor(&self, race: RaceClass) -> Decimal {
        match race {
            RaceClass::Humanlike => self.yield_humanlike,
            RaceClass::Animal => self.yield_animal,
            RaceClass::Other => self.yield_any,
        }
    }

    /// Mass the formula multiplies by, honoring
    /// [`scale_by_body_size`](Self::scale_by_body_size).
    pub const fn effective_mass(&self, base_mass: Decimal) -> Decimal {
        if self.scale_by_body_size {
            base_mass
        } else {
            Decimal::ONE
        }
    }

    /// Reject negative multipliers.
    ///
    /// A missing product is not an error here: the recipe is simply skipped
    /// at craft time.
    pub fn validate(&self) -> Result<(), YieldError> {
        let factors = [
            ("yield_body", self.yield_body),
            ("yield_skeleton", self.yield_skeleton),
            ("yield_humanlike", self.yield_humanlike),
            ("yield_animal", self.yield_animal),
            ("yield_any", self.yield_any),
            ("yield_leather", self.yield_leather),
            ("yield_meat", self.yield_meat),
        ];
        for (field, value) in factors {
            if value < Decimal::ZERO {
                return Err(YieldError::NegativeFactor { field, value });
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

fn default_product() -> Option<ThingDefName> {
    Some(ThingDefName::from(DEFAULT_PRODUCT_DEF))
}

const fn default_true() -> bool {
    true
}

fn default_yield_body() -> Decimal {
    Decimal::new(65, 2)
}

fn default_yield_skeleton() -> Decimal {
    Decimal::new(8, 1)
}

const fn default_yield_humanlike() -> Decimal {
    Decimal::ONE
}

fn default_yield_animal() -> Decimal {
    Decimal::new(8, 1)
}

fn default_yield_any() -> Decimal {
    Decimal::new(7, 1)
}

fn default_yield_leather() -> Decimal {
    Decimal::new(5, 1)
}

fn default_yield_meat() -> Decimal {
    Decimal::new(25, 2)
}

//! Core data structs: what goes into the grinder and what comes out.
//!
//! All fractional values are [`Decimal`] so that a mass of `70` times a
//! factor of `0.65` is exactly `45.5`, and flooring never depends on binary
//! float representation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::enums::{ByproductKind, DecayStage, RaceClass};
use crate::ids::ThingDefName;

// ---------------------------------------------------------------------------
// Ingredients
// ---------------------------------------------------------------------------

/// One butcher product the corpse would have yielded at a butcher table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Byproduct {
    /// Item def of the product.
    pub def: ThingDefName,
    /// Whether the product is meat, leather, or something else.
    pub kind: ByproductKind,
    /// Stack count the butcher table would have produced.
    pub count: u32,
}

/// A single corpse consumed by the grind recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientDescriptor {
    /// Base mass of the corpse def.
    pub base_mass: Decimal,
    /// Rot stage at grind time.
    #[serde(default)]
    pub decay: DecayStage,
    /// Species class, if the host could resolve one.
    #[serde(default)]
    pub race: Option<RaceClass>,
    /// Butcher products of the corpse. Ignored for skeletal remains.
    #[serde(default)]
    pub byproducts: Vec<Byproduct>,
}

impl IngredientDescriptor {
    /// Create a descriptor with no butcher products.
    pub const fn new(base_mass: Decimal, decay: DecayStage, race: Option<RaceClass>) -> Self {
        Self {
            base_mass,
            decay,
            race,
            byproducts: Vec::new(),
        }
    }

    /// Attach butcher products, consuming and returning the descriptor.
    #[must_use]
    pub fn with_byproducts(mut self, byproducts: Vec<Byproduct>) -> Self {
        self.byproducts = byproducts;
        self
    }

    /// Effective race class; undetermined races count as [`RaceClass::Other`].
    pub fn race_class(&self) -> RaceClass {
        self.race.unwrap_or_default()
    }
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// A stack of items to grant to the crafter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputStack {
    /// Item def of the stack.
    pub def: ThingDefName,
    /// Number of items in the stack.
    pub count: u32,
}

impl OutputStack {
    /// Create a stack of `count` items of `def`.
    pub const fn new(def: ThingDefName, count: u32) -> Self {
        Self { def, count }
    }
}

/// Ordered output of one grind: byproduct stacks first, the product stack last.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct YieldResult {
    stacks: Vec<OutputStack>,
}

impl YieldResult {
    /// A result that grants nothing.
    pub const fn empty() -> Self {
        Self { stacks: Vec::new() }
    }

    /// Wrap an already ordered list of stacks.
    pub const fn from_stacks(stacks: Vec<OutputStack>) -> Self {
        Self { stacks }
    }

    /// Whether no stacks are granted at all.
    pub fn is_empty(&self) -> bool {
        self.stacks.is_empty()
    }

    /// The stacks, in grant order.
    pub fn stacks(&self) -> &[OutputStack] {
        &self.stacks
    }

    /// Consume the result, returning its stacks.
    pub fn into_stacks(self) -> Vec<OutputStack> {
        self.stacks
    }

    /// Total count across every stack of `def` (saturating).
    pub fn count_of(&self, def: &ThingDefName) -> u32 {
        self.stacks
            .iter()
            .filter(|s| &s.def == def)
            .fold(0_u32, |acc, s| acc.saturating_add(s.count))
    }
}

// ---------------------------------------------------------------------------
// Preview subjects
// ---------------------------------------------------------------------------

/// What the stat panel knows about a creature, living or dead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatureProfile {
    /// Base mass of the creature's race def.
    pub base_mass: Decimal,
    /// Species class, if resolvable.
    #[serde(default)]
    pub race: Option<RaceClass>,
    /// Value of the host's leather amount stat, when that stat exists.
    #[serde(default)]
    pub leather_amount: Option<Decimal>,
    /// Value of the host's meat amount stat, when that stat exists.
    #[serde(default)]
    pub meat_amount: Option<Decimal>,
}

/// The thing a stat row is being shown for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatSubject {
    /// A living pawn.
    Creature(CreatureProfile),
    /// A corpse; the profile is its inner pawn's.
    Remains(CreatureProfile),
    /// Anything the grinder cannot process.
    Other,
}

impl StatSubject {
    /// The creature behind the subject, if there is one.
    pub const fn profile(&self) -> Option<&CreatureProfile> {
        match self {
            Self::Creature(p) | Self::Remains(p) => Some(p),
            Self::Other => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn descriptor_defaults_from_json() {
        let json = r#"{ "base_mass": 70 }"#;
        let parsed: Result<IngredientDescriptor, _> = serde_json::from_str(json);
        assert!(parsed.is_ok());
        let d = parsed.ok().unwrap_or_else(|| IngredientDescriptor::new(dec!(0), DecayStage::Skeletal, None));
        assert_eq!(d.base_mass, dec!(70));
        assert_eq!(d.decay, DecayStage::Fresh);
        assert_eq!(d.race, None);
        assert!(d.byproducts.is_empty());
    }

    #[test]
    fn undetermined_race_is_other() {
        let d = IngredientDescriptor::new(dec!(10), DecayStage::Fresh, None);
        assert_eq!(d.race_class(), RaceClass::Other);
        let d = IngredientDescriptor::new(dec!(10), DecayStage::Fresh, Some(RaceClass::Animal));
        assert_eq!(d.race_class(), RaceClass::Animal);
    }

    #[test]
    fn count_of_sums_matching_stacks() {
        let meat = ThingDefName::from("Meat_Human");
        let result = YieldResult::from_stacks(vec![
            OutputStack::new(meat.clone(), 10),
            OutputStack::new(ThingDefName::from("Leather_Human"), 5),
            OutputStack::new(meat.clone(), 3),
        ]);
        assert_eq!(result.count_of(&meat), 13);
        assert_eq!(result.count_of(&ThingDefName::from("BoneMeal")), 0);
        assert!(!result.is_empty());
        assert!(YieldResult::empty().is_empty());
    }

    #[test]
    fn result_serializes_as_list() {
        let result = YieldResult::from_stacks(vec![OutputStack::new(
            ThingDefName::from("BoneMeal"),
            45,
        )]);
        let json = serde_json::to_string(&result).unwrap_or_default();
        assert_eq!(json, r#"[{"def":"BoneMeal","count":45}]"#);
    }

    #[test]
    fn other_subject_has_no_profile() {
        assert!(StatSubject::Other.profile().is_none());
        let p = CreatureProfile {
            base_mass: dec!(60),
            race: Some(RaceClass::Humanlike),
            leather_amount: None,
            meat_amount: None,
        };
        assert_eq!(StatSubject::Remains(p.clone()).profile(), Some(&p));
    }
}

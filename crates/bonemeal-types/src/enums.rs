//! Enumeration types for the bone meal grinder.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Race classes
// ---------------------------------------------------------------------------

/// Species class of the creature a corpse belonged to.
///
/// Selects which race multiplier applies. Creatures whose class cannot be
/// determined are treated as [`RaceClass::Other`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RaceClass {
    /// Colonists, raiders, and other human-like pawns.
    Humanlike,
    /// Wildlife and livestock.
    Animal,
    /// Mechanoids, insects, and anything else.
    #[default]
    Other,
}

// ---------------------------------------------------------------------------
// Decay stages
// ---------------------------------------------------------------------------

/// Rot stage of a corpse at the moment it is ground.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DecayStage {
    /// Flesh still present. Meat and leather can be reclaimed.
    #[default]
    Fresh,
    /// Desiccated remains. Bones only.
    Skeletal,
}

impl DecayStage {
    /// Whether the remains are down to bone.
    pub const fn is_skeletal(self) -> bool {
        matches!(self, Self::Skeletal)
    }
}

// ---------------------------------------------------------------------------
// Byproduct kinds
// ---------------------------------------------------------------------------

/// Category of a butcher product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ByproductKind {
    /// Any meat def.
    Meat,
    /// Any leather def.
    Leather,
    /// Everything else the butcher table would yield; never reclaimed.
    Other,
}

// ---------------------------------------------------------------------------
// Preview metrics
// ---------------------------------------------------------------------------

/// Which yield a stat row previews.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum YieldMetric {
    /// Bone meal from the subject ground fresh.
    Total,
    /// Bone meal from the subject's desiccated remains.
    Desiccated,
    /// Leather reclaimed when ground fresh.
    Leather,
    /// Meat reclaimed when ground fresh.
    Meat,
}

impl YieldMetric {
    /// Every metric, in stat panel order.
    pub const ALL: [Self; 4] = [Self::Total, Self::Desiccated, Self::Leather, Self::Meat];

    /// Label shown next to the value in the stat panel.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Total => "bone meal yield",
            Self::Desiccated => "bone meal yield (desiccated)",
            Self::Leather => "reclaimed leather",
            Self::Meat => "reclaimed meat",
        }
    }

    /// Parse a metric from its lowercase name (`total`, `desiccated`,
    /// `leather`, `meat`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "total" => Some(Self::Total),
            "desiccated" => Some(Self::Desiccated),
            "leather" => Some(Self::Leather),
            "meat" => Some(Self::Meat),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_race_defaults_to_other() {
        assert_eq!(RaceClass::default(), RaceClass::Other);
    }

    #[test]
    fn skeletal_check() {
        assert!(DecayStage::Skeletal.is_skeletal());
        assert!(!DecayStage::Fresh.is_skeletal());
    }

    #[test]
    fn metric_names_parse_case_insensitively() {
        for metric in YieldMetric::ALL {
            let name = format!("{metric:?}").to_uppercase();
            assert_eq!(YieldMetric::from_name(&name), Some(metric));
        }
        assert_eq!(YieldMetric::from_name("bones"), None);
    }
}

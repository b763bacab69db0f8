//! Stat-panel previews of what grinding a creature would yield.
//!
//! One estimator covers every [`YieldMetric`]. Subjects that are neither a
//! creature nor remains estimate to zero.

use rust_decimal::Decimal;
use tracing::debug;

use bonemeal_types::{CreatureProfile, DecayStage, IngredientDescriptor, StatSubject, YieldMetric};

use crate::calculator::estimate_single;
use crate::config::YieldConfig;

/// Whether the grinder stat rows apply to `subject` at all.
pub const fn should_show_for(subject: &StatSubject) -> bool {
    subject.profile().is_some()
}

/// Estimate one metric for `subject`.
///
/// - [`YieldMetric::Total`] and [`YieldMetric::Desiccated`] run the same
///   per-corpse formula the recipe uses, as fresh or skeletal remains
///   regardless of the subject's current state.
/// - [`YieldMetric::Leather`] and [`YieldMetric::Meat`] scale the host's
///   amount stats by the reclaim fraction, unfloored. A missing amount stat
///   estimates to zero.
pub fn estimate_stat(config: &YieldConfig, subject: &StatSubject, metric: YieldMetric) -> Decimal {
    let Some(profile) = subject.profile() else {
        debug!(?metric, "stat subject is not a creature or remains");
        return Decimal::ZERO;
    };

    match metric {
        YieldMetric::Total => bone_meal(config, profile, DecayStage::Fresh),
        YieldMetric::Desiccated => bone_meal(config, profile, DecayStage::Skeletal),
        YieldMetric::Leather => scaled_amount(profile.leather_amount, config.yield_leather),
        YieldMetric::Meat => scaled_amount(profile.meat_amount, config.yield_meat),
    }
}

/// Every metric for `subject`, in stat panel order. Empty when the rows
/// should not be shown.
pub fn stat_rows(config: &YieldConfig, subject: &StatSubject) -> Vec<(YieldMetric, Decimal)> {
    if !should_show_for(subject) {
        return Vec::new();
    }
    YieldMetric::ALL
        .iter()
        .map(|&metric| (metric, estimate_stat(config, subject, metric)))
        .collect()
}

fn bone_meal(config: &YieldConfig, profile: &CreatureProfile, decay: DecayStage) -> Decimal {
    let descriptor = IngredientDescriptor::new(profile.base_mass, decay, profile.race);
    Decimal::from(estimate_single(config, &descriptor))
}

fn scaled_amount(amount: Option<Decimal>, fraction: Decimal) -> Decimal {
    amount.map_or(Decimal::ZERO, |a| a.saturating_mul(fraction))
}

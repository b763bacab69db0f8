//! Product counting for "do until you have X" bills.
//!
//! The host asks how many units of the bill's product already exist so it
//! can pause the bill. For the grinder that count is the number of corpses
//! in stock that the bill's ingredient filter would accept.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use tracing::debug;

use bonemeal_types::ThingDefName;

/// Product label shown on the bill.
pub const PRODUCTS_DESCRIPTION: &str = "bone meal";

/// The grinder always supports counting.
pub const fn can_count_products() -> bool {
    true
}

/// What the host knows about a bill when counting its products.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillSnapshot {
    /// Corpse defs the bill's ingredient filter allows.
    #[serde(default)]
    pub allowed: BTreeSet<ThingDefName>,
    /// Every corpse def in the host's corpse category.
    #[serde(default)]
    pub corpse_defs: Vec<ThingDefName>,
    /// Map-wide resource counts by def.
    #[serde(default)]
    pub stock: BTreeMap<ThingDefName, u32>,
}

/// Count corpses in stock whose def is both a corpse and allowed by the bill.
///
/// Saturates at `u32::MAX`.
pub fn count_products(bill: &BillSnapshot) -> u32 {
    let count = bill
        .corpse_defs
        .iter()
        .filter(|def| bill.allowed.contains(*def))
        .map(|def| bill.stock.get(def).copied().unwrap_or(0))
        .fold(0_u32, u32::saturating_add);
    debug!(
        allowed = bill.allowed.len(),
        corpse_defs = bill.corpse_defs.len(),
        count,
        "counted grind bill products"
    );
    count
}

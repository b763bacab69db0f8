//! Yield policy for the "grind corpse to bone meal" recipe.
//!
//! Everything here is a pure function of a [`YieldConfig`] and plain input
//! data. Nothing is mutated, nothing blocks, and every misconfiguration
//! degrades to an empty or zero result instead of an error, so the host's
//! crafting and UI flows never fail because of this crate.
//!
//! # Modules
//!
//! - [`calculator`] -- Per-ingredient bone meal contribution and the full
//!   recipe output with reclaimed meat and leather.
//! - [`config`] -- [`YieldConfig`], the recipe's tunable multipliers.
//! - [`counter`] -- Counts how many corpses in stock a bill would grind.
//! - [`error`] -- Error types for config validation.
//! - [`preview`] -- Stat-panel estimates, one function per [`YieldMetric`].
//!
//! [`YieldMetric`]: bonemeal_types::YieldMetric

pub mod calculator;
pub mod config;
pub mod counter;
pub mod error;
pub mod preview;

// Re-export primary types at crate root.
pub use calculator::{compute_yield, estimate_single};
pub use config::YieldConfig;
pub use counter::{BillSnapshot, PRODUCTS_DESCRIPTION, can_count_products, count_products};
pub use error::YieldError;
pub use preview::{estimate_stat, should_show_for, stat_rows};

//! Shared type definitions for the bone meal grinder.
//!
//! This crate is the single source of truth for the data passed between the
//! host game and the yield calculator. It carries no behavior beyond small
//! accessors; the formulas live in `bonemeal-yield`.
//!
//! # Modules
//!
//! - [`ids`] -- Def-name wrappers for items and recipes
//! - [`enums`] -- Race classes, decay stages, byproduct kinds, preview metrics
//! - [`structs`] -- Ingredient descriptors, output stacks, preview subjects

pub mod enums;
pub mod ids;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::{ByproductKind, DecayStage, RaceClass, YieldMetric};
pub use ids::{RecipeDefName, ThingDefName};
pub use structs::{
    Byproduct, CreatureProfile, IngredientDescriptor, OutputStack, StatSubject, YieldResult,
};

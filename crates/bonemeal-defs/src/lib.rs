//! Recipe defs and crafting-output replacement for the bone meal grinder.
//!
//! The host game describes recipes in data files. This crate reads the
//! subset the grinder cares about, validates the attached yield extensions,
//! and decides when a finished craft's default products are swapped for the
//! computed bone meal yield.
//!
//! # Modules
//!
//! - [`config`] -- [`ModDefs`] loaded from `bonemeal-defs.yaml` into
//!   strongly-typed structs.
//! - [`error`] -- Error types for def loading and validation.
//! - [`registry`] -- [`RecipeRegistry`]: extension lookup, product
//!   replacement, and stat previews against the grind recipe.
//!
//! [`ModDefs`]: config::ModDefs
//! [`RecipeRegistry`]: registry::RecipeRegistry

pub mod config;
pub mod error;
pub mod registry;

pub use config::{DefsOrigin, LoggingConfig, ModDefs, RecipeDef};
pub use error::DefsError;
pub use registry::{GRIND_RECIPE, RecipeRegistry};

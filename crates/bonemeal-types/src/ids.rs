//! Type-safe wrappers around def names.
//!
//! The host game identifies item kinds and recipes by their `defName`
//! string. Wrapping them keeps an item def from being passed where a recipe
//! def is expected.

use serde::{Deserialize, Serialize};

/// Generates a newtype wrapper around a def-name [`String`] with standard derives.
macro_rules! define_def_name {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            /// Create a def name from anything string-like.
            pub fn new(name: impl Into<String>) -> Self {
                Self(name.into())
            }

            /// Borrow the raw def name.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(name: &str) -> Self {
                Self(String::from(name))
            }
        }

        impl From<String> for $name {
            fn from(name: String) -> Self {
                Self(name)
            }
        }
    };
}

define_def_name! {
    /// Def name of an item kind (`BoneMeal`, `Meat_Human`, `Leather_Plain`, ...).
    ThingDefName
}

define_def_name! {
    /// Def name of a crafting recipe.
    RecipeDefName
}

//! Command-line parsing and input loading.
//!
//! ```text
//! bonemeal grind   <ingredients.json>
//! bonemeal craft   <recipe> <ingredients.json> [products.json]
//! bonemeal preview <subject.json> [total|desiccated|leather|meat]
//! bonemeal count   <bill.json>
//! ```
//!
//! `craft` reads the host's default products from `products.json` when
//! given; without it the host grants nothing by default.
//!
//! The defs path comes from `BONEMEAL_DEFS` (default `bonemeal-defs.yaml`).

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use bonemeal_types::{RecipeDefName, YieldMetric};

use crate::error::CliError;

/// Environment variable naming the defs file.
pub const DEFS_ENV: &str = "BONEMEAL_DEFS";

/// Defs file used when `BONEMEAL_DEFS` is unset.
pub const DEFAULT_DEFS_PATH: &str = "bonemeal-defs.yaml";

const USAGE: &str = "usage: bonemeal <grind <ingredients.json> | craft <recipe> <ingredients.json> [products.json] | \
                     preview <subject.json> [metric] | count <bill.json>>";

/// A parsed invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Compute the grind recipe's yield for a batch.
    Grind {
        /// JSON list of ingredient descriptors.
        ingredients: PathBuf,
    },
    /// Run the output-replacement path for an arbitrary recipe.
    Craft {
        /// Recipe def name.
        recipe: RecipeDefName,
        /// JSON list of ingredient descriptors.
        ingredients: PathBuf,
        /// JSON list of the host's default output stacks.
        products: Option<PathBuf>,
    },
    /// Preview stat rows for a creature or remains.
    Preview {
        /// JSON stat subject.
        subject: PathBuf,
        /// Single metric to print; every metric when `None`.
        metric: Option<YieldMetric>,
    },
    /// Count the products of a bill.
    Count {
        /// JSON bill snapshot.
        bill: PathBuf,
    },
}

impl Command {
    /// Parse the arguments following the program name.
    pub fn parse<I>(args: I) -> Result<Self, CliError>
    where
        I: IntoIterator<Item = String>,
    {
        let args: Vec<String> = args.into_iter().collect();
        let words: Vec<&str> = args.iter().map(String::as_str).collect();

        match words.as_slice() {
            ["grind", ingredients] => Ok(Self::Grind {
                ingredients: PathBuf::from(*ingredients),
            }),
            ["craft", recipe, ingredients] => Ok(Self::Craft {
                recipe: RecipeDefName::from(*recipe),
                ingredients: PathBuf::from(*ingredients),
                products: None,
            }),
            ["craft", recipe, ingredients, products] => Ok(Self::Craft {
                recipe: RecipeDefName::from(*recipe),
                ingredients: PathBuf::from(*ingredients),
                products: Some(PathBuf::from(*products)),
            }),
            ["preview", subject] => Ok(Self::Preview {
                subject: PathBuf::from(*subject),
                metric: None,
            }),
            ["preview", subject, metric] => {
                let metric = YieldMetric::from_name(metric)
                    .ok_or_else(|| CliError::Usage(format!("unknown metric: {metric}")))?;
                Ok(Self::Preview {
                    subject: PathBuf::from(*subject),
                    metric: Some(metric),
                })
            }
            ["count", bill] => Ok(Self::Count {
                bill: PathBuf::from(*bill),
            }),
            _ => Err(CliError::Usage(USAGE.to_owned())),
        }
    }
}

/// Defs path from `BONEMEAL_DEFS`, or the default.
pub fn defs_path() -> PathBuf {
    std::env::var(DEFS_ENV).map_or_else(|_| PathBuf::from(DEFAULT_DEFS_PATH), PathBuf::from)
}

/// Read and deserialize a JSON input document.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, CliError> {
    let contents = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| CliError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use bonemeal_types::{IngredientDescriptor, OutputStack, StatSubject};
    use bonemeal_yield::BillSnapshot;

    use super::*;

    fn args(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| (*w).to_owned()).collect()
    }

    #[test]
    fn parses_grind() {
        let cmd = Command::parse(args(&["grind", "batch.json"]));
        assert_eq!(
            cmd.ok(),
            Some(Command::Grind {
                ingredients: PathBuf::from("batch.json"),
            })
        );
    }

    #[test]
    fn parses_craft() {
        let cmd = Command::parse(args(&["craft", "ButcherCorpseFlesh", "batch.json"]));
        assert_eq!(
            cmd.ok(),
            Some(Command::Craft {
                recipe: RecipeDefName::from("ButcherCorpseFlesh"),
                ingredients: PathBuf::from("batch.json"),
                products: None,
            })
        );

        let with_products = Command::parse(args(&[
            "craft",
            "ButcherCorpseFlesh",
            "batch.json",
            "products.json",
        ]));
        assert_eq!(
            with_products.ok(),
            Some(Command::Craft {
                recipe: RecipeDefName::from("ButcherCorpseFlesh"),
                ingredients: PathBuf::from("batch.json"),
                products: Some(PathBuf::from("products.json")),
            })
        );
    }

    #[test]
    fn parses_preview_with_and_without_metric() {
        let all = Command::parse(args(&["preview", "pawn.json"]));
        assert_eq!(
            all.ok(),
            Some(Command::Preview {
                subject: PathBuf::from("pawn.json"),
                metric: None,
            })
        );

        let one = Command::parse(args(&["preview", "pawn.json", "Leather"]));
        assert_eq!(
            one.ok(),
            Some(Command::Preview {
                subject: PathBuf::from("pawn.json"),
                metric: Some(YieldMetric::Leather),
            })
        );
    }

    #[test]
    fn rejects_unknown_metric() {
        let cmd = Command::parse(args(&["preview", "pawn.json", "marrow"]));
        assert!(matches!(cmd, Err(CliError::Usage(msg)) if msg.contains("marrow")));
    }

    #[test]
    fn rejects_bad_arity() {
        assert!(matches!(Command::parse(args(&[])), Err(CliError::Usage(_))));
        assert!(matches!(Command::parse(args(&["grind"])), Err(CliError::Usage(_))));
        assert!(matches!(
            Command::parse(args(&["count", "a.json", "b.json"])),
            Err(CliError::Usage(_))
        ));
    }

    #[test]
    fn missing_input_is_read_error() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("no-such-input.json");
        let res: Result<Vec<u32>, CliError> = read_json(&path);
        assert!(matches!(res, Err(CliError::Read { .. })));
    }

    #[test]
    fn bundled_fixtures_parse() {
        let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..").join("fixtures");
        if !root.exists() {
            return;
        }

        let batch: Result<Vec<IngredientDescriptor>, CliError> = read_json(&root.join("ingredients.json"));
        assert_eq!(batch.ok().map(|b| b.len()), Some(3));

        let subject: Result<StatSubject, CliError> = read_json(&root.join("subject.json"));
        assert!(subject.is_ok_and(|s| s.profile().is_some()));

        let bill: Result<BillSnapshot, CliError> = read_json(&root.join("bill.json"));
        assert_eq!(bill.ok().map(|b| bonemeal_yield::count_products(&b)), Some(5));

        let products: Result<Vec<OutputStack>, CliError> = read_json(&root.join("products.json"));
        assert_eq!(products.ok().map(|p| p.len()), Some(2));
    }
}

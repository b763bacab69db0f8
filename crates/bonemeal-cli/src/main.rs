//! Command-line entry point for the bone meal grinder.
//!
//! Loads recipe defs, then runs one command against JSON input and prints
//! the result to stdout. Useful for balancing the yield multipliers without
//! launching the game.
//!
//! # Startup Sequence
//!
//! 1. Load defs from `BONEMEAL_DEFS` (stock defs when the file is absent)
//! 2. Initialize structured logging at the defs' level (`RUST_LOG` wins)
//! 3. Report where the defs came from
//! 4. Parse the command line and run the command
//!
//! A defs file that fails to load is reported on stderr only, since logging
//! is not up yet.

mod command;
mod error;

use std::io::Write;
use std::process::ExitCode;

use bonemeal_defs::{DefsOrigin, GRIND_RECIPE, ModDefs, RecipeRegistry};
use bonemeal_types::{IngredientDescriptor, OutputStack, StatSubject};
use bonemeal_yield::{BillSnapshot, PRODUCTS_DESCRIPTION, compute_yield, count_products, stat_rows};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use crate::command::{Command, defs_path, read_json};
use crate::error::CliError;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "bonemeal failed");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), CliError> {
    let path = defs_path();
    let (defs, origin) = ModDefs::from_file_or_default(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&defs.logging.level)),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    match origin {
        DefsOrigin::File => info!(
            defs_path = %path.display(),
            recipe_count = defs.recipes.len(),
            "defs loaded"
        ),
        DefsOrigin::Stock => warn!(
            defs_path = %path.display(),
            "defs file not found, using stock defs"
        ),
    }

    let command = Command::parse(std::env::args().skip(1))?;
    let registry = RecipeRegistry::new(defs);
    execute(&registry, &command, &mut std::io::stdout().lock())
}

fn execute(
    registry: &RecipeRegistry,
    command: &Command,
    out: &mut impl Write,
) -> Result<(), CliError> {
    match command {
        Command::Grind { ingredients } => {
            let batch: Vec<IngredientDescriptor> = read_json(ingredients)?;
            let result = compute_yield(&registry.grind_config(), &batch);
            writeln!(out, "{}", serde_json::to_string_pretty(&result)?)?;
        }
        Command::Craft {
            recipe,
            ingredients,
            products,
        } => {
            let batch: Vec<IngredientDescriptor> = read_json(ingredients)?;
            let defaults: Vec<OutputStack> = match products {
                Some(products) => read_json(products)?,
                None => Vec::new(),
            };
            if recipe.as_str() != GRIND_RECIPE {
                info!(%recipe, "not the grind recipe, host products are kept");
            }
            let stacks = registry.replace_products(recipe, &batch, defaults);
            writeln!(out, "{}", serde_json::to_string_pretty(&stacks)?)?;
        }
        Command::Preview { subject, metric } => {
            let subject: StatSubject = read_json(subject)?;
            match metric {
                Some(metric) => writeln!(out, "{}", registry.preview(&subject, *metric))?,
                None => {
                    for (metric, value) in stat_rows(&registry.grind_config(), &subject) {
                        writeln!(out, "{}: {value}", metric.label())?;
                    }
                }
            }
        }
        Command::Count { bill } => {
            let bill: BillSnapshot = read_json(bill)?;
            writeln!(out, "{} {PRODUCTS_DESCRIPTION}", count_products(&bill))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use bonemeal_types::{RecipeDefName, ThingDefName, YieldMetric};

    use super::*;

    fn fixture(name: &str) -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join("fixtures")
            .join(name)
    }

    fn fixtures_present() -> bool {
        fixture("ingredients.json").exists()
    }

    fn run_command(registry: &RecipeRegistry, command: &Command) -> String {
        let mut out = Vec::new();
        let res = execute(registry, command, &mut out);
        assert!(res.is_ok(), "{res:?}");
        String::from_utf8(out).unwrap_or_default()
    }

    fn stacks(output: &str) -> Vec<OutputStack> {
        serde_json::from_str(output).unwrap_or_default()
    }

    fn host_products() -> Vec<OutputStack> {
        vec![
            OutputStack::new(ThingDefName::from("Meat_Human"), 40),
            OutputStack::new(ThingDefName::from("Leather_Human"), 10),
        ]
    }

    #[test]
    fn grind_prints_byproducts_then_bone_meal() {
        if !fixtures_present() {
            return;
        }
        let command = Command::Grind {
            ingredients: fixture("ingredients.json"),
        };

        let granted = stacks(&run_command(&RecipeRegistry::default(), &command));

        assert_eq!(
            granted.first(),
            Some(&OutputStack::new(ThingDefName::from("Meat_Human"), 10))
        );
        // 45 + 44 + 1
        assert_eq!(
            granted.last(),
            Some(&OutputStack::new(ThingDefName::from("BoneMeal"), 90))
        );
    }

    #[test]
    fn craft_other_recipe_keeps_host_products() {
        if !fixtures_present() {
            return;
        }
        let command = Command::Craft {
            recipe: RecipeDefName::from("ButcherCorpseFlesh"),
            ingredients: fixture("ingredients.json"),
            products: Some(fixture("products.json")),
        };

        let granted = stacks(&run_command(&RecipeRegistry::default(), &command));

        assert_eq!(granted, host_products());
    }

    #[test]
    fn craft_grind_recipe_replaces_host_products() {
        if !fixtures_present() {
            return;
        }
        let defs = ModDefs::parse("recipes:\n  GrindCorpseToBoneMeal:\n    grind: {}\n")
            .ok()
            .unwrap_or_default();
        let registry = RecipeRegistry::new(defs);
        let command = Command::Craft {
            recipe: RecipeDefName::from(GRIND_RECIPE),
            ingredients: fixture("ingredients.json"),
            products: Some(fixture("products.json")),
        };

        let granted = stacks(&run_command(&registry, &command));

        assert_eq!(
            granted.last(),
            Some(&OutputStack::new(ThingDefName::from("BoneMeal"), 90))
        );
        assert!(!granted.contains(&OutputStack::new(ThingDefName::from("Meat_Human"), 40)));
    }

    #[test]
    fn craft_without_extension_keeps_host_products() {
        if !fixtures_present() {
            return;
        }
        let command = Command::Craft {
            recipe: RecipeDefName::from(GRIND_RECIPE),
            ingredients: fixture("ingredients.json"),
            products: Some(fixture("products.json")),
        };

        let granted = stacks(&run_command(&RecipeRegistry::default(), &command));

        assert_eq!(granted, host_products());
    }

    #[test]
    fn preview_prints_one_metric_or_all_rows() {
        if !fixtures_present() {
            return;
        }
        let registry = RecipeRegistry::default();

        let one = Command::Preview {
            subject: fixture("subject.json"),
            metric: Some(YieldMetric::Total),
        };
        assert_eq!(run_command(&registry, &one), "45\n");

        let all = Command::Preview {
            subject: fixture("subject.json"),
            metric: None,
        };
        let rows = run_command(&registry, &all);
        assert_eq!(rows.lines().count(), YieldMetric::ALL.len());
        assert!(rows.contains("bone meal yield: 45"));
        assert!(rows.contains("reclaimed leather: 17.5"));
    }

    #[test]
    fn count_prints_product_description() {
        if !fixtures_present() {
            return;
        }
        let command = Command::Count {
            bill: fixture("bill.json"),
        };

        assert_eq!(run_command(&RecipeRegistry::default(), &command), "5 bone meal\n");
    }

    #[test]
    fn missing_input_is_an_error() {
        let command = Command::Grind {
            ingredients: fixture("no-such-batch.json"),
        };
        let mut out = Vec::new();

        let res = execute(&RecipeRegistry::default(), &command, &mut out);

        assert!(matches!(res, Err(CliError::Read { .. })));
        assert!(out.is_empty());
    }
}

//! Step command - run a recipe one step at a time.
//!
//! Each call replays the recipe from the original input up to the next step
//! and prints that step's output under the recipe, with the step marked.

use std::path::Path;

use crate::cli::input::InputArgs;
use crate::cli::output;
use crate::core::config::Config;
use crate::core::executor::{self, StepOutcome};
use crate::core::persist;
use crate::error::{ExecutionError, Result};

/// Make `count` step-mode calls (default: one per step).
pub fn execute(
    recipe_path: &Path,
    input: &InputArgs,
    count: Option<usize>,
    config: &Config,
) -> Result<()> {
    let mut recipe = persist::load(recipe_path)?;
    let text = input.read(config)?;
    if recipe.is_empty() {
        return Err(ExecutionError::EmptyRecipe.into());
    }
    let count = count.unwrap_or(recipe.len());

    for _ in 0..count {
        match executor::step(&mut recipe, &text)? {
            StepOutcome::Executed {
                index,
                operation,
                output: value,
            } => {
                output::section(&format!(
                    "Executed step {} of {}: {}",
                    index + 1,
                    recipe.len(),
                    operation
                ));
                output::steps(recipe.steps(), Some(index));
                output::rule();
                println!("{}", value);
            }
            StepOutcome::EndOfRecipe => {
                output::blank();
                output::dimmed("End of recipe reached. Resetting.");
            }
        }
    }
    Ok(())
}

//! Recipe execution.
//!
//! Two modes over the same prefix runner:
//!
//! - **bake** runs every step once, end to end.
//! - **step** advances the recipe's cursor by one and replays the whole
//!   prefix `0..=cursor` against the raw input. It never continues from a
//!   previous output, so what it shows is always "the first N steps applied
//!   to the original input".
//!
//! Neither mode surfaces a partial output when a step fails.

use tracing::{debug, trace, warn};

use crate::core::operation::Operation;
use crate::core::recipe::{Recipe, Step};
use crate::error::ExecutionError;

/// Output of a successful bake.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Baked {
    pub output: String,
}

/// Result of one step-mode call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// Step `index` ran last; `output` is the first `index + 1` steps applied
    /// to the input. The presentation layer highlights `index`.
    Executed {
        index: usize,
        operation: Operation,
        output: String,
    },
    /// The cursor was already past the last step. It has been reset, so the
    /// next call starts again from the first step.
    EndOfRecipe,
}

/// Apply `steps` in order to `input`.
///
/// # Errors
///
/// Returns `ExecutionError::StepFailed` for the first step that fails.
pub fn run(steps: &[Step], input: &str) -> Result<String, ExecutionError> {
    let mut value = input.to_string();
    for (index, step) in steps.iter().enumerate() {
        trace!(index, operation = %step.operation(), "running step");
        value = step
            .operation()
            .apply(&value, step.params())
            .map_err(|e| {
                warn!(index, operation = %step.operation(), error = %e, "step failed");
                ExecutionError::StepFailed {
                    index,
                    operation: step.operation().name().to_string(),
                    message: e.to_string(),
                }
            })?;
    }
    Ok(value)
}

/// Run the whole recipe once.
///
/// Preconditions are checked before anything else and leave the cursor
/// alone. Once they pass, the cursor is reset to 0; bake does not use it.
///
/// # Errors
///
/// - `EmptyInput` if `input` is empty
/// - `EmptyRecipe` if the recipe has no steps
/// - `StepFailed` for the first failing step
pub fn bake(recipe: &mut Recipe, input: &str) -> Result<Baked, ExecutionError> {
    if input.is_empty() {
        debug!("bake refused: empty input");
        return Err(ExecutionError::EmptyInput);
    }
    if recipe.is_empty() {
        debug!("bake refused: empty recipe");
        return Err(ExecutionError::EmptyRecipe);
    }

    recipe.reset_cursor();
    debug!(steps = recipe.len(), "baking recipe");
    let output = run(recipe.steps(), input)?;
    Ok(Baked { output })
}

/// Execute one more step.
///
/// # Errors
///
/// - `EmptyRecipe` if the recipe has no steps; the cursor is not touched
/// - `StepFailed` for the first failing step of the replayed prefix; the
///   cursor is reset to 0
pub fn step(recipe: &mut Recipe, input: &str) -> Result<StepOutcome, ExecutionError> {
    if recipe.is_empty() {
        debug!("step refused: empty recipe");
        return Err(ExecutionError::EmptyRecipe);
    }

    let index = recipe.cursor();
    if index >= recipe.len() {
        debug!("end of recipe reached, resetting cursor");
        recipe.reset_cursor();
        return Ok(StepOutcome::EndOfRecipe);
    }

    match run(&recipe.steps()[..=index], input) {
        Ok(output) => {
            let operation = recipe.steps()[index].operation();
            debug!(index, operation = %operation, "executed step");
            recipe.advance_cursor();
            Ok(StepOutcome::Executed {
                index,
                operation,
                output,
            })
        }
        Err(e) => {
            recipe.reset_cursor();
            Err(e)
        }
    }
}

//! Recipe commands - create and edit recipe files.

use dialoguer::Confirm;
use std::io::{self, IsTerminal};
use std::path::Path;

use crate::cli::output;
use crate::core::constants::{KEY_PARAM, SHIFT_PARAM};
use crate::core::operation::Operation;
use crate::core::persist::{self, Record};
use crate::core::recipe::Recipe;
use crate::core::registry;
use crate::core::types::Params;
use crate::error::{RecipeError, Result};

fn open(file: &Path) -> Result<Recipe> {
    if file.exists() {
        persist::load(file)
    } else {
        Ok(Recipe::new())
    }
}

/// Collect the parameter flags an operation accepts.
///
/// Values are not validated here; a Caesar step saved with shift `abc`
/// fails when it runs, not when it is added.
fn params_for(op: Operation, shift: Option<String>, key: Option<String>) -> Result<Params> {
    let mut params = Params::new();
    for (name, value) in [(SHIFT_PARAM, shift), (KEY_PARAM, key)] {
        let Some(value) = value else { continue };
        if op.param_kind().param_name() != Some(name) {
            return Err(RecipeError::UnexpectedParam {
                operation: op.name().to_string(),
                param: name,
            }
            .into());
        }
        params.insert(name.to_string(), value);
    }
    Ok(params)
}

/// Append a step to a recipe file, creating it if needed.
pub fn add(file: &Path, operation: &str, shift: Option<String>, key: Option<String>) -> Result<()> {
    let op = registry::lookup(operation)?;
    let params = params_for(op, shift, key)?;

    let mut recipe = open(file)?;
    recipe.append(op, params);
    persist::save(&recipe, file)?;

    output::success(&format!(
        "added {} as step {}",
        output::op(op.name()),
        recipe.len()
    ));
    if let Some(name) = op.param_kind().param_name() {
        let step = &recipe.steps()[recipe.len() - 1];
        if step.param(name).is_none() {
            output::hint(&format!("{} needs --{} before it can run", op.name(), name));
        }
    }
    Ok(())
}

/// Remove the step at a 1-based position. Removing the last step deletes
/// the file, since an empty recipe cannot be saved.
pub fn rm(file: &Path, position: usize) -> Result<()> {
    let mut recipe = persist::load(file)?;
    let index = position
        .checked_sub(1)
        .ok_or(RecipeError::StepNotFound(position))?;
    let step = recipe.remove_at(index)?;

    if recipe.is_empty() {
        std::fs::remove_file(file)?;
        output::success(&format!(
            "removed {}; recipe is empty, deleted {}",
            output::op(step.operation().name()),
            output::path(file)
        ));
    } else {
        persist::save(&recipe, file)?;
        output::success(&format!(
            "removed step {}: {}",
            position,
            output::op(step.operation().name())
        ));
    }
    Ok(())
}

/// Show the steps of a recipe file.
pub fn show(file: &Path, json: bool) -> Result<()> {
    let recipe = persist::load(file)?;

    if json {
        let records: Vec<Record> = persist::records(&recipe);
        println!("{}", persist::records_to_json(&records)?);
        return Ok(());
    }

    output::header(&file.display().to_string());
    output::kv("steps:", recipe.len());
    output::rule();
    output::steps(recipe.steps(), None);
    Ok(())
}

/// Delete a recipe file after confirmation.
pub fn clear(file: &Path, yes: bool) -> Result<()> {
    // Make sure it really is a recipe before deleting anything.
    let recipe = persist::load(file)?;

    if !yes {
        if !io::stdin().is_terminal() {
            return Err(RecipeError::ConfirmationRequired(file.to_path_buf()).into());
        }
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Delete {} ({} steps)?",
                file.display(),
                recipe.len()
            ))
            .default(false)
            .interact()?;
        if !confirmed {
            output::dimmed("cancelled");
            return Ok(());
        }
    }

    std::fs::remove_file(file)?;
    output::success(&format!("deleted {}", output::path(file)));
    Ok(())
}

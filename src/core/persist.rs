//! Recipe files.
//!
//! A recipe file is a JSON array of `{"operation": ..., "args": {...}}`
//! records in execution order. The cursor is never stored.
//!
//! Loading comes in two forms: [`load`] gives back the recipe as saved, and
//! [`load_and_invert`] gives back the recipe that undoes it: records in
//! reverse order, each operation replaced by its inverse, parameters kept.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use tracing::debug;

use crate::core::constants::RECIPE_INDENT;
use crate::core::operation::Operation;
use crate::core::recipe::Recipe;
use crate::core::types::{OperationName, Params};
use crate::error::{RecipeError, Result};

/// One persisted step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(default)]
    pub operation: OperationName,
    #[serde(default)]
    pub args: Params,
}

/// A record that was dropped while inverting because its operation has no
/// registered inverse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InversionWarning {
    /// Position of the record in the file (0-based).
    pub position: usize,
    pub operation: OperationName,
}

impl fmt::Display for InversionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Could not find an inverse for '{}'. Skipping.",
            self.operation
        )
    }
}

/// A recipe derived by inversion, plus the records it had to skip.
#[derive(Debug, Clone)]
pub struct Inverted {
    pub recipe: Recipe,
    pub warnings: Vec<InversionWarning>,
}

/// Flatten a recipe into records.
pub fn records(recipe: &Recipe) -> Vec<Record> {
    recipe
        .steps()
        .iter()
        .map(|step| Record {
            operation: step.operation().name().to_string(),
            args: step.flat_params(),
        })
        .collect()
}

/// Serialize records as pretty JSON with four-space indentation.
///
/// # Errors
///
/// Returns `RecipeError::Serialize` if serialization fails.
pub fn records_to_json(records: &[Record]) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(RECIPE_INDENT);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    records
        .serialize(&mut ser)
        .map_err(RecipeError::Serialize)?;
    // serde_json only ever writes UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Serialize a recipe.
///
/// # Errors
///
/// Returns `RecipeError::Empty` for an empty recipe.
pub fn to_json(recipe: &Recipe) -> Result<String> {
    if recipe.is_empty() {
        return Err(RecipeError::Empty.into());
    }
    records_to_json(&records(recipe))
}

/// Parse the records of a recipe file.
///
/// # Errors
///
/// Returns `RecipeError::Parse` if the text is not an array of records.
pub fn parse(json: &str) -> Result<Vec<Record>> {
    Ok(serde_json::from_str(json).map_err(RecipeError::Parse)?)
}

/// Save a recipe to `path`.
///
/// # Errors
///
/// Returns `RecipeError::Empty` for an empty recipe, or
/// `RecipeError::Write` if the file cannot be written.
pub fn save(recipe: &Recipe, path: &Path) -> Result<()> {
    let json = to_json(recipe)?;
    debug!(path = %path.display(), steps = recipe.len(), "saving recipe");
    std::fs::write(path, json).map_err(|source| RecipeError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}

fn read(path: &Path) -> Result<Vec<Record>> {
    debug!(path = %path.display(), "reading recipe");
    let contents = std::fs::read_to_string(path).map_err(|source| RecipeError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&contents)
}

/// Build a recipe from records as they are, without inverting.
///
/// # Errors
///
/// Returns `RecipeError::UnknownOperation` for the first record whose
/// operation is not registered.
pub fn from_records(records: Vec<Record>) -> Result<Recipe> {
    let mut recipe = Recipe::new();
    for record in records {
        let op: Operation = record.operation.parse()?;
        recipe.append(op, record.args);
    }
    Ok(recipe)
}

/// Load a recipe file as saved.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or names an
/// unknown operation.
pub fn load(path: &Path) -> Result<Recipe> {
    from_records(read(path)?)
}

/// Invert a sequence of records.
///
/// Walks the records last to first and appends the inverse of each, with
/// the same parameters. Records whose operation has no inverse are skipped
/// and reported; they never abort the rest.
pub fn invert(records: Vec<Record>) -> Inverted {
    let mut recipe = Recipe::new();
    let mut warnings = Vec::new();

    for (position, record) in records.into_iter().enumerate().rev() {
        let inverse = record
            .operation
            .parse::<Operation>()
            .ok()
            .and_then(Operation::inverse);
        match inverse {
            Some(op) => {
                recipe.append(op, record.args);
            }
            None => {
                debug!(position, operation = %record.operation, "no inverse, skipping");
                warnings.push(InversionWarning {
                    position,
                    operation: record.operation,
                });
            }
        }
    }

    recipe.reset_cursor();
    Inverted { recipe, warnings }
}

/// Load a recipe file and invert it.
///
/// # Errors
///
/// Returns an error only if the file cannot be read or is not a recipe
/// file; unresolvable operations become warnings.
pub fn load_and_invert(path: &Path) -> Result<Inverted> {
    Ok(invert(read(path)?))
}

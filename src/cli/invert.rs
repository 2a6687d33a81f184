//! Invert command - load a recipe reversed with every operation inverted.

use std::path::Path;

use crate::cli::output;
use crate::core::persist;
use crate::error::Result;

/// Print or save the inverse of a recipe file.
///
/// Records without an inverse are reported as warnings and left out.
pub fn execute(recipe_path: &Path, out: Option<&Path>) -> Result<()> {
    let inverted = persist::load_and_invert(recipe_path)?;
    for warning in &inverted.warnings {
        output::warn(&warning.to_string());
    }

    match out {
        Some(path) => {
            persist::save(&inverted.recipe, path)?;
            output::success(&format!(
                "inverted {} steps into {}",
                inverted.recipe.len(),
                output::path(path)
            ));
        }
        None => println!("{}", persist::to_json(&inverted.recipe)?),
    }
    Ok(())
}

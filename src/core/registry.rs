//! Operation registry.
//!
//! Name-based access to the closed set of operations, for callers that only
//! hold display names (recipe files, command-line arguments).

use tracing::trace;

use crate::core::operation::Operation;
use crate::core::types::Params;
use crate::error::Result;

/// All registered operations in listing order.
pub fn operations() -> &'static [Operation] {
    &Operation::ALL
}

/// Resolve a display name.
///
/// # Errors
///
/// Returns `RecipeError::UnknownOperation` if no operation has that name.
pub fn lookup(name: &str) -> Result<Operation> {
    Ok(name.parse::<Operation>()?)
}

/// Run an operation by name.
///
/// The error branch carries a human-readable message, whether the name was
/// unknown or the transform refused its input.
pub fn invoke(name: &str, input: &str, params: &Params) -> std::result::Result<String, String> {
    trace!(operation = name, "invoke");
    let op = lookup(name).map_err(|e| e.to_string())?;
    op.apply(input, params).map_err(|e| e.to_string())
}

//! Ops command - list available operations.

use serde::Serialize;

use crate::cli::output;
use crate::core::operation::{Category, Operation, ParamKind};
use crate::core::registry;
use crate::error::{RecipeError, Result};

#[derive(Serialize)]
struct OpInfo {
    name: &'static str,
    category: Category,
    parameter: ParamKind,
    inverse: Option<&'static str>,
}

impl From<Operation> for OpInfo {
    fn from(op: Operation) -> Self {
        Self {
            name: op.name(),
            category: op.category(),
            parameter: op.param_kind(),
            inverse: op.inverse().map(Operation::name),
        }
    }
}

/// List operations grouped by category.
pub fn execute(json: bool) -> Result<()> {
    if json {
        let infos: Vec<OpInfo> = registry::operations()
            .iter()
            .copied()
            .map(OpInfo::from)
            .collect();
        let text = serde_json::to_string_pretty(&infos).map_err(RecipeError::Serialize)?;
        println!("{}", text);
        return Ok(());
    }

    print_table();
    Ok(())
}

/// Print the operation list (shared with the session's `ops` command).
pub fn print_table() {
    for category in [Category::Encoders, Category::Decoders, Category::Ciphers] {
        output::section(&category.to_string());
        for op in registry::operations()
            .iter()
            .filter(|op| op.category() == category)
        {
            let inverse = op.inverse().map(Operation::name).unwrap_or("-");
            println!(
                "  {} param: {:<14} inverse: {}",
                output::op(&format!("{:<16}", op.name())),
                op.param_kind().to_string(),
                inverse
            );
        }
    }
}

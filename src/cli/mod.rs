//! Command-line interface.

pub mod bake;
pub mod completions;
pub mod input;
pub mod invert;
pub mod ops;
pub mod output;
pub mod recipe;
pub mod session;
pub mod step;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::core::config::Config;
use crate::error::Result;
use input::InputArgs;

/// Ladle - build, bake and invert recipes of text transformations.
#[derive(Parser)]
#[command(
    name = "ladle",
    about = "Build, bake and invert recipes of text transformations",
    version,
    after_help = "Encode it, save it, invert it. 🥄"
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// List available operations
    Ops {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run every step of a recipe on the input
    Bake {
        /// Recipe file (JSON)
        recipe: PathBuf,
        #[command(flatten)]
        input: InputArgs,
        /// Write the output to a file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
        /// Copy the output to the clipboard instead of printing it
        #[arg(long, conflicts_with = "out")]
        copy: bool,
    },

    /// Run a recipe one step at a time, showing each intermediate output
    Step {
        /// Recipe file (JSON)
        recipe: PathBuf,
        #[command(flatten)]
        input: InputArgs,
        /// Number of step calls to make (default: one per step)
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },

    /// Load a recipe reversed, with every operation inverted
    Invert {
        /// Recipe file to invert
        recipe: PathBuf,
        /// Save the inverted recipe here instead of printing it
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Create and edit recipe files
    Recipe {
        #[command(subcommand)]
        action: RecipeAction,
    },

    /// Start an interactive session
    Session,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Recipe subcommands.
#[derive(Subcommand)]
pub enum RecipeAction {
    /// Append a step (creates the file if needed)
    Add {
        /// Recipe file
        file: PathBuf,
        /// Operation name (e.g. "To Base64")
        operation: String,
        /// Shift for Caesar operations (1-25)
        #[arg(long, allow_hyphen_values = true)]
        shift: Option<String>,
        /// Key for AES operations
        #[arg(long)]
        key: Option<String>,
    },

    /// Remove the step at a position (1-based)
    Rm {
        /// Recipe file
        file: PathBuf,
        /// Step position, starting at 1
        position: usize,
    },

    /// Show the steps of a recipe
    Show {
        /// Recipe file
        file: PathBuf,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a recipe file
    Clear {
        /// Recipe file
        file: PathBuf,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command.
pub fn execute(command: Command, config: &Config) -> Result<()> {
    use Command::*;

    match command {
        Ops { json } => ops::execute(json),
        Bake {
            recipe,
            input,
            out,
            copy,
        } => bake::execute(&recipe, &input, out.as_deref(), copy, config),
        Step {
            recipe,
            input,
            count,
        } => step::execute(&recipe, &input, count, config),
        Invert { recipe, out } => invert::execute(&recipe, out.as_deref()),
        Recipe { action } => match action {
            RecipeAction::Add {
                file,
                operation,
                shift,
                key,
            } => recipe::add(&file, &operation, shift, key),
            RecipeAction::Rm { file, position } => recipe::rm(&file, position),
            RecipeAction::Show { file, json } => recipe::show(&file, json),
            RecipeAction::Clear { file, yes } => recipe::clear(&file, yes),
        },
        Session => session::execute(config),
        Completions { shell } => completions::execute(shell),
    }
}

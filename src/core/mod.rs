//! Core library components.
//!
//! The recipe engine: operations and their inverses, the recipe model, the
//! executor, recipe files and the interactive session. Nothing in here
//! writes to the terminal.

pub mod cipher;
pub mod clipboard;
pub mod codec;
pub mod config;
pub mod constants;
pub mod executor;
pub mod host;
pub mod inversion;
pub mod operation;
pub mod persist;
pub mod recipe;
pub mod registry;
pub mod session;
pub mod types;

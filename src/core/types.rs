//! Type aliases for domain concepts.
//!
//! Provides semantic type aliases to make function signatures more descriptive.

use std::collections::BTreeMap;

/// Display name of an operation (e.g. "To Base64").
pub type OperationName = String;

/// Parameter map of a step: parameter name to raw string value.
///
/// Values stay as the user typed them; each operation parses its own.
pub type Params = BTreeMap<String, String>;

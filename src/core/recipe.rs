//! Recipe model.
//!
//! A recipe is an ordered list of steps. Execution order is list order. The
//! recipe also carries the step-mode cursor, which every mutation resets.

use std::fmt;
use tracing::debug;

use crate::core::operation::Operation;
use crate::core::types::Params;
use crate::error::{RecipeError, Result};

/// Identifies a step within its recipe, independent of position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StepId(u64);

/// One operation and its parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    id: StepId,
    operation: Operation,
    params: Params,
}

impl Step {
    pub fn id(&self) -> StepId {
        self.id
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Value of a single parameter.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    /// The operation's own parameter, flattened for saving.
    ///
    /// Operations without a parameter get an empty map; the others get their
    /// single conventional key, empty if it was never filled in.
    pub fn flat_params(&self) -> Params {
        let mut flat = Params::new();
        if let Some(name) = self.operation.param_kind().param_name() {
            let value = self.param(name).unwrap_or_default().to_string();
            flat.insert(name.to_string(), value);
        }
        flat
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.operation)?;
        match self.operation.param_kind().param_name() {
            Some("key") if self.param("key").is_some_and(|k| !k.is_empty()) => {
                write!(f, " (key: ****)")
            }
            Some(name) => write!(f, " ({}: {})", name, self.param(name).unwrap_or("")),
            None => Ok(()),
        }
    }
}

/// Ordered steps plus the step-mode cursor.
#[derive(Debug, Clone, Default)]
pub struct Recipe {
    steps: Vec<Step>,
    cursor: usize,
    next_id: u64,
}

impl Recipe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a step at the end and return its id.
    ///
    /// Parameters are not validated here; a step may be added with a missing
    /// or partial parameter and filled in later.
    pub fn append(&mut self, operation: Operation, params: Params) -> StepId {
        let id = StepId(self.next_id);
        self.next_id += 1;
        debug!(operation = %operation, position = self.steps.len(), "appending step");
        self.steps.push(Step {
            id,
            operation,
            params,
        });
        self.reset_cursor();
        id
    }

    /// Remove a step wherever it is.
    ///
    /// Returns the removed step, or `None` if no step has that id.
    pub fn remove(&mut self, id: StepId) -> Option<Step> {
        let index = self.steps.iter().position(|s| s.id == id)?;
        Some(self.take(index))
    }

    /// Remove the step at `index` (0-based).
    ///
    /// # Errors
    ///
    /// Returns `RecipeError::StepNotFound` if the index is past the end.
    pub fn remove_at(&mut self, index: usize) -> Result<Step> {
        if index >= self.steps.len() {
            return Err(RecipeError::StepNotFound(index + 1).into());
        }
        Ok(self.take(index))
    }

    fn take(&mut self, index: usize) -> Step {
        let step = self.steps.remove(index);
        debug!(operation = %step.operation, position = index, "removed step");
        self.reset_cursor();
        step
    }

    /// Set one parameter of a step. Returns false if no step has that id.
    pub fn set_param(&mut self, id: StepId, name: &str, value: &str) -> bool {
        let Some(step) = self.steps.iter_mut().find(|s| s.id == id) else {
            return false;
        };
        step.params.insert(name.to_string(), value.to_string());
        self.reset_cursor();
        true
    }

    /// Remove every step.
    pub fn clear(&mut self) {
        debug!(steps = self.steps.len(), "clearing recipe");
        self.steps.clear();
        self.reset_cursor();
    }

    /// The steps in execution order.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn get(&self, id: StepId) -> Option<&Step> {
        self.steps.iter().find(|s| s.id == id)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Index of the next step step-mode will execute, in `0..=len`.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn reset_cursor(&mut self) {
        self.cursor = 0;
    }

    pub(crate) fn advance_cursor(&mut self) {
        self.cursor = (self.cursor + 1).min(self.steps.len());
    }
}

impl FromIterator<(Operation, Params)> for Recipe {
    fn from_iter<I: IntoIterator<Item = (Operation, Params)>>(iter: I) -> Self {
        let mut recipe = Recipe::new();
        for (op, params) in iter {
            recipe.append(op, params);
        }
        recipe
    }
}

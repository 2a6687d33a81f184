//! Interactive session.
//!
//! Holds everything a user works with at once: the recipe being built, the
//! input text, the last output, which step produced it and a one-line
//! status. Each action runs to completion and reports its own failures
//! through [`Host::notify`]; no action returns an error, and a failed action
//! leaves the recipe, input and output as they were.

use tracing::debug;

use crate::core::constants::STATUS_READY;
use crate::core::executor::{self, StepOutcome};
use crate::core::host::{Host, Severity, JSON_FILES, TEXT_FILES};
use crate::core::operation::Operation;
use crate::core::persist;
use crate::core::recipe::{Recipe, StepId};
use crate::core::types::Params;
use crate::error::ExecutionError;

/// Recipe, input and output of one working session.
#[derive(Debug, Clone)]
pub struct Session {
    recipe: Recipe,
    input: String,
    output: String,
    highlighted: Option<usize>,
    status: String,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            recipe: Recipe::new(),
            input: String::new(),
            output: String::new(),
            highlighted: None,
            status: STATUS_READY.to_string(),
        }
    }

    pub fn recipe(&self) -> &Recipe {
        &self.recipe
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    /// Position of the step that produced the current step-mode output.
    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// Forget step-mode progress: cursor, highlight and status.
    pub fn reset_step_state(&mut self) {
        self.recipe.reset_cursor();
        self.highlighted = None;
        self.status = STATUS_READY.to_string();
    }

    pub fn add_step(&mut self, operation: Operation, params: Params) -> StepId {
        let id = self.recipe.append(operation, params);
        self.reset_step_state();
        id
    }

    /// Remove a step. Returns false if it was not in the recipe.
    pub fn remove_step(&mut self, id: StepId) -> bool {
        let removed = self.recipe.remove(id).is_some();
        self.reset_step_state();
        removed
    }

    /// Fill in a step's parameter. Returns false if the step is gone.
    pub fn set_param(&mut self, id: StepId, name: &str, value: &str) -> bool {
        let found = self.recipe.set_param(id, name, value);
        self.reset_step_state();
        found
    }

    pub fn clear_recipe(&mut self) {
        self.recipe.clear();
        self.reset_step_state();
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
        self.reset_step_state();
    }

    pub fn clear_input(&mut self) {
        self.set_input(String::new());
    }

    pub fn clear_output(&mut self) {
        self.output.clear();
    }

    /// Execute the next step, replaying from the original input.
    ///
    /// Returns true if a step ran and produced the new output.
    pub fn process_step(&mut self, host: &mut dyn Host) -> bool {
        self.highlighted = None;
        match executor::step(&mut self.recipe, &self.input) {
            Ok(StepOutcome::Executed {
                index,
                operation,
                output,
            }) => {
                self.output = output;
                self.highlighted = Some(index);
                self.status = format!("Executed step {}: {}", index + 1, operation);
                return true;
            }
            Ok(StepOutcome::EndOfRecipe) => {
                self.reset_step_state();
                self.status = "End of recipe reached. Resetting.".to_string();
            }
            Err(ExecutionError::EmptyRecipe) => host.notify(
                "Recipe Error",
                "Please add an operation to the recipe.",
                Severity::Warning,
            ),
            Err(e) => {
                self.reset_step_state();
                report_failure(host, &e);
            }
        }
        false
    }

    /// Run the whole recipe on the input.
    ///
    /// Returns true if the output was replaced.
    pub fn bake(&mut self, host: &mut dyn Host) -> bool {
        self.highlighted = None;
        match executor::bake(&mut self.recipe, &self.input) {
            Ok(baked) => {
                self.output = baked.output;
                self.status = "Recipe baked successfully!".to_string();
                return true;
            }
            Err(ExecutionError::EmptyInput) => {
                host.notify("Input Error", "The input field is empty.", Severity::Error)
            }
            Err(ExecutionError::EmptyRecipe) => host.notify(
                "Recipe Error",
                "Please add at least one operation.",
                Severity::Warning,
            ),
            Err(e) => report_failure(host, &e),
        }
        false
    }

    /// Ask for a path and write the recipe there.
    pub fn save_recipe(&mut self, host: &mut dyn Host) {
        let json = match persist::to_json(&self.recipe) {
            Ok(json) => json,
            Err(e) => {
                host.notify("Warning", &e.to_string(), Severity::Warning);
                return;
            }
        };
        let path = match host.save_file_dialog("Save Recipe As", JSON_FILES) {
            Ok(Some(path)) => path,
            Ok(None) => return,
            Err(e) => return host.notify("File Error", &e.to_string(), Severity::Error),
        };
        match host.write_text_file(&path, &json) {
            Ok(()) => {
                debug!(path = %path.display(), "recipe saved");
                self.status = "Recipe saved!".to_string();
            }
            Err(e) => host.notify(
                "File Error",
                &format!("Failed to save recipe: {}", e),
                Severity::Error,
            ),
        }
    }

    /// Ask for a recipe file and replace the recipe with its inverse.
    ///
    /// Returns true if the recipe was replaced.
    pub fn load_recipe(&mut self, host: &mut dyn Host) -> bool {
        let path = match host.open_file_dialog("Load and Invert Recipe", JSON_FILES) {
            Ok(Some(path)) => path,
            Ok(None) => return false,
            Err(e) => {
                host.notify("File Error", &e.to_string(), Severity::Error);
                return false;
            }
        };
        let records = match host
            .read_text_file(&path)
            .and_then(|text| persist::parse(&text))
        {
            Ok(records) => records,
            Err(e) => {
                host.notify(
                    "File Error",
                    &format!("Failed to load and invert recipe: {}", e),
                    Severity::Error,
                );
                return false;
            }
        };

        let inverted = persist::invert(records);
        for warning in &inverted.warnings {
            host.notify("Warning", &warning.to_string(), Severity::Warning);
        }
        self.recipe = inverted.recipe;
        self.reset_step_state();
        self.status = "Recipe loaded and inverted!".to_string();
        true
    }

    pub fn paste_input(&mut self, host: &mut dyn Host) {
        match host.read_clipboard() {
            Ok(text) => self.set_input(text),
            Err(e) => host.notify(
                "Error",
                &format!("Could not paste from clipboard: {}", e),
                Severity::Error,
            ),
        }
    }

    pub fn open_input_file(&mut self, host: &mut dyn Host) {
        let path = match host.open_file_dialog("Open Text File", TEXT_FILES) {
            Ok(Some(path)) => path,
            Ok(None) => return,
            Err(e) => return host.notify("File Error", &e.to_string(), Severity::Error),
        };
        match host.read_text_file(&path) {
            Ok(text) => self.set_input(text),
            Err(e) => host.notify(
                "File Error",
                &format!("Failed to read file: {}", e),
                Severity::Error,
            ),
        }
    }

    pub fn copy_output(&mut self, host: &mut dyn Host) {
        if self.output.is_empty() {
            return host.notify(
                "Warning",
                "Output is empty, nothing to copy.",
                Severity::Warning,
            );
        }
        match host.write_clipboard(&self.output) {
            Ok(()) => self.status = "Output copied to clipboard.".to_string(),
            Err(e) => host.notify(
                "Error",
                &format!("Could not copy to clipboard: {}", e),
                Severity::Error,
            ),
        }
    }

    pub fn save_output(&mut self, host: &mut dyn Host) {
        if self.output.is_empty() {
            return host.notify("Warning", "Output is empty.", Severity::Warning);
        }
        let path = match host.save_file_dialog("Save Output As", TEXT_FILES) {
            Ok(Some(path)) => path,
            Ok(None) => return,
            Err(e) => return host.notify("File Error", &e.to_string(), Severity::Error),
        };
        if let Err(e) = host.write_text_file(&path, &self.output) {
            host.notify(
                "Error",
                &format!("Failed to save file: {}", e),
                Severity::Error,
            );
        }
    }
}

fn report_failure(host: &mut dyn Host, error: &ExecutionError) {
    let message = match error {
        ExecutionError::StepFailed {
            operation, message, ..
        } => format!("Step '{}' failed: {}", operation, message),
        other => other.to_string(),
    };
    host.notify("Processing Failed", &message, Severity::Error);
}

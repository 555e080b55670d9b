use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// The three parts of a prompt as entered by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptComponents {
    pub role: String,
    pub context: String,
    pub task: String,
}

impl PromptComponents {
    pub fn new(
        role: impl Into<String>,
        context: impl Into<String>,
        task: impl Into<String>,
    ) -> Self {
        Self {
            role: role.into(),
            context: context.into(),
            task: task.into(),
        }
    }

    /// Names of the components that are empty or whitespace-only, in form order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("Role", &self.role),
            ("Context", &self.context),
            ("Task", &self.task),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    pub fn validate(&self) -> Result<(), AppError> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            return Ok(());
        }
        Err(AppError::Validation(format!(
            "Please fill in all three prompt components (missing: {})",
            missing.join(", ")
        )))
    }
}

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} is required.")]
    Required { field: String },
}

/// Constraint attached to an editable column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRule {
    pub title: String,
    pub required: bool,
}

impl FieldRule {
    pub fn required(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            required: true,
        }
    }

    /// Returns the trimmed value, or an error when a required field is blank.
    pub fn validate(&self, value: &str) -> Result<String, ValidationError> {
        let trimmed = value.trim();
        if self.required && trimmed.is_empty() {
            return Err(ValidationError::Required {
                field: self.title.clone(),
            });
        }
        Ok(trimmed.to_string())
    }
}

//! A counter as submitted from the create/edit form, before it is saved.

use serde::{Deserialize, Serialize};

use crate::color::is_valid_hex_color;
use crate::constants::{CounterTemplate, DEFAULT_COUNTER_COLOR};
use crate::error::ValidationError;
use crate::validation::{
    NumericInput, sanitize_counter_name, validate_counter_name_opt, validate_increment,
    validate_target,
};

/// Unvalidated form input. Target, increment and color are optional; a
/// missing color falls back to [`DEFAULT_COUNTER_COLOR`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterDraft {
    pub name: Option<String>,
    pub icon: Option<String>,
    pub target: Option<NumericInput>,
    pub increment: Option<NumericInput>,
    pub color: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Target,
    Increment,
    Color,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: Field,
    #[serde(serialize_with = "serialize_message")]
    pub error: ValidationError,
}

fn serialize_message<S: serde::Serializer>(
    error: &ValidationError,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(error)
}

impl CounterDraft {
    /// Run every field validator; one entry per failing field, in form order.
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        let mut push = |field, result: Result<(), ValidationError>| {
            if let Err(error) = result {
                errors.push(FieldError { field, error });
            }
        };

        push(Field::Name, validate_counter_name_opt(self.name.as_deref()));
        if let Some(target) = &self.target {
            push(Field::Target, validate_target(target.clone()));
        }
        if let Some(increment) = &self.increment {
            push(Field::Increment, validate_increment(increment.clone()));
        }
        if let Some(color) = &self.color {
            if !is_valid_hex_color(color) {
                push(Field::Color, Err(ValidationError::ColorInvalid));
            }
        }

        if !errors.is_empty() {
            log::debug!(
                "draft {:?} rejected with {} error(s)",
                self.name,
                errors.len()
            );
        }
        errors
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// The draft as it would be saved: name trimmed, color defaulted.
    pub fn sanitized(&self) -> Self {
        Self {
            name: self.name.as_deref().map(sanitize_counter_name),
            color: Some(
                self.color
                    .clone()
                    .unwrap_or_else(|| DEFAULT_COUNTER_COLOR.to_owned()),
            ),
            ..self.clone()
        }
    }
}

impl From<&CounterTemplate> for CounterDraft {
    fn from(template: &CounterTemplate) -> Self {
        Self {
            name: Some(template.name.to_owned()),
            icon: Some(template.icon.to_owned()),
            target: Some(template.target.into()),
            increment: None,
            color: Some(template.color.to_owned()),
        }
    }
}

/// Outcome of validating one draft in a batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DraftReport {
    /// Position in the submitted batch.
    pub index: usize,
    /// The name as it would be saved.
    pub name: Option<String>,
    pub valid: bool,
    pub errors: Vec<FieldError>,
}

/// Validate every draft, keeping batch order.
pub fn check_drafts(drafts: &[CounterDraft]) -> Vec<DraftReport> {
    drafts
        .iter()
        .enumerate()
        .map(|(index, draft)| {
            let errors = draft.validate();
            DraftReport {
                index,
                name: draft.sanitized().name,
                valid: errors.is_empty(),
                errors,
            }
        })
        .collect()
}

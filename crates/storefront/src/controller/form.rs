//! The add-product form.
//!
//! ```text
//! Editing -> Validating -> Submitting -> Saved  -> Editing (fields cleared)
//!                      |              -> Failed -> Editing (fields kept, error shown)
//!                      -> Rejected -> Editing (error shown, nothing submitted)
//! ```
//!
//! `Saved`, `Failed` and `Rejected` are transitions, not resting phases: the form is back in
//! [`FormPhase::Editing`] right after them, and [`AddProductForm::last_outcome`] records
//! which one happened.

use super::mvi::{Intent, Reducer, UiState};
use crate::error::ValidationError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Editing,
    Validating,
    Submitting,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormOutcome {
    Saved { id: String },
    Failed { message: String },
    Rejected { error: ValidationError },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddProductForm {
    pub name: String,
    pub description: String,
    /// Raw text as typed; parsed only on submit.
    pub price: String,
    pub phase: FormPhase,
    /// Message shown under the fields, if any.
    pub error: Option<String>,
    pub last_outcome: Option<FormOutcome>,
}

impl UiState for AddProductForm {}

impl AddProductForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_busy(&self) -> bool {
        self.phase != FormPhase::Editing
    }
}

#[derive(Debug, Clone)]
pub enum FormIntent {
    EditName(String),
    EditDescription(String),
    EditPrice(String),
    Submit,
    Validated,
    Rejected(ValidationError),
    Saved { id: String },
    Failed { message: String },
}

impl Intent for FormIntent {}

pub struct FormReducer;

impl Reducer for FormReducer {
    type State = AddProductForm;
    type Intent = FormIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match (state.phase, intent) {
            (FormPhase::Editing, FormIntent::EditName(name)) => AddProductForm { name, ..state },
            (FormPhase::Editing, FormIntent::EditDescription(description)) => AddProductForm {
                description,
                ..state
            },
            (FormPhase::Editing, FormIntent::EditPrice(price)) => AddProductForm { price, ..state },
            (FormPhase::Editing, FormIntent::Submit) => AddProductForm {
                phase: FormPhase::Validating,
                error: None,
                ..state
            },
            (FormPhase::Validating, FormIntent::Validated) => AddProductForm {
                phase: FormPhase::Submitting,
                ..state
            },
            (FormPhase::Validating, FormIntent::Rejected(error)) => AddProductForm {
                phase: FormPhase::Editing,
                error: Some(error.to_string()),
                last_outcome: Some(FormOutcome::Rejected { error }),
                ..state
            },
            (FormPhase::Submitting, FormIntent::Saved { id }) => AddProductForm {
                last_outcome: Some(FormOutcome::Saved { id }),
                ..AddProductForm::default()
            },
            (FormPhase::Submitting, FormIntent::Failed { message }) => AddProductForm {
                phase: FormPhase::Editing,
                error: Some(message.clone()),
                last_outcome: Some(FormOutcome::Failed { message }),
                ..state
            },
            // Edits while busy, double submits and stray results leave the form alone.
            _ => state,
        }
    }
}

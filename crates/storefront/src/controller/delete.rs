//! Delete confirmation.
//!
//! Selecting a product only arms the dialog; nothing reaches the store until the user
//! confirms. Cancelling discards the target.

use super::mvi::{Intent, Reducer, UiState};
use crate::model::Product;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DeleteDialogState {
    #[default]
    Idle,
    ConfirmPending {
        id: String,
        name: String,
    },
}

impl UiState for DeleteDialogState {}

impl DeleteDialogState {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::ConfirmPending { .. })
    }

    pub fn target_id(&self) -> Option<&str> {
        match self {
            Self::ConfirmPending { id, .. } => Some(id),
            Self::Idle => None,
        }
    }

    /// The question shown to the user, e.g. `Delete "Pen"?`.
    pub fn prompt(&self) -> Option<String> {
        match self {
            Self::ConfirmPending { name, .. } => Some(format!("Delete \"{name}\"?")),
            Self::Idle => None,
        }
    }
}

#[derive(Debug, Clone)]
pub enum DeleteIntent {
    Select(Product),
    Cancel,
    Confirm,
}

impl Intent for DeleteIntent {}

pub struct DeleteReducer;

impl Reducer for DeleteReducer {
    type State = DeleteDialogState;
    type Intent = DeleteIntent;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            // A new selection replaces whatever was pending.
            DeleteIntent::Select(product) => DeleteDialogState::ConfirmPending {
                id: product.id,
                name: product.name,
            },
            DeleteIntent::Cancel | DeleteIntent::Confirm => DeleteDialogState::Idle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pen() -> Product {
        Product::new("p1", "Pen", "Blue ink", 1.5)
    }

    #[test]
    fn select_arms_the_dialog_with_a_prompt() {
        let state = DeleteReducer::reduce(DeleteDialogState::Idle, DeleteIntent::Select(pen()));
        assert!(state.is_pending());
        assert_eq!(state.target_id(), Some("p1"));
        assert_eq!(state.prompt().as_deref(), Some("Delete \"Pen\"?"));
    }

    #[test]
    fn cancel_discards_the_target() {
        let state = DeleteReducer::reduce(DeleteDialogState::Idle, DeleteIntent::Select(pen()));
        let state = DeleteReducer::reduce(state, DeleteIntent::Cancel);
        assert_eq!(state, DeleteDialogState::Idle);
        assert_eq!(state.prompt(), None);
    }

    #[test]
    fn reselecting_replaces_the_target() {
        let state = DeleteReducer::reduce(DeleteDialogState::Idle, DeleteIntent::Select(pen()));
        let ink = Product::new("p2", "Ink", "", 4.0);
        let state = DeleteReducer::reduce(state, DeleteIntent::Select(ink));
        assert_eq!(state.target_id(), Some("p2"));
    }
}

//! Model-View-Intent primitives for the storefront's screen state.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! Reducers are pure. Anything that talks to the store lives in
//! [`StorefrontController`](super::StorefrontController), which feeds the results back in as
//! intents.

/// Marker trait for screen state objects.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// Marker trait for user actions and async results.
pub trait Intent: Send + 'static {}

/// The only place where state transitions happen: `(State, Intent) -> State`.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}

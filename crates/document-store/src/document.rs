//! # Document Trait
//!
//! The `Document` trait is the contract a record type implements to be stored in a
//! [`Collection`](crate::Collection). The collection owns ids and ordering; the document
//! only describes its body and gets a chance to veto writes through async lifecycle hooks.
//!
//! # Provided Methods (Hooks)
//! - [`Document::on_create`]
//! - [`Document::on_delete`]
//!
//! Both default to `Ok(())`. Implement them to mirror backend-side rules (e.g. field
//! constraints) that must hold no matter which client wrote the document.

use async_trait::async_trait;
use std::fmt::Debug;

/// A record type that can live in a [`Collection`](crate::Collection).
///
/// # Async & Context
/// Hooks are `#[async_trait]` so they may await other collections. The `Context` type is
/// injected into every hook by [`Collection::run`](crate::Collection::run), which lets
/// dependencies be bound after the collection was constructed.
#[async_trait]
pub trait Document: Clone + Debug + Send + Sync + 'static {
    /// Runtime dependencies injected into the hooks. Use `()` if none are needed.
    type Context: Send + Sync;

    /// Error returned by a hook that refuses a write.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Called with the freshly assigned id before the document is inserted.
    /// Returning an error rejects the write and nothing is stored.
    async fn on_create(&self, _id: &str, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called immediately before the document is removed.
    async fn on_delete(&self, _id: &str, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// A stored document body paired with the id the collection assigned to it.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot<T> {
    pub id: String,
    pub data: T,
}

impl<T> Snapshot<T> {
    pub fn new(id: impl Into<String>, data: T) -> Self {
        Self {
            id: id.into(),
            data,
        }
    }
}

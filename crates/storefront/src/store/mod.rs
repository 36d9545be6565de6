//! # Product Store
//!
//! The seam between the storefront and the document database holding product records.
//! Everything above this module talks to [`ProductStore`]; the database itself is an
//! external collaborator.
//!
//! ## Structure
//!
//! - [`entity`] - [`Document`](document_store::Document) implementation for
//!   [`ProductRecord`], mirroring the backend's write rules
//! - [`collection`] - [`CollectionProductStore`], the implementation over a
//!   [`CollectionClient`](document_store::CollectionClient)
//! - [`new()`] - factory for the product collection and its store

pub mod collection;
pub mod entity;

pub use collection::*;
pub use entity::*;

use crate::model::ProductRecord;
use crate::session::Session;
use async_trait::async_trait;
use document_store::{AccessRule, Collection, Snapshot, StoreError};

/// Operations the storefront needs from its backend.
///
/// Every call takes the session explicitly; implementations decide what an anonymous
/// session may do.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Persists a record and returns the id the store assigned.
    async fn add(&self, session: &Session, record: ProductRecord) -> Result<String, StoreError>;

    /// All records currently stored.
    async fn get_all(&self, session: &Session)
        -> Result<Vec<Snapshot<ProductRecord>>, StoreError>;

    /// Removes the record with `id`. What happens for an unknown id is up to the store;
    /// [`CollectionProductStore`] reports [`StoreError::NotFound`].
    async fn delete_by_id(&self, session: &Session, id: &str) -> Result<(), StoreError>;
}

/// Creates the product collection and a store backed by it.
///
/// The collection must be spawned with `collection.run(())` before the store is used.
pub fn new(
    name: &str,
    buffer_size: usize,
    access: AccessRule,
) -> (Collection<ProductRecord>, CollectionProductStore) {
    let (collection, client) = Collection::new(name, buffer_size);
    (
        collection.with_access_rule(access),
        CollectionProductStore::new(client),
    )
}

//! # Document Store
//!
//! An in-process document database built on the **Actor Model**. Each named collection is
//! owned by one [`Collection`] task; callers talk to it through a cheap, cloneable
//! [`CollectionClient`] over Tokio channels.
//!
//! ## Architecture Overview
//!
//! 1. **Document Layer** ([`Document`]) - the record type and its create/delete hooks
//! 2. **Runtime Layer** ([`Collection`]) - request processing, ids, access checks
//! 3. **Interface Layer** ([`CollectionClient`]) - typed async calls
//!
//! The surface deliberately matches what a hosted document database offers for a single
//! collection: `add` (the store picks the id), `get`, `get_all`, `delete`.
//!
//! ## Credentials
//!
//! Nothing is ambient. Every call takes the caller's [`Credentials`], and each collection
//! enforces its [`AccessRule`]: by default only signed-in callers get through.
//!
//! ```rust
//! use document_store::{Collection, Credentials, Document, StoreError};
//!
//! #[derive(Clone, Debug)] struct Note { text: String }
//! #[derive(Debug, thiserror::Error)] #[error("note error")] struct NoteError;
//! impl Document for Note { type Context = (); type Error = NoteError; }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (collection, client) = Collection::<Note>::new("notes", 10);
//!     tokio::spawn(collection.run(()));
//!
//!     let anonymous = Credentials::anonymous();
//!     let refused = client.add(&anonymous, Note { text: "hi".into() }).await;
//!     assert!(matches!(refused, Err(StoreError::PermissionDenied(_))));
//!
//!     let alice = Credentials::user("uid_alice", Some("alice@example.com".into()));
//!     let id = client.add(&alice, Note { text: "hi".into() }).await.unwrap();
//!     client.delete(&alice, &id).await.unwrap();
//! }
//! ```
//!
//! ## Testing
//!
//! See the [`mock`] module for scripted collections that inject failures without a task.

pub mod client;
pub mod collection;
pub mod credentials;
pub mod document;
pub mod error;
pub mod message;
pub mod mock;
pub mod telemetry;

pub use client::CollectionClient;
pub use collection::{auto_id, Collection};
pub use credentials::{AccessRule, Credentials};
pub use document::{Document, Snapshot};
pub use error::StoreError;
pub use message::{CollectionRequest, Response};

//! # Collection Messages
//!
//! The request enum sent from [`CollectionClient`](crate::CollectionClient) to
//! [`Collection`](crate::Collection). Each variant carries the caller's credentials and a
//! oneshot sender for the reply.

use crate::credentials::Credentials;
use crate::document::{Document, Snapshot};
use crate::error::StoreError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by collections.
pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

/// Requests a collection understands.
///
/// The set mirrors what a document database exposes for a single collection: add a
/// document under a generated id, read one, read all, delete one.
#[derive(Debug)]
pub enum CollectionRequest<T: Document> {
    Add {
        data: T,
        caller: Credentials,
        respond_to: Response<String>,
    },
    Get {
        id: String,
        caller: Credentials,
        respond_to: Response<Option<Snapshot<T>>>,
    },
    GetAll {
        caller: Credentials,
        respond_to: Response<Vec<Snapshot<T>>>,
    },
    Delete {
        id: String,
        caller: Credentials,
        respond_to: Response<()>,
    },
}

impl<T: Document> CollectionRequest<T> {
    pub(crate) fn caller(&self) -> &Credentials {
        match self {
            CollectionRequest::Add { caller, .. }
            | CollectionRequest::Get { caller, .. }
            | CollectionRequest::GetAll { caller, .. }
            | CollectionRequest::Delete { caller, .. } => caller,
        }
    }

    pub(crate) fn operation(&self) -> &'static str {
        match self {
            CollectionRequest::Add { .. } => "add",
            CollectionRequest::Get { .. } => "get",
            CollectionRequest::GetAll { .. } => "get_all",
            CollectionRequest::Delete { .. } => "delete",
        }
    }
}

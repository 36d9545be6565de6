//! # Collection Client
//!
//! The cloneable handle callers use to talk to a [`Collection`](crate::Collection).

use crate::credentials::Credentials;
use crate::document::{Document, Snapshot};
use crate::error::StoreError;
use crate::message::CollectionRequest;
use tokio::sync::{mpsc, oneshot};

/// A type-safe client for a `Collection<T>`.
///
/// Holds only a channel sender, so cloning is cheap and clones can be moved into other
/// tasks. Every method takes the caller's [`Credentials`] explicitly.
///
/// If the collection task has stopped, calls fail with [`StoreError::Unavailable`].
pub struct CollectionClient<T: Document> {
    sender: mpsc::Sender<CollectionRequest<T>>,
}

impl<T: Document> Clone for CollectionClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: Document> CollectionClient<T> {
    pub fn new(sender: mpsc::Sender<CollectionRequest<T>>) -> Self {
        Self { sender }
    }

    /// Stores `data` under a newly generated id and returns that id.
    pub async fn add(&self, caller: &Credentials, data: T) -> Result<String, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(CollectionRequest::Add {
                data,
                caller: caller.clone(),
                respond_to,
            })
            .await
            .map_err(|_| StoreError::Unavailable)?;
        response.await.map_err(|_| StoreError::Dropped)?
    }

    pub async fn get(
        &self,
        caller: &Credentials,
        id: &str,
    ) -> Result<Option<Snapshot<T>>, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(CollectionRequest::Get {
                id: id.to_string(),
                caller: caller.clone(),
                respond_to,
            })
            .await
            .map_err(|_| StoreError::Unavailable)?;
        response.await.map_err(|_| StoreError::Dropped)?
    }

    /// Every document currently in the collection, in insertion order.
    pub async fn get_all(&self, caller: &Credentials) -> Result<Vec<Snapshot<T>>, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(CollectionRequest::GetAll {
                caller: caller.clone(),
                respond_to,
            })
            .await
            .map_err(|_| StoreError::Unavailable)?;
        response.await.map_err(|_| StoreError::Dropped)?
    }

    /// Removes the document with `id`. Unknown ids fail with [`StoreError::NotFound`].
    pub async fn delete(&self, caller: &Credentials, id: &str) -> Result<(), StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(CollectionRequest::Delete {
                id: id.to_string(),
                caller: caller.clone(),
                respond_to,
            })
            .await
            .map_err(|_| StoreError::Unavailable)?;
        response.await.map_err(|_| StoreError::Dropped)?
    }
}

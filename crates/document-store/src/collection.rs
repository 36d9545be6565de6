//! # Collection Actor
//!
//! This module defines [`Collection`], the server half of the store. It owns the documents
//! of one collection and processes [`CollectionRequest`]s one at a time, so the document map
//! needs no locking.

use crate::client::CollectionClient;
use crate::credentials::AccessRule;
use crate::document::{Document, Snapshot};
use crate::error::StoreError;
use crate::message::CollectionRequest;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};
use uuid::Uuid;

const AUTO_ID_LEN: usize = 20;

/// Generates a 20 character lowercase alphanumeric document id.
pub fn auto_id() -> String {
    let mut id = Uuid::new_v4().simple().to_string();
    id.truncate(AUTO_ID_LEN);
    id
}

/// An actor owning the documents of a single named collection.
///
/// **Concurrency Model**:
/// Each collection runs in its own Tokio task and handles requests sequentially, in the
/// order they arrive on the channel. Clients never see a half-applied write.
///
/// # Usage Pattern
///
/// 1.  **Create**: `Collection::new()` returns the collection and a cloneable client.
/// 2.  **Configure**: optionally set an [`AccessRule`] or a custom id generator.
/// 3.  **Run**: spawn `collection.run(context)`.
///
/// ```rust
/// use document_store::{AccessRule, Collection, Credentials, Document};
///
/// #[derive(Clone, Debug)]
/// struct Note { text: String }
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("note error")]
/// struct NoteError;
///
/// impl Document for Note {
///     type Context = ();
///     type Error = NoteError;
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (collection, client) = Collection::<Note>::new("notes", 10);
///     tokio::spawn(collection.with_access_rule(AccessRule::Public).run(()));
///
///     let caller = Credentials::anonymous();
///     let id = client.add(&caller, Note { text: "hi".into() }).await.unwrap();
///     let all = client.get_all(&caller).await.unwrap();
///     assert_eq!(all[0].id, id);
/// }
/// ```
///
/// # Operations
///
/// * **Add**: generate an id, run `on_create`, insert, reply with the id.
/// * **Get**: reply with a snapshot of the document, or `None`.
/// * **GetAll**: reply with snapshots of every document, in insertion order.
/// * **Delete**: `NotFound` if the id is unknown; otherwise run `on_delete` and remove.
///
/// Every request is first checked against the access rule; a refused caller gets
/// [`StoreError::PermissionDenied`] and nothing else happens.
pub struct Collection<T: Document> {
    name: String,
    receiver: mpsc::Receiver<CollectionRequest<T>>,
    documents: HashMap<String, T>,
    order: Vec<String>,
    access: AccessRule,
    next_id_fn: Box<dyn Fn() -> String + Send + Sync>,
}

impl<T: Document> Collection<T> {
    /// Creates a collection and its client.
    ///
    /// `buffer_size` is the capacity of the request channel; when it is full, client calls
    /// wait for space. Defaults: [`AccessRule::Authenticated`] and [`auto_id`] ids.
    pub fn new(name: impl Into<String>, buffer_size: usize) -> (Self, CollectionClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let collection = Self {
            name: name.into(),
            receiver,
            documents: HashMap::new(),
            order: Vec::new(),
            access: AccessRule::default(),
            next_id_fn: Box::new(auto_id),
        };
        (collection, CollectionClient::new(sender))
    }

    pub fn with_access_rule(mut self, access: AccessRule) -> Self {
        self.access = access;
        self
    }

    /// Replaces the id generator. An add whose generated id is already taken fails with
    /// [`StoreError::AlreadyExists`] and stores nothing.
    pub fn with_id_generator(
        mut self,
        next_id_fn: impl Fn() -> String + Send + Sync + 'static,
    ) -> Self {
        self.next_id_fn = Box::new(next_id_fn);
        self
    }

    /// Runs the request loop until every client has been dropped.
    ///
    /// # Context Injection
    /// `context` is passed to every document hook. It can hold clients of other
    /// collections created after this one.
    pub async fn run(mut self, context: T::Context) {
        let collection = self.name.clone();
        info!(%collection, access = ?self.access, "Collection started");

        while let Some(msg) = self.receiver.recv().await {
            if !self.access.permits(msg.caller()) {
                let operation = msg.operation();
                warn!(%collection, operation, "Permission denied");
                let reason = format!("{operation} on '{collection}' requires a signed-in user");
                deny(msg, reason);
                continue;
            }

            match msg {
                CollectionRequest::Add {
                    data, respond_to, ..
                } => {
                    debug!(%collection, ?data, "Add");
                    let id = (self.next_id_fn)();
                    if self.documents.contains_key(&id) {
                        warn!(%collection, %id, "Id already taken");
                        let _ = respond_to.send(Err(StoreError::AlreadyExists(id)));
                        continue;
                    }
                    if let Err(e) = data.on_create(&id, &context).await {
                        warn!(%collection, error = %e, "on_create failed");
                        let _ = respond_to.send(Err(StoreError::Rejected(Box::new(e))));
                        continue;
                    }
                    self.order.push(id.clone());
                    self.documents.insert(id.clone(), data);
                    info!(%collection, %id, size = self.documents.len(), "Created");
                    let _ = respond_to.send(Ok(id));
                }
                CollectionRequest::Get { id, respond_to, .. } => {
                    let snapshot = self
                        .documents
                        .get(&id)
                        .map(|data| Snapshot::new(id.clone(), data.clone()));
                    debug!(%collection, %id, found = snapshot.is_some(), "Get");
                    let _ = respond_to.send(Ok(snapshot));
                }
                CollectionRequest::GetAll { respond_to, .. } => {
                    let snapshots: Vec<Snapshot<T>> = self
                        .order
                        .iter()
                        .filter_map(|id| {
                            self.documents
                                .get(id)
                                .map(|data| Snapshot::new(id.clone(), data.clone()))
                        })
                        .collect();
                    debug!(%collection, count = snapshots.len(), "GetAll");
                    let _ = respond_to.send(Ok(snapshots));
                }
                CollectionRequest::Delete { id, respond_to, .. } => {
                    debug!(%collection, %id, "Delete");
                    let Some(data) = self.documents.get(&id) else {
                        warn!(%collection, %id, "Not found");
                        let _ = respond_to.send(Err(StoreError::NotFound(id)));
                        continue;
                    };
                    if let Err(e) = data.on_delete(&id, &context).await {
                        warn!(%collection, %id, error = %e, "on_delete failed");
                        let _ = respond_to.send(Err(StoreError::Rejected(Box::new(e))));
                        continue;
                    }
                    self.documents.remove(&id);
                    self.order.retain(|existing| existing != &id);
                    info!(%collection, %id, size = self.documents.len(), "Deleted");
                    let _ = respond_to.send(Ok(()));
                }
            }
        }

        info!(%collection, size = self.documents.len(), "Shutdown");
    }
}

fn deny<T: Document>(msg: CollectionRequest<T>, reason: String) {
    let err = StoreError::PermissionDenied(reason);
    match msg {
        CollectionRequest::Add { respond_to, .. } => {
            let _ = respond_to.send(Err(err));
        }
        CollectionRequest::Get { respond_to, .. } => {
            let _ = respond_to.send(Err(err));
        }
        CollectionRequest::GetAll { respond_to, .. } => {
            let _ = respond_to.send(Err(err));
        }
        CollectionRequest::Delete { respond_to, .. } => {
            let _ = respond_to.send(Err(err));
        }
    }
}

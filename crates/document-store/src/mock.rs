//! # Mock Collections & Testing Guide
//!
//! [`MockCollection<T>`] hands out a real [`CollectionClient<T>`] whose requests are
//! answered from a queue of expectations instead of a running [`Collection`](crate::Collection).
//! Use it to test code *around* a client without spawning the actor.
//!
//! | Feature | MockCollection | Real Collection |
//! |---------|----------------|-----------------|
//! | **State** | None, replies are scripted | Real documents |
//! | **Error Injection** | Easy (`return_err`) | Needs a shut-down task or a bad caller |
//! | **Use Case** | Services and adapters over a client | The collection itself, full system |
//!
//! ## Simulating an outage
//!
//! ```rust
//! use document_store::mock::MockCollection;
//! use document_store::{Credentials, Document, StoreError};
//!
//! #[derive(Clone, Debug)] struct Note;
//! #[derive(Debug, thiserror::Error)] #[error("Err")] struct NoteError;
//! impl Document for Note { type Context = (); type Error = NoteError; }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockCollection::<Note>::new();
//!     mock.expect_get_all().return_err(StoreError::Backend("network down".into()));
//!
//!     let result = mock.client().get_all(&Credentials::anonymous()).await;
//!     assert!(matches!(result, Err(StoreError::Backend(_))));
//!     mock.verify();
//! }
//! ```
//!
//! For step-by-step control (inspect the payload, then answer), use
//! [`create_mock_client`] with [`expect_add`], [`expect_get_all`] or [`expect_delete`].

use crate::client::CollectionClient;
use crate::credentials::Credentials;
use crate::document::{Document, Snapshot};
use crate::error::StoreError;
use crate::message::CollectionRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

enum Expectation<T: Document> {
    Add {
        response: Result<String, StoreError>,
    },
    Get {
        response: Result<Option<Snapshot<T>>, StoreError>,
    },
    GetAll {
        response: Result<Vec<Snapshot<T>>, StoreError>,
    },
    Delete {
        id: String,
        response: Result<(), StoreError>,
    },
}

type Expectations<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A scripted stand-in for a collection.
///
/// Expectations are consumed in order. A request that does not match the next expectation
/// panics the background task, which surfaces to the caller as [`StoreError::Dropped`].
pub struct MockCollection<T: Document> {
    client: CollectionClient<T>,
    expectations: Expectations<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: Document> Default for MockCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Document> MockCollection<T> {
    /// Creates a mock with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<CollectionRequest<T>>(100);
        let expectations: Expectations<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = queue.lock().unwrap().pop_front();

                match (request, expectation) {
                    (
                        CollectionRequest::Add { respond_to, .. },
                        Some(Expectation::Add { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        CollectionRequest::Get { respond_to, .. },
                        Some(Expectation::Get { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        CollectionRequest::GetAll { respond_to, .. },
                        Some(Expectation::GetAll { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        CollectionRequest::Delete { id, respond_to, .. },
                        Some(Expectation::Delete {
                            id: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(id, expected, "delete called with an unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (request, _) => {
                        panic!("Unexpected {} request", request.operation());
                    }
                }
            }
        });

        Self {
            client: CollectionClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns a client wired to this mock.
    pub fn client(&self) -> CollectionClient<T> {
        self.client.clone()
    }

    pub fn expect_add(&mut self) -> ExpectationBuilder<T, String> {
        ExpectationBuilder::new(self.expectations.clone(), |response| Expectation::Add {
            response,
        })
    }

    pub fn expect_get(&mut self) -> ExpectationBuilder<T, Option<Snapshot<T>>> {
        ExpectationBuilder::new(self.expectations.clone(), |response| Expectation::Get {
            response,
        })
    }

    pub fn expect_get_all(&mut self) -> ExpectationBuilder<T, Vec<Snapshot<T>>> {
        ExpectationBuilder::new(self.expectations.clone(), |response| {
            Expectation::GetAll { response }
        })
    }

    /// Expects a `delete` of exactly `id`.
    pub fn expect_delete(&mut self, id: impl Into<String>) -> ExpectationBuilder<T, ()> {
        let id = id.into();
        ExpectationBuilder::new(self.expectations.clone(), move |response| {
            Expectation::Delete { id, response }
        })
    }

    /// Panics if any expectation is still queued.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().unwrap().len();
        if remaining != 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

/// Completes an expectation with its scripted reply.
pub struct ExpectationBuilder<T: Document, R> {
    expectations: Expectations<T>,
    build: Box<dyn FnOnce(Result<R, StoreError>) -> Expectation<T> + Send>,
}

impl<T: Document, R> ExpectationBuilder<T, R> {
    fn new(
        expectations: Expectations<T>,
        build: impl FnOnce(Result<R, StoreError>) -> Expectation<T> + Send + 'static,
    ) -> Self {
        Self {
            expectations,
            build: Box::new(build),
        }
    }

    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    pub fn return_err(self, error: StoreError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, StoreError>) {
        let expectation = (self.build)(response);
        self.expectations.lock().unwrap().push_back(expectation);
    }
}

// =============================================================================
// STEP-BY-STEP HELPERS
// =============================================================================

/// Creates a client and the receiver its requests land on.
///
/// Spawn the code under test, then pull its requests off the receiver with the `expect_*`
/// helpers and answer them through the returned oneshot senders.
pub fn create_mock_client<T: Document>(
    buffer_size: usize,
) -> (CollectionClient<T>, mpsc::Receiver<CollectionRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (CollectionClient::new(sender), receiver)
}

/// Next request, if it is an `Add`.
pub async fn expect_add<T: Document>(
    receiver: &mut mpsc::Receiver<CollectionRequest<T>>,
) -> Option<(T, Credentials, oneshot::Sender<Result<String, StoreError>>)> {
    match receiver.recv().await {
        Some(CollectionRequest::Add {
            data,
            caller,
            respond_to,
        }) => Some((data, caller, respond_to)),
        _ => None,
    }
}

/// Next request, if it is a `GetAll`.
pub async fn expect_get_all<T: Document>(
    receiver: &mut mpsc::Receiver<CollectionRequest<T>>,
) -> Option<(
    Credentials,
    oneshot::Sender<Result<Vec<Snapshot<T>>, StoreError>>,
)> {
    match receiver.recv().await {
        Some(CollectionRequest::GetAll { caller, respond_to }) => Some((caller, respond_to)),
        _ => None,
    }
}

/// Next request, if it is a `Delete`.
pub async fn expect_delete<T: Document>(
    receiver: &mut mpsc::Receiver<CollectionRequest<T>>,
) -> Option<(String, Credentials, oneshot::Sender<Result<(), StoreError>>)> {
    match receiver.recv().await {
        Some(CollectionRequest::Delete {
            id,
            caller,
            respond_to,
        }) => Some((id, caller, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Note {
        text: String,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("note error")]
    struct NoteError;

    impl Document for Note {
        type Context = ();
        type Error = NoteError;
    }

    #[tokio::test]
    async fn step_by_step_add() {
        let (client, mut receiver) = create_mock_client::<Note>(10);

        let add_task = tokio::spawn(async move {
            let caller = Credentials::user("uid_7", None);
            client.add(&caller, Note { text: "hello".into() }).await
        });

        let (data, caller, responder) = expect_add(&mut receiver)
            .await
            .expect("Expected Add request");
        assert_eq!(data.text, "hello");
        assert_eq!(caller.uid(), Some("uid_7"));
        responder.send(Ok("note_1".to_string())).unwrap();

        let result = add_task.await.unwrap();
        assert_eq!(result.unwrap(), "note_1");
    }

    #[tokio::test]
    async fn scripted_replies_are_consumed_in_order() {
        let mut mock = MockCollection::<Note>::new();
        mock.expect_add().return_ok("note_1".to_string());
        mock.expect_get_all().return_ok(vec![Snapshot::new(
            "note_1",
            Note {
                text: "hello".into(),
            },
        )]);
        mock.expect_delete("note_1")
            .return_err(StoreError::Backend("offline".into()));

        let client = mock.client();
        let caller = Credentials::anonymous();

        let id = client
            .add(&caller, Note { text: "hello".into() })
            .await
            .unwrap();
        let all = client.get_all(&caller).await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, id);

        let deleted = client.delete(&caller, &id).await;
        assert!(matches!(deleted, Err(StoreError::Backend(msg)) if msg == "offline"));

        mock.verify();
    }
}

//! # Collection-backed Product Store
//!
//! Wraps a `CollectionClient<ProductRecord>` and exposes it as a [`ProductStore`].
use super::ProductStore;
use crate::model::ProductRecord;
use crate::session::Session;
use async_trait::async_trait;
use document_store::{CollectionClient, Snapshot, StoreError};
use tracing::{debug, instrument};

/// [`ProductStore`] over the document-store product collection.
#[derive(Clone)]
pub struct CollectionProductStore {
    inner: CollectionClient<ProductRecord>,
}

impl CollectionProductStore {
    pub fn new(inner: CollectionClient<ProductRecord>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ProductStore for CollectionProductStore {
    #[instrument(skip(self, session), fields(user = session.label()))]
    async fn add(&self, session: &Session, record: ProductRecord) -> Result<String, StoreError> {
        debug!("Sending request");
        self.inner.add(session.credentials(), record).await
    }

    #[instrument(skip(self, session), fields(user = session.label()))]
    async fn get_all(
        &self,
        session: &Session,
    ) -> Result<Vec<Snapshot<ProductRecord>>, StoreError> {
        debug!("Sending request");
        self.inner.get_all(session.credentials()).await
    }

    #[instrument(skip(self, session), fields(user = session.label()))]
    async fn delete_by_id(&self, session: &Session, id: &str) -> Result<(), StoreError> {
        debug!("Sending request");
        self.inner.delete(session.credentials(), id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use document_store::mock::{create_mock_client, expect_add, expect_delete};

    #[tokio::test]
    async fn add_forwards_record_and_session_credentials() {
        let (client, mut receiver) = create_mock_client::<ProductRecord>(10);
        let store = CollectionProductStore::new(client);

        let add_task = tokio::spawn(async move {
            let session = Session::signed_in("uid_1", "ana@example.com");
            let record = ProductRecord {
                name: "Pen".into(),
                description: "Blue ink".into(),
                price: 1.5,
            };
            store.add(&session, record).await
        });

        let (record, caller, responder) = expect_add(&mut receiver)
            .await
            .expect("Expected Add request");
        assert_eq!(record.name, "Pen");
        assert_eq!(caller.email(), Some("ana@example.com"));
        responder.send(Ok("p1".to_string())).unwrap();

        assert_eq!(add_task.await.unwrap().unwrap(), "p1");
    }

    #[tokio::test]
    async fn delete_forwards_store_failure() {
        let (client, mut receiver) = create_mock_client::<ProductRecord>(10);
        let store = CollectionProductStore::new(client);

        let delete_task = tokio::spawn(async move {
            store
                .delete_by_id(&Session::signed_in("uid_1", "ana@example.com"), "p9")
                .await
        });

        let (id, _caller, responder) = expect_delete(&mut receiver)
            .await
            .expect("Expected Delete request");
        assert_eq!(id, "p9");
        responder.send(Err(StoreError::NotFound(id))).unwrap();

        let result = delete_task.await.unwrap();
        assert!(matches!(result, Err(StoreError::NotFound(id)) if id == "p9"));
    }
}

//! # Product Service
//!
//! Mediates between view state and the [`ProductStore`]: list, create, delete. Each
//! operation is independently async and reports a tagged result; store failures are
//! forwarded with their message, never retried.
//!
//! Overlapping calls are not deduplicated. Two quick submits of the same draft create two
//! products.

use crate::error::StorefrontError;
use crate::model::{Product, ProductDraft};
use crate::session::Session;
use crate::store::ProductStore;
use std::sync::Arc;
use tracing::{info, instrument, warn};

#[derive(Clone)]
pub struct ProductService {
    store: Arc<dyn ProductStore>,
}

impl ProductService {
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        Self { store }
    }

    /// Fetches every product in the store.
    ///
    /// On `Err` the caller knows nothing about the catalogue; it must not read the
    /// failure as "there are no products".
    #[instrument(skip(self, session))]
    pub async fn list_products(&self, session: &Session) -> Result<Vec<Product>, StorefrontError> {
        match self.store.get_all(session).await {
            Ok(snapshots) => {
                let products: Vec<Product> = snapshots.into_iter().map(Product::from).collect();
                info!(count = products.len(), "Listed products");
                Ok(products)
            }
            Err(e) => {
                warn!(error = %e, "Listing products failed");
                Err(e.into())
            }
        }
    }

    /// Submits a new product and returns the id the store assigned.
    #[instrument(skip(self, session))]
    pub async fn create_product(
        &self,
        session: &Session,
        draft: ProductDraft,
    ) -> Result<String, StorefrontError> {
        match self.store.add(session, draft.into_record()).await {
            Ok(id) => {
                info!(%id, "Created product");
                Ok(id)
            }
            Err(e) => {
                warn!(error = %e, "Creating product failed");
                Err(e.into())
            }
        }
    }

    #[instrument(skip(self, session))]
    pub async fn delete_product(&self, session: &Session, id: &str) -> Result<(), StorefrontError> {
        match self.store.delete_by_id(session, id).await {
            Ok(()) => {
                info!(%id, "Deleted product");
                Ok(())
            }
            Err(e) => {
                warn!(%id, error = %e, "Deleting product failed");
                Err(e.into())
            }
        }
    }
}

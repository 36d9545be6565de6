//! In-memory [`ProductStore`] that counts calls and can simulate an outage.

use async_trait::async_trait;
use document_store::{Snapshot, StoreError};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use storefront::controller::StorefrontController;
use storefront::model::ProductRecord;
use storefront::service::ProductService;
use storefront::session::Session;
use storefront::store::ProductStore;

#[derive(Default)]
pub struct FakeProductStore {
    records: Mutex<Vec<Snapshot<ProductRecord>>>,
    next_id: AtomicUsize,
    pub adds: AtomicUsize,
    pub listings: AtomicUsize,
    pub deletes: AtomicUsize,
    unreachable: AtomicBool,
    listing_fails: AtomicBool,
}

#[allow(dead_code)]
impl FakeProductStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn seed(&self, id: &str, name: &str, price: f64) {
        self.records.lock().unwrap().push(Snapshot::new(
            id,
            ProductRecord {
                name: name.into(),
                description: String::new(),
                price,
            },
        ));
    }

    /// Every call fails with [`StoreError::Backend`].
    pub fn set_unreachable(&self, unreachable: bool) {
        self.unreachable.store(unreachable, Ordering::SeqCst);
    }

    /// Only `get_all` fails.
    pub fn set_listing_fails(&self, fails: bool) {
        self.listing_fails.store(fails, Ordering::SeqCst);
    }

    pub fn ids(&self) -> Vec<String> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .map(|s| s.id.clone())
            .collect()
    }

    pub fn calls(&self) -> usize {
        self.adds.load(Ordering::SeqCst)
            + self.listings.load(Ordering::SeqCst)
            + self.deletes.load(Ordering::SeqCst)
    }

    fn check_reachable(&self) -> Result<(), StoreError> {
        if self.unreachable.load(Ordering::SeqCst) {
            return Err(StoreError::Backend("network unreachable".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl ProductStore for FakeProductStore {
    async fn add(&self, _session: &Session, record: ProductRecord) -> Result<String, StoreError> {
        self.adds.fetch_add(1, Ordering::SeqCst);
        self.check_reachable()?;
        let id = format!("fake_{}", self.next_id.fetch_add(1, Ordering::SeqCst) + 1);
        self.records
            .lock()
            .unwrap()
            .push(Snapshot::new(id.clone(), record));
        Ok(id)
    }

    async fn get_all(
        &self,
        _session: &Session,
    ) -> Result<Vec<Snapshot<ProductRecord>>, StoreError> {
        self.listings.fetch_add(1, Ordering::SeqCst);
        self.check_reachable()?;
        if self.listing_fails.load(Ordering::SeqCst) {
            return Err(StoreError::Backend(String::new()));
        }
        Ok(self.records.lock().unwrap().clone())
    }

    async fn delete_by_id(&self, _session: &Session, id: &str) -> Result<(), StoreError> {
        self.deletes.fetch_add(1, Ordering::SeqCst);
        self.check_reachable()?;
        let mut records = self.records.lock().unwrap();
        let before = records.len();
        records.retain(|s| s.id != id);
        if records.len() == before {
            return Err(StoreError::NotFound(id.to_string()));
        }
        Ok(())
    }
}

#[allow(dead_code)]
pub fn controller_over(store: Arc<FakeProductStore>) -> StorefrontController {
    StorefrontController::new(
        ProductService::new(store),
        Session::signed_in("uid_ana", "ana@example.com"),
    )
}

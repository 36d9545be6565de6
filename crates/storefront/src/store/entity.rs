//! [`Document`] implementation for [`ProductRecord`].
//!
//! The collection refuses records that break the product invariants even if a client
//! skipped validation, the same way backend security rules would.

use crate::model::{is_valid_price, ProductRecord};
use async_trait::async_trait;
use document_store::Document;
use thiserror::Error;

/// Reasons the product collection refuses a write.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductRecordError {
    #[error("product name must not be blank")]
    BlankName,
    #[error("product price must be > 0, got {0}")]
    InvalidPrice(f64),
}

#[async_trait]
impl Document for ProductRecord {
    type Context = ();
    type Error = ProductRecordError;

    async fn on_create(&self, _id: &str, _ctx: &()) -> Result<(), ProductRecordError> {
        if self.name.trim().is_empty() {
            return Err(ProductRecordError::BlankName);
        }
        if !is_valid_price(self.price) {
            return Err(ProductRecordError::InvalidPrice(self.price));
        }
        Ok(())
    }
}

use crate::error::ValidationError;
use document_store::Snapshot;
use serde::{Deserialize, Serialize};

/// A product as shown in the catalogue.
///
/// The `id` is assigned by the store; a `Product` only exists for records that were read
/// back from it. New products start life as a [`ProductDraft`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// # Arguments
    /// * `id` - Identifier assigned by the store
    /// * `name` - Product name
    /// * `description` - Free text, may be empty
    /// * `price` - Unit price
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            price,
        }
    }
}

impl From<Snapshot<ProductRecord>> for Product {
    fn from(snapshot: Snapshot<ProductRecord>) -> Self {
        let ProductRecord {
            name,
            description,
            price,
        } = snapshot.data;
        Self {
            id: snapshot.id,
            name,
            description,
            price,
        }
    }
}

/// The document body persisted in the `products` collection (everything but the id).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
}

/// A validated creation payload.
///
/// Fields are private: the only ways to obtain a draft are [`ProductDraft::parse`] and
/// [`ProductDraft::new`], both of which enforce a non-blank name and a finite price > 0.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    name: String,
    description: String,
    price: f64,
}

impl ProductDraft {
    /// Validates raw form input. `price_text` may carry surrounding whitespace.
    ///
    /// The name is checked first, so a form with both fields wrong reports the name.
    pub fn parse(name: &str, description: &str, price_text: &str) -> Result<Self, ValidationError> {
        if name.trim().is_empty() {
            return Err(ValidationError::NameRequired);
        }
        let price = price_text
            .trim()
            .parse::<f64>()
            .map_err(|_| ValidationError::InvalidPrice)?;
        Self::new(name, description, price)
    }

    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::NameRequired);
        }
        if !is_valid_price(price) {
            return Err(ValidationError::InvalidPrice);
        }
        Ok(Self {
            name,
            description: description.into(),
            price,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn into_record(self) -> ProductRecord {
        ProductRecord {
            name: self.name,
            description: self.description,
            price: self.price,
        }
    }
}

pub(crate) fn is_valid_price(price: f64) -> bool {
    price.is_finite() && price > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_valid_form() {
        let draft = ProductDraft::parse("Pen", "Blue ink", "1.50").unwrap();
        assert_eq!(draft.name(), "Pen");
        assert_eq!(draft.description(), "Blue ink");
        assert_eq!(draft.price(), 1.5);
    }

    #[test]
    fn blank_name_is_rejected_before_price() {
        assert_eq!(
            ProductDraft::parse("   ", "", "abc"),
            Err(ValidationError::NameRequired)
        );
    }

    #[test]
    fn non_positive_or_unparseable_prices_are_rejected() {
        for text in ["-1", "0", "0.0", "", "abc", "NaN", "inf", "1,50"] {
            assert_eq!(
                ProductDraft::parse("Pen", "", text),
                Err(ValidationError::InvalidPrice),
                "price text {text:?} should be rejected"
            );
        }
    }

    #[test]
    fn price_whitespace_is_ignored() {
        let draft = ProductDraft::parse("Pen", "", " 2 ").unwrap();
        assert_eq!(draft.price(), 2.0);
    }

    #[test]
    fn snapshot_maps_to_product_with_its_id() {
        let record = ProductDraft::new("Pen", "", 1.5).unwrap().into_record();
        let product = Product::from(Snapshot::new("abc123", record));
        assert_eq!(product, Product::new("abc123", "Pen", "", 1.5));
    }
}

//! # Storefront
//!
//! Product catalogue management over a document collection: list, add and delete
//! products, with the screen state a view binds to.
//!
//! - [`store`] - the [`ProductStore`](store::ProductStore) seam and its collection-backed
//!   implementation
//! - [`service`] - [`ProductService`](service::ProductService), async CRUD with tagged results
//! - [`controller`] - [`StorefrontController`](controller::StorefrontController), the
//!   observable product list plus form and delete-dialog reducers
//! - [`lifecycle`] - [`StorefrontSystem`](lifecycle::StorefrontSystem), start and shutdown
//! - [`config`] - TOML file plus environment overrides

pub mod config;
pub mod controller;
pub mod error;
pub mod lifecycle;
pub mod model;
pub mod service;
pub mod session;
pub mod store;

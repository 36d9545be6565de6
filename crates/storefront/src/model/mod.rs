//! Pure data structures for the catalogue.

pub mod product;

pub use product::*;

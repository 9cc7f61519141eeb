//! Products domain module.
//!
//! This crate contains the product variant hierarchy and its pricing rules,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no
//! storage).

pub mod product;

pub use product::{
    ComposedProduct, FixedPriceProduct, Product, ProductDetails, VariablePriceProduct,
};

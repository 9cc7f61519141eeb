//! `caja-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! money, tax/discount rates, identifiers, and the [`Priceable`] capability
//! the whole pricing model hangs off.

pub mod entity;
pub mod error;
pub mod format;
pub mod id;
pub mod money;
pub mod priceable;
pub mod rate;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::ProductId;
pub use money::Money;
pub use priceable::Priceable;
pub use rate::{DiscountRate, TaxRate};
pub use value_object::ValueObject;

//! Invoicing domain module.
//!
//! This crate contains the invoice aggregate: an ordered collection of
//! top-level products whose payable values are summed for a grand total.

pub mod invoice;

pub use invoice::Invoice;

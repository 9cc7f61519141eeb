//! The pricing capability every sellable thing implements.

use crate::money::Money;

/// Anything that can report a payable monetary value.
///
/// `value_to_pay` is a pure computation over the object's own (immutable)
/// state; for composed types it recurses through the referenced objects' same
/// computation. There are no error conditions: malformed inputs (negative
/// prices, out-of-range rates) yield a numerically defined result rather than
/// failing.
pub trait Priceable {
    /// The amount required to pay, post-tax and post-discount.
    fn value_to_pay(&self) -> Money;
}

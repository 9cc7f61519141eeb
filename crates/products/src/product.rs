use std::fmt;
use std::sync::Arc;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use caja_core::{format, DiscountRate, Entity, Money, Priceable, ProductId, TaxRate};

/// The base shape shared by every product variant: identity, label, unit
/// price, and tax rate. Immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDetails {
    id: ProductId,
    description: String,
    price: Money,
    tax_rate: TaxRate,
}

impl ProductDetails {
    pub fn new(
        id: ProductId,
        description: impl Into<String>,
        price: Money,
        tax_rate: TaxRate,
    ) -> Self {
        Self {
            id,
            description: description.into(),
            price,
            tax_rate,
        }
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn tax_rate(&self) -> TaxRate {
        self.tax_rate
    }
}

/// Shared base rendering: `<id> <description> Price: <currency> Tax: <percent>`.
///
/// Variant renderers call this and append their own fields, rather than
/// chaining through an inherited `to_string`.
fn write_summary(f: &mut fmt::Formatter<'_>, details: &ProductDetails) -> fmt::Result {
    write!(
        f,
        "{} {} Price: {} Tax: {}",
        details.id, details.description, details.price, details.tax_rate
    )
}

/// A product charged at its unit price plus tax.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedPriceProduct {
    details: ProductDetails,
}

impl FixedPriceProduct {
    pub fn new(details: ProductDetails) -> Self {
        Self { details }
    }

    pub fn details(&self) -> &ProductDetails {
        &self.details
    }
}

impl Priceable for FixedPriceProduct {
    fn value_to_pay(&self) -> Money {
        self.details.price.with_tax(self.details.tax_rate)
    }
}

impl fmt::Display for FixedPriceProduct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_summary(f, &self.details)
    }
}

/// A product charged by a continuous measured quantity (e.g. weight) times
/// unit price, plus tax.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariablePriceProduct {
    details: ProductDetails,
    measurement: String,
    quantity: Decimal,
}

impl VariablePriceProduct {
    pub fn new(details: ProductDetails, measurement: impl Into<String>, quantity: Decimal) -> Self {
        Self {
            details,
            measurement: measurement.into(),
            quantity,
        }
    }

    pub fn details(&self) -> &ProductDetails {
        &self.details
    }

    pub fn measurement(&self) -> &str {
        &self.measurement
    }

    pub fn quantity(&self) -> Decimal {
        self.quantity
    }
}

impl Priceable for VariablePriceProduct {
    fn value_to_pay(&self) -> Money {
        (self.details.price * self.quantity).with_tax(self.details.tax_rate)
    }
}

impl fmt::Display for VariablePriceProduct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_summary(f, &self.details)?;
        write!(
            f,
            " Measurement: {} Quantity: {} Value to pay: {}",
            self.measurement,
            format::quantity(self.quantity),
            self.value_to_pay()
        )
    }
}

/// A bundle of other products sold together at an aggregate discount.
///
/// Components are shared references: the same product may sit in a bundle and
/// on an invoice at the same time. Since products are immutable after
/// construction, an `Arc` cycle cannot be built here; composition is acyclic
/// by construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComposedProduct {
    details: ProductDetails,
    components: Vec<Arc<Product>>,
    discount: DiscountRate,
}

impl ComposedProduct {
    pub fn new(
        details: ProductDetails,
        components: Vec<Arc<Product>>,
        discount: DiscountRate,
    ) -> Self {
        Self {
            details,
            components,
            discount,
        }
    }

    pub fn details(&self) -> &ProductDetails {
        &self.details
    }

    /// Components in their stored (insertion) order.
    pub fn components(&self) -> &[Arc<Product>] {
        &self.components
    }

    pub fn discount(&self) -> DiscountRate {
        self.discount
    }
}

impl Priceable for ComposedProduct {
    fn value_to_pay(&self) -> Money {
        // Summation follows stored order; an empty bundle is worth zero
        // whatever the discount says.
        self.components
            .iter()
            .map(|component| component.value_to_pay())
            .sum::<Money>()
            .less_discount(self.discount)
    }
}

impl fmt::Display for ComposedProduct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_summary(f, &self.details)?;
        write!(
            f,
            " Discount: {} Value to pay: {}",
            self.discount,
            self.value_to_pay()
        )
    }
}

/// A sellable product, one of the three pricing variants.
///
/// Dispatch is a tagged union matched at the call sites; each variant resolves
/// its own pricing formula.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Product {
    Fixed(FixedPriceProduct),
    Variable(VariablePriceProduct),
    Composed(ComposedProduct),
}

impl Product {
    pub fn details(&self) -> &ProductDetails {
        match self {
            Product::Fixed(p) => p.details(),
            Product::Variable(p) => p.details(),
            Product::Composed(p) => p.details(),
        }
    }

    pub fn id(&self) -> ProductId {
        self.details().id()
    }

    pub fn description(&self) -> &str {
        self.details().description()
    }
}

impl Priceable for Product {
    fn value_to_pay(&self) -> Money {
        match self {
            Product::Fixed(p) => p.value_to_pay(),
            Product::Variable(p) => p.value_to_pay(),
            Product::Composed(p) => p.value_to_pay(),
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Product::Fixed(p) => p.fmt(f),
            Product::Variable(p) => p.fmt(f),
            Product::Composed(p) => p.fmt(f),
        }
    }
}

impl From<FixedPriceProduct> for Product {
    fn from(product: FixedPriceProduct) -> Self {
        Product::Fixed(product)
    }
}

impl From<VariablePriceProduct> for Product {
    fn from(product: VariablePriceProduct) -> Self {
        Product::Variable(product)
    }
}

impl From<ComposedProduct> for Product {
    fn from(product: ComposedProduct) -> Self {
        Product::Composed(product)
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        match self {
            Product::Fixed(p) => &p.details.id,
            Product::Variable(p) => &p.details.id,
            Product::Composed(p) => &p.details.id,
        }
    }
}

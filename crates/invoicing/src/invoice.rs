use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use caja_core::{Money, Priceable};
use caja_products::Product;

/// An ordered collection of top-level products.
///
/// Products are appended and never removed; the same product may also be
/// referenced inside a bundle on the same invoice, in which case its value is
/// counted once per appearance (no deduplication).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    products: Vec<Arc<Product>>,
    issued_at: DateTime<Utc>,
}

impl Invoice {
    /// Create an empty invoice issued now.
    pub fn new() -> Self {
        Self::issued(Utc::now())
    }

    /// Create an empty invoice with an explicit issue timestamp.
    pub fn issued(issued_at: DateTime<Utc>) -> Self {
        Self {
            products: Vec::new(),
            issued_at,
        }
    }

    pub fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at
    }

    /// Append a product; the reference is shared, not owned exclusively.
    pub fn add_product(&mut self, product: Arc<Product>) {
        self.products.push(product);
    }

    /// Products in insertion order.
    pub fn products(&self) -> &[Arc<Product>] {
        &self.products
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for Invoice {
    fn default() -> Self {
        Self::new()
    }
}

impl Priceable for Invoice {
    /// Grand total: each top-level product already resolves its own internal
    /// structure, so this is a plain sum in insertion order.
    fn value_to_pay(&self) -> Money {
        self.products
            .iter()
            .map(|product| product.value_to_pay())
            .sum()
    }
}

impl fmt::Display for Invoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "INVOICE")?;
        writeln!(f, "Issued: {}", self.issued_at.format("%Y-%m-%d"))?;
        writeln!(f, "------------------------------")?;
        for product in &self.products {
            writeln!(f, "{product}")?;
        }
        write!(f, "TOTAL: {}", self.value_to_pay())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use caja_core::{DiscountRate, ProductId, TaxRate};
    use caja_products::{ComposedProduct, FixedPriceProduct, ProductDetails, VariablePriceProduct};

    fn test_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 10, 0, 0).unwrap()
    }

    fn fixed(id: u32, description: &str, price: Decimal, tax: Decimal) -> Arc<Product> {
        Arc::new(Product::from(FixedPriceProduct::new(ProductDetails::new(
            ProductId::new(id),
            description,
            Money::new(price),
            TaxRate::new(tax),
        ))))
    }

    fn variable(id: u32, description: &str, price: Decimal, quantity: Decimal) -> Arc<Product> {
        Arc::new(Product::from(VariablePriceProduct::new(
            ProductDetails::new(
                ProductId::new(id),
                description,
                Money::new(price),
                TaxRate::new(dec!(0.19)),
            ),
            "Kilo",
            quantity,
        )))
    }

    fn bundle(id: u32, components: Vec<Arc<Product>>, discount: Decimal) -> Arc<Product> {
        Arc::new(Product::from(ComposedProduct::new(
            ProductDetails::new(ProductId::new(id), "Ancheta #1", Money::ZERO, TaxRate::ZERO),
            components,
            DiscountRate::new(discount),
        )))
    }

    #[test]
    fn empty_invoice_totals_zero() {
        let invoice = Invoice::issued(test_time());
        assert!(invoice.is_empty());
        assert_eq!(invoice.value_to_pay(), Money::ZERO);
    }

    #[test]
    fn empty_invoice_renders_header_only() {
        let invoice = Invoice::issued(test_time());
        assert_eq!(
            invoice.to_string(),
            "INVOICE\nIssued: 2024-06-15\n------------------------------\nTOTAL: $0.00"
        );
    }

    #[test]
    fn total_sums_heterogeneous_products() {
        let vino = fixed(1010, "Vino Gato Negro", dec!(46000), dec!(0.19));
        let queso = variable(3030, "Queso Holandes", dec!(32000), dec!(0.536));
        let pan = fixed(2020, "Pan Bimbo Artesanal", dec!(1560), dec!(0.19));
        let cabano = variable(4040, "Cabano", dec!(18000), dec!(0.389));
        let ancheta = bundle(
            5050,
            vec![vino.clone(), pan.clone(), queso.clone(), cabano.clone()],
            dec!(0.12),
        );

        let mut invoice = Invoice::issued(test_time());
        invoice.add_product(vino.clone());
        invoice.add_product(queso.clone());
        invoice.add_product(ancheta.clone());

        let expected =
            vino.value_to_pay() + queso.value_to_pay() + ancheta.value_to_pay();
        assert_eq!(invoice.value_to_pay(), expected);
        // 54740.00 + 20410.88 + (85339.66 * 0.88)
        assert_eq!(invoice.value_to_pay(), Money::new(dec!(150249.7808)));
        assert_eq!(invoice.value_to_pay().rounded(), Money::new(dec!(150249.78)));
    }

    #[test]
    fn shared_product_is_counted_once_per_appearance() {
        let vino = fixed(1010, "Vino Gato Negro", dec!(46000), dec!(0.19));
        // The bundle references the same product the invoice lists directly.
        let ancheta = bundle(5050, vec![vino.clone()], dec!(0));

        let mut invoice = Invoice::issued(test_time());
        invoice.add_product(vino.clone());
        invoice.add_product(ancheta);

        assert_eq!(
            invoice.value_to_pay(),
            vino.value_to_pay() + vino.value_to_pay()
        );
    }

    #[test]
    fn repeated_additions_are_not_deduplicated() {
        let vino = fixed(1010, "Vino Gato Negro", dec!(46000), dec!(0.19));

        let mut invoice = Invoice::issued(test_time());
        invoice.add_product(vino.clone());
        invoice.add_product(vino.clone());

        assert_eq!(invoice.products().len(), 2);
        assert_eq!(invoice.value_to_pay(), Money::new(dec!(109480.00)));
    }

    #[test]
    fn value_to_pay_is_idempotent() {
        let mut invoice = Invoice::issued(test_time());
        invoice.add_product(fixed(1, "a", dec!(100), dec!(0.19)));
        let first = invoice.value_to_pay();
        assert_eq!(invoice.value_to_pay(), first);
        assert_eq!(invoice.value_to_pay(), first);
    }

    #[test]
    fn rendering_lists_products_in_insertion_order() {
        let mut invoice = Invoice::issued(test_time());
        invoice.add_product(fixed(2, "Pan Bimbo Artesanal", dec!(1560), dec!(0.19)));
        invoice.add_product(fixed(1, "Vino Gato Negro", dec!(46000), dec!(0.19)));

        let rendered = invoice.to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "INVOICE");
        assert_eq!(lines[1], "Issued: 2024-06-15");
        assert_eq!(lines[2], "------------------------------");
        assert_eq!(lines[3], "2 Pan Bimbo Artesanal Price: $1,560.00 Tax: 19.00%");
        assert_eq!(lines[4], "1 Vino Gato Negro Price: $46,000.00 Tax: 19.00%");
        assert_eq!(lines[5], "TOTAL: $56,596.40");
    }
}

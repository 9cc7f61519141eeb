//! Demo storefront: builds the sample catalog and renders an invoice.

use std::env;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use caja_core::{DiscountRate, Money, Priceable, ProductId, TaxRate};
use caja_invoicing::Invoice;
use caja_products::{
    ComposedProduct, FixedPriceProduct, Product, ProductDetails, VariablePriceProduct,
};

struct Options {
    json: bool,
    discount: DiscountRate,
}

impl Options {
    fn parse(mut args: impl Iterator<Item = String>) -> Result<Self> {
        let mut options = Options {
            json: false,
            discount: DiscountRate::new(dec!(0.12)),
        };
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--json" => options.json = true,
                "--discount" => {
                    let raw = args.next().context("--discount requires a value")?;
                    options.discount = raw
                        .parse()
                        .with_context(|| format!("invalid bundle discount {raw:?}"))?;
                }
                other => bail!("unknown argument: {other} (expected --json or --discount <rate>)"),
            }
        }
        Ok(options)
    }
}

fn fixed(id: u32, description: &str, price: Money, tax: TaxRate) -> Arc<Product> {
    Arc::new(Product::from(FixedPriceProduct::new(ProductDetails::new(
        ProductId::new(id),
        description,
        price,
        tax,
    ))))
}

fn variable(
    id: u32,
    description: &str,
    measurement: &str,
    price: Money,
    quantity: Decimal,
    tax: TaxRate,
) -> Arc<Product> {
    Arc::new(Product::from(VariablePriceProduct::new(
        ProductDetails::new(ProductId::new(id), description, price, tax),
        measurement,
        quantity,
    )))
}

/// The sample catalog; the bundle shares the other products by reference.
fn sample_catalog(discount: DiscountRate) -> Vec<Arc<Product>> {
    let tax = TaxRate::new(dec!(0.19));

    let vino = fixed(1010, "Vino Gato Negro", Money::new(dec!(46000)), tax);
    let pan = fixed(2020, "Pan Bimbo Artesanal", Money::new(dec!(1560)), tax);
    let queso = variable(
        3030,
        "Queso Holandes",
        "Kilo",
        Money::new(dec!(32000)),
        dec!(0.536),
        tax,
    );
    let cabano = variable(
        4040,
        "Cabano",
        "Kilo",
        Money::new(dec!(18000)),
        dec!(0.389),
        tax,
    );
    let ancheta = Arc::new(Product::from(ComposedProduct::new(
        ProductDetails::new(
            ProductId::new(5050),
            "Ancheta #1",
            Money::ZERO,
            TaxRate::ZERO,
        ),
        vec![vino.clone(), pan.clone(), queso.clone(), cabano.clone()],
        discount,
    )));

    vec![vino, pan, queso, cabano, ancheta]
}

fn main() -> Result<()> {
    caja_observability::init();

    let options = Options::parse(env::args().skip(1))?;

    tracing::info!(discount = %options.discount, "building sample catalog");
    let catalog = sample_catalog(options.discount);

    println!("PRODUCTS");
    println!("-------------------------------------------------");
    for product in &catalog {
        println!("{product}");
    }
    println!();

    let mut invoice = Invoice::new();
    invoice.add_product(catalog[0].clone());
    invoice.add_product(catalog[2].clone());
    invoice.add_product(catalog[4].clone());

    if options.json {
        println!("{}", serde_json::to_string_pretty(&invoice)?);
    } else {
        println!("{invoice}");
    }

    tracing::info!(
        products = invoice.products().len(),
        total = %invoice.value_to_pay(),
        "invoice rendered"
    );
    Ok(())
}

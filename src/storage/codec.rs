//! Line codec for the backing file
//!
//! Each product occupies one line with four comma-separated columns:
//! `name, price, units, size`. Decoding never fails; short or malformed lines
//! fall back to defaults for the missing columns.

use crate::models::{Product, DEFAULT_PRICE, DEFAULT_UNITS};

/// Column separator
pub const SEPARATOR: char = ',';

/// Decode one line into a product with the given ordinal id
///
/// Columns past the fourth are ignored.
pub fn decode(line: &str, position: usize) -> Product {
    let mut parts = line.split(SEPARATOR).map(str::trim);

    let name = parts.next().unwrap_or("");
    let price = parts.next().unwrap_or(DEFAULT_PRICE);
    let units = parts.next().unwrap_or(DEFAULT_UNITS);
    let size = parts.next().unwrap_or("");

    Product::new(position, name, price, units, size)
}

/// Encode a product as a newline-terminated line
pub fn encode(product: &Product) -> String {
    format!(
        "{}, {}, {}, {}\n",
        product.name, product.price, product.units, product.size
    )
}

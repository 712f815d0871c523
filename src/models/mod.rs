//! Core data models for inventario

pub mod product;

pub use product::{Product, ProductField, ProductInput, ProductPatch, DEFAULT_PRICE, DEFAULT_UNITS};

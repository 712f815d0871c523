//! Product model
//!
//! A product is one line of the backing file. Its `id` is not stored anywhere:
//! it is the product's 1-based position among the non-blank lines at load time,
//! so it changes whenever lines before it are removed.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Default price used when a line has no price column
pub const DEFAULT_PRICE: &str = "0 USD";

/// Default units used when a line has no units column
pub const DEFAULT_UNITS: &str = "0 unidades";

/// A product record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Ordinal id (position in the file, starting at 1)
    pub id: usize,

    /// Product name
    pub name: String,

    /// Free-form price, e.g. "15 USD"
    pub price: String,

    /// Free-form stock quantity, e.g. "50 unidades"
    pub units: String,

    /// Size, may be empty
    #[serde(default)]
    pub size: String,
}

impl Product {
    /// Create a new product
    pub fn new(
        id: usize,
        name: impl Into<String>,
        price: impl Into<String>,
        units: impl Into<String>,
        size: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price: price.into(),
            units: units.into(),
            size: size.into(),
        }
    }

    /// Build a product from user input, assigning the given id
    pub fn from_input(id: usize, input: ProductInput) -> Self {
        Self {
            id,
            name: input.name,
            price: input.price,
            units: input.units,
            size: input.size,
        }
    }

    /// Read a single field
    pub fn field(&self, field: ProductField) -> &str {
        match field {
            ProductField::Name => &self.name,
            ProductField::Price => &self.price,
            ProductField::Units => &self.units,
            ProductField::Size => &self.size,
        }
    }

    /// Overwrite a single field
    pub fn set_field(&mut self, field: ProductField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ProductField::Name => self.name = value,
            ProductField::Price => self.price = value,
            ProductField::Units => self.units = value,
            ProductField::Size => self.size = value,
        }
    }

    /// Apply every field present in a patch, returning whether anything changed
    pub fn apply_patch(&mut self, patch: &ProductPatch) -> bool {
        let mut changed = false;
        for (field, value) in patch.fields() {
            if self.field(field) != value {
                self.set_field(field, value);
                changed = true;
            }
        }
        changed
    }

    /// Case-insensitive substring match on the name
    pub fn name_contains(&self, term: &str) -> bool {
        self.name.to_lowercase().contains(&term.to_lowercase())
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Producto(ID: {}, Nombre: {}, Precio: {}, Unidades: {}, Talla: {})",
            self.id, self.name, self.price, self.units, self.size
        )
    }
}

/// Field values for a product that has not been assigned an id yet
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductInput {
    pub name: String,
    pub price: String,
    pub units: String,
    pub size: String,
}

/// A partial update: only the `Some` fields are overwritten
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub price: Option<String>,
    pub units: Option<String>,
    pub size: Option<String>,
}

impl ProductPatch {
    /// A patch that overwrites exactly one field
    pub fn single(field: ProductField, value: impl Into<String>) -> Self {
        let value = Some(value.into());
        match field {
            ProductField::Name => Self {
                name: value,
                ..Default::default()
            },
            ProductField::Price => Self {
                price: value,
                ..Default::default()
            },
            ProductField::Units => Self {
                units: value,
                ..Default::default()
            },
            ProductField::Size => Self {
                size: value,
                ..Default::default()
            },
        }
    }

    /// Whether the patch carries no fields at all
    pub fn is_empty(&self) -> bool {
        self.fields().next().is_none()
    }

    /// Iterate over the fields present in the patch, in column order
    pub fn fields(&self) -> impl Iterator<Item = (ProductField, &str)> {
        [
            (ProductField::Name, self.name.as_deref()),
            (ProductField::Price, self.price.as_deref()),
            (ProductField::Units, self.units.as_deref()),
            (ProductField::Size, self.size.as_deref()),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.map(|v| (field, v)))
    }
}

/// One editable product field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductField {
    Name,
    Price,
    Units,
    Size,
}

impl fmt::Display for ProductField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductField::Name => write!(f, "nombre"),
            ProductField::Price => write!(f, "precio"),
            ProductField::Units => write!(f, "unidades"),
            ProductField::Size => write!(f, "talla"),
        }
    }
}

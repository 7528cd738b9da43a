//! Car domain types.

use serde::{Deserialize, Serialize};

/// A persisted car row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Car {
    /// Row id assigned by SQLite. Immutable once assigned.
    pub id: i64,

    /// Manufacturer name.
    pub brand: String,

    /// Model name.
    pub model: String,

    /// Price, kept as text.
    pub price: String,
}

/// Field values for a car that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCar {
    pub brand: String,
    pub model: String,
    pub price: String,
}

impl NewCar {
    pub fn new(
        brand: impl Into<String>,
        model: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Self {
            brand: brand.into(),
            model: model.into(),
            price: price.into(),
        }
    }
}

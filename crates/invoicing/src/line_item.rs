use core::str::FromStr;

use serde::{Deserialize, Serialize};

use billpad_core::{DomainError, Entity, LineItemId};

use crate::amount::{Amount, coerce_number};

/// Editable column of a line item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemField {
    Description,
    Quantity,
    Price,
}

impl FromStr for ItemField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "description" | "desc" => Ok(ItemField::Description),
            "quantity" | "qty" => Ok(ItemField::Quantity),
            "price" => Ok(ItemField::Price),
            other => Err(DomainError::validation(format!(
                "unknown line item field: {other}"
            ))),
        }
    }
}

/// One row of the invoice table.
///
/// Quantity and price keep the text exactly as entered; numbers are only
/// read out of them when a total is derived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    id: LineItemId,
    pub description: String,
    pub quantity: String,
    pub price: String,
}

impl LineItem {
    /// Empty description, quantity and price.
    pub fn blank(id: LineItemId) -> Self {
        Self {
            id,
            description: String::new(),
            quantity: String::new(),
            price: String::new(),
        }
    }

    pub fn id_typed(&self) -> LineItemId {
        self.id
    }

    /// Copy of this item with one field replaced.
    pub fn with_field(&self, field: ItemField, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        let value = value.into();
        match field {
            ItemField::Description => next.description = value,
            ItemField::Quantity => next.quantity = value,
            ItemField::Price => next.price = value,
        }
        next
    }

    pub fn quantity_value(&self) -> f64 {
        coerce_number(&self.quantity)
    }

    pub fn price_value(&self) -> f64 {
        coerce_number(&self.price)
    }

    pub fn line_total(&self) -> Amount {
        line_total(self)
    }
}

impl Entity for LineItem {
    type Id = LineItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Quantity × price, with unreadable numbers taken as zero. Never fails.
pub fn line_total(item: &LineItem) -> Amount {
    Amount::new(item.quantity_value()) * Amount::new(item.price_value())
}

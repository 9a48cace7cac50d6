use serde::{Deserialize, Serialize};

use billpad_core::{Entity, IdentitySource, LineItemId};

use crate::amount::Amount;
use crate::header::{HeaderField, InvoiceHeader};
use crate::line_item::{ItemField, LineItem};
use crate::profile::CompanyProfile;

/// The invoice being edited in one session.
///
/// Every mutator returns a new `Invoice` and leaves `self` untouched. Totals are
/// never stored; they are derived from the items on each call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Invoice {
    header: InvoiceHeader,
    items: Vec<LineItem>,
}

/// A user edit, as dispatched by a front end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InvoiceEdit {
    SetHeader {
        field: HeaderField,
        value: String,
    },
    SetItem {
        item_id: LineItemId,
        field: ItemField,
        value: String,
    },
    AddItem,
    RemoveItem {
        item_id: LineItemId,
    },
}

impl Invoice {
    /// Fresh invoice: stamped number and date, empty customer, one blank item.
    pub fn create<I>(company: CompanyProfile, ids: &mut I) -> Self
    where
        I: IdentitySource + ?Sized,
    {
        let header = InvoiceHeader::new(company, ids.invoice_number(), ids.today());
        Self {
            header,
            items: vec![LineItem::blank(ids.next_item_id())],
        }
    }

    pub fn header(&self) -> &InvoiceHeader {
        &self.header
    }

    pub fn company(&self) -> &CompanyProfile {
        self.header.company()
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Zero-based position in display order.
    pub fn item_at(&self, position: usize) -> Option<&LineItem> {
        self.items.get(position)
    }

    /// Number of line items; never below one.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn update_header_field(&self, field: HeaderField, value: impl Into<String>) -> Self {
        Self {
            header: self.header.with_field(field, value.into()),
            items: self.items.clone(),
        }
    }

    /// Unknown `item_id` yields an unchanged copy.
    pub fn update_item_field(
        &self,
        item_id: LineItemId,
        field: ItemField,
        value: impl Into<String>,
    ) -> Self {
        let value = value.into();
        let items = self
            .items
            .iter()
            .map(|item| {
                if *item.id() == item_id {
                    item.with_field(field, value.clone())
                } else {
                    item.clone()
                }
            })
            .collect();
        Self {
            header: self.header.clone(),
            items,
        }
    }

    pub fn add_item<I>(&self, ids: &mut I) -> Self
    where
        I: IdentitySource + ?Sized,
    {
        let mut items = self.items.clone();
        items.push(LineItem::blank(ids.next_item_id()));
        Self {
            header: self.header.clone(),
            items,
        }
    }

    /// Invariant: the last remaining item stays; removing it is a no-op.
    pub fn remove_item(&self, item_id: LineItemId) -> Self {
        if self.items.len() <= 1 {
            return self.clone();
        }
        Self {
            header: self.header.clone(),
            items: self
                .items
                .iter()
                .filter(|item| *item.id() != item_id)
                .cloned()
                .collect(),
        }
    }

    pub fn apply<I>(&self, edit: &InvoiceEdit, ids: &mut I) -> Self
    where
        I: IdentitySource + ?Sized,
    {
        match edit {
            InvoiceEdit::SetHeader { field, value } => {
                self.update_header_field(*field, value.clone())
            }
            InvoiceEdit::SetItem {
                item_id,
                field,
                value,
            } => self.update_item_field(*item_id, *field, value.clone()),
            InvoiceEdit::AddItem => self.add_item(ids),
            InvoiceEdit::RemoveItem { item_id } => self.remove_item(*item_id),
        }
    }

    /// Sum of line totals in display order.
    pub fn subtotal(&self) -> Amount {
        self.items.iter().map(LineItem::line_total).sum()
    }

    /// No tax or discount is modelled, so this equals the subtotal.
    pub fn total(&self) -> Amount {
        self.subtotal()
    }
}

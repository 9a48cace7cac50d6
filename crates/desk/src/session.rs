//! One editing session: the current invoice plus the id source behind it.

use billpad_core::{IdentitySource, LineItemId};
use billpad_invoicing::{
    HeaderField, Invoice, InvoiceEdit, ItemField, format_share_text, render_printable, share_link,
};

use crate::config::DeskConfig;
use crate::error::DeskError;

pub struct Session {
    invoice: Invoice,
    ids: Box<dyn IdentitySource>,
    share_endpoint: String,
    print_width: usize,
}

impl Session {
    pub fn new(config: &DeskConfig, mut ids: Box<dyn IdentitySource>) -> Self {
        let invoice = Invoice::create(config.company.clone(), ids.as_mut());
        tracing::info!(
            invoice_number = %invoice.header().invoice_number(),
            date = %invoice.header().date_iso(),
            "invoice session started"
        );
        Self {
            invoice,
            ids,
            share_endpoint: config.share_endpoint.clone(),
            print_width: config.print_width,
        }
    }

    pub fn invoice(&self) -> &Invoice {
        &self.invoice
    }

    /// Map a 1-based row number to the item shown there.
    pub fn item_id(&self, row: usize) -> Result<LineItemId, DeskError> {
        row.checked_sub(1)
            .and_then(|position| self.invoice.item_at(position))
            .map(|item| item.id_typed())
            .ok_or(DeskError::NoSuchRow {
                row,
                len: self.invoice.item_count(),
            })
    }

    /// Apply an edit; returns whether the invoice changed.
    pub fn edit(&mut self, edit: InvoiceEdit) -> bool {
        let next = self.invoice.apply(&edit, self.ids.as_mut());
        let changed = next != self.invoice;
        if changed {
            tracing::debug!(?edit, items = next.item_count(), "invoice edited");
        } else {
            tracing::debug!(?edit, "edit left the invoice unchanged");
        }
        self.invoice = next;
        changed
    }

    pub fn set_header(&mut self, field: HeaderField, value: impl Into<String>) {
        self.edit(InvoiceEdit::SetHeader {
            field,
            value: value.into(),
        });
    }

    pub fn set_item(
        &mut self,
        row: usize,
        field: ItemField,
        value: impl Into<String>,
    ) -> Result<(), DeskError> {
        let item_id = self.item_id(row)?;
        self.edit(InvoiceEdit::SetItem {
            item_id,
            field,
            value: value.into(),
        });
        Ok(())
    }

    pub fn add_item(&mut self) {
        self.edit(InvoiceEdit::AddItem);
    }

    /// `Ok(false)` when the row is the last remaining item and was kept.
    pub fn remove_item(&mut self, row: usize) -> Result<bool, DeskError> {
        let item_id = self.item_id(row)?;
        Ok(self.edit(InvoiceEdit::RemoveItem { item_id }))
    }

    pub fn share_text(&self) -> String {
        format_share_text(&self.invoice)
    }

    pub fn share_link(&self) -> String {
        share_link(&self.share_endpoint, &self.share_text())
    }

    pub fn printable(&self) -> String {
        render_printable(&self.invoice, self.print_width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use billpad_core::{InvoiceNumber, SequentialIdentity};
    use chrono::NaiveDate;

    fn session() -> Session {
        let ids = SequentialIdentity::new(
            InvoiceNumber::try_from(300_400).unwrap(),
            NaiveDate::from_ymd_opt(2025, 5, 5).unwrap(),
        );
        Session::new(&DeskConfig::default(), Box::new(ids))
    }

    #[test]
    fn rows_map_to_items_in_order() {
        let mut session = session();
        session.add_item();
        let first = session.invoice().items()[0].id_typed();
        let second = session.invoice().items()[1].id_typed();
        assert_eq!(session.item_id(1).unwrap(), first);
        assert_eq!(session.item_id(2).unwrap(), second);
    }

    #[test]
    fn out_of_range_rows_are_errors() {
        let session = session();
        for row in [0, 2] {
            match session.item_id(row) {
                Err(DeskError::NoSuchRow { row: r, len: 1 }) => assert_eq!(r, row),
                other => panic!("Expected NoSuchRow, got {other:?}"),
            }
        }
    }

    #[test]
    fn last_item_is_kept() {
        let mut session = session();
        assert!(!session.remove_item(1).unwrap());
        assert_eq!(session.invoice().item_count(), 1);

        session.add_item();
        assert!(session.remove_item(1).unwrap());
        assert_eq!(session.invoice().item_count(), 1);
    }

    #[test]
    fn edits_flow_into_share_link() {
        let mut session = session();
        session.set_header(HeaderField::CustomerName, "Bola");
        session.set_item(1, ItemField::Description, "Engine Oil").unwrap();
        session.set_item(1, ItemField::Quantity, "2").unwrap();
        session.set_item(1, ItemField::Price, "15.00").unwrap();

        assert!(session.share_text().contains("Engine Oil - 2 x ₦15.00 = ₦30.00"));
        let link = session.share_link();
        assert!(link.starts_with("https://wa.me/?text=*BANGA'S%20NATION*%0A"));
        assert!(link.contains("Customer%3A%20Bola"));
    }
}

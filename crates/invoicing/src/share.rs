//! Plain-text rendering of an invoice for messaging apps, and the share link.
//!
//! The text layout is read by people and occasionally by scripts, so the field
//! order and the `description - qty x price = total` item line are kept stable.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::amount::Amount;
use crate::invoice::Invoice;
use crate::line_item::LineItem;

/// WhatsApp "click to chat" endpoint.
pub const DEFAULT_SHARE_ENDPOINT: &str = "https://wa.me/";

/// Characters left as-is inside a URI component.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// `Engine Oil - 2 x ₦15.00 = ₦30.00`
///
/// The quantity is echoed as typed (`0` when blank); the price is shown as read.
pub fn share_line(item: &LineItem, symbol: &str) -> String {
    let quantity = if item.quantity.is_empty() {
        "0"
    } else {
        item.quantity.as_str()
    };
    format!(
        "{} - {} x {} = {}",
        item.description,
        quantity,
        Amount::new(item.price_value()).with_symbol(symbol),
        item.line_total().with_symbol(symbol),
    )
}

pub fn format_share_text(invoice: &Invoice) -> String {
    let header = invoice.header();
    let company = invoice.company();
    let symbol = company.currency_symbol.as_str();

    let mut lines = vec![
        format!("*{}*", company.company_name),
        company.company_address.clone(),
        String::new(),
        format!("Invoice: {}", header.invoice_number()),
        format!("Date: {}", header.date_iso()),
        String::new(),
        format!("Office: {}", company.office_address),
        company.company_phone.clone(),
        format!("Email: {}", company.company_email),
        String::new(),
        format!("Customer: {}", header.customer_name()),
        format!("Phone: {}", header.customer_phone()),
        String::new(),
    ];
    lines.extend(invoice.items().iter().map(|item| share_line(item, symbol)));
    lines.extend([
        String::new(),
        format!("Subtotal: {}", invoice.subtotal().with_symbol(symbol)),
        format!("*Total: {}*", invoice.total().with_symbol(symbol)),
        String::new(),
        header.notes().to_string(),
    ]);

    lines.join("\n")
}

/// `{endpoint}?text={text}` with the text percent-encoded as a URI component.
pub fn share_link(endpoint: &str, text: &str) -> String {
    format!("{endpoint}?text={}", utf8_percent_encode(text, URI_COMPONENT))
}

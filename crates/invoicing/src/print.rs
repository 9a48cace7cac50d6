//! Fixed-width text layout of an invoice, for the print action.

use crate::amount::Amount;
use crate::invoice::Invoice;

pub const DEFAULT_PRINT_WIDTH: usize = 72;
pub const MIN_PRINT_WIDTH: usize = 48;

const QTY_COL: usize = 6;
const MONEY_COL: usize = 12;
const MIN_DESC_COL: usize = 6;

fn char_len(s: &str) -> usize {
    s.chars().count()
}

fn center(text: &str, width: usize) -> String {
    let len = char_len(text);
    if len >= width {
        return text.to_string();
    }
    format!("{}{}", " ".repeat((width - len) / 2), text)
}

/// Greedy word wrap. Words longer than `width` are split.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word: String = word.to_string();
        while char_len(&word) > width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let head: String = word.chars().take(width).collect();
            word = word.chars().skip(width).collect();
            lines.push(head);
        }
        if current.is_empty() {
            current = word;
        } else if char_len(&current) + 1 + char_len(&word) <= width {
            current.push(' ');
            current.push_str(&word);
        } else {
            lines.push(std::mem::replace(&mut current, word));
        }
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Item table column widths for one document.
struct Columns {
    desc: usize,
    qty: usize,
    money: usize,
}

impl Columns {
    /// Quantity and money columns grow to their widest cell as long as the
    /// description keeps [`MIN_DESC_COL`]. `width` is at least [`MIN_PRINT_WIDTH`].
    fn fit(width: usize, widest_qty: usize, widest_money: usize) -> Self {
        let numeric = width - 3 - MIN_DESC_COL;
        let qty = widest_qty.clamp(QTY_COL, numeric - 2 * MONEY_COL);
        let money = widest_money.clamp(MONEY_COL, (numeric - qty) / 2);
        Self {
            desc: width - 3 - qty - 2 * money,
            qty,
            money,
        }
    }

    /// One table row. A cell wider than its column continues on the
    /// following lines, so nothing is cut off.
    fn row(&self, description: &str, qty: &str, price: &str, total: &str) -> Vec<String> {
        let cells = [
            wrap(description, self.desc),
            wrap(qty, self.qty),
            wrap(price, self.money),
            wrap(total, self.money),
        ];
        let height = cells.iter().map(Vec::len).max().unwrap_or(1);

        (0..height)
            .map(|i| {
                let [description, qty, price, total] = cells
                    .each_ref()
                    .map(|lines| lines.get(i).map_or("", String::as_str));
                format!(
                    "{description:<dw$} {qty:>qw$} {price:>mw$} {total:>mw$}",
                    dw = self.desc,
                    qw = self.qty,
                    mw = self.money,
                )
                .trim_end()
                .to_string()
            })
            .collect()
    }
}

/// `label` and `amount` right-aligned under the money columns, or on two
/// lines when the amount is too wide to share one.
fn totals_line(label: &str, amount: &str, money: usize, width: usize) -> Vec<String> {
    let amount_col = money.max(char_len(amount));
    if char_len(label) + 1 + amount_col <= width {
        let label_col = width - 1 - amount_col;
        return vec![format!("{label:>label_col$} {amount:>amount_col$}")];
    }
    let mut lines = vec![format!("{label:>width$}")];
    lines.extend(wrap(amount, width).iter().map(|l| format!("{l:>width$}")));
    lines
}

/// Renders the print preview. `width` is clamped to at least [`MIN_PRINT_WIDTH`].
pub fn render_printable(invoice: &Invoice, width: usize) -> String {
    let width = width.max(MIN_PRINT_WIDTH);
    let header = invoice.header();
    let company = invoice.company();
    let symbol = company.currency_symbol.as_str();
    let heavy = "=".repeat(width);
    let light = "-".repeat(width);

    let rows: Vec<(&str, &str, String, String)> = invoice
        .items()
        .iter()
        .map(|item| {
            (
                item.description.as_str(),
                item.quantity.trim(),
                Amount::new(item.price_value()).to_string(),
                item.line_total().to_string(),
            )
        })
        .collect();
    let widest_qty = rows.iter().map(|row| char_len(row.1)).max().unwrap_or(0);
    let widest_money = rows
        .iter()
        .flat_map(|row| [char_len(&row.2), char_len(&row.3)])
        .max()
        .unwrap_or(0);
    let columns = Columns::fit(width, widest_qty, widest_money);

    let mut out: Vec<String> = Vec::new();
    out.push(center(&company.company_name, width));
    out.extend(wrap(&company.company_address, width).iter().map(|l| center(l, width)));
    out.push(center(&format!("INVOICE {}", header.invoice_number()), width));
    out.push(heavy.clone());

    out.push("OFFICE".to_string());
    out.extend(wrap(&company.office_address, width - 2).into_iter().map(|l| format!("  {l}")));
    out.push(format!("  {}", company.company_phone));
    out.push(format!("  Email: {}", company.company_email));
    out.push(light.clone());

    out.push("CUSTOMER".to_string());
    out.push(format!("  Name:       {}", header.customer_name()));
    out.push(format!("  Phone:      {}", header.customer_phone()));
    out.push(format!("  Date:       {}", header.date_iso()));
    out.push(format!("  Invoice No: {}", header.invoice_number()));
    out.push(light.clone());

    out.extend(columns.row(
        "Description",
        "Qty",
        &format!("Price ({symbol})"),
        &format!("Total ({symbol})"),
    ));
    out.push(light.clone());
    for (description, qty, price, total) in &rows {
        out.extend(columns.row(description, qty, price, total));
    }
    out.push(light);

    for (label, amount) in [("Subtotal:", invoice.subtotal()), ("Total:", invoice.total())] {
        out.extend(totals_line(label, &amount.with_symbol(symbol), columns.money, width));
    }
    out.push(heavy);

    out.extend(wrap(header.notes(), width));
    out.push(center(&company.copyright, width));

    let mut doc = out.join("\n");
    doc.push('\n');
    doc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line_item::ItemField;
    use crate::profile::CompanyProfile;
    use billpad_core::{InvoiceNumber, SequentialIdentity};
    use chrono::NaiveDate;

    fn invoice_with(description: &str, qty: &str, price: &str) -> Invoice {
        let mut ids = SequentialIdentity::new(
            InvoiceNumber::try_from(777_001).unwrap(),
            NaiveDate::from_ymd_opt(2025, 12, 24).unwrap(),
        );
        let invoice = Invoice::create(CompanyProfile::default(), &mut ids);
        let id = invoice.items()[0].id_typed();
        invoice
            .update_item_field(id, ItemField::Description, description)
            .update_item_field(id, ItemField::Quantity, qty)
            .update_item_field(id, ItemField::Price, price)
    }

    #[test]
    fn wrap_splits_on_words_and_long_tokens() {
        assert_eq!(wrap("one two three", 7), vec!["one two", "three"]);
        assert_eq!(wrap("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
        assert_eq!(wrap("", 10), vec![""]);
    }

    #[test]
    fn printable_contains_header_rows_and_totals() {
        let doc = render_printable(&invoice_with("Engine Oil", "2", "15"), DEFAULT_PRINT_WIDTH);

        assert!(doc.contains("INVOICE 777001"));
        assert!(doc.contains("  Date:       2025-12-24"));
        assert!(doc.contains("Price (₦)"));
        assert!(doc.contains("Subtotal:       ₦30.00"));
        assert!(doc.contains("Total:       ₦30.00"));
        assert!(doc.contains("© Created by Codivora Solutions 2025"));

        let row = doc
            .lines()
            .find(|line| line.starts_with("Engine Oil"))
            .expect("item row");
        assert!(row.ends_with("15.00        30.00"));
    }

    #[test]
    fn no_line_exceeds_width() {
        let long = "Fully synthetic heavy duty diesel engine oil 20W-50 in a twenty-five litre keg";
        for width in [MIN_PRINT_WIDTH, 60, DEFAULT_PRINT_WIDTH] {
            let doc = render_printable(&invoice_with(long, "12", "48500"), width);
            for line in doc.lines() {
                assert!(line.chars().count() <= width, "{line:?} wider than {width}");
            }
        }
    }

    fn item_row(doc: &str, description: &str) -> String {
        doc.lines()
            .find(|line| line.starts_with(description))
            .expect("item row")
            .to_string()
    }

    #[test]
    fn long_quantities_print_in_full() {
        let doc = render_printable(&invoice_with("Oil", "1234567", "1"), DEFAULT_PRINT_WIDTH);
        let row = item_row(&doc, "Oil");
        assert!(row.contains(" 1234567 "), "{row:?}");
        assert!(row.ends_with("1.00   1234567.00"), "{row:?}");

        let doc = render_printable(&invoice_with("Oil", "0.0000001", "1"), DEFAULT_PRINT_WIDTH);
        assert!(item_row(&doc, "Oil").contains(" 0.0000001 "));
    }

    #[test]
    fn wide_money_cells_grow_their_column() {
        let doc = render_printable(&invoice_with("Oil", "1", "1e12"), MIN_PRINT_WIDTH);
        let row = item_row(&doc, "Oil");
        assert_eq!(row.matches("1000000000000.00").count(), 2, "{row:?}");
        assert!(doc.lines().all(|line| line.chars().count() <= MIN_PRINT_WIDTH));
    }

    #[test]
    fn oversized_numbers_wrap_instead_of_overflowing() {
        for (qty, price) in [("1", "1e12"), ("123456789012345678901234567890", "2"), ("1", "1e300")] {
            for width in [MIN_PRINT_WIDTH, 60, DEFAULT_PRINT_WIDTH] {
                let doc = render_printable(&invoice_with("Oil", qty, price), width);
                for line in doc.lines() {
                    assert!(line.chars().count() <= width, "{line:?} wider than {width}");
                }
            }
        }

        let doc = render_printable(&invoice_with("Oil", "1", "1e300"), MIN_PRINT_WIDTH);
        let flat: String = doc.split_whitespace().collect();
        let total = Amount::new(1e300).with_symbol("₦");
        assert!(flat.contains(&format!("Total:{total}")));
    }

    #[test]
    fn narrow_width_is_clamped() {
        let narrow = render_printable(&invoice_with("Grease", "1", "1"), 10);
        let clamped = render_printable(&invoice_with("Grease", "1", "1"), MIN_PRINT_WIDTH);
        assert_eq!(narrow, clamped);
    }
}

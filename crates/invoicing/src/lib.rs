//! Invoice model and derivation engine.
//!
//! Holds the invoice being edited (header fields + ordered line items), applies
//! edits as immutable updates, and derives totals and the outbound renderings
//! (share text, share link, print layout). Pure domain logic: no IO.

pub mod amount;
pub mod header;
pub mod invoice;
pub mod line_item;
pub mod print;
pub mod profile;
pub mod share;

pub use amount::{Amount, coerce_number};
pub use header::{HeaderField, InvoiceHeader};
pub use invoice::{Invoice, InvoiceEdit};
pub use line_item::{ItemField, LineItem, line_total};
pub use print::{DEFAULT_PRINT_WIDTH, MIN_PRINT_WIDTH, render_printable};
pub use profile::CompanyProfile;
pub use share::{DEFAULT_SHARE_ENDPOINT, format_share_text, share_line, share_link};

//! The read-eval loop driving a [`Session`] from line-oriented input.

use std::io::{BufRead, Write};

use billpad_invoicing::share_line;

use crate::error::DeskError;
use crate::input::{DeskCommand, HELP};
use crate::output::{PrintSink, ShareOpener};
use crate::session::Session;

/// What the loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

fn summary<W: Write>(out: &mut W, session: &Session) -> Result<(), DeskError> {
    let invoice = session.invoice();
    writeln!(
        out,
        "{} item(s), total {}",
        invoice.item_count(),
        invoice.total().with_symbol(&invoice.company().currency_symbol)
    )?;
    Ok(())
}

fn listing<W: Write>(out: &mut W, session: &Session) -> Result<(), DeskError> {
    let invoice = session.invoice();
    let symbol = invoice.company().currency_symbol.as_str();
    writeln!(
        out,
        "Invoice {} ({})  Customer: {}  Phone: {}",
        invoice.header().invoice_number(),
        invoice.header().date_iso(),
        invoice.header().customer_name(),
        invoice.header().customer_phone()
    )?;
    for (position, item) in invoice.items().iter().enumerate() {
        writeln!(out, "{:>3}. {}", position + 1, share_line(item, symbol))?;
    }
    writeln!(out, "Subtotal: {}", invoice.subtotal().with_symbol(symbol))?;
    writeln!(out, "Total: {}", invoice.total().with_symbol(symbol))?;
    Ok(())
}

/// Execute one command against the session.
pub fn execute<W: Write>(
    command: DeskCommand,
    session: &mut Session,
    out: &mut W,
    printer: &mut dyn PrintSink,
    opener: &mut dyn ShareOpener,
) -> Result<Flow, DeskError> {
    match command {
        DeskCommand::SetHeader { field, value } => {
            session.set_header(field, value);
        }
        DeskCommand::SetItem { row, field, value } => {
            session.set_item(row, field, value)?;
            summary(out, session)?;
        }
        DeskCommand::Add => {
            session.add_item();
            summary(out, session)?;
        }
        DeskCommand::Remove { row } => {
            if session.remove_item(row)? {
                summary(out, session)?;
            } else {
                writeln!(out, "the last item cannot be removed")?;
            }
        }
        DeskCommand::Show => listing(out, session)?,
        DeskCommand::Print => {
            printer.print(&session.printable())?;
            tracing::info!(
                invoice_number = %session.invoice().header().invoice_number(),
                "invoice printed"
            );
        }
        DeskCommand::Text => writeln!(out, "{}", session.share_text())?,
        DeskCommand::Share => {
            opener.open(&session.share_link())?;
            tracing::info!(
                invoice_number = %session.invoice().header().invoice_number(),
                "share link produced"
            );
        }
        DeskCommand::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(session.invoice())?)?;
        }
        DeskCommand::Help => writeln!(out, "{HELP}")?,
        DeskCommand::Quit => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}

/// Run until `quit` or end of input.
///
/// Blank lines and lines starting with `#` are skipped. A bad line is reported
/// on `out` and the session carries on; only IO failures end it early.
pub fn run<R, W>(
    input: R,
    out: &mut W,
    session: &mut Session,
    printer: &mut dyn PrintSink,
    opener: &mut dyn ShareOpener,
) -> Result<(), DeskError>
where
    R: BufRead,
    W: Write,
{
    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let outcome = match line.parse::<DeskCommand>() {
            Ok(command) => execute(command, session, out, printer, opener),
            Err(e) => Err(e),
        };

        match outcome {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => break,
            Err(e) if e.is_fatal() => return Err(e),
            Err(e) => {
                tracing::warn!(input = line, error = %e, "input rejected");
                writeln!(out, "error: {e}")?;
            }
        }
    }

    tracing::info!(
        invoice_number = %session.invoice().header().invoice_number(),
        items = session.invoice().item_count(),
        "invoice session ended"
    );
    Ok(())
}

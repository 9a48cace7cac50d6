//! Parsing one line of desk input into a command.

use core::str::FromStr;

use billpad_invoicing::{HeaderField, ItemField};

use crate::error::DeskError;

pub const HELP: &str = "\
commands:
  name <text>              set the customer name
  phone <text>             set the customer phone
  add                      append a blank item
  desc <row> <text>        set an item description
  qty <row> <text>         set an item quantity
  price <row> <text>       set an item price
  remove <row>             remove an item (the last one stays)
  show                     list items and totals
  print                    print the invoice
  text                     show the share text
  share                    produce the share link
  json                     dump the invoice as JSON
  help                     this list
  quit                     end the session
rows are numbered from 1";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeskCommand {
    SetHeader { field: HeaderField, value: String },
    SetItem { row: usize, field: ItemField, value: String },
    Add,
    Remove { row: usize },
    Show,
    Print,
    Text,
    Share,
    Json,
    Help,
    Quit,
}

fn split_word(s: &str) -> (&str, &str) {
    let s = s.trim_start();
    match s.find(char::is_whitespace) {
        Some(at) => (&s[..at], s[at..].trim()),
        None => (s, ""),
    }
}

fn parse_row(word: &str) -> Result<usize, DeskError> {
    match word.parse::<usize>() {
        Ok(0) => Err(DeskError::parse("rows are numbered from 1")),
        Ok(row) => Ok(row),
        Err(_) if word.is_empty() => Err(DeskError::parse("missing row number")),
        Err(_) => Err(DeskError::parse(format!("not a row number: {word}"))),
    }
}

fn no_args(verb: &str, rest: &str, command: DeskCommand) -> Result<DeskCommand, DeskError> {
    if rest.is_empty() {
        Ok(command)
    } else {
        Err(DeskError::parse(format!("{verb} takes no arguments")))
    }
}

impl FromStr for DeskCommand {
    type Err = DeskError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let (verb, rest) = split_word(line);
        match verb {
            "name" | "phone" => Ok(DeskCommand::SetHeader {
                field: verb.parse()?,
                value: rest.to_string(),
            }),
            "desc" | "description" | "qty" | "quantity" | "price" => {
                let (row, value) = split_word(rest);
                Ok(DeskCommand::SetItem {
                    row: parse_row(row)?,
                    field: verb.parse()?,
                    value: value.to_string(),
                })
            }
            "remove" | "rm" => {
                let (row, extra) = split_word(rest);
                if !extra.is_empty() {
                    return Err(DeskError::parse("remove takes a single row number"));
                }
                Ok(DeskCommand::Remove {
                    row: parse_row(row)?,
                })
            }
            "add" => no_args(verb, rest, DeskCommand::Add),
            "show" => no_args(verb, rest, DeskCommand::Show),
            "print" => no_args(verb, rest, DeskCommand::Print),
            "text" => no_args(verb, rest, DeskCommand::Text),
            "share" => no_args(verb, rest, DeskCommand::Share),
            "json" => no_args(verb, rest, DeskCommand::Json),
            "help" | "?" => Ok(DeskCommand::Help),
            "quit" | "exit" => Ok(DeskCommand::Quit),
            "" => Err(DeskError::parse("empty command")),
            other => Err(DeskError::parse(format!(
                "unknown command: {other} (try `help`)"
            ))),
        }
    }
}

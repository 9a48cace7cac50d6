//! `billpad-desk`
//!
//! **Responsibility:** terminal front end for the invoice model.
//!
//! This crate provides:
//! - Configuration from environment variables
//! - Line-oriented command parsing
//! - The editing session (row numbers to item ids, edit dispatch)
//! - Print and share output actions
//!
//! The desk is a **thin shell**: every rule about invoices lives in
//! `billpad-invoicing`.

pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod repl;
pub mod session;

pub use config::DeskConfig;
pub use error::DeskError;
pub use input::DeskCommand;
pub use output::{PrintSink, ShareOpener, WriteSink};
pub use repl::{Flow, execute, run};
pub use session::Session;

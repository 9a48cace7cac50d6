//! `billpad` -- edit one invoice from the terminal, then print or share it.
//!
//! Reads commands from stdin (`help` lists them). Configuration comes from
//! `BILLPAD_*` environment variables, optionally via a `.env` file; see
//! [`billpad_desk::config`].

use std::io;

use anyhow::Context;
use billpad_core::SystemIdentity;
use billpad_desk::{DeskConfig, Session, WriteSink};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = DeskConfig::from_env().context("failed to load configuration")?;
    billpad_observability::init(config.log_format);

    let mut session = Session::new(&config, Box::new(SystemIdentity));
    let mut sink = WriteSink::new(io::stdout());
    let mut opener = WriteSink::new(io::stdout());

    billpad_desk::run(
        io::stdin().lock(),
        &mut io::stdout(),
        &mut session,
        &mut sink,
        &mut opener,
    )
    .context("invoice session failed")?;

    Ok(())
}

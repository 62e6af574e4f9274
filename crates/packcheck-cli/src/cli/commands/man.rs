//! `packcheck man` – render the man page to stdout.

use anyhow::Result;
use clap::CommandFactory;
use clap_mangen::Man;
use std::io::Write;

use crate::cli::Cli;

pub fn run_man() -> Result<()> {
    let man = Man::new(Cli::command());
    let mut buf: Vec<u8> = Vec::new();
    man.render(&mut buf)?;
    std::io::stdout().write_all(&buf)?;
    Ok(())
}

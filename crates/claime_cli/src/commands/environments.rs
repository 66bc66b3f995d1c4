//! Environments command - Print recognized targets.

use std::io::{self, Write};

use anyhow::Result;

use claime_infra::Environment;

pub fn execute() -> Result<()> {
    render(&mut io::stdout().lock())?;
    Ok(())
}

fn render<W: Write>(out: &mut W) -> io::Result<()> {
    for env in Environment::all() {
        writeln!(out, "{}", env)?;
    }
    Ok(())
}

use crate::core::Console;
use crate::utils::error::Result;
use std::io::Write;

#[derive(Debug, Clone, Default)]
pub struct StdoutConsole;

impl Console for StdoutConsole {
    fn line(&self, text: &str) -> Result<()> {
        let mut out = std::io::stdout().lock();
        writeln!(out, "{}", text)?;
        Ok(())
    }
}

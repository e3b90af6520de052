// src/file/print.rs
use anyhow::{anyhow, Context, Result};
use std::fs;
use std::process::Command;

/// Hands a finished document to the host's print flow.
pub trait Printer: std::fmt::Debug {
    fn print(&self, document: &str) -> Result<()>;
}

/// Spools a plain-text document through the platform print command.
/// Layout beyond plain text is up to the spooler.
#[derive(Debug)]
pub struct SystemPrinter;

impl SystemPrinter {
    pub fn new() -> Self {
        Self
    }
}

impl Printer for SystemPrinter {
    fn print(&self, document: &str) -> Result<()> {
        let path = std::env::temp_dir().join("duka-report.txt");
        fs::write(&path, document)
            .with_context(|| format!("Failed to write {}", path.display()))?;

        let status = if cfg!(target_os = "windows") {
            Command::new("notepad").arg("/p").arg(&path).status()
        } else {
            Command::new("lp").arg(&path).status()
        }
        .context("Failed to start the system print command")?;

        if !status.success() {
            return Err(anyhow!("Print command exited with {}", status));
        }
        Ok(())
    }
}

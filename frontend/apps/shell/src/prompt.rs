//! Line-Based Prompt
//!
//! Thin wrapper over stdin. All user interaction in the shell goes
//! through here so the views stay free of I/O plumbing.

use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

pub struct Prompt {
    lines: Lines<BufReader<Stdin>>,
}

impl Prompt {
    pub fn new() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }

    /// Read one trimmed line. EOF reads as an empty line.
    pub async fn line(&mut self, label: &str) -> anyhow::Result<String> {
        print!("{label}: ");
        std::io::stdout().flush()?;
        let line = self.lines.next_line().await?.unwrap_or_default();
        Ok(line.trim().to_string())
    }

    /// Read a line, falling back to `default` when left empty
    pub async fn line_or(&mut self, label: &str, default: &str) -> anyhow::Result<String> {
        let line = self.line(&format!("{label} [{default}]")).await?;
        Ok(if line.is_empty() {
            default.to_string()
        } else {
            line
        })
    }
}

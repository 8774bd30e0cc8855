use crate::areas::comparator::Comparator;
use crate::artifacts::diff::result::DiffResult;
use anyhow::Context;
use clap::ValueEnum;
use colored::Colorize;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable block listing
    Text,
    /// JSON serialization of the diff result
    Json,
}

impl Comparator {
    pub(crate) async fn render(
        &self,
        result: &DiffResult,
        format: OutputFormat,
        output: Option<&Path>,
    ) -> anyhow::Result<()> {
        match format {
            OutputFormat::Json => self.render_json(result, output).await,
            OutputFormat::Text => self.render_text(result),
        }
    }

    async fn render_json(&self, result: &DiffResult, output: Option<&Path>) -> anyhow::Result<()> {
        let payload =
            serde_json::to_string_pretty(result).context("Failed to serialize diff result")?;

        match output {
            Some(path) => {
                self.workspace().write_file(path, &payload).await?;
                writeln!(
                    self.writer(),
                    "{}",
                    format!("Results saved to {}", path.display()).green()
                )?;
            }
            None => {
                writeln!(self.writer(), "{payload}")?;
            }
        }

        Ok(())
    }

    fn render_text(&self, result: &DiffResult) -> anyhow::Result<()> {
        if !result.has_difference {
            writeln!(self.writer(), "{}", "No differences found".green())?;
            return Ok(());
        }

        for block in &result.equal {
            writeln!(
                self.writer(),
                "{}",
                format!("equal lines {}-{}", block.start_line, block.end_line).cyan()
            )?;
        }

        for block in &result.remove {
            writeln!(
                self.writer(),
                "{}",
                format!("removed lines {}-{}", block.start_line, block.end_line).cyan()
            )?;
            for line in block.content.split('\n') {
                writeln!(self.writer(), "{}", format!("-{line}").red())?;
            }
        }

        for block in &result.addition {
            let header = match block.insert_after_line {
                0 => "added at start of file".to_string(),
                line => format!("added after line {line}"),
            };
            writeln!(self.writer(), "{}", header.cyan())?;
            for line in block.content.split('\n') {
                writeln!(self.writer(), "{}", format!("+{line}").green())?;
            }
        }

        writeln!(
            self.writer(),
            "{}",
            format!(
                "{} equal, {} removed, {} added",
                result.equal.len(),
                result.remove.len(),
                result.addition.len()
            )
            .bold()
        )?;

        Ok(())
    }
}

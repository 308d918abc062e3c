//! `comprules markdown` command implementation.

use std::path::PathBuf;

use clap::Args;
use comprules_config::Config;
use comprules_page::write_page;

use super::{SourceArgs, load_document, rules_source};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the markdown command.
#[derive(Args)]
pub(crate) struct MarkdownArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Output markup file (default: `output.markdown_path`, or the page path
    /// with an `.md` extension).
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl MarkdownArgs {
    /// Execute the markdown command.
    ///
    /// # Errors
    ///
    /// Returns an error if the rules cannot be obtained, transformed or written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let config = Config::load(
            self.source.config.as_deref(),
            Some(&self.source.cli_settings()),
        )?;
        let path = self
            .output
            .or(config.output.markdown_path)
            .unwrap_or_else(|| config.output.path.with_extension("md"));

        let source = rules_source(&config.source);
        let markup = load_document(source.as_ref(), &output)?.to_markup();
        write_page(&path, &markup)?;

        output.success(&format!("Wrote {}", path.display()));
        Ok(())
    }
}

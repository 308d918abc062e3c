//! `comprules locate` command implementation.

use std::path::PathBuf;

use clap::Args;
use comprules_config::Config;
use comprules_source::HttpSource;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the locate command.
#[derive(Args)]
pub(crate) struct LocateArgs {
    /// Path to configuration file (default: auto-discover comprules.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl LocateArgs {
    /// Execute the locate command.
    ///
    /// Looks up the rules page even when a text URL is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the rules page cannot be downloaded or has no
    /// rules text link.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = Config::load(self.config.as_deref(), None)?;

        let source = HttpSource::new(&config.source.rules_page_url, config.source.timeout)
            .with_link_text(&config.source.link_text);
        output.info(&format!("Searching {}", config.source.rules_page_url));

        output.result(&source.locate()?);
        Ok(())
    }
}

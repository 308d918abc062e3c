//! `comprules build` command implementation.

use std::path::PathBuf;

use clap::Args;
use comprules_config::{CliSettings, Config};
use comprules_page::{PageOptions, build_page, write_page};

use super::{SourceArgs, load_document, rules_source};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Output HTML file (overrides config).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Link this stylesheet instead of inlining the default styles.
    #[arg(long)]
    stylesheet: Option<String>,

    /// Also write the intermediate markup to this file.
    #[arg(long)]
    markdown: Option<PathBuf>,
}

impl BuildArgs {
    /// Execute the build command.
    ///
    /// # Errors
    ///
    /// Returns an error if the rules cannot be obtained, transformed or written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            output: self.output,
            stylesheet: self.stylesheet,
            markdown_path: self.markdown,
            ..self.source.cli_settings()
        };
        let config = Config::load(self.source.config.as_deref(), Some(&cli_settings))?;

        let source = rules_source(&config.source);
        let markup = load_document(source.as_ref(), &output)?.to_markup();

        let page = build_page(
            &markup,
            &PageOptions {
                title: config.output.title.clone(),
                stylesheet: config.output.stylesheet.clone(),
            },
        );
        write_page(&config.output.path, &page.html)?;

        // Markup is only kept next to a page that was written.
        if let Some(path) = &config.output.markdown_path {
            write_page(path, &markup)?;
            output.info(&format!("Markup: {}", path.display()));
        }

        output.success(&format!("Wrote {}", config.output.path.display()));
        Ok(())
    }
}

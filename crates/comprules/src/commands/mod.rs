//! CLI command implementations.

pub(crate) mod build;
pub(crate) mod locate;
pub(crate) mod markdown;

pub(crate) use build::BuildArgs;
pub(crate) use locate::LocateArgs;
pub(crate) use markdown::MarkdownArgs;

use std::path::PathBuf;

use clap::Args;
use comprules_config::{CliSettings, SourceConfig};
use comprules_parser::StructuredDocument;
use comprules_source::{FileSource, HttpSource, RulesSource};

use crate::error::CliError;
use crate::output::Output;

/// Arguments selecting the configuration and the rules text.
#[derive(Args)]
pub(crate) struct SourceArgs {
    /// Path to configuration file (default: auto-discover comprules.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Read the rules text from a local file instead of downloading it.
    /// Takes precedence over `--text-url`.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// URL of the rules text (skips the rules page lookup).
    #[arg(long, env = "COMPRULES_TEXT_URL")]
    text_url: Option<String>,
}

impl SourceArgs {
    /// CLI settings carrying the source overrides.
    fn cli_settings(&self) -> CliSettings {
        CliSettings {
            input: self.input.clone(),
            text_url: self.text_url.clone(),
            ..CliSettings::default()
        }
    }
}

/// Pick the rules source: a local file wins over the network.
fn rules_source(config: &SourceConfig) -> Box<dyn RulesSource> {
    match &config.input {
        Some(path) => Box::new(FileSource::new(path)),
        None => Box::new(
            HttpSource::new(&config.rules_page_url, config.timeout)
                .with_link_text(&config.link_text)
                .with_text_url(config.text_url.clone()),
        ),
    }
}

/// Fetch the rules text and transform it into a structured document.
fn load_document(source: &dyn RulesSource, output: &Output) -> Result<StructuredDocument, CliError> {
    output.info(&format!("Reading rules from {}", source.describe()));
    let text = source.fetch()?;
    let document = comprules_parser::parse(&text)?;

    let stats = document.stats();
    tracing::info!(
        sections = stats.sections,
        subsections = stats.subsections,
        rules = stats.rules,
        examples = stats.examples,
        glossary_terms = stats.glossary_terms,
        "Parsed rules"
    );
    Ok(document)
}

//! Configuration management for comprules.
//!
//! Parses `comprules.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! URL and path values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `source.rules_page_url`
//! - `source.text_url`
//! - `source.input`
//! - `output.path`
//! - `output.stylesheet`
//! - `output.markdown_path`

mod expand;

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Read the rules text from a local file.
    pub input: Option<PathBuf>,
    /// Download the rules text from this URL without locating it.
    pub text_url: Option<String>,
    /// Override output file path.
    pub output: Option<PathBuf>,
    /// Link this stylesheet instead of inlining the default styles.
    pub stylesheet: Option<String>,
    /// Also write the intermediate markup to this path.
    pub markdown_path: Option<PathBuf>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "comprules.toml";

/// Published rules page that links the plain-text rules.
pub const DEFAULT_RULES_PAGE_URL: &str = "https://magic.wizards.com/en/rules";

const DEFAULT_LINK_TEXT: &str = "TXT";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_OUTPUT: &str = "rules.html";
const DEFAULT_TITLE: &str = "Magic: The Gathering Comprehensive Rules";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Source configuration as parsed from TOML.
    #[serde(rename = "source")]
    source_raw: SourceConfigRaw,
    /// Output configuration as parsed from TOML.
    #[serde(rename = "output")]
    output_raw: OutputConfigRaw,

    /// Resolved source configuration (set after loading).
    #[serde(skip)]
    pub source: SourceConfig,
    /// Resolved output configuration (set after loading).
    #[serde(skip)]
    pub output: OutputConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Raw source configuration as parsed from TOML.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SourceConfigRaw {
    rules_page_url: Option<String>,
    link_text: Option<String>,
    text_url: Option<String>,
    input: Option<String>,
    timeout_secs: Option<u64>,
}

/// Where the rules text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceConfig {
    /// Page that links the plain-text rules.
    pub rules_page_url: String,
    /// Visible text of the link to follow.
    pub link_text: String,
    /// Direct URL of the rules text, skipping the rules page.
    pub text_url: Option<String>,
    /// Local rules text file, skipping the network entirely.
    pub input: Option<PathBuf>,
    /// Timeout for each HTTP request.
    pub timeout: Duration,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            rules_page_url: DEFAULT_RULES_PAGE_URL.to_owned(),
            link_text: DEFAULT_LINK_TEXT.to_owned(),
            text_url: None,
            input: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Raw output configuration as parsed from TOML.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OutputConfigRaw {
    path: Option<String>,
    title: Option<String>,
    stylesheet: Option<String>,
    markdown_path: Option<String>,
}

/// Where and how the page is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// HTML page path.
    pub path: PathBuf,
    /// Page title.
    pub title: String,
    /// Stylesheet href. Default styles are inlined when unset.
    pub stylesheet: Option<String>,
    /// Intermediate markup path, if the markup should be kept.
    pub markdown_path: Option<PathBuf>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_OUTPUT),
            title: DEFAULT_TITLE.to_owned(),
            stylesheet: None,
            markdown_path: None,
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`output.path`").
        field: String,
        /// Error message (e.g., "${`RULES_DIR`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `comprules.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the resulting configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(input) = &settings.input {
            self.source.input = Some(input.clone());
        }
        if let Some(text_url) = &settings.text_url {
            self.source.text_url = Some(text_url.clone());
        }
        if let Some(output) = &settings.output {
            self.output.path.clone_from(output);
        }
        if let Some(stylesheet) = &settings.stylesheet {
            self.output.stylesheet = Some(stylesheet.clone());
        }
        if let Some(markdown_path) = &settings.markdown_path {
            self.output.markdown_path = Some(markdown_path.clone());
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_source()?;
        require_non_empty(&self.output.title, "output.title")?;
        if self.output.path.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "output.path cannot be empty".to_owned(),
            ));
        }
        Ok(())
    }

    fn validate_source(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.source.rules_page_url, "source.rules_page_url")?;
        require_http_url(&self.source.rules_page_url, "source.rules_page_url")?;
        require_non_empty(&self.source.link_text, "source.link_text")?;
        if let Some(ref text_url) = self.source.text_url {
            require_http_url(text_url, "source.text_url")?;
        }
        if self.source.timeout.is_zero() {
            return Err(ConfigError::Validation(
                "source.timeout_secs must be greater than 0".to_owned(),
            ));
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        let source = &mut self.source_raw;
        source.rules_page_url =
            expand::expand_opt(source.rules_page_url.as_deref(), "source.rules_page_url")?;
        source.text_url = expand::expand_opt(source.text_url.as_deref(), "source.text_url")?;
        source.input = expand::expand_opt(source.input.as_deref(), "source.input")?;

        let output = &mut self.output_raw;
        output.path = expand::expand_opt(output.path.as_deref(), "output.path")?;
        output.stylesheet = expand::expand_opt(output.stylesheet.as_deref(), "output.stylesheet")?;
        output.markdown_path =
            expand::expand_opt(output.markdown_path.as_deref(), "output.markdown_path")?;
        Ok(())
    }

    /// Fill resolved sections from the raw ones, resolving relative paths
    /// against the config file's directory.
    fn resolve(&mut self, config_dir: &Path) {
        let source = &self.source_raw;
        self.source = SourceConfig {
            rules_page_url: source
                .rules_page_url
                .clone()
                .unwrap_or_else(|| DEFAULT_RULES_PAGE_URL.to_owned()),
            link_text: source
                .link_text
                .clone()
                .unwrap_or_else(|| DEFAULT_LINK_TEXT.to_owned()),
            text_url: source.text_url.clone(),
            input: source.input.as_deref().map(|p| config_dir.join(p)),
            timeout: Duration::from_secs(source.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)),
        };

        let output = &self.output_raw;
        self.output = OutputConfig {
            path: config_dir.join(output.path.as_deref().unwrap_or(DEFAULT_OUTPUT)),
            title: output
                .title
                .clone()
                .unwrap_or_else(|| DEFAULT_TITLE.to_owned()),
            stylesheet: output.stylesheet.clone(),
            markdown_path: output.markdown_path.as_deref().map(|p| config_dir.join(p)),
        };
    }
}

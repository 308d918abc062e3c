//! Sources of the Comprehensive Rules text.
//!
//! The rules are published as a plain-text file linked from the rules page.
//! [`HttpSource`] finds that link and downloads the file; [`FileSource`] reads
//! a copy from disk. Both decode UTF-8 and drop a leading byte-order mark.

mod decode;
mod error;
mod file;
mod http;
mod locate;

pub use decode::decode_utf8_sig;
pub use error::SourceError;
pub use file::FileSource;
pub use http::{DEFAULT_LINK_TEXT, HttpSource};
pub use locate::{find_link_href, resolve_href};

/// A place the rules text can be obtained from.
pub trait RulesSource {
    /// Return the decoded rules text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text cannot be read, downloaded or decoded.
    fn fetch(&self) -> Result<String, SourceError>;

    /// Human-readable location for log messages.
    fn describe(&self) -> String;
}

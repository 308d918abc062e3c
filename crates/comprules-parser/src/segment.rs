//! Formatted output segments.
//!
//! Each stage of the transformation returns an ordered `Vec<Segment>` instead
//! of appending to a shared buffer. A segment knows the exact markup it
//! stands for; the markup is only produced once the whole document has been
//! assembled.

use std::fmt::{self, Write};

/// Markup directive expanded by the renderer into a table of contents.
pub const TOC_DIRECTIVE: &str = "[TOC]";

/// One formatted unit of the structured document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Segment {
    /// ATX heading of the given level (1-6).
    Heading { level: u8, text: String },
    /// Placeholder for the generated table of contents.
    TocDirective,
    /// Individually numbered rule with its anchor attachment.
    Rule { id: String, text: String },
    /// Example annotation, rendered as an emphasized paragraph.
    Example(String),
    /// A line emitted verbatim.
    Line(String),
    /// A single empty line.
    BlankLine,
    /// Two newlines separating blocks.
    ParagraphBreak,
    /// A line that forms a paragraph on its own.
    Paragraph(String),
}

impl Segment {
    pub(crate) fn heading(level: u8, text: impl Into<String>) -> Self {
        Self::Heading {
            level,
            text: text.into(),
        }
    }

    pub(crate) fn rule(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self::Rule {
            id: id.into(),
            text: text.into(),
        }
    }

    /// Append the markup for this segment to `out`.
    pub fn write_markup(&self, out: &mut String) {
        // Writing into a String cannot fail.
        let _ = write!(out, "{self}");
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Heading { level, text } => {
                let hashes = "#".repeat(usize::from(*level));
                writeln!(f, "{hashes} {text}")
            }
            Self::TocDirective => writeln!(f, "{TOC_DIRECTIVE}"),
            Self::Rule { id, text } => {
                writeln!(f, "[{id}](#{id}) {text}")?;
                writeln!(f, " {{: #{id} }}")
            }
            Self::Example(text) => write!(f, "\n_{text}_\n"),
            Self::Line(text) => writeln!(f, "{text}"),
            Self::BlankLine => writeln!(f),
            Self::ParagraphBreak => write!(f, "\n\n"),
            Self::Paragraph(text) => write!(f, "{text}\n\n"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_markup() {
        assert_eq!(Segment::heading(2, "Game Concepts").to_string(), "## Game Concepts\n");
        assert_eq!(Segment::heading(3, "General").to_string(), "### General\n");
    }

    #[test]
    fn test_rule_markup() {
        let segment = Segment::rule("104.3a", "A player can concede the game at any time.");
        assert_eq!(
            segment.to_string(),
            "[104.3a](#104.3a) A player can concede the game at any time.\n {: #104.3a }\n"
        );
    }

    #[test]
    fn test_example_markup() {
        assert_eq!(
            Segment::Example("Example: If an effect...".to_owned()).to_string(),
            "\n_Example: If an effect..._\n"
        );
    }

    #[test]
    fn test_breaks() {
        assert_eq!(Segment::BlankLine.to_string(), "\n");
        assert_eq!(Segment::ParagraphBreak.to_string(), "\n\n");
        assert_eq!(Segment::TocDirective.to_string(), "[TOC]\n");
        assert_eq!(Segment::Paragraph("Lead".to_owned()).to_string(), "Lead\n\n");
    }

    #[test]
    fn test_write_markup_appends() {
        let mut out = String::from("start\n");
        Segment::Line("next".to_owned()).write_markup(&mut out);
        assert_eq!(out, "start\nnext\n");
    }
}

//! Forward-only section state machine.
//!
//! The source document is a flat sequence of lines split into regions by
//! marker lines:
//!
//! ```text
//! Start -> Introduction -> Contents -> Rules -> Glossary -> Credits
//!       "Introduction"  "Contents"  "Credits"  "Glossary"   "Credits"
//! ```
//!
//! The first `Credits` closes the contents index and is never emitted. The
//! glossary and credits boundaries are found during the same pass that
//! formats the rules body, so no fixed line offset is involved.

use std::fmt;

use crate::classify::{
    CONTENTS_MARKER, CREDITS_MARKER, GLOSSARY_MARKER, INTRODUCTION_MARKER, LineCategory,
    classify_in,
};
use crate::error::StructureError;
use crate::rules::format_rule_line;
use crate::segment::Segment;

/// Logical region of the source document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    /// Before the introduction marker (title and effective date).
    Start,
    Introduction,
    /// Human-readable index, superseded by the generated table of contents.
    Contents,
    Rules,
    Glossary,
    Credits,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Start => "start",
            Self::Introduction => "introduction",
            Self::Contents => "contents",
            Self::Rules => "rules",
            Self::Glossary => "glossary",
            Self::Credits => "credits",
        };
        f.write_str(name)
    }
}

impl Section {
    /// Marker line that moves the scan out of this section.
    fn next_marker(self) -> Option<&'static str> {
        match self {
            Self::Start => Some(INTRODUCTION_MARKER),
            Self::Introduction => Some(CONTENTS_MARKER),
            Self::Contents | Self::Glossary => Some(CREDITS_MARKER),
            Self::Rules => Some(GLOSSARY_MARKER),
            Self::Credits => None,
        }
    }
}

/// What to do with the line that triggered a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Action {
    /// Emit through the front-matter formatter (headings or verbatim).
    FrontMatter,
    /// Emit the contents heading followed by the table of contents directive.
    OpenContents,
    /// Drop the line.
    Discard,
    /// Emit through the rule entry formatter.
    RuleEntry,
    /// Record the line as the first line of the glossary slice.
    OpenGlossary,
    /// Record the line as the first line of the credits slice.
    OpenCredits,
    /// The line belongs to the glossary or credits slice already opened.
    Collect,
}

/// Transition table: `(section, category) -> (next section, action)`.
///
/// Returns `None` for marker lines that cannot appear in `section`.
pub(crate) fn transition(section: Section, category: LineCategory) -> Option<(Section, Action)> {
    use LineCategory as C;
    use Section as S;

    let step = match (section, category) {
        (S::Start | S::Introduction, C::GlossaryMarker | C::CreditsMarker) => return None,
        (S::Start | S::Introduction, C::IntroductionMarker) => (S::Introduction, Action::FrontMatter),
        (S::Introduction, C::ContentsMarker) => (S::Contents, Action::OpenContents),
        (S::Start | S::Introduction, _) => (section, Action::FrontMatter),
        (S::Contents, C::CreditsMarker) => (S::Rules, Action::Discard),
        (S::Contents, _) => (S::Contents, Action::Discard),
        (S::Rules, C::GlossaryMarker) => (S::Glossary, Action::OpenGlossary),
        (S::Rules, _) => (S::Rules, Action::RuleEntry),
        (S::Glossary, C::CreditsMarker) => (S::Credits, Action::OpenCredits),
        (S::Glossary | S::Credits, _) => (section, Action::Collect),
    };
    Some(step)
}

/// Output of the body scan.
#[derive(Debug)]
pub(crate) struct BodyScan {
    /// Title, introduction, contents heading and table of contents directive.
    pub front_matter: Vec<Segment>,
    /// Formatted rules body.
    pub rules: Vec<Segment>,
    /// Index of the glossary marker line.
    pub glossary_start: usize,
    /// Index of the credits marker line that ends the glossary.
    pub credits_start: usize,
}

/// Scan trimmed lines once, formatting everything up to the glossary and
/// locating the glossary and credits boundaries.
pub(crate) fn scan_body(lines: &[&str]) -> Result<BodyScan, StructureError> {
    let mut section = Section::Start;
    let mut front_matter = Vec::new();
    let mut rules = Vec::new();
    let mut glossary_start = None;
    let mut credits_start = None;

    for (index, &line) in lines.iter().enumerate() {
        let category = classify_in(line, section);
        let (next, action) =
            transition(section, category).ok_or_else(|| StructureError::UnexpectedMarker {
                marker: line.to_owned(),
                line: index + 1,
                section,
            })?;

        if next != section {
            tracing::debug!(line = index + 1, from = %section, to = %next, "Section transition");
        }

        match action {
            Action::FrontMatter => front_matter.push(format_front_matter(line, category)),
            Action::OpenContents => {
                front_matter.push(Segment::heading(2, line));
                front_matter.push(Segment::TocDirective);
            }
            Action::Discard | Action::Collect => {}
            Action::RuleEntry => rules.push(format_rule_line(line, category)),
            Action::OpenGlossary => glossary_start = Some(index),
            Action::OpenCredits => credits_start = Some(index),
        }

        section = next;
    }

    match (glossary_start, credits_start) {
        (Some(glossary_start), Some(credits_start)) => Ok(BodyScan {
            front_matter,
            rules,
            glossary_start,
            credits_start,
        }),
        _ => Err(StructureError::MissingMarker {
            marker: section.next_marker().unwrap_or(CREDITS_MARKER),
            section,
        }),
    }
}

/// Format a line before the contents index.
fn format_front_matter(line: &str, category: LineCategory) -> Segment {
    match category {
        LineCategory::TopHeading => Segment::heading(1, line),
        c if c.is_marker() => Segment::heading(2, line),
        LineCategory::Blank => Segment::BlankLine,
        _ => Segment::Line(line.to_owned()),
    }
}

//! Document assembly.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::StructureError;
use crate::glossary::{parse_glossary, term_count};
use crate::section::scan_body;
use crate::segment::Segment;

/// Line boundaries: CRLF plus every single-character break, including the
/// ASCII separators, NEL and the Unicode line and paragraph separators.
static LINE_BREAK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\r\n|[\n\r\x0B\x0C\x1C-\x1E\x{85}\x{2028}\x{2029}]").unwrap()
});

/// Counts of the structural elements found while transforming a document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DocumentStats {
    pub sections: usize,
    pub subsections: usize,
    pub rules: usize,
    pub examples: usize,
    pub glossary_terms: usize,
}

/// The transformed document: an ordered sequence of formatted segments.
///
/// Ordering is fixed: introduction, table of contents directive, rules body,
/// glossary, credits.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StructuredDocument {
    segments: Vec<Segment>,
    stats: DocumentStats,
}

impl StructuredDocument {
    /// All segments in output order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn stats(&self) -> DocumentStats {
        self.stats
    }

    /// Concatenate all segments into the markup handed to the renderer,
    /// trimmed of leading and trailing whitespace.
    pub fn to_markup(&self) -> String {
        let mut out = String::with_capacity(self.segments.len() * 64);
        for segment in &self.segments {
            segment.write_markup(&mut out);
        }
        let trimmed = out.trim();
        if trimmed.len() == out.len() {
            out
        } else {
            trimmed.to_owned()
        }
    }
}

/// Transform the full rules text into a structured document.
///
/// A leading byte-order mark is ignored and lines are trimmed before
/// classification. Fails when the glossary or the credits boundary cannot be
/// located.
pub fn parse(text: &str) -> Result<StructuredDocument, StructureError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let lines: Vec<&str> = split_lines(text).into_iter().map(str::trim).collect();
    tracing::debug!(lines = lines.len(), "Transforming rules text");

    let scan = scan_body(&lines)?;
    let glossary = parse_glossary(&lines[scan.glossary_start..scan.credits_start]);
    let credits = format_credits(&lines[scan.credits_start..]);

    let mut stats = rules_stats(&scan.rules);
    stats.glossary_terms = term_count(&glossary);
    if stats.rules == 0 {
        tracing::warn!("No numbered rules found between the contents and the glossary");
    }

    let document = assemble([scan.front_matter, scan.rules, glossary, credits], stats);
    tracing::debug!(segments = document.segments.len(), "Document assembled");
    Ok(document)
}

/// Split on every line boundary. A trailing boundary does not produce an
/// empty last line.
fn split_lines(text: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = LINE_BREAK.split(text).collect();
    if lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    lines
}

/// Concatenate the stage outputs in order.
fn assemble<const N: usize>(parts: [Vec<Segment>; N], stats: DocumentStats) -> StructuredDocument {
    let segments = parts.into_iter().flatten().collect();
    StructuredDocument { segments, stats }
}

/// Format the credits slice: the marker becomes a heading and every other
/// non-blank line a paragraph of its own.
fn format_credits(lines: &[&str]) -> Vec<Segment> {
    let mut lines = lines.iter().copied();
    let mut segments = Vec::with_capacity(lines.len());
    if let Some(marker) = lines.next() {
        segments.push(Segment::heading(2, marker));
    }
    segments.extend(
        lines
            .filter(|line| !line.is_empty())
            .map(|line| Segment::Paragraph(line.to_owned())),
    );
    segments
}

fn rules_stats(rules: &[Segment]) -> DocumentStats {
    let mut stats = DocumentStats::default();
    for segment in rules {
        match segment {
            Segment::Heading { level: 2, .. } => stats.sections += 1,
            Segment::Heading { level: 3, .. } => stats.subsections += 1,
            Segment::Rule { .. } => stats.rules += 1,
            Segment::Example(_) => stats.examples += 1,
            _ => {}
        }
    }
    stats
}

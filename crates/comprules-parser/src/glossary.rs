//! Glossary sub-parser.
//!
//! The glossary is a run of blocks separated by blank lines. The first line
//! of a block is the term; the following lines are prose definitions or a
//! numbered list. List items are emitted back to back so the renderer groups
//! them into one list, and the first prose line after a list is preceded by a
//! blank line to close it.

use crate::classify::{GLOSSARY_MARKER, is_list_item};
use crate::segment::Segment;

/// Parse the glossary slice, from the glossary marker (inclusive) to the
/// credits marker (exclusive).
pub fn parse_glossary(lines: &[&str]) -> Vec<Segment> {
    let mut segments = Vec::with_capacity(lines.len());
    let mut current_term: Option<&str> = None;
    let mut in_list = false;

    for &line in lines {
        if line.is_empty() {
            current_term = None;
            continue;
        }

        if line == GLOSSARY_MARKER {
            segments.push(Segment::heading(2, line));
            continue;
        }

        if current_term.is_none() {
            current_term = Some(line);
            segments.push(Segment::heading(3, line));
        } else if is_list_item(line) {
            in_list = true;
            segments.push(Segment::Line(line.to_owned()));
        } else if in_list {
            in_list = false;
            segments.push(Segment::BlankLine);
            segments.push(Segment::Line(line.to_owned()));
        } else {
            segments.push(Segment::Line(line.to_owned()));
        }
    }

    segments
}

/// Number of term headings in a parsed glossary.
pub(crate) fn term_count(segments: &[Segment]) -> usize {
    segments
        .iter()
        .filter(|s| matches!(s, Segment::Heading { level: 3, .. }))
        .count()
}

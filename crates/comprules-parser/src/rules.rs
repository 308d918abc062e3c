//! Rule entry formatter for lines inside the rules body.

use crate::classify::{LineCategory, split_identifier};
use crate::segment::Segment;

/// Format one trimmed line of the rules body.
///
/// Section and subsection headings drop their identifier, numbered rules
/// become anchor-addressable entries and everything else passes through as
/// continuation text.
pub fn format_rule_line(line: &str, category: LineCategory) -> Segment {
    let identified = || split_identifier(line);

    match category {
        LineCategory::Blank => Segment::ParagraphBreak,
        LineCategory::SectionHeading => match identified() {
            Some((_, text)) => Segment::heading(2, text),
            None => Segment::Line(line.to_owned()),
        },
        LineCategory::SubsectionHeading => match identified() {
            Some((_, text)) => Segment::heading(3, text),
            None => Segment::Line(line.to_owned()),
        },
        LineCategory::NumberedRule => match identified() {
            Some((id, text)) => Segment::rule(id, text),
            None => Segment::Line(line.to_owned()),
        },
        LineCategory::Example => Segment::Example(line.to_owned()),
        _ => Segment::Line(line.to_owned()),
    }
}

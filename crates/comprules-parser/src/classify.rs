//! Line classification.
//!
//! Every trimmed source line falls into exactly one [`LineCategory`]. Rule-shaped
//! lines are recognized by the identifier that precedes the first whitespace run:
//!
//! | Identifier | Category |
//! |------------|----------|
//! | `1.`, `12.` | [`LineCategory::SectionHeading`] |
//! | `100.` | [`LineCategory::SubsectionHeading`] |
//! | `104.3a`, `104.3.` | [`LineCategory::NumberedRule`] |

use std::sync::LazyLock;

use regex::Regex;

use crate::section::Section;

/// Title line of the document, rendered as the only level-1 heading.
pub const DOCUMENT_TITLE: &str = "Magic: The Gathering Comprehensive Rules";

/// Marker line opening the introduction.
pub const INTRODUCTION_MARKER: &str = "Introduction";
/// Marker line opening the human-readable contents index.
pub const CONTENTS_MARKER: &str = "Contents";
/// Marker line opening the glossary.
pub const GLOSSARY_MARKER: &str = "Glossary";
/// Marker line closing the contents index and, later, opening the credits.
pub const CREDITS_MARKER: &str = "Credits";

static SECTION_ID: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{1,2}\.$").unwrap());
static SUBSECTION_ID: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{3,}\.$").unwrap());
static RULE_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{3,}\.\d+(?:[a-z]+|\.)$").unwrap());
static LIST_ITEM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d\.").unwrap());

/// Category of a single trimmed line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineCategory {
    TopHeading,
    SectionHeading,
    SubsectionHeading,
    NumberedRule,
    Example,
    /// `1. ...` shaped line; only meaningful inside the glossary.
    ListItem,
    IntroductionMarker,
    ContentsMarker,
    GlossaryMarker,
    CreditsMarker,
    PlainText,
    Blank,
}

impl LineCategory {
    /// Whether this category is one of the four section markers.
    pub fn is_marker(self) -> bool {
        matches!(
            self,
            Self::IntroductionMarker
                | Self::ContentsMarker
                | Self::GlossaryMarker
                | Self::CreditsMarker
        )
    }
}

/// Split a line on its first whitespace run into `(identifier, rest)`.
///
/// Returns `None` when the line is a single token or nothing follows the
/// whitespace.
pub fn split_identifier(line: &str) -> Option<(&str, &str)> {
    let (id, rest) = line.split_once(char::is_whitespace)?;
    let rest = rest.trim_start();
    if id.is_empty() || rest.is_empty() {
        return None;
    }
    Some((id, rest))
}

/// Whether a line has the glossary list-item shape: a single digit and a dot.
pub fn is_list_item(line: &str) -> bool {
    LIST_ITEM.is_match(line)
}

/// Classify a trimmed line independent of the surrounding section.
pub fn classify(line: &str) -> LineCategory {
    if line.is_empty() {
        return LineCategory::Blank;
    }

    match line {
        DOCUMENT_TITLE => return LineCategory::TopHeading,
        INTRODUCTION_MARKER => return LineCategory::IntroductionMarker,
        CONTENTS_MARKER => return LineCategory::ContentsMarker,
        GLOSSARY_MARKER => return LineCategory::GlossaryMarker,
        CREDITS_MARKER => return LineCategory::CreditsMarker,
        _ => {}
    }

    let Some((id, _rest)) = split_identifier(line) else {
        return LineCategory::PlainText;
    };

    if SECTION_ID.is_match(id) {
        LineCategory::SectionHeading
    } else if SUBSECTION_ID.is_match(id) {
        LineCategory::SubsectionHeading
    } else if RULE_ID.is_match(id) {
        LineCategory::NumberedRule
    } else if starts_with_example(line) {
        LineCategory::Example
    } else if is_list_item(line) {
        LineCategory::ListItem
    } else {
        LineCategory::PlainText
    }
}

/// Classify a trimmed line as seen from `section`.
///
/// Inside the rules body only the glossary marker keeps its meaning; the other
/// marker words can occur as ordinary text there.
pub fn classify_in(line: &str, section: Section) -> LineCategory {
    let category = classify(line);
    if section == Section::Rules
        && category.is_marker()
        && category != LineCategory::GlossaryMarker
    {
        return LineCategory::PlainText;
    }
    category
}

fn starts_with_example(line: &str) -> bool {
    line.get(..7)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("example"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_line() {
        assert_eq!(classify(""), LineCategory::Blank);
    }

    #[test]
    fn test_markers_and_title() {
        assert_eq!(classify(DOCUMENT_TITLE), LineCategory::TopHeading);
        assert_eq!(classify("Introduction"), LineCategory::IntroductionMarker);
        assert_eq!(classify("Contents"), LineCategory::ContentsMarker);
        assert_eq!(classify("Glossary"), LineCategory::GlossaryMarker);
        assert_eq!(classify("Credits"), LineCategory::CreditsMarker);
    }

    #[test]
    fn test_section_heading_ids() {
        assert_eq!(classify("1. Game Concepts"), LineCategory::SectionHeading);
        assert_eq!(classify("9. Casual Variants"), LineCategory::SectionHeading);
        assert_eq!(classify("10. Future"), LineCategory::SectionHeading);
    }

    #[test]
    fn test_subsection_heading_ids() {
        assert_eq!(classify("100. General"), LineCategory::SubsectionHeading);
        assert_eq!(classify("1000. Far Future"), LineCategory::SubsectionHeading);
    }

    #[test]
    fn test_numbered_rule_ids() {
        assert_eq!(
            classify("104.3a A player can concede the game at any time."),
            LineCategory::NumberedRule
        );
        assert_eq!(
            classify("100.1. These Magic rules apply to any Magic game."),
            LineCategory::NumberedRule
        );
        assert_eq!(classify("702.19bc Odd letters"), LineCategory::NumberedRule);
    }

    #[test]
    fn test_example_is_case_insensitive() {
        assert_eq!(
            classify("Example: If an effect says so."),
            LineCategory::Example
        );
        assert_eq!(classify("EXAMPLE: shouting"), LineCategory::Example);
    }

    #[test]
    fn test_list_item_shape() {
        // Glossary list items share their shape with section headings.
        assert_eq!(classify("1. Untap step"), LineCategory::SectionHeading);
        assert!(is_list_item("1. Untap step"));
        assert_eq!(classify("2.Untap step"), LineCategory::ListItem);
        assert!(!is_list_item("10. Tenth"));
        assert!(!is_list_item("Untap step"));
    }

    #[test]
    fn test_plain_sentence() {
        assert_eq!(
            classify("A player can concede the game."),
            LineCategory::PlainText
        );
        assert_eq!(classify("12a. odd"), LineCategory::PlainText);
    }

    #[test]
    fn test_single_token_is_plain_text() {
        assert_eq!(classify("104.3a"), LineCategory::PlainText);
        assert_eq!(classify("Example"), LineCategory::PlainText);
    }

    #[test]
    fn test_split_identifier() {
        assert_eq!(
            split_identifier("104.3a  A player"),
            Some(("104.3a", "A player"))
        );
        assert_eq!(split_identifier("1.\tGame Concepts"), Some(("1.", "Game Concepts")));
        assert_eq!(split_identifier("single"), None);
    }

    #[test]
    fn test_markers_demoted_in_rules() {
        assert_eq!(
            classify_in("Credits", Section::Rules),
            LineCategory::PlainText
        );
        assert_eq!(
            classify_in("Contents", Section::Rules),
            LineCategory::PlainText
        );
        assert_eq!(
            classify_in("Glossary", Section::Rules),
            LineCategory::GlossaryMarker
        );
        assert_eq!(
            classify_in("Credits", Section::Contents),
            LineCategory::CreditsMarker
        );
    }
}

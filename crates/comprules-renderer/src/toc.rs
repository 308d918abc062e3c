//! Table of contents directive.
//!
//! A paragraph consisting only of `[TOC]` is replaced during rendering by a
//! placeholder. Once every heading has been seen, the placeholder is swapped
//! for a nested list of links to the headings within the configured depth.

use std::fmt::Write;
use std::ops::RangeInclusive;

use crate::state::{TocEntry, escape_html};

/// Paragraph text that requests a table of contents.
pub const TOC_MARKER: &str = "[TOC]";

/// Placeholder left in the output until headings are known.
pub(crate) const TOC_PLACEHOLDER: &str = "<!--comprules:toc-->";

/// Render the table of contents as nested lists.
pub(crate) fn render_toc(entries: &[TocEntry], depth: &RangeInclusive<u8>) -> String {
    let mut html = String::from("<div class=\"toc\">\n");
    // Heading level of each open <ul>.
    let mut open: Vec<u8> = Vec::new();

    for entry in entries.iter().filter(|e| depth.contains(&e.level)) {
        match open.last() {
            None => {
                html.push_str("<ul>\n");
                open.push(entry.level);
            }
            Some(&top) if entry.level > top => {
                html.push_str("\n<ul>\n");
                open.push(entry.level);
            }
            Some(_) => {
                html.push_str("</li>\n");
                while open.len() > 1 && open.last().is_some_and(|&top| entry.level < top) {
                    html.push_str("</ul>\n</li>\n");
                    open.pop();
                }
            }
        }
        let _ = write!(
            html,
            "<li><a href=\"#{}\">{}</a>",
            escape_html(&entry.id),
            escape_html(&entry.title)
        );
    }

    if !open.is_empty() {
        html.push_str("</li>\n");
        for _ in 1..open.len() {
            html.push_str("</ul>\n</li>\n");
        }
        html.push_str("</ul>\n");
    }

    html.push_str("</div>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn entry(level: u8, title: &str, id: &str) -> TocEntry {
        TocEntry {
            level,
            title: title.to_owned(),
            id: id.to_owned(),
        }
    }

    #[test]
    fn test_nested_levels() {
        let entries = [
            entry(2, "Game Concepts", "game-concepts"),
            entry(3, "General", "general"),
            entry(3, "Players", "players"),
            entry(2, "Parts of a Card", "parts-of-a-card"),
        ];
        assert_eq!(
            render_toc(&entries, &(2..=3)),
            "<div class=\"toc\">\n<ul>\n\
             <li><a href=\"#game-concepts\">Game Concepts</a>\n<ul>\n\
             <li><a href=\"#general\">General</a></li>\n\
             <li><a href=\"#players\">Players</a></li>\n\
             </ul>\n</li>\n\
             <li><a href=\"#parts-of-a-card\">Parts of a Card</a></li>\n\
             </ul>\n</div>"
        );
    }

    #[test]
    fn test_depth_filter() {
        let entries = [
            entry(1, "Title", "title"),
            entry(2, "Glossary", "glossary"),
            entry(3, "Flying", "flying"),
            entry(4, "Deep", "deep"),
        ];
        let html = render_toc(&entries, &(2..=2));
        assert!(html.contains("#glossary"));
        assert!(!html.contains("#title"));
        assert!(!html.contains("#flying"));
        assert!(!html.contains("#deep"));
    }

    #[test]
    fn test_ends_nested() {
        let entries = [entry(2, "A", "a"), entry(3, "B", "b")];
        assert_eq!(
            render_toc(&entries, &(2..=3)),
            "<div class=\"toc\">\n<ul>\n<li><a href=\"#a\">A</a>\n<ul>\n\
             <li><a href=\"#b\">B</a></li>\n</ul>\n</li>\n</ul>\n</div>"
        );
    }

    #[test]
    fn test_empty() {
        assert_eq!(render_toc(&[], &(2..=3)), "<div class=\"toc\">\n</div>");
    }

    #[test]
    fn test_titles_are_escaped() {
        let entries = [entry(2, "Rock & Roll", "rock-roll")];
        assert!(render_toc(&entries, &(2..=3)).contains("Rock &amp; Roll"));
    }
}

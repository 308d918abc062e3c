//! Shared state structs for markdown rendering.
//!
//! These structs track context during event processing: which block is
//! currently buffering inline output and what has been collected for the
//! table of contents.

use std::collections::HashMap;

/// State for buffering a paragraph until its end is known.
///
/// Paragraph output is held back because a trailing anchor attachment line
/// decides the opening tag, and a lone table of contents directive replaces
/// the paragraph entirely.
#[derive(Default)]
pub(crate) struct ParagraphState {
    active: bool,
    html: String,
}

impl ParagraphState {
    pub fn start(&mut self) {
        self.active = true;
        self.html.clear();
    }

    /// End the paragraph and return the buffered inner HTML.
    pub fn end(&mut self) -> String {
        self.active = false;
        std::mem::take(&mut self.html)
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn push_html(&mut self, html: &str) {
        self.html.push_str(html);
    }
}

/// Table of contents entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TocEntry {
    /// Heading level (1-6).
    pub level: u8,
    /// Heading text.
    pub title: String,
    /// Anchor ID for linking.
    pub id: String,
}

/// A heading whose content has been fully collected.
pub(crate) struct CompletedHeading {
    pub level: u8,
    pub id: String,
    pub html: String,
}

/// State for tracking headings and title extraction.
pub(crate) struct HeadingState {
    /// Whether to extract title from first H1.
    extract_title: bool,
    /// Extracted title from first H1.
    title: Option<String>,
    /// Current heading level being processed (None if not in a heading).
    current_level: Option<u8>,
    /// Buffer for heading plain text (for table of contents and slug).
    text: String,
    /// Buffer for heading HTML (with inline formatting).
    html: String,
    toc: Vec<TocEntry>,
    /// Counter for generating unique heading IDs.
    id_counts: HashMap<String, usize>,
}

impl HeadingState {
    pub fn new(extract_title: bool) -> Self {
        Self {
            extract_title,
            title: None,
            current_level: None,
            text: String::new(),
            html: String::new(),
            toc: Vec::new(),
            id_counts: HashMap::new(),
        }
    }

    /// Check if we're currently inside any heading.
    pub fn is_active(&self) -> bool {
        self.current_level.is_some()
    }

    /// Start tracking a heading.
    pub fn start_heading(&mut self, level: u8) {
        self.current_level = Some(level);
        self.text.clear();
        self.html.clear();
    }

    /// Complete heading and generate table of contents entry.
    pub fn complete_heading(&mut self) -> Option<CompletedHeading> {
        let level = self.current_level.take()?;
        let text = std::mem::take(&mut self.text);
        let html = std::mem::take(&mut self.html);
        let title = text.trim().to_owned();

        let id = self.generate_id(&title);

        // The page title is not part of the table of contents.
        let is_title = self.extract_title && level == 1 && self.title.is_none();
        if is_title {
            self.title = Some(title);
        } else {
            self.toc.push(TocEntry {
                level,
                title,
                id: id.clone(),
            });
        }

        Some(CompletedHeading { level, id, html })
    }

    /// Generate a unique ID for a heading.
    fn generate_id(&mut self, text: &str) -> String {
        let base_id = slugify(text);
        let count = self.id_counts.entry(base_id.clone()).or_default();
        let id = match *count {
            0 => base_id,
            n => format!("{base_id}-{n}"),
        };
        *count += 1;
        id
    }

    pub fn push_text(&mut self, text: &str) {
        self.text.push_str(text);
    }

    pub fn push_html(&mut self, html: &str) {
        self.html.push_str(html);
    }

    pub fn take_title(&mut self) -> Option<String> {
        self.title.take()
    }

    pub fn take_toc(&mut self) -> Vec<TocEntry> {
        std::mem::take(&mut self.toc)
    }
}

/// Convert text to URL-safe slug.
///
/// Converts to lowercase, replaces whitespace/dashes/underscores with single dashes,
/// and removes other non-alphanumeric characters.
#[must_use]
pub fn slugify(text: &str) -> String {
    let mut result = String::new();
    let mut last_was_dash = true; // Prevents leading dash

    for c in text.trim().chars() {
        if c.is_ascii_alphanumeric() {
            result.push(c.to_ascii_lowercase());
            last_was_dash = false;
        } else if !last_was_dash && (c.is_whitespace() || c == '-' || c == '_') {
            result.push('-');
            last_was_dash = true;
        }
    }

    if result.ends_with('-') {
        result.pop();
    }

    result
}

/// Escape HTML special characters.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Game Concepts"), "game-concepts");
        assert_eq!(slugify("Parts of a Card"), "parts-of-a-card");
        assert_eq!(slugify("Mana Abilities"), "mana-abilities");
        assert_eq!(slugify("What's New?"), "whats-new");
        assert_eq!(slugify("  Spaces  "), "spaces");
        assert_eq!(slugify("Two-Headed Giant"), "two-headed-giant");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<script>"), "&lt;script&gt;");
        assert_eq!(escape_html("a & b"), "a &amp; b");
        assert_eq!(escape_html(r#""quoted""#), "&quot;quoted&quot;");
        assert_eq!(escape_html("can't"), "can&#x27;t");
    }

    #[test]
    fn test_paragraph_state() {
        let mut state = ParagraphState::default();
        assert!(!state.is_active());

        state.start();
        assert!(state.is_active());
        state.push_html("Some ");
        state.push_html("<em>text</em>");
        assert_eq!(state.end(), "Some <em>text</em>");
        assert!(!state.is_active());
    }

    #[test]
    fn test_heading_state_collects_toc() {
        let mut state = HeadingState::new(true);

        state.start_heading(1);
        state.push_text("Comprehensive Rules");
        let title = state.complete_heading().unwrap();
        assert_eq!(title.id, "comprehensive-rules");

        state.start_heading(2);
        state.push_text("Game Concepts");
        let heading = state.complete_heading().unwrap();
        assert_eq!(heading.level, 2);
        assert_eq!(heading.id, "game-concepts");

        assert_eq!(state.take_title(), Some("Comprehensive Rules".to_owned()));
        assert_eq!(
            state.take_toc(),
            vec![TocEntry {
                level: 2,
                title: "Game Concepts".to_owned(),
                id: "game-concepts".to_owned(),
            }]
        );
    }

    #[test]
    fn test_duplicate_heading_ids() {
        let mut state = HeadingState::new(false);
        let mut ids = Vec::new();
        for _ in 0..3 {
            state.start_heading(3);
            state.push_text("General");
            ids.push(state.complete_heading().unwrap().id);
        }
        assert_eq!(ids, ["general", "general-1", "general-2"]);
    }
}

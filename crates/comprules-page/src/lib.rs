//! Rules page assembly.
//!
//! Renders the structured rules markup to HTML, wraps it in a standalone
//! document and writes it to disk.

mod template;
mod writer;

pub use template::{DEFAULT_STYLES, PageData, render_page};
pub use writer::{PageError, write_page};

use comprules_renderer::{MarkdownRenderer, TocEntry};

/// Options for building the rules page.
#[derive(Clone, Debug)]
pub struct PageOptions {
    pub title: String,
    /// Stylesheet href; default styles are inlined when unset.
    pub stylesheet: Option<String>,
}

/// A fully rendered rules page.
#[derive(Clone, Debug)]
pub struct RulesPage {
    /// Complete HTML document.
    pub html: String,
    /// Headings found in the rules, in document order.
    pub toc: Vec<TocEntry>,
}

/// Render structured rules markup into a complete HTML page.
#[must_use]
pub fn build_page(markdown: &str, options: &PageOptions) -> RulesPage {
    let result = MarkdownRenderer::new().render_markdown(markdown);
    let html = render_page(&PageData {
        title: &options.title,
        html_content: &result.html,
        stylesheet: options.stylesheet.as_deref(),
    });

    tracing::info!(
        headings = result.toc.len(),
        bytes = html.len(),
        "Built rules page"
    );

    RulesPage {
        html,
        toc: result.toc,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RULES_TEXT: &str = "\u{feff}Magic: The Gathering Comprehensive Rules

These rules are effective as of June 7, 2024.

Introduction

This document is the ultimate authority for Magic.

Contents

1. Game Concepts
100. General
Glossary
Credits

1. Game Concepts

100. General

100.1. These Magic rules apply to any Magic game.

100.1a A two-player game is a game that begins with only two players.
100.1b A multiplayer game is a game that begins with more than two players.

Example: Two players each begin with 20 life.

Glossary

Attacks
Has two meanings:
1. An attacking creature.
2. A player's turn.
See rule 508.

Credits

Lead Designer: Someone
";

    fn options() -> PageOptions {
        PageOptions {
            title: "Magic: The Gathering Comprehensive Rules".to_owned(),
            stylesheet: None,
        }
    }

    #[test]
    fn test_end_to_end_page() {
        let document = comprules_parser::parse(RULES_TEXT).unwrap();
        let page = build_page(&document.to_markup(), &options());

        assert!(page.html.starts_with("<!DOCTYPE html>"));
        assert!(page.html.contains(
            r##"<h1 id="magic-the-gathering-comprehensive-rules"><a class="toclink" href="#magic-the-gathering-comprehensive-rules">Magic: The Gathering Comprehensive Rules</a></h1>"##
        ));
        assert!(page.html.contains(r#"<div class="toc">"#));
        assert!(!page.html.contains("[TOC]"));
        assert!(page.html.contains(r#"<p id="100.1.">"#));
        assert!(page.html.contains(r#"<span id="100.1a"></span>"#));
        assert!(page.html.contains(r#"<p id="100.1b">"#));
        assert!(page.html.contains("<p><em>Example: Two players each begin with 20 life.</em></p>"));
        assert!(!page.html.contains("{:"));
    }

    #[test]
    fn test_toc_outline() {
        let document = comprules_parser::parse(RULES_TEXT).unwrap();
        let page = build_page(&document.to_markup(), &options());

        let outline: Vec<(u8, &str)> = page
            .toc
            .iter()
            .map(|entry| (entry.level, entry.title.as_str()))
            .collect();
        assert_eq!(
            outline,
            [
                (1, "Magic: The Gathering Comprehensive Rules"),
                (2, "Introduction"),
                (2, "Contents"),
                (2, "Game Concepts"),
                (3, "General"),
                (2, "Glossary"),
                (3, "Attacks"),
                (2, "Credits"),
            ]
        );
    }

    #[test]
    fn test_glossary_list_renders() {
        let document = comprules_parser::parse(RULES_TEXT).unwrap();
        let page = build_page(&document.to_markup(), &options());

        assert!(page.html.contains("<li>An attacking creature.</li>"));
        assert!(page.html.contains("<p>See rule 508.</p>"));
    }

    #[test]
    fn test_stylesheet_option() {
        let page = build_page(
            "## Contents\n[TOC]",
            &PageOptions {
                title: "Rules".to_owned(),
                stylesheet: Some("rules.css".to_owned()),
            },
        );
        assert!(page.html.contains(r#"<link rel="stylesheet" href="rules.css">"#));
    }
}

//! Comprehensive Rules text to structured markup.
//!
//! The rules are published as a flat, line-oriented text file. This crate
//! turns that text into markup with nested headings, anchor-addressable rule
//! entries, glossary term blocks and a table of contents directive, ready for
//! an HTML renderer.
//!
//! # Pipeline
//!
//! - [`classify`]: decides the [`LineCategory`] of a single trimmed line
//! - section scan: walks the lines once through a forward-only [`Section`]
//!   state machine, formatting the introduction and rules body and locating the
//!   glossary and credits boundaries
//! - [`parse_glossary`]: turns the glossary slice into term blocks
//! - [`parse`]: assembles everything into a [`StructuredDocument`]
//!
//! # Example
//!
//! ```
//! let text = "Introduction\nContents\nCredits\n1. Game Concepts\nGlossary\nCredits\n";
//! let document = comprules_parser::parse(text).unwrap();
//! assert!(document.to_markup().contains("## Game Concepts"));
//! ```

mod classify;
mod document;
mod error;
mod glossary;
mod rules;
mod section;
mod segment;

pub use classify::{
    CONTENTS_MARKER, CREDITS_MARKER, DOCUMENT_TITLE, GLOSSARY_MARKER, INTRODUCTION_MARKER,
    LineCategory, classify, classify_in, is_list_item, split_identifier,
};
pub use document::{DocumentStats, StructuredDocument, parse};
pub use error::StructureError;
pub use glossary::parse_glossary;
pub use rules::format_rule_line;
pub use section::Section;
pub use segment::{Segment, TOC_DIRECTIVE};

//! Markdown to HTML renderer for the structured rules document.
//!
//! The renderer understands plain `CommonMark` plus two extensions used by the
//! rules markup:
//! - a paragraph consisting of `[TOC]` expands into a nested table of contents
//!   built from the document's headings;
//! - a line of the form `{: #id }` attaches an identifier to the enclosing
//!   paragraph, so that rule references like `#104.3a` resolve.
//!
//! Headings receive slug IDs and a self-link.
//!
//! # Example
//!
//! ```
//! use comprules_renderer::MarkdownRenderer;
//!
//! let markdown = "# Rules\n\n## Contents\n[TOC]\n\n## Game Concepts\n";
//! let result = MarkdownRenderer::new()
//!     .with_title_extraction()
//!     .render_markdown(markdown);
//! assert_eq!(result.title.as_deref(), Some("Rules"));
//! assert!(result.html.contains(r#"<div class="toc">"#));
//! ```

mod anchor;
mod renderer;
mod state;
mod toc;
mod util;

pub use renderer::{MarkdownRenderer, RenderResult};
pub use state::{TocEntry, escape_html, slugify};
pub use toc::TOC_MARKER;

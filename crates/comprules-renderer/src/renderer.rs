//! Markdown to HTML renderer.

use std::fmt::Write;
use std::ops::RangeInclusive;

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

use crate::anchor::extract_anchors;
use crate::state::{HeadingState, ParagraphState, TocEntry, escape_html};
use crate::toc::{TOC_MARKER, TOC_PLACEHOLDER, render_toc};
use crate::util::heading_level_to_num;

/// Result of rendering markdown.
#[derive(Clone, Debug)]
pub struct RenderResult {
    /// Rendered HTML content.
    pub html: String,
    /// Title extracted from first H1 heading (if `extract_title` was enabled).
    pub title: Option<String>,
    /// Table of contents entries for every heading except the title.
    pub toc: Vec<TocEntry>,
}

/// Markdown renderer producing HTML.
///
/// Headings get slug IDs and a self-link, `[TOC]` paragraphs expand into a
/// nested outline, and `{: #id }` lines attach identifiers to paragraphs.
pub struct MarkdownRenderer {
    output: String,
    heading: HeadingState,
    paragraph: ParagraphState,
    toc_depth: RangeInclusive<u8>,
    toc_requested: bool,
}

impl MarkdownRenderer {
    /// Create a new renderer with a table of contents depth of 2-3.
    #[must_use]
    pub fn new() -> Self {
        Self {
            output: String::with_capacity(4096),
            heading: HeadingState::new(false),
            paragraph: ParagraphState::default(),
            toc_depth: 2..=3,
            toc_requested: false,
        }
    }

    /// Enable title extraction from first H1 heading.
    ///
    /// The heading is still rendered but left out of the table of contents.
    #[must_use]
    pub fn with_title_extraction(mut self) -> Self {
        self.heading = HeadingState::new(true);
        self
    }

    /// Set the heading levels included in the generated table of contents.
    #[must_use]
    pub fn with_toc_depth(mut self, depth: RangeInclusive<u8>) -> Self {
        self.toc_depth = depth;
        self
    }

    /// Parser options. Only `CommonMark` syntax is enabled.
    #[must_use]
    pub fn parser_options(&self) -> Options {
        Options::empty()
    }

    /// Create a configured parser for the given markdown text.
    #[must_use]
    pub fn create_parser<'a>(&self, markdown: &'a str) -> Parser<'a> {
        Parser::new_ext(markdown, self.parser_options())
    }

    /// Render markdown text directly using configured parser options.
    pub fn render_markdown(&mut self, markdown: &str) -> RenderResult {
        let parser = self.create_parser(markdown);
        self.render(parser)
    }

    /// Render markdown events and return the result.
    pub fn render<'a, I>(&mut self, events: I) -> RenderResult
    where
        I: Iterator<Item = Event<'a>>,
    {
        for event in events {
            self.process_event(event);
        }

        let mut html = std::mem::take(&mut self.output);
        let toc = self.heading.take_toc();
        if std::mem::take(&mut self.toc_requested) {
            let toc_html = render_toc(&toc, &self.toc_depth);
            html = html.replace(TOC_PLACEHOLDER, &toc_html);
        }

        tracing::debug!(
            headings = toc.len(),
            bytes = html.len(),
            "Rendered markdown"
        );

        RenderResult {
            html,
            title: self.heading.take_title(),
            toc,
        }
    }

    /// Push inline content to the heading, paragraph or output buffer.
    fn push_inline(&mut self, content: &str) {
        if self.heading.is_active() {
            self.heading.push_html(content);
        } else if self.paragraph.is_active() {
            self.paragraph.push_html(content);
        } else {
            self.output.push_str(content);
        }
    }

    fn process_event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start_tag(tag),
            Event::End(tag) => self.end_tag(tag),
            Event::Text(text) => self.text(&text),
            Event::Code(code) => self.inline_code(&code),
            Event::Html(html) | Event::InlineHtml(html) => self.push_inline(&html),
            Event::SoftBreak => self.soft_break(),
            Event::HardBreak => self.push_inline("<br>"),
            Event::Rule => self.output.push_str("<hr>"),
            Event::TaskListMarker(_)
            | Event::FootnoteReference(_)
            | Event::InlineMath(_)
            | Event::DisplayMath(_) => {
                // Not enabled by the parser options
            }
        }
    }

    fn start_tag(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Paragraph => self.paragraph.start(),
            Tag::Heading { level, .. } => {
                // Opening tag is written in end_tag once the ID is known.
                self.heading.start_heading(heading_level_to_num(level));
            }
            Tag::BlockQuote(_) => self.output.push_str("<blockquote>"),
            Tag::List(start) => match start {
                Some(1) => self.output.push_str("<ol>"),
                Some(n) => write!(self.output, r#"<ol start="{n}">"#).unwrap(),
                None => self.output.push_str("<ul>"),
            },
            Tag::Item => self.output.push_str("<li>"),
            Tag::Emphasis => self.push_inline("<em>"),
            Tag::Strong => self.push_inline("<strong>"),
            Tag::Link { dest_url, .. } => {
                let link_tag = format!(r#"<a href="{}">"#, escape_html(&dest_url));
                self.push_inline(&link_tag);
            }
            _ => {}
        }
    }

    fn end_tag(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Paragraph => self.end_paragraph(),
            TagEnd::Heading(_) => {
                if let Some(heading) = self.heading.complete_heading() {
                    let level = heading.level;
                    let id = escape_html(&heading.id);
                    write!(
                        self.output,
                        r##"<h{level} id="{id}"><a class="toclink" href="#{id}">{}</a></h{level}>"##,
                        heading.html.trim()
                    )
                    .unwrap();
                }
            }
            TagEnd::BlockQuote(_) => self.output.push_str("</blockquote>"),
            TagEnd::List(ordered) => {
                self.output
                    .push_str(if ordered { "</ol>" } else { "</ul>" });
            }
            TagEnd::Item => self.output.push_str("</li>"),
            TagEnd::Emphasis => self.push_inline("</em>"),
            TagEnd::Strong => self.push_inline("</strong>"),
            TagEnd::Link => self.push_inline("</a>"),
            _ => {}
        }
    }

    fn end_paragraph(&mut self) {
        let html = self.paragraph.end();

        if html.trim() == TOC_MARKER {
            self.output.push_str(TOC_PLACEHOLDER);
            self.toc_requested = true;
            return;
        }

        match extract_anchors(&html) {
            (Some(id), body) => {
                write!(self.output, r#"<p id="{}">{body}</p>"#, escape_html(&id)).unwrap();
            }
            (None, body) => write!(self.output, "<p>{body}</p>").unwrap(),
        }
    }

    fn text(&mut self, text: &str) {
        if self.heading.is_active() {
            self.heading.push_text(text);
            self.heading.push_html(&escape_html(text));
        } else {
            self.push_inline(&escape_html(text));
        }
    }

    fn inline_code(&mut self, code: &str) {
        if self.heading.is_active() {
            self.heading.push_text(code);
        }
        self.push_inline(&format!("<code>{}</code>", escape_html(code)));
    }

    fn soft_break(&mut self) {
        if self.heading.is_active() {
            self.heading.push_text(" ");
            self.heading.push_html(" ");
        } else {
            self.push_inline("\n");
        }
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

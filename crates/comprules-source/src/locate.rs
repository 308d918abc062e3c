//! Finding the rules text link on the rules page.
//!
//! The published rules page links the plain-text edition from an anchor whose
//! visible text is `TXT`. The page is parsed with `html5ever`, so entity and
//! character references are decoded the way a browser decodes them.

use html5ever::tendril::TendrilSink;
use html5ever::{local_name, parse_document};
use markup5ever_rcdom::{Handle, NodeData, RcDom};
use url::Url;

/// Return the `href` of the first anchor whose visible text equals `link_text`.
///
/// Visible text is the concatenated text of the anchor and its descendants
/// with surrounding whitespace trimmed. Anchors without an `href` are skipped.
#[must_use]
pub fn find_link_href(html: &str, link_text: &str) -> Option<String> {
    let dom = parse_document(RcDom::default(), Default::default()).one(html);

    // Depth-first, document order.
    let mut pending: Vec<Handle> = vec![dom.document];
    while let Some(node) = pending.pop() {
        if let NodeData::Element { name, attrs, .. } = &node.data
            && name.local == local_name!("a")
        {
            let href = attrs
                .borrow()
                .iter()
                .find(|attr| attr.name.local == local_name!("href"))
                .map(|attr| attr.value.trim().to_owned());
            if let Some(href) = href
                && text_content(&node).trim() == link_text
            {
                return Some(href);
            }
        }
        pending.extend(node.children.borrow().iter().rev().cloned());
    }
    None
}

fn text_content(node: &Handle) -> String {
    let mut text = String::new();
    let mut pending: Vec<Handle> = vec![node.clone()];
    while let Some(node) = pending.pop() {
        if let NodeData::Text { contents } = &node.data {
            text.push_str(&contents.borrow());
        }
        pending.extend(node.children.borrow().iter().rev().cloned());
    }
    text
}

/// Resolve `href` against the URL of the page it was found on.
///
/// Follows WHATWG URL resolution, so dot segments, query-only and
/// fragment-only references behave as in a browser. Returns `None` when
/// `base` is not an absolute URL or the joined reference is invalid.
#[must_use]
pub fn resolve_href(base: &str, href: &str) -> Option<String> {
    Url::parse(base).ok()?.join(href).ok().map(String::from)
}

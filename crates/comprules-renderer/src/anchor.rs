//! Anchor attachment lines.
//!
//! A paragraph line of the form `{: #104.3a }` binds the identifier to the
//! block it belongs to. On the last line of a paragraph the identifier becomes
//! the paragraph's `id`; anywhere else an empty `<span>` carries it so that
//! every attached identifier stays addressable.

use std::sync::LazyLock;

use regex::Regex;

static ANCHOR_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\{:\s*#([^\s}]+)\s*\}$").unwrap());

/// Identifier of an anchor attachment line, if the line is one.
pub(crate) fn anchor_id(line: &str) -> Option<&str> {
    ANCHOR_LINE
        .captures(line.trim())
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Remove anchor attachment lines from a paragraph's inner HTML.
///
/// Returns the identifier bound to the paragraph itself and the remaining
/// content.
pub(crate) fn extract_anchors(html: &str) -> (Option<String>, String) {
    let lines: Vec<&str> = html.split('\n').collect();
    let last_content = lines.iter().rposition(|line| !line.trim().is_empty());

    let mut block_id = None;
    let mut body: Vec<String> = Vec::with_capacity(lines.len());
    for (index, line) in lines.iter().enumerate() {
        match anchor_id(line) {
            Some(id) if Some(index) == last_content => block_id = Some(id.to_owned()),
            Some(id) => body.push(format!("<span id=\"{id}\"></span>")),
            None => body.push((*line).to_owned()),
        }
    }

    (block_id, body.join("\n").trim_end().to_owned())
}

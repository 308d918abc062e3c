//! HTML page template.

use std::fmt::Write;

use comprules_renderer::escape_html;

/// Styles inlined when no stylesheet is linked.
pub const DEFAULT_STYLES: &str = "\
body {
  margin: 0 10px 0 10px;
}
.toclink {
  color: white;
  text-decoration: none;
}
a {
  text-decoration: none;
  margin-left: 0;
}
a:hover, .toclink:hover {
  text-decoration: underline;
}
ul {
  padding-left: 20px
}
h2 {
  margin: 10px 0 10px 0;
}
";

/// All data needed to render the page.
pub struct PageData<'a> {
    pub title: &'a str,
    pub html_content: &'a str,
    /// Linked stylesheet; [`DEFAULT_STYLES`] are inlined when `None`.
    pub stylesheet: Option<&'a str>,
}

/// Render a complete HTML document around the rendered rules.
#[must_use]
pub fn render_page(page: &PageData<'_>) -> String {
    let mut html = String::with_capacity(page.html_content.len() + 1024);

    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    let _ = writeln!(html, "<title>{}</title>", escape_html(page.title));
    html.push_str("<meta charset=\"utf-8\">\n");
    match page.stylesheet {
        Some(href) => {
            let _ = writeln!(html, "<link rel=\"stylesheet\" href=\"{}\">", escape_html(href));
        }
        None => {
            html.push_str("<style>\n");
            html.push_str(DEFAULT_STYLES);
            html.push_str("</style>\n");
        }
    }
    html.push_str("</head>\n<body>\n");
    html.push_str(page.html_content);
    html.push_str("\n</body>\n</html>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_inline_styles() {
        let html = render_page(&PageData {
            title: "Magic: The Gathering Comprehensive Rules",
            html_content: "<p>Body</p>",
            stylesheet: None,
        });

        assert!(html.starts_with("<!DOCTYPE html>\n"));
        assert!(html.contains("<title>Magic: The Gathering Comprehensive Rules</title>"));
        assert!(html.contains("<meta charset=\"utf-8\">"));
        assert!(html.contains(".toclink {"));
        assert!(!html.contains("<link"));
        assert!(html.contains("<body>\n<p>Body</p>\n</body>"));
    }

    #[test]
    fn test_linked_stylesheet() {
        let html = render_page(&PageData {
            title: "Rules",
            html_content: "",
            stylesheet: Some("/static/rules.css?v=1&x=2"),
        });

        assert!(html.contains(r#"<link rel="stylesheet" href="/static/rules.css?v=1&amp;x=2">"#));
        assert!(!html.contains("<style>"));
    }

    #[test]
    fn test_title_is_escaped() {
        let html = render_page(&PageData {
            title: "Rules <draft> & notes",
            html_content: "",
            stylesheet: Some("a.css"),
        });

        assert_eq!(
            html,
            "<!DOCTYPE html>\n<html>\n<head>\n\
             <title>Rules &lt;draft&gt; &amp; notes</title>\n\
             <meta charset=\"utf-8\">\n\
             <link rel=\"stylesheet\" href=\"a.css\">\n\
             </head>\n<body>\n\n</body>\n</html>\n"
        );
    }
}

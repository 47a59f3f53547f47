//! HTML served by the documentation server.

use std::fmt::Write;

/// Landing page for `/` and `/index.html`.
pub const INDEX_HTML: &str = include_str!("index.html");

/// Render a directory listing for `url_path` with the given entry names.
///
/// Directory names must already carry a trailing `/`.
pub fn directory_listing(url_path: &str, entries: &[String]) -> String {
    let title = format!("Directory listing for {}", escape_html(url_path));
    let mut html = String::new();

    let _ = write!(
        html,
        "<!DOCTYPE HTML>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n</head>\n<body>\n<h1>{title}</h1>\n<hr>\n<ul>\n"
    );
    for name in entries {
        let _ = writeln!(
            html,
            "<li><a href=\"{}\">{}</a></li>",
            urlencoding::encode(name).replace("%2F", "/"),
            escape_html(name)
        );
    }
    html.push_str("</ul>\n<hr>\n</body>\n</html>\n");
    html
}

/// Escape text for HTML element and attribute content.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

//! HTML rendering of the digest page.
//!
//! Entries are plain text; every one is escaped before it is embedded.

use html_escape::encode_text;

use crate::models::RenderedEntry;

const PAGE_TITLE: &str = "Siste støttetildelinger";

/// Renders the digest as a standalone HTML page.
///
/// # Example
///
/// ```
/// use grant_digest::api::render_page;
/// use grant_digest::models::RenderedEntry;
///
/// let html = render_page(&[RenderedEntry { sequence: 1, text: "1: A & B AS".to_string() }]);
/// assert!(html.contains("<p>1: A &amp; B AS</p>"));
/// ```
pub fn render_page(entries: &[RenderedEntry]) -> String {
    let body = if entries.is_empty() {
        "    <p>Ingen tildelinger funnet.</p>\n".to_string()
    } else {
        entries
            .iter()
            .map(|entry| format!("    <p>{}</p>\n", encode_text(&entry.text)))
            .collect()
    };
    layout(PAGE_TITLE, &body)
}

/// Renders an error page carrying `message`.
pub fn render_error_page(message: &str) -> String {
    layout(
        "Feil",
        &format!(
            "    <p>Kunne ikke hente tildelinger.</p>\n    <pre>{}</pre>\n",
            encode_text(message)
        ),
    )
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"nb\">\n<head>\n    <meta charset=\"utf-8\">\n    \
         <title>{title}</title>\n</head>\n<body>\n    <h1>{title}</h1>\n{body}</body>\n</html>\n",
        title = encode_text(title),
        body = body,
    )
}

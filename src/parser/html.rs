// file: src/parser/html.rs
// description: HTML to plain text conversion for Confluence page bodies
// reference: https://docs.rs/scraper

use scraper::Html;

/// Converts rendered Confluence HTML into newline-delimited plain text.
///
/// Each visible text node becomes one line, stripped of surrounding
/// whitespace. Script and style contents are dropped. The parse is
/// best-effort: malformed markup degrades, it never fails.
pub struct HtmlNormalizer;

impl HtmlNormalizer {
    pub fn new() -> Self {
        Self
    }

    pub fn to_text(&self, html: &str) -> String {
        let document = Html::parse_document(html);
        let mut lines: Vec<String> = Vec::new();

        for node in document.root_element().descendants() {
            let Some(text) = node.value().as_text() else {
                continue;
            };

            let in_raw_element = node
                .parent()
                .and_then(|parent| parent.value().as_element())
                .is_some_and(|element| matches!(element.name(), "script" | "style"));
            if in_raw_element {
                continue;
            }

            let trimmed = text.trim();
            if !trimmed.is_empty() {
                lines.push(trimmed.to_string());
            }
        }

        lines.join("\n")
    }
}

impl Default for HtmlNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

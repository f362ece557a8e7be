//! Template filling with `##key##` placeholders.

use crate::charset::decode_template_bytes;
use crate::error::Result;
use crate::table::HtmlTable;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Marker replaced by the rendered table.
pub const TABLE_PLACEHOLDER: &str = "##table_placeholder##";

/// Characters left unescaped in link targets.
///
/// Everything outside the unreserved set and the `:/` pair is
/// percent-encoded, keeping scheme and path separators readable.
const LINK_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b':')
    .remove(b'/');

/// An HTML mail template with `##key##` placeholders.
///
/// Substitutions are registered with the builder methods and applied by
/// [`Template::render`] in registration order: variables first, then the
/// table, then links. Each substitution replaces every occurrence of its
/// marker. Markers with no registered value are reported and left in place
/// so a malformed merge is visible in the delivered mail, not silently
/// truncated.
#[derive(Debug, Clone)]
pub struct Template {
    /// Template text.
    text: String,
    /// Variable substitutions (key, replacement).
    vars: Vec<(String, String)>,
    /// Link substitutions (key, URL).
    links: Vec<(String, String)>,
    /// Pre-rendered table HTML.
    table: Option<String>,
}

impl Template {
    /// Creates a template from a string.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            vars: Vec::new(),
            links: Vec::new(),
            table: None,
        }
    }

    /// Reads a template file, sniffing the charset from its BOM.
    ///
    /// UTF-16LE and UTF-8 files are recognized by their BOM; anything else
    /// decodes as Windows-1252.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or decoded.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let bytes = fs::read(path)?;
        Ok(Self::new(decode_template_bytes(&bytes)?))
    }

    /// Registers a variable: `##key##` is replaced with `value`.
    #[must_use]
    pub fn var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.push((key.into(), value.into()));
        self
    }

    /// Registers a hyperlink: `##key##` is replaced with an anchor tag.
    ///
    /// The `href` holds the percent-encoded URL and the visible text the
    /// URL as given.
    #[must_use]
    pub fn link(mut self, key: impl Into<String>, url: impl Into<String>) -> Self {
        self.links.push((key.into(), url.into()));
        self
    }

    /// Inserts a rendered table at [`TABLE_PLACEHOLDER`].
    #[must_use]
    pub fn table(self, table: &HtmlTable) -> Self {
        self.table_html(table.render())
    }

    /// Inserts pre-rendered table HTML at [`TABLE_PLACEHOLDER`].
    #[must_use]
    pub fn table_html(mut self, html: impl Into<String>) -> Self {
        self.table = Some(html.into());
        self
    }

    /// Applies all registered substitutions and returns the filled template.
    ///
    /// Logs a warning for each registered key whose marker is absent from
    /// the template, and for any `##...##` marker still present in the
    /// output.
    #[must_use]
    pub fn render(&self) -> String {
        let mut content = self.text.clone();

        for (key, value) in &self.vars {
            content = fill(content, &format!("##{key}##"), value);
        }

        if let Some(table) = &self.table {
            content = fill(content, TABLE_PLACEHOLDER, table);
        }

        for (key, url) in &self.links {
            let encoded = utf8_percent_encode(url, LINK_SET);
            let anchor = format!("<a href=\"{encoded}\">{url}</a>");
            content = fill(content, &format!("##{key}##"), &anchor);
        }

        for marker in leftover_markers(&content) {
            warn!(marker, "marker left unfilled in rendered output");
        }

        content
    }
}

/// Replaces every occurrence of `marker`, reporting whether it was found.
fn fill(content: String, marker: &str, value: &str) -> String {
    if content.contains(marker) {
        debug!(marker, "filling placeholder");
    } else {
        warn!(marker, "placeholder not found in template");
    }
    content.replace(marker, value)
}

/// Finds `##...##` markers remaining in rendered output.
///
/// Marker names never contain whitespace; anything between `##` pairs that
/// does is treated as ordinary text.
fn leftover_markers(content: &str) -> Vec<&str> {
    let mut markers = Vec::new();
    let mut rest = content;

    while let Some(start) = rest.find("##") {
        let after = &rest[start + 2..];
        let Some(len) = after.find("##") else {
            break;
        };

        let inner = &after[..len];
        if !inner.is_empty() && !inner.contains(char::is_whitespace) {
            markers.push(&rest[start..start + len + 4]);
            rest = &after[len + 2..];
        } else {
            rest = after;
        }
    }

    markers
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::redundant_clone, clippy::manual_string_new, clippy::needless_collect, clippy::unreadable_literal, clippy::used_underscore_items, clippy::similar_names)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn test_var_replaces_all_occurrences() {
        let html = Template::new("<p>##name##</p><p>##name##</p>")
            .var("name", "Avery")
            .render();
        assert_eq!(html, "<p>Avery</p><p>Avery</p>");
    }

    #[test]
    fn test_render_without_substitutions_is_verbatim() {
        let text = "<p>Hello ##name##</p>";
        assert_eq!(Template::new(text).render(), text);
    }

    #[test]
    fn test_unmatched_key_leaves_template_untouched() {
        let html = Template::new("<p>Hello</p>").var("name", "Avery").render();
        assert_eq!(html, "<p>Hello</p>");
    }

    #[test]
    fn test_substitutions_apply_in_registration_order() {
        let html = Template::new("##outer##")
            .var("outer", "[##inner##]")
            .var("inner", "X")
            .render();
        assert_eq!(html, "[X]");
    }

    #[test]
    fn test_value_reintroducing_own_marker_is_not_reexpanded() {
        let html = Template::new("Hi ##name##").var("name", "##name##").render();
        assert_eq!(html, "Hi ##name##");
    }

    #[test]
    fn test_link_encodes_href_and_keeps_text_raw() {
        let html = Template::new("See ##report_link##")
            .link("report_link", "https://example.com/my report.pdf")
            .render();
        assert_eq!(
            html,
            "See <a href=\"https://example.com/my%20report.pdf\">https://example.com/my report.pdf</a>"
        );
    }

    #[test]
    fn test_link_encoding_preserves_scheme_and_path() {
        let html = Template::new("##l##")
            .link("l", "https://example.com/a/b?x=1&y=2")
            .render();
        assert!(html.contains("href=\"https://example.com/a/b%3Fx%3D1%26y%3D2\""));
        assert!(html.contains(">https://example.com/a/b?x=1&y=2</a>"));
    }

    #[test]
    fn test_table_insertion() {
        let mut table = HtmlTable::new(["Id"]);
        table.row(["7"]).unwrap();

        let html = Template::new("Before ##table_placeholder## After")
            .table(&table)
            .render();
        assert!(html.starts_with("Before <table"));
        assert!(html.ends_with("</table> After"));
    }

    #[test]
    fn test_prerendered_table_html() {
        let html = Template::new("##table_placeholder##")
            .table_html("<table><tr><td>x</td></tr></table>")
            .render();
        assert_eq!(html, "<table><tr><td>x</td></tr></table>");
    }

    #[test]
    fn test_from_file_windows_1252() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        // "Café ##drink##" with 0xE9 for é
        file.write_all(b"Caf\xe9 ##drink##").unwrap();

        let html = Template::from_file(file.path())
            .unwrap()
            .var("drink", "cortado")
            .render();
        assert_eq!(html, "Café cortado");
    }

    #[test]
    fn test_from_file_utf16le() {
        let mut bytes = vec![0xFF, 0xFE];
        for unit in "Hi ##name##".encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&bytes).unwrap();

        let html = Template::from_file(file.path())
            .unwrap()
            .var("name", "Avery")
            .render();
        assert_eq!(html, "Hi Avery");
    }

    #[test]
    fn test_leftover_markers() {
        let markers = leftover_markers("x ##one## y ##two## ####");
        assert_eq!(markers, vec!["##one##", "##two##"]);
    }

    #[test]
    fn test_leftover_markers_ignore_spaced_text() {
        assert!(leftover_markers("## not a marker ##").is_empty());
        assert!(leftover_markers("no markers here").is_empty());
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn filled_marker_never_survives(
                key in "[a-z]{1,8}",
                value in "[A-Za-z0-9 ]{0,20}",
            ) {
                let text = format!("pre ##{key}## post");
                let html = Template::new(&text).var(&key, &value).render();
                prop_assert_eq!(html, format!("pre {value} post"));
            }

            #[test]
            fn link_href_is_always_ascii(url in "[ -~]{1,40}") {
                let html = Template::new("##l##").link("l", &url).render();
                let href_start = html.find("href=\"").unwrap() + 6;
                let href_end = html[href_start..].find('"').unwrap() + href_start;
                prop_assert!(html[href_start..href_end].chars().all(|c| c.is_ascii_graphic()));
            }
        }
    }
}

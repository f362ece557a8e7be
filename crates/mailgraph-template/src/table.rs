//! Outlook-friendly HTML table rendering.
//!
//! Produces tables with the inline `Mso` styling Outlook preserves, matching
//! the look of templates exported from Word. CSS classes and `<style>` blocks
//! get stripped by most mail clients, so everything rides on the elements.

use crate::error::{Error, Result};
use std::fmt::Write as _;

/// Border and header band color.
const BORDER_COLOR: &str = "#156082";

/// A table with a styled header row, rendered as inline-styled HTML.
#[derive(Debug, Clone, Default)]
pub struct HtmlTable {
    /// Column headers.
    columns: Vec<String>,
    /// Data rows, each as wide as the header.
    rows: Vec<Vec<String>>,
}

impl HtmlTable {
    /// Creates a table with the given column headers.
    #[must_use]
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Appends a data row.
    ///
    /// # Errors
    ///
    /// Returns an error if the row width does not match the header.
    pub fn row<I, S>(&mut self, cells: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let cells: Vec<String> = cells.into_iter().map(Into::into).collect();
        if cells.len() != self.columns.len() {
            return Err(Error::ColumnCount {
                expected: self.columns.len(),
                found: cells.len(),
            });
        }
        self.rows.push(cells);
        Ok(())
    }

    /// Renders the table as an HTML string.
    ///
    /// Header and cell text is HTML-escaped; values are data, not markup.
    #[must_use]
    pub fn render(&self) -> String {
        let mut html = String::new();

        html.push_str(
            "<table class=\"MsoNormalTable\" border=\"0\" cellspacing=\"0\" cellpadding=\"0\" style=\"border-collapse:collapse;mso-yfti-tbllook:1184;mso-padding-alt:0in 0in 0in 0in;width:100%;\">",
        );

        // Header row: bold white text on the colored band
        html.push_str("<tr style=\"height:.2in;\">");
        for column in &self.columns {
            let _ = write!(
                html,
                "<td style=\"border:solid {BORDER_COLOR} 1.0pt;background:{BORDER_COLOR};padding:.75pt .75pt .75pt .75pt;\"><b><span style=\"font-family:'Calibri',sans-serif;color:white;\">{}</span></b></td>",
                html_escape::encode_text(column)
            );
        }
        html.push_str("</tr>");

        // Data rows share the header's border, minus the top edge
        for row in &self.rows {
            html.push_str("<tr style=\"height:.2in;\">");
            for cell in row {
                let _ = write!(
                    html,
                    "<td style=\"border:solid {BORDER_COLOR} 1.0pt;border-top:none;padding:.75pt .75pt .75pt .75pt;\"><span style=\"font-family:'Calibri',sans-serif;color:black;\">{}</span></td>",
                    html_escape::encode_text(cell)
                );
            }
            html.push_str("</tr>");
        }

        html.push_str("</table>");
        html
    }
}

//! # mailgraph-template
//!
//! HTML email template filling for automated mail.
//!
//! ## Features
//!
//! - **Placeholder substitution**: `##key##` markers replaced across the template
//! - **Legacy charsets**: Template files in UTF-16LE, UTF-8, or Windows-1252, sniffed by BOM
//! - **Hyperlinks**: URL placeholders rendered as anchor tags with percent-encoded targets
//! - **Tables**: Outlook-friendly inline-styled HTML tables
//!
//! ## Quick Start
//!
//! ```
//! use mailgraph_template::{HtmlTable, Template};
//!
//! # fn main() -> Result<(), mailgraph_template::Error> {
//! let mut table = HtmlTable::new(["Region", "Count"]);
//! table.row(["EMEA", "42"])?;
//!
//! let html = Template::new("<p>Hi ##name##,</p>##table_placeholder##")
//!     .var("name", "Avery")
//!     .table(&table)
//!     .render();
//!
//! assert!(html.contains("<p>Hi Avery,</p>"));
//! assert!(html.contains("<table"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Template files
//!
//! Templates exported from Outlook or Word usually arrive as UTF-16LE with a
//! byte order mark; [`Template::from_file`] detects that, along with UTF-8
//! BOMs, and falls back to Windows-1252 for everything else:
//!
//! ```ignore
//! let template = Template::from_file("monthly_report.html")?
//!     .var("first_name", "Avery")
//!     .link("report_link", "https://example.com/reports/May 2024.pdf")
//!     .render();
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod charset;
mod error;
mod table;
mod template;

pub use charset::{decode_template_bytes, decode_utf16le, decode_windows_1252};
pub use error::{Error, Result};
pub use table::HtmlTable;
pub use template::{TABLE_PLACEHOLDER, Template};

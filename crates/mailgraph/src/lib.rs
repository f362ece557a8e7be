//! # mailgraph
//!
//! Microsoft Graph mail automation for app-only (daemon) workloads.
//!
//! This crate provides:
//! - **Credential config** - `TENANT_ID`/`CLIENT_ID`/`SECRET_VALUE`/`FROM_EMAIL` from the
//!   process environment or a dotenv-style file
//! - **Mail sending** - the `sendMail` action with HTML bodies, CC/Reply-To, and base64
//!   file attachments
//! - **Directory lookups** - users by employee id or name, with exactly-one match semantics
//! - **Templates** - re-exports of the `mailgraph-template` placeholder engine
//!
//! ## Quick Start
//!
//! ```ignore
//! use mailgraph::{FileAttachment, GraphClient, GraphConfig, Message};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), mailgraph::Error> {
//!     let config = GraphConfig::from_env_file("azure.env")?;
//!     let client = GraphClient::new(config)?;
//!
//!     let message = Message::new("Monthly report", "<p>See attached.</p>")
//!         .to("avery.chen@contoso.com")
//!         .attach(FileAttachment::from_path("monthly.pdf")?);
//!
//!     client.send_mail(&message).await?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod client;
pub mod config;
pub mod directory;
mod error;
pub mod mail;

pub use client::{GRAPH_BASE_URL, GraphClient};
pub use config::GraphConfig;
pub use directory::{Contact, DirectoryUser};
pub use error::{Error, Result};
pub use mail::{Address, BodyType, FileAttachment, Message};

pub use mailgraph_template::{HtmlTable, TABLE_PLACEHOLDER, Template};

//! Example: Send a templated report email through Microsoft Graph
//!
//! This example demonstrates how to:
//! 1. Load credentials from an `azure.env` file (or the environment)
//! 2. Build a styled HTML table and fill a body template
//! 3. Attach a file from disk
//! 4. Send the message with the Graph `sendMail` action
//!
//! ## Prerequisites
//!
//! 1. Register an application in Entra ID:
//!    - Go to https://portal.azure.com/#blade/Microsoft_AAD_RegisteredApps/ApplicationsListBlade
//!    - Create a new app registration and a client secret
//!    - Grant the `Mail.Send` application permission (admin consent required)
//!
//! 2. Create an `azure.env` file next to the binary:
//!    ```bash
//!    TENANT_ID=your-tenant-id
//!    CLIENT_ID=your-client-id
//!    SECRET_VALUE=your-client-secret
//!    FROM_EMAIL=reports@yourtenant.com
//!    ```
//!
//! 3. Set the recipient (and optionally an attachment path):
//!    ```bash
//!    export RECIPIENT="someone@yourtenant.com"
//!    export REPORT_FILE="./monthly.pdf"
//!    ```
//!
//! ## Running
//!
//! ```bash
//! cargo run --example send_report
//! ```

use mailgraph::{FileAttachment, GraphClient, GraphConfig, HtmlTable, Message, Template};
use std::env;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const BODY_TEMPLATE: &str = "\
<html><body>\
<p>Hi ##first_name##,</p>\
<p>Here is the ##month## summary. The full report is attached.</p>\
##table_placeholder##\
<p>Questions? Reach us at ##support_link##.</p>\
</body></html>";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mailgraph=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let recipient = env::var("RECIPIENT").expect("RECIPIENT environment variable not set");

    println!("MailGraph Example - Send Report");
    println!("===============================\n");

    // Step 1: Load credentials
    println!("Step 1: Loading credentials...");
    let config = GraphConfig::from_env_file("azure.env").or_else(|_| GraphConfig::from_env())?;
    println!("  Tenant: {}", config.tenant_id);
    println!("  Sender: {}\n", config.sender);

    // Step 2: Create the Graph client
    println!("Step 2: Creating Graph client...");
    let client = GraphClient::new(config)?;
    println!("  Base URL: {}\n", mailgraph::GRAPH_BASE_URL);

    // Step 3: Render the body from a template
    println!("Step 3: Rendering the body template...");
    let mut table = HtmlTable::new(["Team", "Open", "Closed"]);
    table.row(["Support", "12", "48"])?;
    table.row(["Billing", "3", "17"])?;

    let body = Template::new(BODY_TEMPLATE)
        .var("first_name", "Avery")
        .var("month", "August")
        .table(&table)
        .link("support_link", "https://support.contoso.com/new ticket")
        .render();
    println!("  Rendered {} bytes of HTML\n", body.len());

    // Step 4: Compose the message
    println!("Step 4: Composing the message...");
    let mut message = Message::new("Monthly report", body).to(&recipient);
    if let Ok(path) = env::var("REPORT_FILE") {
        message = message.attach(FileAttachment::from_path(&path)?);
        println!("  Attached: {path}");
    }
    println!("  To: {recipient}\n");

    // Step 5: Send
    println!("Step 5: Sending through Graph...");
    client.send_mail(&message).await?;
    println!("  Accepted. Check the recipient's inbox (and Sent Items).\n");

    println!("Done!");
    Ok(())
}

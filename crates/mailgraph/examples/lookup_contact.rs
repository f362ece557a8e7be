//! Example: Look up a directory contact by employee id
//!
//! This example demonstrates how to:
//! 1. Load credentials from an `azure.env` file (or the environment)
//! 2. Find the user with a given employee id
//! 3. Fetch their email address and a trimmed contact record
//!
//! ## Prerequisites
//!
//! The app registration needs the `User.Read.All` application permission
//! (admin consent required). Credentials are read the same way as in the
//! `send_report` example.
//!
//! Set the employee id to search for:
//! ```bash
//! export EMPLOYEE_ID="E10443"
//! ```
//!
//! ## Running
//!
//! ```bash
//! cargo run --example lookup_contact
//! ```

use mailgraph::{GraphClient, GraphConfig};
use std::env;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mailgraph=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let employee_id = env::var("EMPLOYEE_ID").expect("EMPLOYEE_ID environment variable not set");

    println!("MailGraph Example - Lookup Contact");
    println!("==================================\n");

    // Step 1: Load credentials
    println!("Step 1: Loading credentials...");
    let config = GraphConfig::from_env_file("azure.env").or_else(|_| GraphConfig::from_env())?;
    println!("  Tenant: {}\n", config.tenant_id);

    // Step 2: Create the Graph client
    println!("Step 2: Creating Graph client...");
    let client = GraphClient::new(config)?;
    println!("  Ready\n");

    // Step 3: Find the user
    println!("Step 3: Finding user with employee id {employee_id}...");
    let user = client.find_user_by_employee_id(&employee_id).await?;
    println!("  Display name: {}", user.label());
    println!("  UPN:          {}\n", user.user_principal_name.as_deref().unwrap_or("-"));

    // Step 4: Fetch the pieces mail merge usually needs
    println!("Step 4: Fetching contact details...");
    let email = client.email_by_employee_id(&employee_id).await?;
    let contact = client.contact_by_employee_id(&employee_id).await?;
    println!("  Email:   {email}");
    println!("  Contact: {}\n", contact.display());

    println!("Done!");
    Ok(())
}

//! Example: App-only token acquisition with the client credentials grant
//!
//! This example demonstrates how to:
//! 1. Configure an Entra ID authority for your tenant
//! 2. Create a confidential client with a client secret
//! 3. Acquire a Microsoft Graph access token
//! 4. Reuse the cached token on later calls
//!
//! ## Prerequisites
//!
//! 1. Register an application in Entra ID:
//!    - Go to https://portal.azure.com/#blade/Microsoft_AAD_RegisteredApps/ApplicationsListBlade
//!    - Create a new app registration
//!    - Under "API permissions", add Microsoft Graph *application* permissions
//!      (e.g. `Mail.Send`, `User.Read.All`) and grant admin consent
//!    - Under "Certificates & secrets", create a client secret
//!
//! 2. Set environment variables:
//!    ```bash
//!    export TENANT_ID="your-tenant-id"
//!    export CLIENT_ID="your-client-id"
//!    export SECRET_VALUE="your-client-secret"
//!    ```
//!
//! ## Running
//!
//! ```bash
//! cargo run --example acquire_token
//! ```

use mailgraph_auth::{Authority, ConfidentialClient};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Get configuration from environment
    let tenant_id = env::var("TENANT_ID").expect("TENANT_ID environment variable not set");
    let client_id = env::var("CLIENT_ID").expect("CLIENT_ID environment variable not set");
    let secret_value = env::var("SECRET_VALUE").expect("SECRET_VALUE environment variable not set");

    println!("MailGraph Auth Example - Client Credentials");
    println!("===========================================\n");

    // Step 1: Configure the tenant authority
    println!("Step 1: Configuring Entra ID authority...");
    let authority = Authority::new(&tenant_id)?;
    println!("  Tenant: {}", authority.tenant);
    println!("  Token URL: {}", authority.token_url);
    println!("  Scopes: {:?}\n", authority.default_scopes);

    // Step 2: Create the confidential client
    println!("Step 2: Creating confidential client...");
    let client = ConfidentialClient::new(&client_id, &secret_value, authority);
    println!("  Client ID: {}\n", client.client_id);

    // Step 3: Acquire a token
    println!("Step 3: Acquiring access token...");
    let token = client.access_token().await?;

    println!("✓ Token obtained successfully!");
    println!("  Access token: {}...", &token.access_token[..20]);
    println!("  Token type: {}", token.token_type);
    println!("  Expires at: {:?}\n", token.expires_at);

    // Step 4: A second call reuses the cached token
    println!("Step 4: Acquiring again (served from cache)...");
    let cached = client.access_token().await?;
    println!("  Same token: {}\n", cached.access_token == token.access_token);

    // Step 5: Show how to call Microsoft Graph with it
    println!("Step 5: Using with Microsoft Graph (pseudo-code):");
    println!("  ```rust");
    println!("  let response = http_client");
    println!("      .get(\"https://graph.microsoft.com/v1.0/users\")");
    println!("      .bearer_auth(&token.access_token)");
    println!("      .send()");
    println!("      .await?;");
    println!("  ```\n");

    println!("Done. Tokens live for about an hour; the cache refreshes them early.");

    Ok(())
}

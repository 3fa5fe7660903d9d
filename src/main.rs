use std::sync::Arc;

use anyhow::{bail, Context, Result};
use counsel_client::{utils, ApiClient, ClientConfig, Credentials, FileTokenStore, Session};
use dotenv::dotenv;
use log::info;

const DEFAULT_SESSION_FILE: &str = ".counsel-session.json";

const USAGE: &str = "usage: counsel-client <services|appointments|appointment <id>|profile|login <email> <password>|logout>";

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    utils::init_logging();

    let session_path =
        std::env::var("TOKEN_STORE_PATH").unwrap_or_else(|_| DEFAULT_SESSION_FILE.to_string());
    let session = Session::new(Arc::new(FileTokenStore::new(&session_path)));

    let config = ClientConfig::from_env();
    info!("using backend at {}", config.base_url);

    let client = ApiClient::new(config, session)
        .context("Failed to build API client")?
        .with_unauthorized_handler(|location: &str| {
            eprintln!("Session expired. Please sign in again ({}).", location);
        });

    let args: Vec<String> = std::env::args().skip(1).collect();
    let data = match args.iter().map(String::as_str).collect::<Vec<_>>().as_slice() {
        ["services"] => client.get_services().await?,
        ["appointments"] => client.get_appointments().await?,
        ["appointment", id] => client.get_appointment(id).await?,
        ["profile"] => client.get_profile().await?,
        ["login", email, password] => {
            client
                .login_and_store(&Credentials::new(*email, *password))
                .await?
        }
        ["logout"] => {
            client.logout()?;
            println!("Signed out.");
            return Ok(());
        }
        _ => bail!(USAGE),
    };

    println!("{}", serde_json::to_string_pretty(&data)?);
    Ok(())
}

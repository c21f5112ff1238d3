pub mod balance;
pub mod solve;
pub mod test;
pub mod token_aval;
pub mod token_info;

use anyhow::{Context, Result};
use nanoai_client::{ApiError, ApiResponse, ClientConfig, NanoAiClient, Payload};

/// Build a client from the CLI's connection flags.
pub fn build_client(api_url: &str, token: Option<&str>) -> Result<NanoAiClient> {
    let config = ClientConfig::new().with_base_url(api_url);
    let mut client = NanoAiClient::new(config).context("Failed to create API client")?;

    if let Some(token) = token {
        client.set_token(token);
    }

    Ok(client)
}

/// Print an operation's response data as pretty JSON.
pub fn print_payload(payload: &Payload) -> Result<()> {
    let json = serde_json::to_string_pretty(payload).context("Failed to render response")?;
    println!("{}", json);
    Ok(())
}

/// Unwrap a client result, keeping the server's error payload visible
/// in the CLI error output.
pub fn unwrap_response(result: nanoai_client::Result<ApiResponse>) -> Result<ApiResponse> {
    result.map_err(|err: ApiError| match serde_json::to_string_pretty(&err.data()) {
        Ok(payload) => anyhow::anyhow!("{}\n{}", err, payload),
        Err(_) => anyhow::anyhow!("{}", err),
    })
}

use anyhow::{Context, Result};
use nanoai_client::NanoAiClient;

pub async fn execute(client: &NanoAiClient) -> Result<()> {
    tracing::info!("Testing API connection");

    let status = client.test_connection().await;

    let json = serde_json::to_string_pretty(&status).context("Failed to render status")?;
    println!("{}", json);

    if !status.connected {
        anyhow::bail!("API connection failed: {}", status.message);
    }

    Ok(())
}

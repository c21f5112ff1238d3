use anyhow::Result;
use nanoai_client::NanoAiClient;

pub async fn execute(client: &NanoAiClient) -> Result<()> {
    tracing::debug!("Fetching token availability");

    let response = super::unwrap_response(client.token_availability().await)?;
    super::print_payload(&response.data)
}

use anyhow::Result;
use nanoai_client::NanoAiClient;

pub async fn execute(client: &NanoAiClient) -> Result<()> {
    tracing::debug!("Fetching token info");

    let response = super::unwrap_response(client.token_info().await)?;
    super::print_payload(&response.data)
}

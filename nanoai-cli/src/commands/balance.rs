use anyhow::Result;
use nanoai_client::NanoAiClient;

pub async fn execute(client: &NanoAiClient) -> Result<()> {
    tracing::debug!("Fetching balance");

    let response = super::unwrap_response(client.balance().await)?;
    super::print_payload(&response.data)
}

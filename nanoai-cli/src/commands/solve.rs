use anyhow::{Context, Result};
use nanoai_client::NanoAiClient;
use serde_json::Value;
use std::fs::File;
use std::io::{self, Read};

pub async fn execute(client: &NanoAiClient, input: &str) -> Result<()> {
    tracing::debug!("Reading captcha task from: {}", input);
    let raw = read_input(input).context("Failed to read task input")?;

    let task: Value = serde_json::from_str(&raw).context("Task input is not valid JSON")?;

    tracing::info!("Submitting captcha task");
    let response = super::unwrap_response(client.solve(&task).await)?;

    tracing::info!("Solve request accepted with status {}", response.status);
    super::print_payload(&response.data)
}

fn read_input(path: &str) -> Result<String> {
    let mut buffer = String::new();
    if path == "-" {
        tracing::debug!("Reading from stdin");
        io::stdin().read_to_string(&mut buffer)?;
    } else {
        tracing::debug!("Reading from file: {}", path);
        File::open(path)?.read_to_string(&mut buffer)?;
    }
    Ok(buffer)
}

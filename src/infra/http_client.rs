use crate::error::{Result, RosterError};
use reqwest::{Client, RequestBuilder};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const USER_AGENT: &str = concat!("roster_mapper/", env!("CARGO_PKG_VERSION"));

pub fn build_client() -> Result<Client> {
    let client = Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .user_agent(USER_AGENT)
        .build()?;
    Ok(client)
}

/// Sends the request and decodes the body as JSON. Non-2xx statuses become `RosterError::Status`.
pub async fn send_json(request: RequestBuilder) -> Result<Value> {
    let resp = request.send().await?;
    let status = resp.status();
    let url = resp.url().clone();
    debug!("GET {} -> {}", url.path(), status.as_u16());

    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(RosterError::Status {
            endpoint: url.path().to_string(),
            status: status.as_u16(),
            body: truncate(&body, 200).to_string(),
        });
    }

    let bytes = resp.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}

fn truncate(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

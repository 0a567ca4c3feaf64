use crate::error::{Result, RosterError};
use crate::infra::http_client::{build_client, send_json};
use crate::parser::rows_from_html;
use crate::types::{DirectoryRow, DirectorySource};
use serde_json::Value;
use tracing::{info, instrument};

/// Reads the directory table from a Confluence page's storage-format body.
pub struct ConfluenceDirectory {
    client: reqwest::Client,
    base_url: String,
    page_id: String,
    username: String,
    api_token: String,
}

impl ConfluenceDirectory {
    pub fn new(
        base_url: impl Into<String>,
        page_id: impl Into<String>,
        username: impl Into<String>,
        api_token: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            client: build_client()?,
            base_url: base_url.into(),
            page_id: page_id.into(),
            username: username.into(),
            api_token: api_token.into(),
        })
    }

    fn content_url(&self) -> String {
        format!(
            "{}/rest/api/content/{}",
            self.base_url.trim_end_matches('/'),
            self.page_id
        )
    }
}

#[async_trait::async_trait]
impl DirectorySource for ConfluenceDirectory {
    #[instrument(skip(self), fields(page_id = %self.page_id))]
    async fn fetch_directory_table(&self) -> Result<Vec<DirectoryRow>> {
        let request = self
            .client
            .get(self.content_url())
            .query(&[("expand", "body.storage")])
            .basic_auth(&self.username, Some(&self.api_token));
        let content = send_json(request).await?;

        let html = storage_body(&content)?;
        let rows = rows_from_html(html);
        info!("Extracted {} rows from directory page", rows.len());
        Ok(rows)
    }
}

/// Pulls `body.storage.value` out of a content response.
pub fn storage_body(content: &Value) -> Result<&str> {
    content["body"]["storage"]["value"]
        .as_str()
        .ok_or_else(|| RosterError::MissingField("body.storage.value not found".into()))
}

use crate::error::{Result, RosterError};
use crate::infra::http_client::{build_client, send_json};
use crate::types::{Channel, ChannelSource, Identity, IdentitySource};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info, instrument};

/// Slack Web API client backing both the channel list and the user directory.
pub struct SlackClient {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

#[derive(Debug, Deserialize)]
struct SlackUser {
    id: String,
    name: String,
    #[serde(default)]
    real_name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UsersList {
    members: Vec<SlackUser>,
}

#[derive(Debug, Deserialize, Default)]
struct SlackTopic {
    #[serde(default)]
    value: String,
}

#[derive(Debug, Deserialize)]
struct SlackChannel {
    id: String,
    name: String,
    #[serde(default)]
    topic: SlackTopic,
}

#[derive(Debug, Deserialize)]
struct ConversationsList {
    channels: Vec<SlackChannel>,
}

#[derive(Debug, Deserialize)]
struct ConversationMembers {
    members: Vec<String>,
}

impl SlackClient {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        Ok(Self {
            client: build_client()?,
            base_url: base_url.into(),
            token: token.into(),
        })
    }

    async fn call<T: DeserializeOwned>(&self, method: &str, query: &[(&str, &str)]) -> Result<T> {
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), method);
        let request = self.client.get(url).bearer_auth(&self.token).query(query);
        let body = send_json(request).await?;
        decode_response(method, body)
    }
}

/// Checks Slack's `ok` flag and decodes the payload.
fn decode_response<T: DeserializeOwned>(method: &str, body: Value) -> Result<T> {
    if !body["ok"].as_bool().unwrap_or(false) {
        let error = body["error"].as_str().unwrap_or("unknown_error");
        return Err(RosterError::Slack {
            method: method.to_string(),
            error: error.to_string(),
        });
    }
    Ok(serde_json::from_value(body)?)
}

impl From<SlackUser> for Identity {
    fn from(user: SlackUser) -> Self {
        Identity {
            handle: user.name,
            id: user.id,
            display_name: user.real_name.unwrap_or_default(),
        }
    }
}

#[async_trait::async_trait]
impl IdentitySource for SlackClient {
    #[instrument(skip(self))]
    async fn fetch_identities(&self) -> Result<Vec<Identity>> {
        let list: UsersList = self.call("users.list", &[]).await?;
        info!("Fetched {} Slack users", list.members.len());
        Ok(list.members.into_iter().map(Identity::from).collect())
    }
}

#[async_trait::async_trait]
impl ChannelSource for SlackClient {
    #[instrument(skip(self))]
    async fn fetch_channels(&self) -> Result<Vec<Channel>> {
        let list: ConversationsList = self
            .call(
                "conversations.list",
                &[("exclude_archived", "true"), ("types", "public_channel")],
            )
            .await?;

        let mut channels = Vec::with_capacity(list.channels.len());
        for channel in list.channels {
            let members: ConversationMembers = self
                .call("conversations.members", &[("channel", channel.id.as_str())])
                .await?;
            debug!("Channel {} has {} members", channel.name, members.members.len());
            channels.push(Channel {
                name: channel.name,
                topic: channel.topic.value,
                members: members.members,
            });
        }
        info!("Fetched {} Slack channels", channels.len());
        Ok(channels)
    }
}

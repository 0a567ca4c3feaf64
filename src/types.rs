use crate::error::Result;
use serde::{Deserialize, Serialize};

/// One row of the directory table: ordered cell text.
pub type DirectoryRow = Vec<String>;

/// A person record from the messaging platform's user directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub handle: String,
    pub id: String,
    pub display_name: String,
}

impl Identity {
    pub fn new(
        handle: impl Into<String>,
        id: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Self {
        Self {
            handle: handle.into(),
            id: id.into(),
            display_name: display_name.into(),
        }
    }
}

/// A messaging channel as seen by the team aggregator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    pub name: String,
    pub topic: String,
    /// Member identifiers, in platform order.
    pub members: Vec<String>,
}

/// A parsed directory row that carries a handle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DirectoryEntry {
    pub real_name: String,
    pub handle: String,
    pub lead_real_name: String,
    /// Set once by lead resolution; `None` when the lead name matched no row.
    pub resolved_lead_handle: Option<String>,
}

/// Lead handle and the handles of the people reporting to them, in table order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadGroup {
    pub lead: String,
    pub reports: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamCategory {
    Feature,
    Guild,
}

impl TeamCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            TeamCategory::Feature => "feature",
            TeamCategory::Guild => "guild",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    pub category: TeamCategory,
    pub owner: Option<Identity>,
    pub members: Vec<Identity>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadInfo {
    pub lead: Identity,
    pub reports: Vec<Identity>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    CollaboratorFailure,
    ResolutionMiss,
    MalformedRow,
}

impl DiagnosticKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosticKind::CollaboratorFailure => "collaborator_failure",
            DiagnosticKind::ResolutionMiss => "resolution_miss",
            DiagnosticKind::MalformedRow => "malformed_row",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    #[serde(skip, default = "default_kind")]
    pub kind: DiagnosticKind,
    pub message: String,
}

fn default_kind() -> DiagnosticKind {
    DiagnosticKind::ResolutionMiss
}

/// Everything one resolution pass produces. Always returned, even when every stage failed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateResult {
    pub feature_teams: Vec<Team>,
    pub guilds: Vec<Team>,
    pub leads: Vec<LeadInfo>,
    pub errors: Vec<Diagnostic>,
}

/// Provides the raw directory table.
#[async_trait::async_trait]
pub trait DirectorySource: Send + Sync {
    async fn fetch_directory_table(&self) -> Result<Vec<DirectoryRow>>;
}

/// Provides the channel list with membership.
#[async_trait::async_trait]
pub trait ChannelSource: Send + Sync {
    async fn fetch_channels(&self) -> Result<Vec<Channel>>;
}

/// Provides the full identity directory.
#[async_trait::async_trait]
pub trait IdentitySource: Send + Sync {
    async fn fetch_identities(&self) -> Result<Vec<Identity>>;
}

#![allow(dead_code)]

use roster_mapper::error::{Result, RosterError};
use roster_mapper::orchestrator::Orchestrator;
use roster_mapper::types::{
    Channel, ChannelSource, DirectoryRow, DirectorySource, Identity, IdentitySource,
};
use std::sync::Arc;

/// In-memory stand-in for every collaborator. `None` simulates a failed fetch.
#[derive(Clone, Default)]
pub struct FakeSources {
    pub rows: Option<Vec<DirectoryRow>>,
    pub channels: Option<Vec<Channel>>,
    pub identities: Option<Vec<Identity>>,
}

fn unavailable(what: &str) -> RosterError {
    RosterError::Status {
        endpoint: what.to_string(),
        status: 503,
        body: "unavailable".to_string(),
    }
}

#[async_trait::async_trait]
impl DirectorySource for FakeSources {
    async fn fetch_directory_table(&self) -> Result<Vec<DirectoryRow>> {
        self.rows.clone().ok_or_else(|| unavailable("directory page"))
    }
}

#[async_trait::async_trait]
impl ChannelSource for FakeSources {
    async fn fetch_channels(&self) -> Result<Vec<Channel>> {
        self.channels.clone().ok_or_else(|| unavailable("channel list"))
    }
}

#[async_trait::async_trait]
impl IdentitySource for FakeSources {
    async fn fetch_identities(&self) -> Result<Vec<Identity>> {
        self.identities.clone().ok_or_else(|| unavailable("user list"))
    }
}

impl FakeSources {
    pub fn empty() -> Self {
        Self {
            rows: Some(Vec::new()),
            channels: Some(Vec::new()),
            identities: Some(Vec::new()),
        }
    }

    pub fn orchestrator(self) -> Orchestrator {
        let sources = Arc::new(self);
        Orchestrator::new(sources.clone(), sources.clone(), sources)
    }
}

pub fn row(cells: &[&str]) -> DirectoryRow {
    cells.iter().map(|c| c.to_string()).collect()
}

pub fn channel(name: &str, topic: &str, members: &[&str]) -> Channel {
    Channel {
        name: name.to_string(),
        topic: topic.to_string(),
        members: members.iter().map(|m| m.to_string()).collect(),
    }
}

pub fn staff() -> Vec<Identity> {
    vec![
        Identity::new("alice", "U_ALICE", "Alice Smith"),
        Identity::new("bob", "U_BOB", "Bob Jones"),
        Identity::new("carol", "U_CAROL", "Carol White"),
        Identity::new("erin", "U_ERIN", "Erin Green"),
    ]
}

pub fn directory_rows() -> Vec<DirectoryRow> {
    vec![
        row(&["Alice Smith", "alice", ""]),
        row(&["Bob Jones", "bob", "Alice Smith"]),
        row(&["Carol White", "carol", "Alice Smith"]),
        row(&["Erin Green", "erin", "Bob Jones"]),
    ]
}

use crate::resolver::{
    aggregate_teams, build_lead_groups, parse_directory_rows, resolve_lead_identities,
    resolve_leads, Diagnostics,
};
use crate::types::{AggregateResult, ChannelSource, DirectorySource, IdentitySource, LeadGroup};
use metrics::{counter, histogram};
use std::sync::Arc;
use tracing::{info, instrument};

/// Runs one full resolution pass against freshly fetched collaborator data.
///
/// Collaborator failures never escape: each one becomes a single diagnostic and skips only
/// the stages that depend on it.
#[derive(Clone)]
pub struct Orchestrator {
    directory: Arc<dyn DirectorySource>,
    channels: Arc<dyn ChannelSource>,
    identities: Arc<dyn IdentitySource>,
}

impl Orchestrator {
    pub fn new(
        directory: Arc<dyn DirectorySource>,
        channels: Arc<dyn ChannelSource>,
        identities: Arc<dyn IdentitySource>,
    ) -> Self {
        Self {
            directory,
            channels,
            identities,
        }
    }

    #[instrument(skip(self))]
    pub async fn run(&self) -> AggregateResult {
        counter!("roster_runs_total").increment(1);
        let started = std::time::Instant::now();
        let mut diagnostics = Diagnostics::new();
        let mut result = AggregateResult::default();

        // Step 1: directory table -> lead groups
        let groups = self.lead_groups(&mut diagnostics).await;

        // Step 2: identity directory and channel list, each failure reported on its own
        let identities = match self.identities.fetch_identities().await {
            Ok(identities) => {
                info!("Fetched {} identities", identities.len());
                Some(identities)
            }
            Err(e) => {
                diagnostics.collaborator_failure(format!("Failed to fetch user directory: {e}"));
                None
            }
        };
        let channels = match self.channels.fetch_channels().await {
            Ok(channels) => {
                info!("Fetched {} channels", channels.len());
                Some(channels)
            }
            Err(e) => {
                diagnostics.collaborator_failure(format!("Failed to fetch channel list: {e}"));
                None
            }
        };

        // Everything below resolves names, so it needs the identity directory
        let Some(identities) = identities else {
            return Self::finish(result, diagnostics, started);
        };
        result.leads = resolve_lead_identities(&groups, &identities, &mut diagnostics);

        // Step 3: channels -> feature teams and guilds
        if let Some(channels) = channels {
            let teams = aggregate_teams(&channels, &identities, &mut diagnostics);
            result.feature_teams = teams.feature_teams;
            result.guilds = teams.guilds;
        }

        Self::finish(result, diagnostics, started)
    }

    async fn lead_groups(&self, diagnostics: &mut Diagnostics) -> Vec<LeadGroup> {
        let rows = match self.directory.fetch_directory_table().await {
            Ok(rows) => rows,
            Err(e) => {
                diagnostics.collaborator_failure(format!("Failed to fetch directory document: {e}"));
                return Vec::new();
            }
        };
        info!("Fetched {} directory rows", rows.len());

        let mut entries = parse_directory_rows(&rows, diagnostics);
        resolve_leads(&mut entries);
        build_lead_groups(&entries)
    }

    fn finish(
        mut result: AggregateResult,
        diagnostics: Diagnostics,
        started: std::time::Instant,
    ) -> AggregateResult {
        result.errors = diagnostics.into_vec();
        histogram!("roster_run_duration_seconds").record(started.elapsed().as_secs_f64());
        info!(
            "✅ Pass finished: {} feature teams, {} guilds, {} leads, {} errors",
            result.feature_teams.len(),
            result.guilds.len(),
            result.leads.len(),
            result.errors.len()
        );
        result
    }
}

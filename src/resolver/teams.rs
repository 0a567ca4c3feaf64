use super::diagnostics::Diagnostics;
use super::identity::find_identity;
use crate::constants::{FEATURE_TEAM_PREFIX, GUILD_PREFIX, OWNER_MARKER};
use crate::types::{Channel, Identity, Team, TeamCategory};
use metrics::counter;
use tracing::{debug, instrument};

/// Feature teams and guilds built from one channel list, each in channel order.
#[derive(Debug, Default)]
pub struct TeamAggregation {
    pub feature_teams: Vec<Team>,
    pub guilds: Vec<Team>,
}

pub fn classify_channel(name: &str) -> Option<TeamCategory> {
    if name.starts_with(FEATURE_TEAM_PREFIX) {
        Some(TeamCategory::Feature)
    } else if name.starts_with(GUILD_PREFIX) {
        Some(TeamCategory::Guild)
    } else {
        None
    }
}

/// Tokens in a topic that name an owner, with the marker stripped.
pub fn owner_tokens(topic: &str) -> impl Iterator<Item = &str> {
    topic
        .split_whitespace()
        .filter_map(|token| token.strip_prefix(OWNER_MARKER))
}

#[instrument(skip_all, fields(channels = channels.len(), identities = identities.len()))]
pub fn aggregate_teams(
    channels: &[Channel],
    identities: &[Identity],
    diagnostics: &mut Diagnostics,
) -> TeamAggregation {
    let mut out = TeamAggregation::default();

    for channel in channels {
        let Some(category) = classify_channel(&channel.name) else {
            continue;
        };
        let team = build_team(channel, category, identities, diagnostics);
        counter!("roster_teams_total", "category" => category.as_str()).increment(1);
        match category {
            TeamCategory::Feature => out.feature_teams.push(team),
            TeamCategory::Guild => out.guilds.push(team),
        }
    }

    debug!(
        "Aggregated {} feature teams and {} guilds",
        out.feature_teams.len(),
        out.guilds.len()
    );
    out
}

fn build_team(
    channel: &Channel,
    category: TeamCategory,
    identities: &[Identity],
    diagnostics: &mut Diagnostics,
) -> Team {
    // Several mentions overwrite each other; the last one that resolves is the owner.
    let mut owner: Option<Identity> = None;
    for token in owner_tokens(&channel.topic) {
        match find_identity(identities, token) {
            Some(identity) => owner = Some(identity.clone()),
            None => diagnostics.resolution_miss(format!(
                "Owner @{} of channel {} not found in user directory",
                token, channel.name
            )),
        }
    }

    let mut members = Vec::with_capacity(channel.members.len());
    for member in &channel.members {
        match find_identity(identities, member) {
            Some(identity) => members.push(identity.clone()),
            None => diagnostics.resolution_miss(format!(
                "Member {} of channel {} not found in user directory",
                member, channel.name
            )),
        }
    }

    Team {
        name: channel.name.clone(),
        category,
        owner,
        members,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn channel(name: &str, topic: &str, members: &[&str]) -> Channel {
        Channel {
            name: name.to_string(),
            topic: topic.to_string(),
            members: members.iter().map(|m| m.to_string()).collect(),
        }
    }

    fn identities() -> Vec<Identity> {
        vec![
            Identity::new("bob", "U_BOB", "Bob Jones"),
            Identity::new("carol", "U_CAROL", "Carol White"),
            Identity::new("erin", "U_ERIN", "Erin Green"),
        ]
    }

    #[test]
    fn test_last_owner_wins_and_missing_member_is_reported() {
        let channels = vec![channel("f-raiders", "lead @bob backup @carol", &["bob", "carol", "dave"])];
        let identities = identities();
        let mut diagnostics = Diagnostics::new();

        let out = aggregate_teams(&channels, &identities, &mut diagnostics);

        assert_eq!(out.feature_teams.len(), 1);
        assert!(out.guilds.is_empty());
        let team = &out.feature_teams[0];
        assert_eq!(team.name, "f-raiders");
        assert_eq!(team.category, TeamCategory::Feature);
        assert_eq!(team.owner.as_ref().unwrap().handle, "carol");
        let members: Vec<&str> = team.members.iter().map(|m| m.handle.as_str()).collect();
        assert_eq!(members, vec!["bob", "carol"]);
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics.iter().next().unwrap().message.contains("dave"));
    }

    #[test]
    fn test_unresolved_owner_keeps_previous_owner() {
        let channels = vec![channel("g-rust", "@erin then @ghost", &[])];
        let identities = identities();
        let mut diagnostics = Diagnostics::new();

        let out = aggregate_teams(&channels, &identities, &mut diagnostics);

        let guild = &out.guilds[0];
        assert_eq!(guild.category, TeamCategory::Guild);
        assert_eq!(guild.owner.as_ref().unwrap().handle, "erin");
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics.iter().next().unwrap().message.contains("@ghost"));
    }

    #[test]
    fn test_members_resolve_by_id() {
        let channels = vec![channel("f-ids", "", &["U_ERIN", "U_BOB"])];
        let identities = identities();
        let mut diagnostics = Diagnostics::new();

        let out = aggregate_teams(&channels, &identities, &mut diagnostics);

        let team = &out.feature_teams[0];
        assert!(team.owner.is_none());
        let members: Vec<&str> = team.members.iter().map(|m| m.handle.as_str()).collect();
        assert_eq!(members, vec!["erin", "bob"]);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_unrecognized_prefix_is_ignored() {
        let channels = vec![
            channel("x-other", "@bob", &["bob", "nobody"]),
            channel("general", "", &[]),
            channel("F-upper", "", &[]),
        ];
        let identities = identities();
        let mut diagnostics = Diagnostics::new();

        let out = aggregate_teams(&channels, &identities, &mut diagnostics);

        assert!(out.feature_teams.is_empty());
        assert!(out.guilds.is_empty());
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_bare_marker_is_an_owner_miss() {
        let channels = vec![channel("f-blank", "owner: @ ", &[])];
        let identities = vec![Identity::new("", "U0", "Nameless")];
        let mut diagnostics = Diagnostics::new();

        let out = aggregate_teams(&channels, &identities, &mut diagnostics);

        assert!(out.feature_teams[0].owner.is_none());
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics.iter().next().unwrap().message.contains("Owner @ of channel f-blank"));
    }

    #[test]
    fn test_owner_tokens_split_on_any_whitespace() {
        let tokens: Vec<&str> = owner_tokens("owner:\t@bob\n@carol  email@example.com @").collect();
        assert_eq!(tokens, vec!["bob", "carol", ""]);
    }

    #[test]
    fn test_channel_order_is_preserved_per_category() {
        let channels = vec![
            channel("g-b", "", &[]),
            channel("f-a", "", &[]),
            channel("g-a", "", &[]),
        ];
        let mut diagnostics = Diagnostics::new();

        let out = aggregate_teams(&channels, &identities(), &mut diagnostics);

        let guilds: Vec<&str> = out.guilds.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(guilds, vec!["g-b", "g-a"]);
        assert_eq!(out.feature_teams[0].name, "f-a");
    }
}

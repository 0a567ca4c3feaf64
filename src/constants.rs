/// Channel name prefixes that mark a channel as team-backed.
pub const FEATURE_TEAM_PREFIX: &str = "f-";
pub const GUILD_PREFIX: &str = "g-";

/// Marker that introduces an owner mention in a channel topic.
pub const OWNER_MARKER: char = '@';

/// Minimum number of cells a directory row needs: real name, handle, lead real name.
pub const DIRECTORY_ROW_CELLS: usize = 3;

// Defaults used when config.toml leaves a value out
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";
pub const DEFAULT_DIRECTORY_PAGE_ID: &str = "12159063";
pub const DEFAULT_SLACK_BASE_URL: &str = "https://slack.com/api";
pub const DEFAULT_SERVER_PORT: u16 = 8080;

// Environment variable names
pub const CONFIG_PATH_ENV: &str = "ROSTER_CONFIG";
pub const CONFLUENCE_TOKEN_ENV: &str = "CONFLUENCE_API_TOKEN";
pub const SLACK_TOKEN_ENV: &str = "SLACK_TOKEN";

pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod observability;
pub mod orchestrator;
pub mod parser;
pub mod resolver;
pub mod server;
pub mod types;

// Wiki and Slack clients behind the source traits
pub mod infra;

//! Pure, synchronous resolution over in-memory collections.
//!
//! Nothing here performs I/O. The orchestrator fetches the directory table, channels and
//! identities, then feeds them through these stages with a shared [`Diagnostics`] sink.

pub mod diagnostics;
pub mod identity;
pub mod leads;
pub mod table;
pub mod teams;

pub use diagnostics::Diagnostics;
pub use identity::find_identity;
pub use leads::{build_lead_groups, resolve_lead_identities, resolve_leads};
pub use table::parse_directory_rows;
pub use teams::{aggregate_teams, classify_channel, TeamAggregation};

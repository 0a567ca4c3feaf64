use super::diagnostics::Diagnostics;
use super::identity::find_identity;
use crate::types::{DirectoryEntry, Identity, LeadGroup, LeadInfo};
use std::collections::HashMap;
use tracing::debug;

/// Fills in `resolved_lead_handle` for every entry whose lead name matches a row's real name.
///
/// Matching is exact and case-sensitive. When several rows share a real name the first one in
/// table order wins. An empty lead name never resolves.
pub fn resolve_leads(entries: &mut [DirectoryEntry]) {
    let mut handle_by_name: HashMap<String, String> = HashMap::with_capacity(entries.len());
    for entry in entries.iter() {
        handle_by_name
            .entry(entry.real_name.clone())
            .or_insert_with(|| entry.handle.clone());
    }

    let mut resolved = 0usize;
    for entry in entries.iter_mut() {
        if entry.lead_real_name.is_empty() {
            continue;
        }
        if let Some(handle) = handle_by_name.get(&entry.lead_real_name) {
            entry.resolved_lead_handle = Some(handle.clone());
            resolved += 1;
        }
    }
    debug!("Resolved leads for {}/{} entries", resolved, entries.len());
}

/// Groups resolved entries under their lead's handle.
///
/// Groups appear in the order their lead was first referenced; reports keep table order.
pub fn build_lead_groups(entries: &[DirectoryEntry]) -> Vec<LeadGroup> {
    let mut groups: Vec<LeadGroup> = Vec::new();
    let mut index_by_lead: HashMap<&str, usize> = HashMap::new();

    for entry in entries {
        let Some(lead) = entry.resolved_lead_handle.as_deref() else {
            continue;
        };
        if lead.is_empty() {
            continue;
        }
        let idx = *index_by_lead.entry(lead).or_insert_with(|| {
            groups.push(LeadGroup {
                lead: lead.to_string(),
                reports: Vec::new(),
            });
            groups.len() - 1
        });
        groups[idx].reports.push(entry.handle.clone());
    }

    groups
}

/// Looks up every lead and report in the identity directory.
///
/// A missing lead drops its whole group; a missing report drops only that report. Each miss
/// records one diagnostic.
pub fn resolve_lead_identities(
    groups: &[LeadGroup],
    identities: &[Identity],
    diagnostics: &mut Diagnostics,
) -> Vec<LeadInfo> {
    let mut leads = Vec::with_capacity(groups.len());

    for group in groups {
        let Some(lead) = find_identity(identities, &group.lead) else {
            diagnostics.resolution_miss(format!(
                "Lead {} not found in user directory ({} reports skipped)",
                group.lead,
                group.reports.len()
            ));
            continue;
        };

        let mut reports = Vec::with_capacity(group.reports.len());
        for report in &group.reports {
            match find_identity(identities, report) {
                Some(identity) => reports.push(identity.clone()),
                None => diagnostics.resolution_miss(format!(
                    "Report {} of lead {} not found in user directory",
                    report, group.lead
                )),
            }
        }

        leads.push(LeadInfo {
            lead: lead.clone(),
            reports,
        });
    }

    leads
}

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::model::Listing;

// ---------------------------------------------------------------------------
// Host ranking: listings per host, most active first
// ---------------------------------------------------------------------------

/// One host's position in the ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostRankingEntry {
    pub host_id: String,
    pub host_name: String,
    pub listings_count: usize,
}

/// Group a subset by `host_id` and rank hosts by listing count, descending.
///
/// Grouping order is the order of each host's first occurrence, and the sort
/// is stable, so hosts with equal counts stay in first-seen order. The name
/// attached to a host is whatever `host_name` its first listing carried; ids
/// and names are compared verbatim, with no case or whitespace
/// normalisation.
pub fn compute_host_ranking(subset: &[Listing]) -> Vec<HostRankingEntry> {
    let mut slot_by_id: HashMap<String, usize> = HashMap::new();
    let mut entries: Vec<HostRankingEntry> = Vec::new();

    for l in subset {
        let host_id = l.host_id();
        match slot_by_id.get(host_id) {
            Some(&slot) => entries[slot].listings_count += 1,
            None => {
                slot_by_id.insert(host_id.to_string(), entries.len());
                entries.push(HostRankingEntry {
                    host_id: host_id.to_string(),
                    host_name: l.host_name().to_string(),
                    listings_count: 1,
                });
            }
        }
    }

    // Vec::sort_by is stable: ties keep first-seen order.
    entries.sort_by(|a, b| b.listings_count.cmp(&a.listings_count));
    entries
}

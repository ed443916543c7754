use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::model::Listing;
use super::ranking::HostRankingEntry;
use super::stats::Statistics;

// ---------------------------------------------------------------------------
// Export bundle: the combined analysis result handed to the sink
// ---------------------------------------------------------------------------

/// Everything one analysis run produced, in one serializable value.
///
/// Purely structural: building a bundle performs no computation, and a built
/// bundle is never mutated — it is created on demand, written out, and
/// dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportBundle {
    pub filtered_listings: Vec<Listing>,
    pub statistics: Statistics,
    pub host_ranking: Vec<HostRankingEntry>,
}

impl ExportBundle {
    pub fn new(
        filtered_listings: Vec<Listing>,
        statistics: Statistics,
        host_ranking: Vec<HostRankingEntry>,
    ) -> Self {
        Self {
            filtered_listings,
            statistics,
            host_ranking,
        }
    }
}

/// Write a bundle to `path` as pretty-printed JSON (2-space indentation).
///
/// All-or-nothing from the caller's perspective: any serialisation or I/O
/// failure is surfaced verbatim and nothing is retried.
pub fn write_export(bundle: &ExportBundle, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(bundle).context("serialising export bundle")?;
    std::fs::write(path, json).with_context(|| format!("writing export to {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::test_support::listing;
    use crate::data::ranking::compute_host_ranking;
    use crate::data::stats::compute_statistics;

    fn sample_bundle() -> ExportBundle {
        let subset = vec![
            listing(&[
                ("id", "1"),
                ("price", "$100"),
                ("bedrooms", "2"),
                ("host_id", "h1"),
                ("host_name", "Alice"),
            ]),
            listing(&[
                ("id", "2"),
                ("price", "$200"),
                ("bedrooms", "4"),
                ("host_id", "h1"),
                ("host_name", "Alice"),
            ]),
        ];
        let stats = compute_statistics(&subset);
        let ranking = compute_host_ranking(&subset);
        ExportBundle::new(subset, stats, ranking)
    }

    #[test]
    fn json_round_trip_is_lossless() {
        let bundle = sample_bundle();
        let json = serde_json::to_string_pretty(&bundle).unwrap();
        let back: ExportBundle = serde_json::from_str(&json).unwrap();
        assert_eq!(back, bundle);
    }

    #[test]
    fn serialises_camel_case_keys() {
        let json = serde_json::to_string_pretty(&sample_bundle()).unwrap();
        assert!(json.contains("\"filteredListings\""));
        assert!(json.contains("\"totalListings\""));
        assert!(json.contains("\"averagePricePerRoom\""));
        assert!(json.contains("\"hostRanking\""));
        assert!(json.contains("\"listingsCount\""));
    }

    #[test]
    fn writes_file_and_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.json");
        let bundle = sample_bundle();

        write_export(&bundle, &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let back: ExportBundle = serde_json::from_str(&text).unwrap();
        assert_eq!(back, bundle);
        // serde_json pretty-printing uses 2-space indentation.
        assert!(text.contains("\n  \"filteredListings\""));
    }

    #[test]
    fn unwritable_path_is_an_error() {
        let bundle = sample_bundle();
        let err = write_export(&bundle, Path::new("/nonexistent-dir/out.json")).unwrap_err();
        assert!(err.to_string().contains("writing export"));
    }
}

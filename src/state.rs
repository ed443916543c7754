use crate::data::export::ExportBundle;
use crate::data::filter::{Criteria, filter_listings};
use crate::data::model::Listing;
use crate::data::ranking::{HostRankingEntry, compute_host_ranking};
use crate::data::stats::{Statistics, compute_statistics};

// ---------------------------------------------------------------------------
// Analysis session
// ---------------------------------------------------------------------------

/// One analysis run over a loaded dataset.
///
/// Owns the raw listings (read-only after construction) plus the latest
/// derived values. The pipeline stages themselves are pure functions; this
/// struct only sequences them and caches their most recent results so the
/// caller can re-read them without recomputing.
///
/// Invariants:
/// * `filtered` is always a subsequence of `listings` in original order;
///   it starts empty until the first [`Session::apply_filter`] call.
/// * `statistics` / `ranking`, when present, were computed from the current
///   `filtered` — applying a new filter clears both.
pub struct Session {
    listings: Vec<Listing>,
    filtered: Vec<Listing>,
    statistics: Option<Statistics>,
    ranking: Option<Vec<HostRankingEntry>>,
}

impl Session {
    pub fn new(listings: Vec<Listing>) -> Self {
        Self {
            listings,
            filtered: Vec::new(),
            statistics: None,
            ranking: None,
        }
    }

    /// Replace the filtered subset and invalidate everything derived from
    /// the previous one. Re-filtering is idempotent for equal criteria.
    pub fn apply_filter(&mut self, criteria: &Criteria) {
        self.filtered = filter_listings(&self.listings, criteria);
        self.statistics = None;
        self.ranking = None;
    }

    /// Statistics over the current subset, computed once per filter pass.
    pub fn statistics(&mut self) -> &Statistics {
        self.statistics
            .get_or_insert_with(|| compute_statistics(&self.filtered))
    }

    /// Host ranking over the current subset, computed once per filter pass.
    pub fn host_ranking(&mut self) -> &[HostRankingEntry] {
        self.ranking
            .get_or_insert_with(|| compute_host_ranking(&self.filtered))
    }

    /// Combine the current subset, statistics and ranking into one bundle.
    pub fn export_bundle(&mut self) -> ExportBundle {
        let statistics = self.statistics().clone();
        let ranking = self.host_ranking().to_vec();
        ExportBundle::new(self.filtered.clone(), statistics, ranking)
    }

    // -- Read accessors --

    pub fn all_listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn filtered_listings(&self) -> &[Listing] {
        &self.filtered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::test_support::listing;

    fn dataset() -> Vec<Listing> {
        vec![
            listing(&[
                ("id", "1"),
                ("price", "$100"),
                ("bedrooms", "2"),
                ("review_scores_rating", "4.5"),
                ("host_id", "h1"),
                ("host_name", "Alice"),
            ]),
            listing(&[
                ("id", "2"),
                ("price", "$200"),
                ("bedrooms", "4"),
                ("review_scores_rating", "3.0"),
                ("host_id", "h1"),
                ("host_name", "Alice"),
            ]),
        ]
    }

    #[test]
    fn subset_is_empty_until_first_filter() {
        let mut session = Session::new(dataset());
        assert!(session.filtered_listings().is_empty());
        assert_eq!(session.all_listings().len(), 2);
        // Statistics before filtering describe the empty default subset.
        assert_eq!(session.statistics().total_listings, 0);
        assert_eq!(session.statistics().average_price_per_room, "NaN");
    }

    #[test]
    fn min_price_scenario() {
        let mut session = Session::new(dataset());
        session.apply_filter(&Criteria {
            min_price: Some(150.0),
            ..Criteria::default()
        });

        assert_eq!(session.filtered_listings().len(), 1);
        assert_eq!(session.filtered_listings()[0].id(), "2");

        let stats = session.statistics().clone();
        assert_eq!(stats.total_listings, 1);
        assert_eq!(stats.average_price_per_room, "50.00");

        let ranking = session.host_ranking();
        assert_eq!(ranking.len(), 1);
        assert_eq!(ranking[0].host_id, "h1");
        assert_eq!(ranking[0].host_name, "Alice");
        assert_eq!(ranking[0].listings_count, 1);
    }

    #[test]
    fn refiltering_replaces_derived_values() {
        let mut session = Session::new(dataset());
        session.apply_filter(&Criteria::default());
        assert_eq!(session.statistics().total_listings, 2);

        session.apply_filter(&Criteria {
            min_price: Some(150.0),
            ..Criteria::default()
        });
        assert_eq!(session.statistics().total_listings, 1);
        assert_eq!(session.host_ranking()[0].listings_count, 1);
    }

    #[test]
    fn export_bundle_matches_current_state() {
        let mut session = Session::new(dataset());
        session.apply_filter(&Criteria::default());
        let bundle = session.export_bundle();
        assert_eq!(bundle.filtered_listings.len(), 2);
        assert_eq!(bundle.statistics.total_listings, 2);
        assert_eq!(bundle.host_ranking[0].listings_count, 2);
    }
}

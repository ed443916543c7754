use super::model::Listing;

// ---------------------------------------------------------------------------
// Filter criteria: optional range bounds per derived field
// ---------------------------------------------------------------------------

/// Range bounds applied to the three derived numeric fields.
///
/// Every bound is independently optional; an absent bound places no
/// constraint on that side. A bound of exactly `0.0` is treated the same as
/// an absent one — e.g. `min_rooms: Some(0.0)` never excludes anything.
/// That falsy-zero behaviour is inherited from the dataset tooling this
/// replaces and is kept deliberately (see DESIGN.md).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Criteria {
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub min_rooms: Option<f64>,
    pub max_rooms: Option<f64>,
    pub min_review_score: Option<f64>,
    pub max_review_score: Option<f64>,
}

/// A bound participates in filtering only when present and non-zero.
fn active(bound: Option<f64>) -> Option<f64> {
    bound.filter(|b| *b != 0.0)
}

/// Return the listings that satisfy every active bound.
///
/// Min bounds are inclusive `>=`, max bounds inclusive `<=`. The result is
/// an order-preserving subsequence of the input; inputs are never mutated.
pub fn filter_listings(listings: &[Listing], criteria: &Criteria) -> Vec<Listing> {
    listings
        .iter()
        .filter(|l| passes(l, criteria))
        .cloned()
        .collect()
}

fn passes(listing: &Listing, criteria: &Criteria) -> bool {
    let price = listing.price();
    let rooms = listing.rooms() as f64;
    let score = listing.review_score() as f64;

    if let Some(min) = active(criteria.min_price) {
        if price < min {
            return false;
        }
    }
    if let Some(max) = active(criteria.max_price) {
        if price > max {
            return false;
        }
    }
    if let Some(min) = active(criteria.min_rooms) {
        if rooms < min {
            return false;
        }
    }
    if let Some(max) = active(criteria.max_rooms) {
        if rooms > max {
            return false;
        }
    }
    if let Some(min) = active(criteria.min_review_score) {
        if score < min {
            return false;
        }
    }
    if let Some(max) = active(criteria.max_review_score) {
        if score > max {
            return false;
        }
    }
    true
}

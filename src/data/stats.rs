use serde::{Deserialize, Serialize};

use super::model::Listing;

// ---------------------------------------------------------------------------
// Aggregate statistics over a filtered subset
// ---------------------------------------------------------------------------

/// Summary figures for one filtered subset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub total_listings: usize,
    /// Mean of per-listing `price / rooms`, formatted with exactly two
    /// fractional digits. An empty subset yields the literal `"NaN"`
    /// (0.0 / 0.0); callers display it as-is (see DESIGN.md).
    pub average_price_per_room: String,
}

/// Reduce a subset to its summary statistics.
///
/// The average is the arithmetic mean of each listing's own price-per-room
/// ratio, not total price over total rooms — a cheap listing with many rooms
/// weighs the same as an expensive studio.
pub fn compute_statistics(subset: &[Listing]) -> Statistics {
    let sum: f64 = subset.iter().map(|l| l.price() / l.rooms() as f64).sum();
    let mean = sum / subset.len() as f64;
    Statistics {
        total_listings: subset.len(),
        average_price_per_room: format!("{mean:.2}"),
    }
}

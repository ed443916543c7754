use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::coerce::{parse_number, parse_price};

// ---------------------------------------------------------------------------
// Listing – one row of the source dataset
// ---------------------------------------------------------------------------

/// A single rental listing (one row of the source table).
///
/// The ingestion layer makes no schema guarantees beyond "header → cell
/// text", so a listing is just an ordered map of column name to raw string.
/// The pipeline only ever reads `price`, `bedrooms`, `review_scores_rating`,
/// `host_id`, `host_name` and `id`; everything else is carried along
/// untouched and re-emitted on export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Listing {
    pub fields: BTreeMap<String, String>,
}

impl Listing {
    pub fn new(fields: BTreeMap<String, String>) -> Self {
        Self { fields }
    }

    /// Raw text for a column, empty string when the column is absent.
    pub fn get(&self, column: &str) -> &str {
        self.fields.get(column).map(String::as_str).unwrap_or("")
    }

    // -- Derived numeric fields, recomputed on every pass (no caching) --

    /// Nightly price, coerced from free-form currency text.
    pub fn price(&self) -> f64 {
        parse_price(self.get("price"))
    }

    /// Bedroom count. Defaults to 1 (not 0) when unparseable, so the
    /// price-per-room division downstream has a sane denominator.
    pub fn rooms(&self) -> i64 {
        parse_number(self.get("bedrooms"), 1)
    }

    /// Review score, truncated to its integer part; 0 when unparseable.
    pub fn review_score(&self) -> i64 {
        parse_number(self.get("review_scores_rating"), 0)
    }

    pub fn id(&self) -> &str {
        self.get("id")
    }

    pub fn host_id(&self) -> &str {
        self.get("host_id")
    }

    pub fn host_name(&self) -> &str {
        self.get("host_name")
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// Build a listing from `(column, value)` pairs.
    pub fn listing(pairs: &[(&str, &str)]) -> Listing {
        Listing::new(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::listing;

    #[test]
    fn derived_fields_coerce_raw_text() {
        let l = listing(&[
            ("price", "$150.00"),
            ("bedrooms", "3"),
            ("review_scores_rating", "4.8"),
        ]);
        assert_eq!(l.price(), 150.0);
        assert_eq!(l.rooms(), 3);
        assert_eq!(l.review_score(), 4);
    }

    #[test]
    fn missing_columns_fall_back() {
        let l = listing(&[("id", "42")]);
        assert_eq!(l.price(), 0.0);
        assert_eq!(l.rooms(), 1);
        assert_eq!(l.review_score(), 0);
        assert_eq!(l.host_id(), "");
    }
}

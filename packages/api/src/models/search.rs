use serde::{Deserialize, Serialize};

/// Criteria for `GET /tutors/search`.
///
/// Fields hold the raw text of the filter form; an empty (or blank) field means
/// "unconstrained" and is left out of the query string.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchFilters {
    pub subject: String,
    pub city: String,
    pub max_hourly_rate: String,
    pub min_rating: String,
    pub teaching_mode: String,
    /// `price_asc`, `distance_asc`, or empty for the backend's rating order.
    pub sort_by: String,
}

impl SearchFilters {
    /// Sort keys the backend understands, with their labels. The empty key is the
    /// backend default (rating descending, then price ascending).
    pub const SORT_KEYS: [(&'static str, &'static str); 3] = [
        ("", "Best rated"),
        ("price_asc", "Lowest price"),
        ("distance_asc", "Nearest"),
    ];

    /// Query parameters for the non-empty fields, in a fixed order.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        [
            ("subject", &self.subject),
            ("city", &self.city),
            ("max_hourly_rate", &self.max_hourly_rate),
            ("min_rating", &self.min_rating),
            ("teaching_mode", &self.teaching_mode),
            ("sort_by", &self.sort_by),
        ]
        .into_iter()
        .filter_map(|(key, value)| {
            let value = value.trim();
            (!value.is_empty()).then(|| (key, value.to_string()))
        })
        .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.query_pairs().is_empty()
    }
}

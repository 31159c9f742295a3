use serde::{Deserialize, Serialize};

use super::{null_as_default, Subjects};

/// A student record.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    /// Free text on most endpoints, a list on some.
    #[serde(default)]
    pub preferred_subjects: Option<Subjects>,
    #[serde(default)]
    pub max_hourly_rate: Option<f64>,
}

/// Body of `POST /students` and `PUT /students/{id}`.
///
/// The backend stores preferences as comma-separated text, so they are sent as a
/// string or `null`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct StudentPayload {
    pub name: String,
    pub email: String,
    pub city: Option<String>,
    pub address: Option<String>,
    pub preferred_subjects: Option<String>,
    pub max_hourly_rate: Option<f64>,
}

use serde::{Deserialize, Serialize};

use super::{null_as_default, Subjects};

/// How a tutor delivers lessons.
///
/// Unknown or missing values map to [`TeachingMode::Unset`] instead of failing the
/// whole record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TeachingMode {
    Online,
    InPerson,
    Hybrid,
    #[default]
    Unset,
}

impl TeachingMode {
    /// The modes a user can pick.
    pub const ALL: [TeachingMode; 3] = [Self::Online, Self::InPerson, Self::Hybrid];

    /// Wire value; empty for [`TeachingMode::Unset`].
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::InPerson => "in_person",
            Self::Hybrid => "hybrid",
            Self::Unset => "",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Online => "Online",
            Self::InPerson => "In-person",
            Self::Hybrid => "Hybrid",
            Self::Unset => "",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s.trim() {
            "online" => Self::Online,
            "in_person" => Self::InPerson,
            "hybrid" => Self::Hybrid,
            _ => Self::Unset,
        }
    }

    pub fn is_set(self) -> bool {
        self != Self::Unset
    }
}

impl From<String> for TeachingMode {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<TeachingMode> for String {
    fn from(mode: TeachingMode) -> Self {
        mode.as_str().to_string()
    }
}

/// A review left on a tutor.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Review {
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub comment: Option<String>,
    /// ISO-8601 timestamp as sent by the backend.
    #[serde(default)]
    pub created_at: Option<String>,
}

/// A tutor record.
///
/// List endpoints return a subset of the fields; `GET /tutors/{id}` adds contact
/// details and reviews. Recommendation endpoints may add `distance_km` and
/// `explanation`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Tutor {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub hourly_rate: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub teaching_mode: TeachingMode,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub subjects: Subjects,
    #[serde(default)]
    pub overall_rating: Option<f64>,
    #[serde(default)]
    pub number_of_reviews: Option<u32>,
    #[serde(default)]
    pub reviews: Option<Vec<Review>>,
    #[serde(default)]
    pub distance_km: Option<f64>,
    #[serde(default)]
    pub explanation: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}

const AVATAR_SERVICE: &str = "https://ui-avatars.com/api/";

impl Tutor {
    /// The tutor's own avatar, or a generated initials avatar.
    pub fn avatar_url(&self) -> String {
        if let Some(avatar) = self.avatar.as_deref().filter(|a| !a.trim().is_empty()) {
            return avatar.to_string();
        }
        reqwest::Url::parse_with_params(
            AVATAR_SERVICE,
            &[
                ("name", self.name.as_str()),
                ("background", "2F6FDE"),
                ("color", "fff"),
                ("size", "128"),
            ],
        )
        .map(|url| url.to_string())
        .unwrap_or_else(|_| AVATAR_SERVICE.to_string())
    }
}

/// Body of `POST /tutors` and `PUT /tutors/{id}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct TutorPayload {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub city: Option<String>,
    pub address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Omitted when blank so the backend keeps its default (create) or the
    /// stored value (update).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hourly_rate: Option<f64>,
    pub teaching_mode: Option<TeachingMode>,
    pub bio: Option<String>,
    pub subjects: Vec<String>,
}

/// Answer of the recommender chat (`POST /chat`).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChatReply {
    pub reply: String,
    pub tutors: Vec<Tutor>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_search_result_shape() {
        let tutor: Tutor = serde_json::from_value(json!({
            "id": 4,
            "name": "Ada",
            "city": "Berlin",
            "hourly_rate": 35.5,
            "teaching_mode": "in_person",
            "overall_rating": 4.6,
            "number_of_reviews": 12,
            "subjects": ["Math"],
            "distance_km": null
        }))
        .unwrap();
        assert_eq!(tutor.teaching_mode, TeachingMode::InPerson);
        assert_eq!(tutor.hourly_rate, Some(35.5));
        assert_eq!(tutor.subjects.display(), "Math");
        assert!(tutor.reviews.is_none());
        assert!(tutor.distance_km.is_none());
    }

    #[test]
    fn test_nulls_and_unknown_mode() {
        let tutor: Tutor = serde_json::from_value(json!({
            "id": 1,
            "name": null,
            "teaching_mode": "carrier_pigeon",
            "subjects": null
        }))
        .unwrap();
        assert_eq!(tutor.name, "");
        assert_eq!(tutor.teaching_mode, TeachingMode::Unset);
        assert!(tutor.subjects.is_empty());

        let tutor: Tutor =
            serde_json::from_value(json!({"id": 2, "teaching_mode": null})).unwrap();
        assert_eq!(tutor.teaching_mode, TeachingMode::Unset);
    }

    #[test]
    fn test_detail_with_reviews() {
        let tutor: Tutor = serde_json::from_value(json!({
            "id": 9,
            "name": "Grace",
            "reviews": [
                {"rating": 5, "comment": "Great", "created_at": "2024-03-01T10:00:00"},
                {"rating": 3.5, "comment": null, "created_at": "2024-02-01T09:30:00"}
            ]
        }))
        .unwrap();
        let reviews = tutor.reviews.unwrap();
        assert_eq!(reviews.len(), 2);
        assert_eq!(reviews[0].rating, Some(5.0));
        assert_eq!(reviews[1].comment, None);
    }

    #[test]
    fn test_payload_encoding() {
        let payload = TutorPayload {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            teaching_mode: Some(TeachingMode::Hybrid),
            subjects: vec!["Math".into()],
            ..Default::default()
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["teaching_mode"], "hybrid");
        assert_eq!(value["phone"], json!(null));
        assert!(value.get("hourly_rate").is_none());
        assert_eq!(value["subjects"], json!(["Math"]));
    }

    #[test]
    fn test_avatar_url() {
        let mut tutor = Tutor {
            id: 1,
            name: "Ada Lovelace".into(),
            ..Default::default()
        };
        let generated = tutor.avatar_url();
        assert!(generated.starts_with("https://ui-avatars.com/api/?name=Ada+Lovelace&"));
        assert!(generated.ends_with("size=128"));

        tutor.avatar = Some("https://cdn.example.com/ada.png".into());
        assert_eq!(tutor.avatar_url(), "https://cdn.example.com/ada.png");
    }

    #[test]
    fn test_mode_round_trip_names() {
        for mode in TeachingMode::ALL {
            assert_eq!(TeachingMode::parse(mode.as_str()), mode);
            assert!(mode.is_set());
        }
        assert_eq!(TeachingMode::parse(""), TeachingMode::Unset);
    }
}

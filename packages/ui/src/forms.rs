//! Form field state for the admin editors and its mapping to request payloads.
//!
//! Fields are kept as the text the user typed. Converting to a payload is the only
//! place input gets interpreted: blank optional text becomes `null`, numbers that
//! do not parse are dropped, and the subject line is split on commas.

use api::{split_subjects, Student, StudentPayload, TeachingMode, Tutor, TutorPayload};

use crate::render::preferences_text;

/// What an admin form is editing.
#[derive(Clone, Debug, PartialEq)]
pub enum Editing<T> {
    New,
    Existing(T),
}

impl<T> Editing<T> {
    pub fn record(&self) -> Option<&T> {
        match self {
            Self::New => None,
            Self::Existing(record) => Some(record),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn parse_number(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Exact text of a stored number, so an untouched field saves the same value.
fn number_text(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Text of every tutor form input.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TutorFormFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub address: String,
    pub latitude: String,
    pub longitude: String,
    pub hourly_rate: String,
    /// Wire value of the mode, empty when unset.
    pub teaching_mode: String,
    pub bio: String,
    /// Comma-separated subject names.
    pub subjects: String,
}

impl TutorFormFields {
    /// Prefill from an existing record.
    pub fn from_tutor(tutor: &Tutor) -> Self {
        Self {
            name: tutor.name.clone(),
            email: tutor.email.clone().unwrap_or_default(),
            phone: tutor.phone.clone().unwrap_or_default(),
            city: tutor.city.clone().unwrap_or_default(),
            address: tutor.address.clone().unwrap_or_default(),
            latitude: number_text(tutor.latitude),
            longitude: number_text(tutor.longitude),
            hourly_rate: number_text(tutor.hourly_rate),
            teaching_mode: tutor.teaching_mode.as_str().to_string(),
            bio: tutor.bio.clone().unwrap_or_default(),
            subjects: tutor.subjects.names().join(", "),
        }
    }

    pub fn to_payload(&self) -> TutorPayload {
        let mode = TeachingMode::parse(&self.teaching_mode);
        TutorPayload {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: non_empty(&self.phone),
            city: non_empty(&self.city),
            address: non_empty(&self.address),
            latitude: parse_number(&self.latitude),
            longitude: parse_number(&self.longitude),
            hourly_rate: parse_number(&self.hourly_rate),
            teaching_mode: mode.is_set().then_some(mode),
            bio: non_empty(&self.bio),
            subjects: split_subjects(&self.subjects),
        }
    }
}

/// Text of every student form input.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StudentFormFields {
    pub name: String,
    pub email: String,
    pub city: String,
    pub address: String,
    pub preferred_subjects: String,
    pub max_hourly_rate: String,
}

impl StudentFormFields {
    pub fn from_student(student: &Student) -> Self {
        Self {
            name: student.name.clone(),
            email: student.email.clone().unwrap_or_default(),
            city: student.city.clone().unwrap_or_default(),
            address: student.address.clone().unwrap_or_default(),
            preferred_subjects: preferences_text(student.preferred_subjects.as_ref()),
            max_hourly_rate: number_text(student.max_hourly_rate),
        }
    }

    pub fn to_payload(&self) -> StudentPayload {
        StudentPayload {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            city: non_empty(&self.city),
            address: non_empty(&self.address),
            preferred_subjects: non_empty(&self.preferred_subjects),
            max_hourly_rate: parse_number(&self.max_hourly_rate),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tutor_subjects_split() {
        let fields = TutorFormFields {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            subjects: "Math, Physics".into(),
            ..Default::default()
        };
        assert_eq!(fields.to_payload().subjects, vec!["Math", "Physics"]);

        let blank = TutorFormFields {
            subjects: "   ".into(),
            ..Default::default()
        };
        assert!(blank.to_payload().subjects.is_empty());

        let messy = TutorFormFields {
            subjects: " Math ,, Art,".into(),
            ..Default::default()
        };
        assert_eq!(messy.to_payload().subjects, vec!["Math", "Art"]);
    }

    #[test]
    fn test_tutor_blank_fields_are_null() {
        let payload = TutorFormFields {
            name: " Ada ".into(),
            email: "ada@example.com".into(),
            phone: "  ".into(),
            hourly_rate: "".into(),
            latitude: "north".into(),
            ..Default::default()
        }
        .to_payload();
        assert_eq!(payload.name, "Ada");
        assert_eq!(payload.phone, None);
        assert_eq!(payload.hourly_rate, None);
        assert_eq!(payload.latitude, None);
        assert_eq!(payload.teaching_mode, None);
    }

    #[test]
    fn test_tutor_prefill_and_back() {
        let tutor: Tutor = serde_json::from_value(json!({
            "id": 3,
            "name": "Grace",
            "email": "grace@example.com",
            "city": "Berlin",
            "latitude": 52.52,
            "hourly_rate": 45,
            "teaching_mode": "online",
            "subjects": [{"id": 1, "name": "Math"}, {"id": 2, "name": "Physics"}]
        }))
        .unwrap();
        let fields = TutorFormFields::from_tutor(&tutor);
        assert_eq!(fields.subjects, "Math, Physics");
        assert_eq!(fields.hourly_rate, "45");
        assert_eq!(fields.teaching_mode, "online");
        assert_eq!(fields.phone, "");

        let payload = fields.to_payload();
        assert_eq!(payload.hourly_rate, Some(45.0));
        assert_eq!(payload.latitude, Some(52.52));
        assert_eq!(payload.teaching_mode, Some(TeachingMode::Online));
        assert_eq!(payload.city.as_deref(), Some("Berlin"));
        assert_eq!(payload.subjects, vec!["Math", "Physics"]);
    }

    #[test]
    fn test_student_payload() {
        let payload = StudentFormFields {
            name: "Sam".into(),
            email: "sam@example.com".into(),
            preferred_subjects: "".into(),
            max_hourly_rate: "".into(),
            ..Default::default()
        }
        .to_payload();
        assert_eq!(payload.preferred_subjects, None);
        assert_eq!(payload.max_hourly_rate, None);
        assert_eq!(payload.city, None);

        let payload = StudentFormFields {
            name: "Sam".into(),
            email: "sam@example.com".into(),
            preferred_subjects: "Math, Art".into(),
            max_hourly_rate: "30.5".into(),
            ..Default::default()
        }
        .to_payload();
        assert_eq!(payload.preferred_subjects.as_deref(), Some("Math, Art"));
        assert_eq!(payload.max_hourly_rate, Some(30.5));
    }

    #[test]
    fn test_student_prefill_from_list_preferences() {
        let student: Student = serde_json::from_value(json!({
            "id": 1,
            "name": "Kim",
            "preferred_subjects": [{"name": "Math"}, {"name": "Art"}],
            "max_hourly_rate": 25
        }))
        .unwrap();
        let fields = StudentFormFields::from_student(&student);
        assert_eq!(fields.preferred_subjects, "Math, Art");
        assert_eq!(fields.max_hourly_rate, "25");
        assert_eq!(fields.email, "");
    }

    #[test]
    fn test_editing_record() {
        let student = Student {
            id: 4,
            name: "Lee".into(),
            ..Default::default()
        };
        assert_eq!(Editing::<Student>::New.record(), None);
        assert_eq!(Editing::Existing(student.clone()).record(), Some(&student));
    }

    #[test]
    fn test_untouched_numbers_save_unchanged() {
        let student = Student {
            id: 1,
            name: "Sam".into(),
            max_hourly_rate: Some(12.345),
            ..Default::default()
        };
        let payload = StudentFormFields::from_student(&student).to_payload();
        assert_eq!(payload.max_hourly_rate, Some(12.345));

        let tutor: Tutor = serde_json::from_value(json!({
            "id": 2,
            "name": "Ada",
            "hourly_rate": 37.125,
            "latitude": 48.137154,
            "longitude": 11.576124
        }))
        .unwrap();
        let payload = TutorFormFields::from_tutor(&tutor).to_payload();
        assert_eq!(payload.hourly_rate, Some(37.125));
        assert_eq!(payload.latitude, Some(48.137154));
        assert_eq!(payload.longitude, Some(11.576124));
    }
}

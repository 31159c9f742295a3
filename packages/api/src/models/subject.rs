//! # Subjects and subject lists
//!
//! A tutor's `subjects` and a student's `preferred_subjects` have no single canonical
//! shape. Depending on the endpoint the backend sends:
//!
//! - a list of names: `["Math", "Physics"]`
//! - a list of subject objects: `[{"id": 1, "name": "Math"}]`
//! - a free-text, comma-separated string: `"Math, Physics"`
//!
//! [`Subjects`] accepts all of them and normalizes at read time through
//! [`Subjects::names`] and [`Subjects::display`], which render every shape the same way.

use serde::{Deserialize, Serialize};

/// A subject as listed by `GET /subjects`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    pub id: i64,
    pub name: String,
}

/// One entry of a subject list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SubjectRef {
    Name(String),
    Id(i64),
    Object {
        #[serde(default)]
        id: Option<i64>,
        #[serde(default)]
        name: Option<String>,
    },
}

impl SubjectRef {
    /// Display name of the entry; `None` for objects without a usable name.
    pub fn name(&self) -> Option<String> {
        match self {
            Self::Name(name) => Some(name.trim().to_string()),
            Self::Id(id) => Some(id.to_string()),
            Self::Object { name, .. } => name.as_ref().map(|n| n.trim().to_string()),
        }
        .filter(|n| !n.is_empty())
    }
}

/// A subject list in whatever shape the backend sent it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Subjects {
    List(Vec<SubjectRef>),
    Text(String),
}

impl Default for Subjects {
    fn default() -> Self {
        Self::List(Vec::new())
    }
}

impl Subjects {
    /// Subject names, trimmed, with empty entries dropped.
    pub fn names(&self) -> Vec<String> {
        match self {
            Self::List(items) => items.iter().filter_map(SubjectRef::name).collect(),
            Self::Text(text) => split_subjects(text),
        }
    }

    /// Comma-joined names, the same for every shape.
    pub fn display(&self) -> String {
        self.names().join(", ")
    }

    pub fn is_empty(&self) -> bool {
        self.names().is_empty()
    }
}

/// Split comma-separated subject text into trimmed, non-empty names.
pub fn split_subjects(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_shapes_render_identically() {
        let names: Subjects = serde_json::from_value(json!(["Math", "Physics"])).unwrap();
        let objects: Subjects =
            serde_json::from_value(json!([{"id": 1, "name": "Math"}, {"name": "Physics"}]))
                .unwrap();
        assert_eq!(names.display(), "Math, Physics");
        assert_eq!(objects.display(), names.display());
        assert_eq!(objects.names(), vec!["Math", "Physics"]);
    }

    #[test]
    fn test_text_shape() {
        let text: Subjects = serde_json::from_value(json!(" Math,  Physics ,")).unwrap();
        assert_eq!(text, Subjects::Text(" Math,  Physics ,".into()));
        assert_eq!(text.names(), vec!["Math", "Physics"]);
        assert_eq!(text.display(), "Math, Physics");

        let list: Subjects = serde_json::from_value(json!(["Math", "Physics"])).unwrap();
        let packed = Subjects::Text("Math,Physics".into());
        assert_eq!(packed.display(), list.display());
    }

    #[test]
    fn test_nameless_objects_are_dropped() {
        let subjects: Subjects =
            serde_json::from_value(json!([{"id": 3}, {"name": " "}, "Chemistry"])).unwrap();
        assert_eq!(subjects.display(), "Chemistry");
    }

    #[test]
    fn test_numeric_ids() {
        let subjects: Subjects = serde_json::from_value(json!([1, 2])).unwrap();
        assert_eq!(subjects.names(), vec!["1", "2"]);
    }

    #[test]
    fn test_empty() {
        assert!(Subjects::default().is_empty());
        assert!(Subjects::Text("  , ".into()).is_empty());
    }
}

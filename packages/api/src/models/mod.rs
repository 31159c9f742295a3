//! Record types exchanged with the backend.
//!
//! Records are deserialized leniently: optional fields may be missing or `null`, and
//! the subject fields accept every shape the backend has been seen to send.

mod search;
mod student;
mod subject;
mod tutor;

pub use search::SearchFilters;
pub use student::{Student, StudentPayload};
pub use subject::{split_subjects, Subject, SubjectRef, Subjects};
pub use tutor::{ChatReply, Review, TeachingMode, Tutor, TutorPayload};

use serde::{Deserialize, Deserializer};

/// Treat an explicit `null` like a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

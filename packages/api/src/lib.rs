//! # API crate: typed access to the TutorFinder backend
//!
//! This crate is the data-access layer of the TutorFinder front end. Every screen in
//! the `ui` crate talks to the backend exclusively through the [`ApiClient`] defined
//! here, so the quirks of the backend (JSON-or-text bodies, inconsistent list
//! envelopes, mixed subject shapes) are absorbed in one place.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | The HTTP wrapper and one accessor method per backend operation |
//! | [`config`] | `tutorfinder.toml` client configuration (API base URL, dashboard defaults) |
//! | [`envelope`] | "Coerce to list" adapters for the different envelope shapes the backend returns |
//! | [`error`] | [`ApiError`], the uniform error every accessor fails with |
//! | [`models`] | Record types (`Tutor`, `Student`, `Review`, `Subject`) and write payloads |
//!
//! ## Accessors
//!
//! - **Lookups**: `list_subjects`, `list_cities`, `list_students`
//! - **Tutors**: `search_tutors`, `get_tutor`, `similar_tutors`
//! - **Recommendations**: `recommendations`, `chat`
//! - **Admin writes**: `create_tutor`, `update_tutor`, `delete_tutor`,
//!   `create_student`, `update_student`, `delete_student`

pub mod client;
pub mod config;
pub mod envelope;
pub mod error;
pub mod models;

pub use client::ApiClient;
pub use config::ClientConfig;
pub use error::{ApiError, Result};
pub use models::{
    split_subjects, ChatReply, Review, SearchFilters, Student, StudentPayload, Subject,
    SubjectRef, Subjects, TeachingMode, Tutor, TutorPayload,
};

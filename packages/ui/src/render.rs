//! # View models
//!
//! Pure mappings from backend records to the text the components display. Keeping
//! them free of Dioxus makes the display rules testable on their own:
//!
//! - subjects are comma-joined whatever shape they arrived in,
//! - a missing (or zero) rating shows as `N/A`, a missing review count as `0`,
//! - stars round to the nearest half,
//! - distance, explanation and teaching mode only appear when present.

use api::{Review, Student, Subjects, Tutor};
use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Shown in the detail view when a tutor has no reviews.
pub const NO_REVIEWS: &str = "No reviews yet.";

const NOT_AVAILABLE: &str = "N/A";

/// Full and half stars for a rating between 0 and 5.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StarCounts {
    pub full: u8,
    pub half: bool,
}

/// Round a rating to the nearest half star. Out-of-range values are clamped.
pub fn star_counts(rating: f64) -> StarCounts {
    let rating = if rating.is_finite() {
        rating.clamp(0.0, 5.0)
    } else {
        0.0
    };
    let rounded = (rating * 2.0).round() / 2.0;
    let full = rounded.floor();
    StarCounts {
        full: full as u8,
        half: rounded - full >= 0.5,
    }
}

/// Up to two decimals, without trailing zeros: `40.0` → `40`, `4.25` → `4.25`.
pub fn format_decimal(value: f64) -> String {
    let text = format!("{value:.2}");
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

pub fn rating_label(rating: Option<f64>) -> String {
    match rating {
        Some(r) if r.is_finite() && r > 0.0 => format_decimal(r),
        _ => NOT_AVAILABLE.to_string(),
    }
}

pub fn price_label(rate: Option<f64>) -> String {
    match rate {
        Some(r) if r.is_finite() => format!("${}", format_decimal(r)),
        _ => NOT_AVAILABLE.to_string(),
    }
}

pub fn distance_label(distance_km: Option<f64>) -> Option<String> {
    distance_km
        .filter(|d| d.is_finite())
        .map(|d| format!("{} km away", format_decimal(d)))
}

pub fn subjects_text(subjects: &Subjects) -> String {
    subjects.display()
}

/// Human-readable review timestamp; unparseable input is shown as sent.
pub fn format_timestamp(raw: &str) -> String {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%Y-%m-%d %H:%M").to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format("%Y-%m-%d %H:%M").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%Y-%m-%d").to_string();
    }
    raw.to_string()
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Everything a tutor card shows.
#[derive(Clone, Debug, PartialEq)]
pub struct TutorCardModel {
    pub id: i64,
    pub name: String,
    pub avatar_url: String,
    pub subjects: String,
    pub rating_value: Option<f64>,
    pub rating: String,
    pub reviews: u32,
    pub distance: Option<String>,
    pub explanation: Option<String>,
    pub price: String,
    pub city: String,
}

impl TutorCardModel {
    pub fn from_tutor(tutor: &Tutor) -> Self {
        Self {
            id: tutor.id,
            name: tutor.name.clone(),
            avatar_url: tutor.avatar_url(),
            subjects: subjects_text(&tutor.subjects),
            rating_value: tutor.overall_rating,
            rating: rating_label(tutor.overall_rating),
            reviews: tutor.number_of_reviews.unwrap_or(0),
            distance: distance_label(tutor.distance_km),
            explanation: non_blank(tutor.explanation.as_deref()),
            price: price_label(tutor.hourly_rate),
            city: tutor.city.clone().unwrap_or_default(),
        }
    }
}

/// One review line in the detail view.
#[derive(Clone, Debug, PartialEq)]
pub struct ReviewModel {
    pub when: String,
    pub rating: String,
    pub comment: String,
}

impl ReviewModel {
    pub fn from_review(review: &Review) -> Self {
        Self {
            when: review
                .created_at
                .as_deref()
                .map(format_timestamp)
                .unwrap_or_default(),
            rating: rating_label(review.rating),
            comment: review.comment.clone().unwrap_or_default(),
        }
    }
}

/// Everything the tutor detail view shows.
#[derive(Clone, Debug, PartialEq)]
pub struct TutorDetailModel {
    pub name: String,
    /// Teaching-mode badge; `None` when the mode is unset.
    pub mode: Option<&'static str>,
    pub subjects: String,
    pub rate: String,
    pub rating_value: Option<f64>,
    pub rating: String,
    pub reviews_count: u32,
    pub bio: String,
    pub city: String,
    /// In the order the backend sent them.
    pub reviews: Vec<ReviewModel>,
}

impl TutorDetailModel {
    pub fn from_tutor(tutor: &Tutor) -> Self {
        let reviews = tutor
            .reviews
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(ReviewModel::from_review)
            .collect();
        Self {
            name: tutor.name.clone(),
            mode: tutor
                .teaching_mode
                .is_set()
                .then(|| tutor.teaching_mode.label()),
            subjects: subjects_text(&tutor.subjects),
            rate: format!("{} / hr", price_label(tutor.hourly_rate)),
            rating_value: tutor.overall_rating,
            rating: rating_label(tutor.overall_rating),
            reviews_count: tutor.number_of_reviews.unwrap_or(0),
            bio: tutor.bio.clone().unwrap_or_default(),
            city: tutor.city.clone().unwrap_or_default(),
            reviews,
        }
    }
}

/// Secondary line of a tutor in the admin list: subjects, then the rate.
pub fn tutor_admin_line(tutor: &Tutor) -> String {
    format!(
        "{} — {}",
        subjects_text(&tutor.subjects),
        price_label(tutor.hourly_rate)
    )
}

pub fn preferences_text(preferences: Option<&Subjects>) -> String {
    preferences.map(Subjects::display).unwrap_or_default()
}

/// Secondary line of a student in the admin list: preferences, then the city.
pub fn student_admin_line(student: &Student) -> String {
    let prefs = preferences_text(student.preferred_subjects.as_ref());
    let city = student.city.as_deref().unwrap_or_default();
    match (prefs.is_empty(), city.is_empty()) {
        (false, false) => format!("{prefs} — {city}"),
        (false, true) => prefs,
        (true, _) => city.to_string(),
    }
}

/// Entry of the student picker: name and city, or just the name without a city.
pub fn student_option_label(student: &Student) -> String {
    match non_blank(student.city.as_deref()) {
        Some(city) => format!("{} — {city}", student.name),
        None => student.name.clone(),
    }
}

/// Heading above a result list.
pub fn results_heading(loading: bool, count: usize) -> String {
    match (loading, count) {
        (true, _) => "Searching...".to_string(),
        (false, 1) => "1 tutor".to_string(),
        (false, n) => format!("{n} tutors"),
    }
}

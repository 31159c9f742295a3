use api::Tutor;
use dioxus::prelude::*;

use crate::render::{TutorDetailModel, NO_REVIEWS};
use crate::StarRating;

/// Full profile of one tutor: header, bio and reviews.
#[component]
pub fn TutorDetailCard(tutor: Tutor) -> Element {
    let detail = TutorDetailModel::from_tutor(&tutor);
    let avatar = tutor.avatar_url();

    rsx! {
        div {
            class: "tutor-detail",
            div {
                class: "tutor-card-head",
                img {
                    class: "avatar avatar-lg",
                    src: avatar,
                    alt: detail.name.clone(),
                    width: "88",
                    height: "88",
                }
                div {
                    h2 { class: "tutor-name", "{detail.name}" }
                    if let Some(mode) = detail.mode {
                        span { class: "badge", "{mode}" }
                    }
                    p { class: "tutor-subjects", "{detail.subjects}" }
                    p { class: "tutor-price", "{detail.rate}" }
                    div {
                        class: "tutor-rating",
                        if let Some(r) = detail.rating_value {
                            StarRating { rating: r }
                        }
                        span { class: "rating-value", "{detail.rating}" }
                        span { class: "muted", "({detail.reviews_count} reviews)" }
                    }
                    if !detail.city.is_empty() {
                        p { class: "muted", "{detail.city}" }
                    }
                }
            }
            if !detail.bio.is_empty() {
                p { class: "tutor-bio", "{detail.bio}" }
            }
            h3 { class: "section-title", "Reviews" }
            if detail.reviews.is_empty() {
                p { class: "muted", "{NO_REVIEWS}" }
            } else {
                ul {
                    class: "review-list",
                    for (i, review) in detail.reviews.iter().enumerate() {
                        li {
                            key: "{i}",
                            class: "review",
                            div {
                                class: "review-head",
                                span { class: "rating-value", "{review.rating}" }
                                span { class: "muted", "{review.when}" }
                            }
                            if !review.comment.is_empty() {
                                p { "{review.comment}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

use api::Tutor;
use dioxus::prelude::*;

use crate::icons::{FaLocationDot, FaLightbulb};
use crate::render::TutorCardModel;
use crate::{Icon, StarRating};

/// Summary card used in search results, recommendations and similar tutors.
#[component]
pub fn TutorCard(tutor: Tutor, on_view: EventHandler<i64>) -> Element {
    let card = TutorCardModel::from_tutor(&tutor);
    let id = card.id;

    rsx! {
        article {
            class: "tutor-card",
            div {
                class: "tutor-card-head",
                img {
                    class: "avatar",
                    src: card.avatar_url.clone(),
                    alt: card.name.clone(),
                    width: "56",
                    height: "56",
                }
                div {
                    h3 { class: "tutor-name", "{card.name}" }
                    p { class: "tutor-subjects", "{card.subjects}" }
                }
            }
            div {
                class: "tutor-rating",
                if let Some(r) = card.rating_value {
                    StarRating { rating: r }
                }
                span { class: "rating-value", "{card.rating}" }
                span { class: "muted", "({card.reviews} reviews)" }
            }
            if let Some(distance) = &card.distance {
                p {
                    class: "tutor-distance muted",
                    Icon { icon: FaLocationDot, width: 12, height: 12 }
                    " {distance}"
                }
            }
            if let Some(explanation) = &card.explanation {
                p {
                    class: "tutor-explanation",
                    Icon { icon: FaLightbulb, width: 12, height: 12 }
                    " {explanation}"
                }
            }
            div {
                class: "tutor-card-foot",
                span { class: "tutor-price", "{card.price}/hr" }
                span { class: "muted", "{card.city}" }
                button {
                    class: "secondary",
                    onclick: move |_| on_view.call(id),
                    "View profile"
                }
            }
        }
    }
}

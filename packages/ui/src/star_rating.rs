use dioxus::prelude::*;

use crate::icons::{FaStar, FaStarHalfStroke};
use crate::render::star_counts;
use crate::Icon;

/// Up to five stars for a rating between 0 and 5, rounded to the nearest half.
#[component]
pub fn StarRating(rating: f64) -> Element {
    let stars = star_counts(rating);

    rsx! {
        span {
            class: "stars",
            title: "{rating}",
            for i in 0..stars.full {
                Icon { key: "{i}", icon: FaStar, width: 14, height: 14 }
            }
            if stars.half {
                Icon { icon: FaStarHalfStroke, width: 14, height: 14 }
            }
        }
    }
}

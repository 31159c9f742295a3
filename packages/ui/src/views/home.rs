use dioxus::prelude::*;

use crate::icons::{FaCalendarCheck, FaCircleCheck, FaWandMagicSparkles};
use crate::Icon;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Landing page with entry points into search and the student dashboard.
#[component]
pub fn HomeView(on_search: EventHandler<()>, on_dashboard: EventHandler<()>) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "view-page",
            section {
                class: "hero",
                h1 { class: "hero-title", "Find the perfect tutor, faster." }
                p {
                    class: "hero-lead muted",
                    "Browse verified tutors, get personalized recommendations, and book lessons that fit your budget and schedule."
                }
                div {
                    class: "button-row",
                    button { class: "primary large", onclick: move |_| on_search.call(()), "Search Tutors" }
                    button { class: "secondary large", onclick: move |_| on_dashboard.call(()), "Student Dashboard" }
                }
            }

            section {
                class: "features",
                div {
                    class: "feature-card",
                    Icon { icon: FaWandMagicSparkles, width: 20, height: 20 }
                    h3 { "Smart Recommendations" }
                    p { class: "muted", "Get AI-enhanced suggestions tailored to your subjects, budget, and location." }
                }
                div {
                    class: "feature-card",
                    Icon { icon: FaCircleCheck, width: 20, height: 20 }
                    h3 { "Verified Tutors" }
                    p { class: "muted", "Profiles with ratings and reviews help you pick the best match." }
                }
                div {
                    class: "feature-card",
                    Icon { icon: FaCalendarCheck, width: 20, height: 20 }
                    h3 { "Easy Scheduling" }
                    p { class: "muted", "Contact tutors and request lessons directly from the platform." }
                }
            }

            section {
                class: "cta",
                h2 { "Ready to get started?" }
                p { class: "muted", "Create a student profile, explore tutors, and compare recommendations." }
                button { class: "primary large", onclick: move |_| on_dashboard.call(()), "Go to Student Dashboard" }
            }
        }
    }
}

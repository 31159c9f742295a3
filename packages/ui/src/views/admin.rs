use dioxus::prelude::*;

use crate::views::{StudentManager, TutorManager};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

#[derive(Clone, Copy, PartialEq)]
enum Section {
    Tutors,
    Students,
}

/// Admin area with one tab per managed record type.
#[component]
pub fn AdminView() -> Element {
    let mut section = use_signal(|| Section::Tutors);
    let tab_class = move |tab: Section| {
        if section() == tab {
            "tab active"
        } else {
            "tab"
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "view-page",
            div {
                class: "tabs",
                button {
                    class: tab_class(Section::Tutors),
                    onclick: move |_| section.set(Section::Tutors),
                    "Manage Tutors"
                }
                button {
                    class: tab_class(Section::Students),
                    onclick: move |_| section.set(Section::Students),
                    "Manage Students"
                }
            }
            {match section() {
                Section::Tutors => rsx! { TutorManager {} },
                Section::Students => rsx! { StudentManager {} },
            }}
        }
    }
}

use dioxus::prelude::*;

use ui::views::HomeView;

use crate::Route;

#[component]
pub fn Home() -> Element {
    let nav = use_navigator();

    rsx! {
        HomeView {
            on_search: move |_| {
                nav.push(Route::Search {});
            },
            on_dashboard: move |_| {
                nav.push(Route::StudentDashboard {});
            },
        }
    }
}

use dioxus::prelude::*;

use ui::views::StudentDashboardView;

#[component]
pub fn StudentDashboard() -> Element {
    rsx! {
        StudentDashboardView {}
    }
}

use dioxus::prelude::*;

use ui::Navbar;

use crate::Route;

/// Navbar, the routed page and the footer.
#[component]
pub fn Shell() -> Element {
    let nav = use_navigator();

    rsx! {
        Navbar {
            brand: "TutorFinder",
            on_brand: move |_| {
                nav.push(Route::Home {});
            },
            Link { to: Route::Search {}, active_class: "active", "Search" }
            Link { to: Route::StudentDashboard {}, active_class: "active", "Student Dashboard" }
            Link { to: Route::Admin {}, active_class: "active", "Admin" }
        }

        main {
            class: "app-main",
            Outlet::<Route> {}
        }

        footer {
            class: "app-footer",
            "Use the student dashboard to enable AI explanations."
        }
    }
}

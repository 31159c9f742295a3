use dioxus::prelude::*;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Top bar with the product name on the left and the platform's links on the right.
#[component]
pub fn Navbar(brand: String, on_brand: EventHandler<()>, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        nav {
            class: "navbar",
            button {
                class: "navbar-brand",
                onclick: move |_| on_brand.call(()),
                "{brand}"
            }
            div {
                class: "navbar-links",
                {children}
            }
        }
    }
}

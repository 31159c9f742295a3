use dioxus::prelude::*;

use ui::views::SearchView;

#[component]
pub fn Search() -> Element {
    rsx! {
        SearchView {}
    }
}

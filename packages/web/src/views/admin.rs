use dioxus::prelude::*;

use ui::views::AdminView;

#[component]
pub fn Admin() -> Element {
    rsx! {
        AdminView {}
    }
}

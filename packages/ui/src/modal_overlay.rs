use dioxus::prelude::*;

/// A full-screen overlay that centers its children in a modal card.
/// Clicking outside the card triggers `on_close`.
#[component]
pub fn ModalOverlay(
    on_close: EventHandler<()>,
    /// Use the wide card (tutor details) instead of the form-sized one.
    #[props(default)]
    wide: bool,
    children: Element,
) -> Element {
    let card_class = if wide { "modal-card modal-wide" } else { "modal-card" };

    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| on_close.call(()),
            div {
                class: card_class,
                role: "dialog",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                button {
                    class: "modal-close",
                    aria_label: "Close",
                    onclick: move |_| on_close.call(()),
                    "×"
                }
                {children}
            }
        }
    }
}

use dioxus::prelude::*;

/// Labelled single-line input reporting every edit.
#[component]
pub(crate) fn FormField(
    label: &'static str,
    value: String,
    on_input: EventHandler<String>,
    #[props(default = "text")]
    kind: &'static str,
    step: Option<&'static str>,
    #[props(default)]
    required: bool,
) -> Element {
    rsx! {
        label { class: "field",
            span { "{label}" }
            input {
                r#type: kind,
                step,
                required,
                value,
                oninput: move |evt| on_input.call(evt.value()),
            }
        }
    }
}

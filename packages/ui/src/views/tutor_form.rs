use api::{TeachingMode, Tutor};
use dioxus::prelude::*;

use super::form_field::FormField;
use crate::dialog::alert;
use crate::forms::TutorFormFields;
use crate::use_api;

/// Create or edit a tutor. `tutor` is `None` for a new record.
#[component]
pub fn TutorForm(tutor: Option<Tutor>, on_cancel: EventHandler<()>, on_saved: EventHandler<()>) -> Element {
    let client = use_api();
    let id = tutor.as_ref().map(|t| t.id);
    let mut fields = use_signal(|| {
        tutor
            .as_ref()
            .map(TutorFormFields::from_tutor)
            .unwrap_or_default()
    });
    let mut saving = use_signal(|| false);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let payload = fields.read().to_payload();
        let client = client.clone();
        spawn(async move {
            saving.set(true);
            let outcome = match id {
                Some(id) => client.update_tutor(id, &payload).await,
                None => client.create_tutor(&payload).await,
            };
            saving.set(false);
            match outcome {
                Ok(saved) => {
                    tracing::info!("saved tutor {}", saved.id);
                    on_saved.call(());
                }
                Err(e) => alert(&format!("Save failed: {e}")),
            }
        });
    };

    let title = if id.is_some() { "Edit Tutor" } else { "Add Tutor" };
    let f = fields();
    let modes = TeachingMode::ALL.map(|m| (m.as_str(), m.label()));

    rsx! {
        div {
            class: "form-card",
            h3 { class: "section-title", "{title}" }
            form {
                onsubmit: submit,
                div {
                    class: "form-row",
                    FormField { label: "Name", value: f.name, required: true, on_input: move |v| fields.write().name = v }
                    FormField { label: "Email", value: f.email, kind: "email", required: true, on_input: move |v| fields.write().email = v }
                }
                div {
                    class: "form-row",
                    FormField { label: "Phone", value: f.phone, on_input: move |v| fields.write().phone = v }
                    FormField { label: "City", value: f.city, on_input: move |v| fields.write().city = v }
                    FormField {
                        label: "Hourly Rate",
                        value: f.hourly_rate,
                        kind: "number",
                        step: "0.01",
                        on_input: move |v| fields.write().hourly_rate = v,
                    }
                }
                FormField { label: "Address", value: f.address, on_input: move |v| fields.write().address = v }
                div {
                    class: "form-row",
                    FormField { label: "Latitude", value: f.latitude, kind: "number", step: "any", on_input: move |v| fields.write().latitude = v }
                    FormField { label: "Longitude", value: f.longitude, kind: "number", step: "any", on_input: move |v| fields.write().longitude = v }
                }
                FormField {
                    label: "Subjects (comma separated)",
                    value: f.subjects,
                    on_input: move |v| fields.write().subjects = v,
                }
                label { class: "field",
                    span { "Teaching Mode" }
                    select {
                        value: f.teaching_mode,
                        onchange: move |evt| fields.write().teaching_mode = evt.value(),
                        option { value: "", "Any" }
                        for (value, label) in modes {
                            option { key: "{value}", value: value, "{label}" }
                        }
                    }
                }
                label { class: "field",
                    span { "Bio" }
                    textarea {
                        rows: "4",
                        value: f.bio,
                        oninput: move |evt| fields.write().bio = evt.value(),
                    }
                }
                div {
                    class: "button-row",
                    button {
                        class: "primary",
                        r#type: "submit",
                        disabled: saving(),
                        if saving() { "Saving..." } else { "Save" }
                    }
                    button {
                        class: "secondary",
                        r#type: "button",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                }
            }
        }
    }
}

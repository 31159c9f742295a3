use api::Student;
use dioxus::prelude::*;

use super::form_field::FormField;
use crate::dialog::alert;
use crate::forms::StudentFormFields;
use crate::use_api;

/// Create or edit a student. `student` is `None` for a new record.
#[component]
pub fn StudentForm(student: Option<Student>, on_cancel: EventHandler<()>, on_saved: EventHandler<()>) -> Element {
    let client = use_api();
    let id = student.as_ref().map(|s| s.id);
    let mut fields = use_signal(|| {
        student
            .as_ref()
            .map(StudentFormFields::from_student)
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
                Some(id) => client.update_student(id, &payload).await,
                None => client.create_student(&payload).await,
            };
            saving.set(false);
            match outcome {
                Ok(saved) => {
                    tracing::info!("saved student {}", saved.id);
                    on_saved.call(());
                }
                Err(e) => alert(&format!("Save failed: {e}")),
            }
        });
    };

    let title = if id.is_some() { "Edit Student" } else { "Add Student" };
    let f = fields();

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
                    FormField { label: "City", value: f.city, on_input: move |v| fields.write().city = v }
                    FormField { label: "Address", value: f.address, on_input: move |v| fields.write().address = v }
                }
                FormField {
                    label: "Preferred Subjects (comma separated)",
                    value: f.preferred_subjects,
                    on_input: move |v| fields.write().preferred_subjects = v,
                }
                FormField {
                    label: "Max Hourly Rate",
                    value: f.max_hourly_rate,
                    kind: "number",
                    step: "0.01",
                    on_input: move |v| fields.write().max_hourly_rate = v,
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

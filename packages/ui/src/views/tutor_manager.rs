use api::{SearchFilters, Tutor};
use dioxus::prelude::*;

use crate::dialog::{alert, confirm};
use crate::forms::Editing;
use crate::render::tutor_admin_line;
use crate::request_state::{use_stale_guard, LoadState};
use crate::use_api;
use crate::views::TutorForm;

/// Admin list of tutors with add, edit and delete.
///
/// The list is only refreshed by reloading it after a successful write.
#[component]
pub fn TutorManager() -> Element {
    let client = use_api();
    let mut tutors = use_signal(Vec::<Tutor>::new);
    let mut state = use_signal(LoadState::default);
    let mut reload = use_signal(|| 0u32);
    let mut editing = use_signal(|| Option::<Editing<Tutor>>::None);
    let mut guard = use_stale_guard();

    let list_client = client.clone();
    use_effect(move || {
        let _ = reload();
        let ticket = guard.begin();
        let client = list_client.clone();
        state.set(LoadState::Loading);

        spawn(async move {
            let outcome = client.search_tutors(&SearchFilters::default()).await;
            if !guard.is_current(ticket) {
                return;
            }
            match outcome {
                Ok(list) => {
                    tutors.set(list);
                    state.set(LoadState::Loaded);
                }
                Err(e) => {
                    tracing::warn!("tutor list: {e}");
                    tutors.set(Vec::new());
                    state.set(LoadState::Failed(e.to_string()));
                }
            }
        });
    });

    // Editing needs the full record (contact details, coordinates).
    let edit_client = client.clone();
    // Only the most recently clicked Edit may open the form.
    let mut edit_guard = use_stale_guard();
    let on_edit = use_callback(move |id: i64| {
        let ticket = edit_guard.begin();
        let client = edit_client.clone();
        spawn(async move {
            let outcome = client.get_tutor(id).await;
            if !edit_guard.is_current(ticket) {
                tracing::debug!("dropping stale details for tutor {id}");
                return;
            }
            match outcome {
                Ok(full) => editing.set(Some(Editing::Existing(full))),
                Err(e) => alert(&format!("Failed to load tutor details: {e}")),
            }
        });
    });

    let on_delete = use_callback(move |id: i64| {
        if !confirm("Delete this tutor? This action cannot be undone.") {
            return;
        }
        let client = client.clone();
        spawn(async move {
            match client.delete_tutor(id).await {
                Ok(()) => reload += 1,
                Err(e) => alert(&format!("Delete failed: {e}")),
            }
        });
    });

    let form_key = match editing() {
        Some(Editing::Existing(ref t)) => t.id.to_string(),
        _ => "new".to_string(),
    };

    rsx! {
        div {
            class: "manager",
            div {
                class: "manager-head",
                h2 { class: "section-title", "Tutors" }
                button {
                    class: "success",
                    onclick: move |_| editing.set(Some(Editing::New)),
                    "Add Tutor"
                }
            }

            if let Some(target) = editing() {
                TutorForm {
                    key: "{form_key}",
                    tutor: target.record().cloned(),
                    on_cancel: move |_| editing.set(None),
                    on_saved: move |_| {
                        editing.set(None);
                        reload += 1;
                    },
                }
            } else if state.read().is_loading() {
                p { class: "muted", "Loading..." }
            } else {
                ul {
                    class: "record-list",
                    for t in tutors() {
                        li {
                            key: "{t.id}",
                            class: "record-row",
                            div {
                                strong { "{t.name}" }
                                div { class: "muted small", {tutor_admin_line(&t)} }
                            }
                            div {
                                class: "button-row",
                                button {
                                    class: "secondary small",
                                    onclick: move |_| on_edit.call(t.id),
                                    "Edit"
                                }
                                button {
                                    class: "danger small",
                                    onclick: move |_| on_delete.call(t.id),
                                    "Delete"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

use api::Student;
use dioxus::prelude::*;

use crate::dialog::{alert, confirm};
use crate::forms::Editing;
use crate::render::student_admin_line;
use crate::request_state::{use_stale_guard, LoadState};
use crate::use_api;
use crate::views::StudentForm;

/// Admin list of students with add, edit and delete.
#[component]
pub fn StudentManager() -> Element {
    let client = use_api();
    let mut students = use_signal(Vec::<Student>::new);
    let mut state = use_signal(LoadState::default);
    let mut reload = use_signal(|| 0u32);
    let mut editing = use_signal(|| Option::<Editing<Student>>::None);
    let mut guard = use_stale_guard();

    let list_client = client.clone();
    use_effect(move || {
        let _ = reload();
        let ticket = guard.begin();
        let client = list_client.clone();
        state.set(LoadState::Loading);

        spawn(async move {
            let outcome = client.list_students().await;
            if !guard.is_current(ticket) {
                return;
            }
            match outcome {
                Ok(list) => {
                    students.set(list);
                    state.set(LoadState::Loaded);
                }
                Err(e) => {
                    tracing::warn!("student list: {e}");
                    students.set(Vec::new());
                    state.set(LoadState::Failed(e.to_string()));
                }
            }
        });
    });

    let on_delete = use_callback(move |id: i64| {
        if !confirm("Delete this student?") {
            return;
        }
        let client = client.clone();
        spawn(async move {
            match client.delete_student(id).await {
                Ok(()) => reload += 1,
                Err(e) => alert(&format!("Delete failed: {e}")),
            }
        });
    });

    let form_key = match editing() {
        Some(Editing::Existing(ref s)) => s.id.to_string(),
        _ => "new".to_string(),
    };

    rsx! {
        div {
            class: "manager",
            div {
                class: "manager-head",
                h2 { class: "section-title", "Students" }
                button {
                    class: "success",
                    onclick: move |_| editing.set(Some(Editing::New)),
                    "Add Student"
                }
            }

            if let Some(target) = editing() {
                StudentForm {
                    key: "{form_key}",
                    student: target.record().cloned(),
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
                    for s in students() {
                        li {
                            key: "{s.id}",
                            class: "record-row",
                            div {
                                strong { "{s.name}" }
                                div { class: "muted small", {student_admin_line(&s)} }
                            }
                            div {
                                class: "button-row",
                                button {
                                    class: "secondary small",
                                    onclick: {
                                        let record = s.clone();
                                        move |_| editing.set(Some(Editing::Existing(record.clone())))
                                    },
                                    "Edit"
                                }
                                button {
                                    class: "danger small",
                                    onclick: move |_| on_delete.call(s.id),
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

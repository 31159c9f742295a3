use api::{Student, Tutor};
use dioxus::prelude::*;

use crate::render::student_option_label;
use crate::request_state::{use_stale_guard, LoadState};
use crate::views::RecommenderChat;
use crate::{use_api, use_client_config, TutorCard, TutorModal};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Recommendations for one student, with a picker and the AI explanation toggle.
#[component]
pub fn StudentDashboardView() -> Element {
    let client = use_api();
    let config = use_client_config();
    let mut students = use_signal(Vec::<Student>::new);
    let mut selected = use_signal(|| Option::<i64>::None);
    let mut use_ai = use_signal(|| config.dashboard.use_ai_explanations);
    let mut recommendations = use_signal(Vec::<Tutor>::new);
    let mut state = use_signal(LoadState::default);
    let mut viewing = use_signal(|| Option::<i64>::None);
    let mut guard = use_stale_guard();

    // Load students on mount and preselect the first one.
    let students_client = client.clone();
    let _students = use_resource(move || {
        let client = students_client.clone();
        async move {
            match client.list_students().await {
                Ok(list) => {
                    if selected.peek().is_none() {
                        selected.set(list.first().map(|s| s.id));
                    }
                    students.set(list);
                }
                Err(e) => tracing::warn!("students: {e}"),
            }
        }
    });

    // Refetch whenever the student or the toggle changes; the newest request wins.
    use_effect(move || {
        let ai = use_ai();
        let Some(student_id) = selected() else {
            return;
        };
        let ticket = guard.begin();
        let client = client.clone();
        state.set(LoadState::Loading);

        spawn(async move {
            let outcome = client.recommendations(student_id, ai).await;
            if !guard.is_current(ticket) {
                tracing::debug!("dropping stale recommendations for student {student_id}");
                return;
            }
            match outcome {
                Ok(list) => {
                    recommendations.set(list);
                    state.set(LoadState::Loaded);
                }
                Err(e) => {
                    tracing::warn!("recommendations for student {student_id}: {e}");
                    recommendations.set(Vec::new());
                    state.set(LoadState::Failed(e.to_string()));
                }
            }
        });
    });

    let loading = state.read().is_loading();
    let status = if loading {
        "Loading recommendations..."
    } else {
        "Recommendations update automatically"
    };
    let selected_value = selected().map(|id| id.to_string()).unwrap_or_default();
    let options: Vec<(String, String)> = students
        .read()
        .iter()
        .map(|s| (s.id.to_string(), student_option_label(s)))
        .collect();

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "view-page",
            div {
                class: "dashboard-bar",
                label { class: "field",
                    span { "Student" }
                    select {
                        value: selected_value,
                        onchange: move |evt| selected.set(evt.value().parse::<i64>().ok()),
                        for (id, label) in options {
                            option { key: "{id}", value: id.clone(), "{label}" }
                        }
                    }
                }
                label { class: "toggle",
                    input {
                        r#type: "checkbox",
                        checked: use_ai(),
                        onchange: move |_| use_ai.set(!use_ai()),
                    }
                    span { "Use AI explanations" }
                }
                span { class: "muted status", "{status}" }
            }

            if recommendations.read().is_empty() && !loading {
                p { class: "muted", "No recommendations yet." }
            } else {
                div {
                    class: "card-grid",
                    for t in recommendations() {
                        TutorCard {
                            key: "{t.id}",
                            tutor: t,
                            on_view: move |id| viewing.set(Some(id)),
                        }
                    }
                }
            }

            if let Some(student_id) = selected() {
                RecommenderChat {
                    key: "{student_id}",
                    student_id,
                    use_ai: use_ai(),
                    on_view: move |id| viewing.set(Some(id)),
                }
            }
        }

        if let Some(id) = viewing() {
            TutorModal {
                key: "{id}",
                tutor_id: id,
                on_close: move |_| viewing.set(None),
            }
        }
    }
}

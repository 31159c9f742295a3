use api::{SearchFilters, Subject, TeachingMode, Tutor};
use dioxus::prelude::*;

use crate::render::results_heading;
use crate::request_state::{use_stale_guard, LoadState};
use crate::{use_api, TutorCard, TutorModal};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Tutor search: a filter form on the left and matching tutors on the right.
///
/// Edits to the form are staged in a draft and only sent when the form is
/// submitted. Every submission supersedes any search still in flight.
#[component]
pub fn SearchView() -> Element {
    let client = use_api();
    let mut subjects = use_signal(Vec::<Subject>::new);
    let mut cities = use_signal(Vec::<String>::new);
    let mut draft = use_signal(SearchFilters::default);
    let mut applied = use_signal(SearchFilters::default);
    let mut results = use_signal(Vec::<Tutor>::new);
    let mut state = use_signal(LoadState::default);
    let mut selected = use_signal(|| Option::<i64>::None);
    let mut guard = use_stale_guard();

    // Filter options; failures just leave the dropdowns with "Any".
    let options_client = client.clone();
    let _options = use_resource(move || {
        let client = options_client.clone();
        async move {
            match client.list_subjects().await {
                Ok(list) => subjects.set(list),
                Err(e) => tracing::warn!("subjects: {e}"),
            }
            match client.list_cities().await {
                Ok(list) => cities.set(list),
                Err(e) => tracing::warn!("cities: {e}"),
            }
        }
    });

    // Runs on mount with no filters and again for every applied submission.
    use_effect(move || {
        let filters = applied();
        let ticket = guard.begin();
        let client = client.clone();
        state.set(LoadState::Loading);

        spawn(async move {
            let outcome = client.search_tutors(&filters).await;
            if !guard.is_current(ticket) {
                tracing::debug!("dropping stale search results");
                return;
            }
            match outcome {
                Ok(list) => {
                    results.set(list);
                    state.set(LoadState::Loaded);
                }
                Err(e) => {
                    tracing::warn!("search: {e}");
                    results.set(Vec::new());
                    state.set(LoadState::Failed(e.to_string()));
                }
            }
        });
    });

    let loading = state.read().is_loading();
    let heading = results_heading(loading, results.read().len());
    let f = draft();
    let modes = TeachingMode::ALL.map(|m| (m.as_str(), m.label()));

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "search-layout",
            aside {
                class: "filter-panel",
                h2 { class: "section-title", "Filters" }
                form {
                    onsubmit: move |evt: FormEvent| {
                        evt.prevent_default();
                        applied.set(draft());
                    },
                    label { class: "field",
                        span { "Subject" }
                        select {
                            value: f.subject.clone(),
                            onchange: move |evt| draft.write().subject = evt.value(),
                            option { value: "", "Any" }
                            for s in subjects() {
                                option { key: "{s.id}", value: s.name.clone(), "{s.name}" }
                            }
                        }
                    }
                    label { class: "field",
                        span { "City" }
                        select {
                            value: f.city.clone(),
                            onchange: move |evt| draft.write().city = evt.value(),
                            option { value: "", "Any" }
                            for c in cities() {
                                option { key: "{c}", value: c.clone(), "{c}" }
                            }
                        }
                    }
                    label { class: "field",
                        span { "Max $/hr" }
                        input {
                            r#type: "number",
                            min: "0",
                            value: f.max_hourly_rate.clone(),
                            oninput: move |evt| draft.write().max_hourly_rate = evt.value(),
                        }
                    }
                    label { class: "field",
                        span { "Min Rating" }
                        input {
                            r#type: "number",
                            step: "0.1",
                            min: "0",
                            max: "5",
                            value: f.min_rating.clone(),
                            oninput: move |evt| draft.write().min_rating = evt.value(),
                        }
                    }
                    label { class: "field",
                        span { "Teaching Mode" }
                        select {
                            value: f.teaching_mode.clone(),
                            onchange: move |evt| draft.write().teaching_mode = evt.value(),
                            option { value: "", "Any" }
                            for (value, label) in modes {
                                option { key: "{value}", value: value, "{label}" }
                            }
                        }
                    }
                    label { class: "field",
                        span { "Sort by" }
                        select {
                            value: f.sort_by.clone(),
                            onchange: move |evt| draft.write().sort_by = evt.value(),
                            for (key, label) in SearchFilters::SORT_KEYS {
                                option { key: "{key}", value: key, "{label}" }
                            }
                        }
                    }
                    button { class: "primary full", r#type: "submit", "Apply" }
                }
            }

            section {
                class: "results",
                h2 { class: "section-title", "{heading}" }
                if results.read().is_empty() && !loading {
                    p { class: "muted", "No tutors found. Try adjusting filters." }
                } else {
                    div {
                        class: "card-grid",
                        for t in results() {
                            TutorCard {
                                key: "{t.id}",
                                tutor: t,
                                on_view: move |id| selected.set(Some(id)),
                            }
                        }
                    }
                }
            }
        }

        if let Some(id) = selected() {
            TutorModal {
                key: "{id}",
                tutor_id: id,
                on_close: move |_| selected.set(None),
            }
        }
    }
}

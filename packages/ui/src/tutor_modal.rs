use api::Tutor;
use dioxus::prelude::*;

use crate::request_state::{use_stale_guard, LoadState};
use crate::{use_api, ModalOverlay, TutorCard, TutorDetailCard};

/// Tutor details in a modal, fetched by id, followed by similar tutors.
///
/// Picking a similar tutor swaps the modal's content; only the most recently
/// requested tutor is ever shown.
///
/// `tutor_id` only seeds the first tutor shown. Callers key the modal by id so
/// that opening a different tutor remounts it.
#[component]
pub fn TutorModal(tutor_id: i64, on_close: EventHandler<()>) -> Element {
    let client = use_api();
    let mut current = use_signal(|| tutor_id);
    let mut tutor = use_signal(|| Option::<Tutor>::None);
    let mut similar = use_signal(Vec::<Tutor>::new);
    let mut state = use_signal(LoadState::default);
    let mut guard = use_stale_guard();

    use_effect(move || {
        let id = current();
        let ticket = guard.begin();
        let client = client.clone();
        state.set(LoadState::Loading);
        tutor.set(None);
        similar.set(Vec::new());

        spawn(async move {
            let detail = client.get_tutor(id).await;
            if !guard.is_current(ticket) {
                tracing::debug!("dropping stale details for tutor {id}");
                return;
            }
            match detail {
                Ok(t) => {
                    tutor.set(Some(t));
                    state.set(LoadState::Loaded);
                }
                Err(e) => {
                    tracing::warn!("tutor {id}: {e}");
                    state.set(LoadState::Failed(e.to_string()));
                    return;
                }
            }

            match client.similar_tutors(id).await {
                Ok(list) if guard.is_current(ticket) => similar.set(list),
                Ok(_) => {}
                Err(e) => tracing::warn!("similar tutors for {id}: {e}"),
            }
        });
    });

    let on_view = move |id: i64| current.set(id);

    rsx! {
        ModalOverlay {
            on_close: move |_| on_close.call(()),
            wide: true,
            {match (tutor(), state()) {
                (Some(t), _) => rsx! {
                    TutorDetailCard { tutor: t }
                    if !similar.read().is_empty() {
                        h3 { class: "section-title", "Similar tutors" }
                        div {
                            class: "card-grid",
                            for t in similar() {
                                TutorCard { key: "{t.id}", tutor: t, on_view }
                            }
                        }
                    }
                },
                (None, LoadState::Failed(message)) => rsx! {
                    p { class: "error", "Could not load tutor: {message}" }
                },
                _ => rsx! {
                    p { class: "muted", "Loading..." }
                },
            }}
        }
    }
}

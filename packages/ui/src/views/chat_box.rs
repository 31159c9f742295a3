use api::Tutor;
use dioxus::prelude::*;

use crate::dialog::alert;
use crate::{use_api, TutorCard};

/// Free-text questions to the recommender about one student.
///
/// Shows the latest reply and the tutors it suggests.
#[component]
pub fn RecommenderChat(student_id: i64, use_ai: bool, on_view: EventHandler<i64>) -> Element {
    let client = use_api();
    let mut message = use_signal(String::new);
    let mut reply = use_signal(|| Option::<String>::None);
    let mut tutors = use_signal(Vec::<Tutor>::new);
    let mut sending = use_signal(|| false);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let text = message().trim().to_string();
        if text.is_empty() || sending() {
            return;
        }
        let client = client.clone();
        spawn(async move {
            sending.set(true);
            match client.chat(student_id, &text, use_ai).await {
                Ok(answer) => {
                    reply.set(Some(answer.reply));
                    tutors.set(answer.tutors);
                    message.set(String::new());
                }
                Err(e) => alert(&format!("Chat failed: {e}")),
            }
            sending.set(false);
        });
    };

    rsx! {
        section {
            class: "chat-box",
            h2 { class: "section-title", "Ask the recommender" }
            form {
                class: "chat-form",
                onsubmit: submit,
                input {
                    r#type: "text",
                    placeholder: "e.g. cheaper tutors who teach online",
                    value: message(),
                    oninput: move |evt| message.set(evt.value()),
                }
                button {
                    class: "primary",
                    r#type: "submit",
                    disabled: sending(),
                    if sending() { "Sending..." } else { "Ask" }
                }
            }
            if let Some(text) = reply() {
                p { class: "chat-reply", "{text}" }
            }
            if !tutors.read().is_empty() {
                div {
                    class: "card-grid",
                    for t in tutors() {
                        TutorCard { key: "{t.id}", tutor: t, on_view: move |id| on_view.call(id) }
                    }
                }
            }
        }
    }
}

use crate::{
    components::StatePanel,
    config::AppConfig,
    models::FormState,
    services::{image_service, submission_service, FieldError, SubmitOutcome},
};
use dioxus::prelude::*;

const LABEL_STYLE: &str =
    "display: block; margin-bottom: 6px; font-weight: 600; color: #333; font-size: 14px;";

#[component]
pub fn ImageFormScreen(config: AppConfig) -> Element {
    let policy = config.image_policy();
    let example = config.example.clone();
    let mut form = use_signal(|| FormState::new(None, &policy));
    let mut outcome = use_signal(|| None::<SubmitOutcome>);

    let mut handle_submit = move || {
        let result = submission_service::submit(&mut *form.write());
        outcome.set(Some(result));
    };

    let mut handle_toggle = move || {
        let next = form().toggle_mode(&policy, &example);
        log::info!("Switched form to {} mode", next.mode().as_str());
        form.set(next);
        outcome.set(None);
    };

    // Liest die erste gewählte Datei als Data-URL; Fehler werden nur geloggt
    let handle_image_change = move |evt: FormEvent| {
        let Some(file) = evt.files().into_iter().next() else {
            return;
        };
        let name = file.name();
        form.write().set_image_file(Some(name.clone()));
        let ticket = form.peek().capture_ticket();
        spawn(async move {
            match file.read_bytes().await {
                Ok(bytes) => {
                    let data_url = image_service::encode_data_url(&name, &bytes);
                    if !form.write().apply_capture(ticket, data_url) {
                        log::debug!("Discarding image {}, superseded by a newer selection or form", name);
                    }
                }
                Err(e) => {
                    log::debug!("Reading image {} failed: {:?}", name, e);
                }
            }
        });
    };

    let state = form.read();
    let email = state.email().to_string();
    let message = state.message().to_string();
    let preview = state.image().preview().map(str::to_string);
    let image_label = if state.image_required() {
        "Image *"
    } else {
        "Image"
    };
    let toggle_label = if state.entity().is_some() {
        "set as create"
    } else {
        "set as update"
    };
    let preview_style = format!(
        "max-height: {px}px; max-width: {px}px;",
        px = config.preview_max_px
    );
    drop(state);

    rsx! {
        div { style: "padding: 16px; max-width: 960px; margin: 0 auto; min-height: 100vh; background: #f5f5f5;",

            h1 { style: "color: #0066cc; font-size: 24px; font-weight: 700; text-align: center; margin-bottom: 24px;",
                "Example Simple: \"How to Handle Image\""
            }

            if let Some(result) = outcome() {
                StatusBanner { outcome: result }
            }

            div { style: "display: flex; flex-wrap: wrap; gap: 16px;",

                form {
                    class: "card",
                    style: "flex: 1; min-width: 280px;",
                    onsubmit: move |evt: FormEvent| {
                        evt.prevent_default();
                        handle_submit();
                    },

                    div { style: "margin-bottom: 20px;",
                        label { style: LABEL_STYLE, "Email *" }
                        input {
                            class: "input",
                            r#type: "email",
                            placeholder: "Your Email",
                            value: "{email}",
                            oninput: move |e| form.write().set_email(e.value()),
                        }
                    }

                    div { style: "margin-bottom: 20px;",
                        label { style: LABEL_STYLE, "Message *" }
                        input {
                            class: "input",
                            r#type: "text",
                            placeholder: "Your Message",
                            value: "{message}",
                            oninput: move |e| form.write().set_message(e.value()),
                        }
                    }

                    div { style: "margin-bottom: 20px;",
                        label { style: LABEL_STYLE, "{image_label}" }
                        if let Some(src) = preview {
                            div { style: "margin: 5px 0;",
                                img { style: "{preview_style}", src: "{src}" }
                            }
                        }
                        input {
                            r#type: "file",
                            name: "image",
                            accept: "image/*",
                            onchange: handle_image_change,
                        }
                    }

                    button { class: "btn-primary", r#type: "submit", style: "width: 100%; padding: 14px;",
                        "Submit"
                    }
                }

                div { style: "flex: 1; min-width: 280px;",
                    div { style: "margin-bottom: 16px;",
                        button {
                            class: "btn-secondary",
                            style: "padding: 6px 12px; font-size: 12px;",
                            onclick: move |_| handle_toggle(),
                            "{toggle_label}"
                        }
                    }
                    StatePanel { form: form() }
                }
            }
        }
    }
}

#[component]
fn StatusBanner(outcome: SubmitOutcome) -> Element {
    let label = outcome.label().to_string();
    match outcome {
        SubmitOutcome::Success { mode, .. } => {
            let mode = mode.as_str().to_string();
            rsx! {
                div { style: "background: #efe; border: 1px solid #cfc; color: #3a3; padding: 12px; margin-bottom: 16px; border-radius: 8px; font-size: 14px;",
                    "✅ {label} ({mode})"
                }
            }
        }
        SubmitOutcome::Invalid(errors) => rsx! {
            div { style: "background: #fee; border: 1px solid #fcc; color: #c33; padding: 12px; margin-bottom: 16px; border-radius: 8px; font-size: 14px;",
                "⚠️ {label}"
                ul { style: "margin: 8px 0 0 0;",
                    for err in errors.iter().map(FieldError::to_string) {
                        li { "{err}" }
                    }
                }
            }
        },
    }
}

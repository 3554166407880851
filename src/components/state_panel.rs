use crate::models::FormState;
use dioxus::prelude::*;

const SECTION_TITLE_STYLE: &str =
    "font-size: 16px; font-weight: 600; color: #333; margin: 0 0 4px 0;";
const JSON_STYLE: &str = "font-family: monospace; font-size: 12px; white-space: pre-wrap; word-break: break-all; margin: 0;";

fn pretty<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| format!("<{}>", e))
}

/// Debug view of the raw form value, the image helper and the last payload
#[component]
pub fn StatePanel(form: FormState) -> Element {
    let mode = form.mode().as_str().to_string();
    let valid = form.is_valid();
    let form_value = pretty(&form.form_value());
    let image = pretty(form.image());
    let result = pretty(&form.last_result());

    rsx! {
        div { class: "card",
            div { style: "font-size: 12px; color: #666; margin-bottom: 12px;", "Mode: {mode} · valid: {valid}" }

            div {
                p { style: SECTION_TITLE_STYLE, "Form" }
                pre { style: JSON_STYLE, "{form_value}" }
            }

            hr { style: "margin: 12px 0;" }

            div {
                p { style: SECTION_TITLE_STYLE, "image" }
                pre { style: JSON_STYLE, "{image}" }
            }

            hr { style: "margin: 12px 0;" }

            div {
                p { style: SECTION_TITLE_STYLE, "Send to API" }
                pre { style: JSON_STYLE, "{result}" }
            }
        }
    }
}

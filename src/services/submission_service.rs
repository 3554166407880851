use super::form_service::FieldError;
use crate::models::{FormState, Mode};
use serde_json::{Map, Value};

/// Request body that would be sent to the API
pub type Payload = Map<String, Value>;

/// Result of pressing submit, rendered by the UI instead of a dialog
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// `mode` names the API call the payload is meant for
    Success { mode: Mode, payload: Payload },
    Invalid(Vec<FieldError>),
}

impl SubmitOutcome {
    #[allow(dead_code)]
    pub fn is_success(&self) -> bool {
        matches!(self, SubmitOutcome::Success { .. })
    }

    /// Short status: "success" or "invalid"
    pub fn label(&self) -> &str {
        match self {
            SubmitOutcome::Success { .. } => "success",
            SubmitOutcome::Invalid(_) => "invalid",
        }
    }
}

fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::String(s) => s.is_empty(),
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Drops null, empty string, `false` and zero entries
pub fn remove_empty_values(map: Payload) -> Payload {
    map.into_iter().filter(|(_, v)| !is_empty_value(v)).collect()
}

/// Form fields merged with the image; a captured file wins over the existing URL
pub fn compose_payload(form: &FormState) -> Payload {
    let mut payload = Payload::new();
    payload.insert("email".to_string(), Value::from(form.email().trim()));
    payload.insert("message".to_string(), Value::from(form.message()));
    payload.insert(
        "image".to_string(),
        Value::from(form.image().submission_image()),
    );
    remove_empty_values(payload)
}

/// Validates the form and, if valid, stores and returns the payload
pub fn submit(form: &mut FormState) -> SubmitOutcome {
    if let Err(errors) = form.validate() {
        log::info!("Submit rejected: {} invalid field(s)", errors.len());
        return SubmitOutcome::Invalid(errors);
    }

    let payload = compose_payload(form);
    let mode = form.mode();
    log::info!(
        "Submit accepted for {} with fields {:?}",
        mode.as_str(),
        payload.keys().collect::<Vec<_>>()
    );
    form.record_result(payload.clone());
    SubmitOutcome::Success { mode, payload }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Message;
    use crate::services::form_service::{Field, ImagePolicy};
    use serde_json::json;

    const CAPTURED: &str = "data:image/png;base64,iVBORw0KGgo=";

    fn filled_create_form() -> FormState {
        let mut form = FormState::new(None, &ImagePolicy::default());
        form.set_email("a@b.com".to_string());
        form.set_message("hello".to_string());
        form
    }

    fn as_payload(value: Value) -> Payload {
        match value {
            Value::Object(map) => map,
            _ => Payload::new(),
        }
    }

    #[test]
    fn test_remove_empty_values() {
        let input = as_payload(json!({"email": "a@b.com", "message": "", "image": "x"}));
        let expected = as_payload(json!({"email": "a@b.com", "image": "x"}));
        assert_eq!(remove_empty_values(input), expected);
    }

    #[test]
    fn test_remove_falsy_values() {
        let input = as_payload(json!({
            "a": null, "b": false, "c": 0, "d": true, "e": 1, "f": [], "g": " "
        }));
        let expected = as_payload(json!({"d": true, "e": 1, "f": [], "g": " "}));
        assert_eq!(remove_empty_values(input), expected);
    }

    #[test]
    fn test_invalid_email_never_produces_payload() {
        for email in ["", "nope", "a@", "@b.com"] {
            let mut form = filled_create_form();
            form.set_email(email.to_string());
            let ticket = form.capture_ticket();
            form.apply_capture(ticket, CAPTURED.to_string());

            let outcome = submit(&mut form);
            assert_eq!(outcome.label(), "invalid");
            assert!(form.last_result().is_none());
        }
    }

    #[test]
    fn test_missing_message_is_invalid() {
        let mut form = FormState::new(Some(Message::example()), &ImagePolicy::default());
        form.set_message(String::new());
        assert_eq!(
            submit(&mut form),
            SubmitOutcome::Invalid(vec![FieldError::Required(Field::Message)])
        );
    }

    #[test]
    fn test_create_without_image_is_invalid() {
        let mut form = filled_create_form();
        assert_eq!(
            submit(&mut form),
            SubmitOutcome::Invalid(vec![FieldError::Required(Field::Image)])
        );
    }

    #[test]
    fn test_create_without_image_allowed_by_policy() {
        let policy = ImagePolicy {
            required_on_create: false,
        };
        let mut form = FormState::new(None, &policy);
        form.set_email("a@b.com".to_string());
        form.set_message("hello".to_string());
        match submit(&mut form) {
            SubmitOutcome::Success { mode, payload } => {
                assert_eq!(mode, Mode::Create);
                assert!(!payload.contains_key("image"));
            }
            other => panic!("expected success, got {:?}", other),
        }
    }

    #[test]
    fn test_update_keeps_existing_image_url() {
        let mut form = FormState::new(Some(Message::example()), &ImagePolicy::default());
        let outcome = submit(&mut form);
        let expected = as_payload(json!({
            "email": "fernando@martinez.com",
            "message": "I love my memory",
            "image": Message::example().image,
        }));
        assert_eq!(
            outcome,
            SubmitOutcome::Success {
                mode: Mode::Update,
                payload: expected.clone(),
            }
        );
        assert_eq!(form.last_result(), Some(&expected));
    }

    #[test]
    fn test_update_prefers_captured_image() {
        let mut form = FormState::new(Some(Message::example()), &ImagePolicy::default());
        form.set_image_file(Some("new.png".to_string()));
        let ticket = form.capture_ticket();
        assert!(form.apply_capture(ticket, CAPTURED.to_string()));

        let outcome = submit(&mut form);
        assert!(outcome.is_success());
        let payload = form.last_result().unwrap();
        assert_eq!(payload["image"], CAPTURED);
    }

    #[test]
    fn test_create_with_capture_succeeds() {
        let mut form = filled_create_form();
        form.set_image_file(Some("cat.png".to_string()));
        let ticket = form.capture_ticket();
        form.apply_capture(ticket, CAPTURED.to_string());

        match submit(&mut form) {
            SubmitOutcome::Success { mode, payload } => {
                assert_eq!(mode, Mode::Create);
                assert_eq!(payload.len(), 3);
                assert_eq!(payload["image"], CAPTURED);
            }
            other => panic!("expected success, got {:?}", other),
        }
    }

    #[test]
    fn test_selected_but_unread_file_omits_image() {
        let mut form = filled_create_form();
        form.set_image_file(Some("broken.png".to_string()));
        match submit(&mut form) {
            SubmitOutcome::Success { payload, .. } => {
                assert!(!payload.contains_key("image"));
            }
            other => panic!("expected success, got {:?}", other),
        }
    }
}

use super::{ImageHelper, Message};
use crate::services::form_service::{self, FieldError, ImagePolicy};
use crate::services::submission_service::Payload;
use serde::Serialize;

/// Whether the form creates a new record or updates the loaded one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Create,
    Update,
}

impl Mode {
    pub fn as_str(&self) -> &str {
        match self {
            Mode::Create => "create",
            Mode::Update => "update",
        }
    }
}

/// Handed out when an image read starts; only accepted while it belongs to the
/// current form generation and the most recent file selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureTicket {
    generation: u64,
    selection: u64,
}

/// Complete state of one form: entity, field values, image helper and last payload
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    entity: Option<Message>,
    email: String,
    message: String,
    image_file: Option<String>,
    image_required: bool,
    image: ImageHelper,
    generation: u64,
    selection: u64,
    result: Option<Payload>,
}

impl FormState {
    /// Builds the form for `entity`; `None` means create mode
    pub fn new(entity: Option<Message>, policy: &ImagePolicy) -> Self {
        Self::build(entity, policy, 0, None)
    }

    fn build(
        entity: Option<Message>,
        policy: &ImagePolicy,
        generation: u64,
        result: Option<Payload>,
    ) -> Self {
        let image = ImageHelper::for_entity(entity.as_ref());
        let image_required = policy.image_required(entity.as_ref());
        Self {
            email: entity.as_ref().map(|e| e.email.clone()).unwrap_or_default(),
            message: entity.as_ref().map(|e| e.message.clone()).unwrap_or_default(),
            image_file: None,
            image_required,
            image,
            generation,
            selection: 0,
            result,
            entity,
        }
    }

    /// Switches between create mode and editing `example`.
    /// Image state and field values start over; the last payload is kept for display.
    pub fn toggle_mode(self, policy: &ImagePolicy, example: &Message) -> Self {
        let entity = match self.entity {
            Some(_) => None,
            None => Some(example.clone()),
        };
        log::debug!(
            "Form rebuilt in {} mode",
            if entity.is_some() { "update" } else { "create" }
        );
        Self::build(entity, policy, self.generation.wrapping_add(1), self.result)
    }

    pub fn mode(&self) -> Mode {
        if self.entity.is_some() {
            Mode::Update
        } else {
            Mode::Create
        }
    }

    pub fn entity(&self) -> Option<&Message> {
        self.entity.as_ref()
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn image_file(&self) -> Option<&str> {
        self.image_file.as_deref()
    }

    pub fn image(&self) -> &ImageHelper {
        &self.image
    }

    pub fn image_required(&self) -> bool {
        self.image_required
    }

    #[allow(dead_code)]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn set_email(&mut self, email: String) {
        self.email = email;
    }

    pub fn set_message(&mut self, message: String) {
        self.message = message;
    }

    /// Name of the file chosen in the picker. Every call starts a new selection,
    /// so reads issued for earlier files are rejected.
    pub fn set_image_file(&mut self, name: Option<String>) {
        self.image_file = name;
        self.selection = self.selection.wrapping_add(1);
    }

    pub fn capture_ticket(&self) -> CaptureTicket {
        CaptureTicket {
            generation: self.generation,
            selection: self.selection,
        }
    }

    /// Stores a finished image read. Returns false and leaves the state untouched
    /// when the form was rebuilt or another file was picked after the read started.
    pub fn apply_capture(&mut self, ticket: CaptureTicket, data_url: String) -> bool {
        if ticket != self.capture_ticket() {
            return false;
        }
        self.image.capture(data_url);
        true
    }

    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        form_service::validate(self)
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Raw field values as shown in the debug panel
    pub fn form_value(&self) -> serde_json::Value {
        serde_json::json!({
            "email": self.email,
            "message": self.message,
            "image": self.image_file,
        })
    }

    pub fn last_result(&self) -> Option<&Payload> {
        self.result.as_ref()
    }

    pub(crate) fn record_result(&mut self, payload: Payload) {
        self.result = Some(payload);
    }
}

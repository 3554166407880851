use crate::models::{FormState, Message};
use std::fmt;

const MAX_EMAIL_LEN: usize = 254;
const MAX_LOCAL_PART_LEN: usize = 64;
const MAX_DOMAIN_LABEL_LEN: usize = 63;

/// Decides whether the image field is mandatory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImagePolicy {
    /// Require an image when there is no existing one to fall back on
    pub required_on_create: bool,
}

impl Default for ImagePolicy {
    fn default() -> Self {
        Self {
            required_on_create: true,
        }
    }
}

impl ImagePolicy {
    /// An entity with an image never requires a new one
    pub fn image_required(&self, entity: Option<&Message>) -> bool {
        match entity {
            Some(e) if e.has_image() => false,
            _ => self.required_on_create,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Email,
    Message,
    Image,
}

impl Field {
    pub fn as_str(&self) -> &str {
        match self {
            Field::Email => "email",
            Field::Message => "message",
            Field::Image => "image",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    Required(Field),
    InvalidEmail,
}

impl FieldError {
    #[allow(dead_code)]
    pub fn field(&self) -> Field {
        match self {
            FieldError::Required(field) => *field,
            FieldError::InvalidEmail => Field::Email,
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FieldError::Required(field) => write!(f, "{} is required", field.as_str()),
            FieldError::InvalidEmail => write!(f, "email is not a valid address"),
        }
    }
}

fn is_atext(c: char) -> bool {
    c.is_ascii_alphanumeric() || "!#$%&'*+/=?^_`{|}~-".contains(c)
}

fn is_valid_domain_label(label: &str) -> bool {
    let bytes = label.as_bytes();
    match (bytes.first(), bytes.last()) {
        (Some(first), Some(last)) => {
            label.len() <= MAX_DOMAIN_LABEL_LEN
                && first.is_ascii_alphanumeric()
                && last.is_ascii_alphanumeric()
                && bytes.iter().all(|b| b.is_ascii_alphanumeric() || *b == b'-')
        }
        _ => false,
    }
}

/// Syntactic address check: dot-atom local part, host name domain
pub fn is_valid_email(email: &str) -> bool {
    if email.is_empty() || email.len() > MAX_EMAIL_LEN {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || local.len() > MAX_LOCAL_PART_LEN {
        return false;
    }
    let local_ok = local
        .split('.')
        .all(|atom| !atom.is_empty() && atom.chars().all(is_atext));
    local_ok && domain.split('.').all(is_valid_domain_label)
}

/// Runs every field rule and collects all failures
pub fn validate(form: &FormState) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();

    let email = form.email().trim();
    if email.is_empty() {
        errors.push(FieldError::Required(Field::Email));
    } else if !is_valid_email(email) {
        errors.push(FieldError::InvalidEmail);
    }

    if form.message().trim().is_empty() {
        errors.push(FieldError::Required(Field::Message));
    }

    let has_image = form.image_file().is_some() || form.image().has_capture();
    if form.image_required() && !has_image {
        errors.push(FieldError::Required(Field::Image));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

pub mod form_service;
pub mod image_service;
pub mod submission_service;

pub use form_service::{FieldError, ImagePolicy};
pub use submission_service::SubmitOutcome;

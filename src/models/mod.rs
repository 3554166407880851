pub mod form_state;
pub mod image_helper;
pub mod message;

pub use form_state::{FormState, Mode};
pub use image_helper::ImageHelper;
pub use message::Message;

pub mod image_form;
pub mod state_panel;

pub use image_form::ImageFormScreen;
pub use state_panel::StatePanel;

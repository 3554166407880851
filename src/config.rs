use crate::{error::AppError, models::Message, services::ImagePolicy};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Runtime settings, read from `image-form.toml` in the app data directory
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Whether an image must be selected when no entity is being edited
    pub image_required_on_create: bool,
    /// Maximum edge length of the preview image in pixels
    pub preview_max_px: u32,
    /// Record loaded by the "set as update" toggle
    pub example: Message,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            image_required_on_create: true,
            preview_max_px: 128,
            example: Message::example(),
        }
    }
}

impl AppConfig {
    /// Loads the config from the default location, falling back to defaults
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::load_from(&crate::filesystem::config_file_path())
    }

    /// The browser has no filesystem to read from
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        log::debug!("No configuration file on web, using defaults");
        Self::default()
    }

    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_toml_str(&content) {
                Ok(config) => {
                    log::info!("Loaded configuration from {}", path.display());
                    config
                }
                Err(e) => {
                    log::warn!("{} ({}), using defaults", e, path.display());
                    Self::default()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No configuration at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                log::warn!("{}, using defaults", AppError::from(e));
                Self::default()
            }
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self, AppError> {
        let config: AppConfig = toml::from_str(content)?;
        if config.preview_max_px == 0 {
            return Err(AppError::Config(
                "preview_max_px must be greater than 0".to_string(),
            ));
        }
        Ok(config)
    }

    pub fn image_policy(&self) -> ImagePolicy {
        ImagePolicy {
            required_on_create: self.image_required_on_create,
        }
    }
}

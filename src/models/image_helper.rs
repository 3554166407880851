use super::Message;
use serde::{Deserialize, Serialize};

/// Preview and submission state of the image field, kept apart from form validation
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ImageHelper {
    /// Data URL of a freshly selected file
    pub base64: String,
    /// URL of the image already stored on the entity
    pub url: String,
    /// A new file was read since the form was built
    pub changed: bool,
    /// An entity with an existing image was loaded
    pub is_update: bool,
}

impl ImageHelper {
    pub fn for_entity(entity: Option<&Message>) -> Self {
        match entity {
            Some(e) if e.has_image() => Self {
                url: e.image.clone(),
                is_update: true,
                ..Self::default()
            },
            _ => Self::default(),
        }
    }

    /// Stores the representation of a newly read file
    pub fn capture(&mut self, data_url: String) {
        self.base64 = data_url;
        self.changed = true;
    }

    pub fn has_capture(&self) -> bool {
        !self.base64.is_empty()
    }

    /// Image to show: the captured file wins over the stored URL
    pub fn preview(&self) -> Option<&str> {
        if !self.base64.is_empty() {
            Some(&self.base64)
        } else if !self.url.is_empty() {
            Some(&self.url)
        } else {
            None
        }
    }

    /// Value of the `image` field in the payload, empty if there is none
    pub fn submission_image(&self) -> &str {
        self.preview().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_mode_is_empty() {
        let helper = ImageHelper::for_entity(None);
        assert_eq!(helper, ImageHelper::default());
        assert_eq!(helper.preview(), None);
        assert_eq!(helper.submission_image(), "");
    }

    #[test]
    fn test_entity_with_image_sets_update() {
        let helper = ImageHelper::for_entity(Some(&Message::example()));
        assert!(helper.is_update);
        assert!(!helper.changed);
        assert_eq!(helper.url, Message::example().image);
        assert_eq!(helper.preview(), Some(helper.url.as_str()));
    }

    #[test]
    fn test_entity_without_image_is_not_update() {
        let entity = Message::new("a@b.com".into(), "hi".into(), String::new());
        let helper = ImageHelper::for_entity(Some(&entity));
        assert!(!helper.is_update);
        assert!(helper.url.is_empty());
    }

    #[test]
    fn test_capture_overrides_url() {
        let mut helper = ImageHelper::for_entity(Some(&Message::example()));
        helper.capture("data:image/png;base64,AAAA".to_string());
        assert!(helper.changed);
        assert!(helper.has_capture());
        assert_eq!(helper.preview(), Some("data:image/png;base64,AAAA"));
        assert_eq!(helper.submission_image(), "data:image/png;base64,AAAA");
    }

    #[test]
    fn test_serializes_camel_case() {
        let helper = ImageHelper::for_entity(Some(&Message::example()));
        let json = serde_json::to_value(&helper).unwrap();
        assert_eq!(json["isUpdate"], serde_json::Value::Bool(true));
        assert_eq!(json["changed"], serde_json::Value::Bool(false));
    }
}

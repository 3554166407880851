use serde::{Deserialize, Serialize};

/// Record that is created or updated by the form
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Message {
    pub email: String,
    pub message: String,
    /// Image URL or data URL
    pub image: String,
}

impl Message {
    pub fn new(email: String, message: String, image: String) -> Self {
        Self {
            email,
            message,
            image,
        }
    }

    /// Record used when switching the demo into update mode
    pub fn example() -> Self {
        Self::new(
            "fernando@martinez.com".to_string(),
            "I love my memory".to_string(),
            "https://www.gtavision.com/images/content/vc_radio/emotion.gif".to_string(),
        )
    }

    pub fn has_image(&self) -> bool {
        !self.image.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_has_image() {
        let m = Message::example();
        assert_eq!(m.email, "fernando@martinez.com");
        assert!(m.has_image());
    }

    #[test]
    fn test_blank_image() {
        let m = Message::new("a@b.com".to_string(), "hi".to_string(), "  ".to_string());
        assert!(!m.has_image());
    }
}

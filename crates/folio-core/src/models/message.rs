use serde::{Deserialize, Serialize};

use super::RecordId;
use crate::api::ApiError;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Message {
    #[serde(default)]
    pub id: RecordId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, alias = "createdAt")]
    pub created_at: Option<String>,
}

impl Message {
    pub fn subject_display(&self) -> &str {
        self.subject
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or("No subject")
    }
}

/// Contact form submission
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewMessage {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub subject: String,
    pub message: String,
}

impl NewMessage {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.name.trim().is_empty() {
            return Err(ApiError::invalid_input("Name is required"));
        }
        if !self.email.contains('@') {
            return Err(ApiError::invalid_input("A valid email is required"));
        }
        if self.message.trim().is_empty() {
            return Err(ApiError::invalid_input("Message is required"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message() -> NewMessage {
        NewMessage {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            subject: String::new(),
            message: "Hello".into(),
        }
    }

    #[test]
    fn test_validate() {
        assert!(message().validate().is_ok());

        let mut bad = message();
        bad.email = "nope".into();
        assert!(bad.validate().is_err());

        let mut bad = message();
        bad.message = " ".into();
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_subject_display() {
        assert_eq!(Message::default().subject_display(), "No subject");
    }
}

//! Data models for portfolio resources.
//!
//! This module contains the records returned by the backend and the input
//! payloads sent to it:
//!
//! - `Project`, `Blog`, `ShowcaseItem`: content with uploaded media
//! - `Skill`, `Service`, `SocialLink`: simple admin-managed lists
//! - `Message`: contact form submissions
//! - `Profile`: the site owner's public profile
//!
//! The backend is loose about field presence, so nearly every field is
//! optional and defaults when missing.

pub mod blog;
pub mod file;
pub mod message;
pub mod profile;
pub mod project;
pub mod service;
pub mod showcase;
pub mod skill;
pub mod social;

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub use blog::{Blog, BlogForm};
pub use file::StoredFile;
pub use message::{Message, NewMessage};
pub use profile::{Profile, ProfileUpdate};
pub use project::{Project, ProjectForm, ProjectStatus};
pub use service::{Service, ServiceInput};
pub use showcase::{MediaType, ShowcaseForm, ShowcaseItem};
pub use skill::{Skill, SkillInput};
pub use social::{SocialLink, SocialLinkInput};

/// Record identifier. The backend sends numeric ids from SQL tables and
/// string ids elsewhere; both are kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct RecordId(pub String);

impl RecordId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        RecordId(s.to_string())
    }
}

impl From<String> for RecordId {
    fn from(s: String) -> Self {
        RecordId(s)
    }
}

impl From<i64> for RecordId {
    fn from(n: i64) -> Self {
        RecordId(n.to_string())
    }
}

impl Serialize for RecordId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0.parse::<i64>() {
            Ok(n) => serializer.serialize_i64(n),
            Err(_) => serializer.serialize_str(&self.0),
        }
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Num(i64),
            Text(String),
        }
        Ok(match Option::<Raw>::deserialize(deserializer)? {
            Some(Raw::Num(n)) => RecordId(n.to_string()),
            Some(Raw::Text(s)) => RecordId(s),
            None => RecordId::default(),
        })
    }
}

/// Accept either `"a, b"` or `["a", "b"]` (or null) as a list of strings
pub(crate) fn string_or_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        List(Vec<String>),
        Text(String),
    }
    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::List(items)) => items
            .into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect(),
        Some(Raw::Text(text)) => split_list(&text),
        None => Vec::new(),
    })
}

/// Accept a number, a numeric string, or null
pub(crate) fn flexible_number<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i64),
        Float(f64),
        Text(String),
    }
    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Int(n)) => Some(n),
        Some(Raw::Float(f)) => Some(f as i64),
        Some(Raw::Text(s)) => s.trim().parse().ok(),
        None => None,
    })
}

/// Accept `true`/`false`, `1`/`0`, or `"true"`/`"1"`
pub(crate) fn flexible_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Bool(bool),
        Int(i64),
        Text(String),
    }
    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Bool(b)) => Some(b),
        Some(Raw::Int(n)) => Some(n != 0),
        Some(Raw::Text(s)) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "1" => Some(true),
            "false" | "0" => Some(false),
            _ => None,
        },
        None => None,
    })
}

/// Split a comma-separated list, trimming blanks
pub fn split_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_id_from_number_and_string() {
        let n: RecordId = serde_json::from_value(json!(42)).unwrap();
        let s: RecordId = serde_json::from_value(json!("64f1c0")).unwrap();
        assert_eq!(n.as_str(), "42");
        assert_eq!(s.to_string(), "64f1c0");
    }

    #[test]
    fn test_null_record_id_reads_as_empty() {
        let id: RecordId = serde_json::from_value(json!(null)).unwrap();
        assert_eq!(id, RecordId::default());

        let projects = crate::api::envelope::extract_list::<Project>(
            json!([{ "id": 1 }, { "id": null, "title": "x" }]),
            "projects",
        )
        .unwrap();
        assert_eq!(projects.len(), 2);
        assert_eq!(projects[1].id.as_str(), "");
        assert_eq!(projects[1].title_display(), "x");
    }

    #[test]
    fn test_record_id_serializes_numeric_ids_as_numbers() {
        assert_eq!(serde_json::to_value(RecordId::from(7)).unwrap(), json!(7));
        assert_eq!(serde_json::to_value(RecordId::from("abc")).unwrap(), json!("abc"));
    }

    #[test]
    fn test_split_list() {
        assert_eq!(split_list("rust, tokio ,, serde"), vec!["rust", "tokio", "serde"]);
        assert!(split_list("  ").is_empty());
    }
}

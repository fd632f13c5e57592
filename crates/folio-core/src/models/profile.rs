use reqwest::multipart::Form;
use serde::{Deserialize, Serialize};

use super::{flexible_number, RecordId};
use crate::api::upload::{FileUpload, FormBuilder};
use crate::api::ApiError;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub id: RecordId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub short_bio: Option<String>,
    #[serde(default)]
    pub about_bio: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub resume_link: Option<String>,
    #[serde(default, deserialize_with = "flexible_number")]
    pub experience_years: Option<i64>,
    #[serde(default, deserialize_with = "flexible_number")]
    pub total_projects: Option<i64>,
    #[serde(default)]
    pub education: Option<String>,
    #[serde(default)]
    pub profile_pic: Option<String>,
    #[serde(default)]
    pub resume: Option<String>,
}

impl Profile {
    /// Best available bio: the about-page bio, then the long bio, then the
    /// short one
    pub fn bio_display(&self) -> Option<&str> {
        [&self.about_bio, &self.bio, &self.short_bio]
            .into_iter()
            .filter_map(|b| b.as_deref())
            .find(|b| !b.trim().is_empty())
    }
}

/// Profile update, sent as multipart so the avatar and resume can ride along.
///
/// Text fields left as `None` are sent empty, matching the admin form which
/// always submits every field.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub title: Option<String>,
    pub short_bio: Option<String>,
    pub about_bio: Option<String>,
    pub bio: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub resume_link: Option<String>,
    pub experience_years: Option<i64>,
    pub total_projects: Option<i64>,
    pub education: Option<String>,
    pub password: Option<String>,
    pub avatar: Option<FileUpload>,
    pub resume: Option<FileUpload>,
}

impl ProfileUpdate {
    /// Start from the current profile so unchanged fields are preserved
    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            name: profile.name.clone(),
            email: profile.email.clone(),
            title: profile.title.clone(),
            short_bio: profile.short_bio.clone(),
            about_bio: profile.about_bio.clone(),
            bio: profile.bio.clone(),
            phone: profile.phone.clone(),
            location: profile.location.clone(),
            resume_link: profile.resume_link.clone(),
            experience_years: profile.experience_years,
            total_projects: profile.total_projects,
            education: profile.education.clone(),
            ..Default::default()
        }
    }

    pub fn into_form(self) -> Result<Form, ApiError> {
        let number = |n: Option<i64>| n.map(|n| n.to_string()).unwrap_or_default();
        Ok(FormBuilder::new()
            .text("name", self.name.unwrap_or_default())
            .text("email", self.email.unwrap_or_default())
            .text("title", self.title.unwrap_or_default())
            .text("short_bio", self.short_bio.unwrap_or_default())
            .text("about_bio", self.about_bio.unwrap_or_default())
            .text("bio", self.bio.unwrap_or_default())
            .text("phone", self.phone.unwrap_or_default())
            .text("location", self.location.unwrap_or_default())
            .text("resume_link", self.resume_link.unwrap_or_default())
            .text("experience_years", number(self.experience_years))
            .text("total_projects", number(self.total_projects))
            .text("education", self.education.unwrap_or_default())
            .opt_text("password", self.password.filter(|p| !p.is_empty()))
            .file("profile_pic", self.avatar)?
            .file("resume", self.resume)?
            .build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_profile_with_string_numbers() {
        let profile: Profile = serde_json::from_value(json!({
            "id": 1,
            "name": "Sam",
            "experience_years": "5",
            "total_projects": 12,
            "short_bio": "Builder",
            "about_bio": ""
        }))
        .unwrap();
        assert_eq!(profile.experience_years, Some(5));
        assert_eq!(profile.total_projects, Some(12));
        assert_eq!(profile.bio_display(), Some("Builder"));
    }

    #[test]
    fn test_update_from_profile_keeps_fields() {
        let profile = Profile {
            name: Some("Sam".into()),
            experience_years: Some(3),
            ..Default::default()
        };
        let update = ProfileUpdate::from_profile(&profile);
        assert_eq!(update.name.as_deref(), Some("Sam"));
        assert_eq!(update.experience_years, Some(3));
        assert!(update.password.is_none());
    }
}

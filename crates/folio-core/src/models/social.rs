use serde::{Deserialize, Serialize};

use super::RecordId;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SocialLink {
    #[serde(default)]
    pub id: RecordId,
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SocialLinkInput {
    pub platform: String,
    pub url: String,
    #[serde(default)]
    pub icon: String,
}

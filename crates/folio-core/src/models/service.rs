use serde::{Deserialize, Serialize};

use super::{flexible_bool, flexible_number, RecordId};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Service {
    #[serde(default)]
    pub id: RecordId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub icon_url: Option<String>,
    #[serde(default, deserialize_with = "flexible_number")]
    pub order_index: Option<i64>,
    #[serde(default, deserialize_with = "flexible_bool")]
    pub is_active: Option<bool>,
}

impl Service {
    /// Services without an explicit flag are shown
    pub fn is_active(&self) -> bool {
        self.is_active.unwrap_or(true)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceInput {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon_url: String,
    #[serde(default)]
    pub order_index: i64,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl Default for ServiceInput {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            icon_url: String::new(),
            order_index: 0,
            is_active: true,
        }
    }
}

use serde_json::Value;

use super::{envelope, ApiClient, ApiError};
use crate::models::{RecordId, Skill, SkillInput};

impl ApiClient {
    pub async fn list_skills(&self) -> Result<Vec<Skill>, ApiError> {
        let value = self.get_value("fetch skills", "/skills").await?;
        envelope::extract_list(value, "skills")
    }

    pub async fn get_skill(&self, id: &RecordId) -> Result<Skill, ApiError> {
        let value = self.get_value("fetch skill", &Self::record_path("/skills", id)?).await?;
        envelope::extract_one(value, "skill")
    }

    pub async fn create_skill(&self, input: &SkillInput) -> Result<Value, ApiError> {
        if input.name.trim().is_empty() {
            return Err(ApiError::invalid_input("Skill name is required"));
        }
        self.post_json("create skill", "/skills", input).await
    }

    pub async fn update_skill(&self, id: &RecordId, input: &SkillInput) -> Result<Value, ApiError> {
        self.put_json("update skill", &Self::record_path("/skills", id)?, input).await
    }

    pub async fn delete_skill(&self, id: &RecordId) -> Result<Value, ApiError> {
        self.delete("delete skill", &Self::record_path("/skills", id)?).await
    }
}

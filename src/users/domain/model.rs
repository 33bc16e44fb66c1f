use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::core::domain::Identifiable;
use crate::gateway::api::SearchHit;

// UserRecord is a user document as returned by search.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: String,
    pub metadata: Value,
}

impl UserRecord {
    pub fn from_hit(hit: &SearchHit) -> Self {
        UserRecord {
            id: hit.id.clone(),
            metadata: hit.metadata.clone(),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.metadata["name"].as_str()
    }

    pub fn email(&self) -> Option<&str> {
        self.metadata["email"].as_str()
    }
}

impl Identifiable for UserRecord {
    fn id(&self) -> String {
        self.id.to_string()
    }
}

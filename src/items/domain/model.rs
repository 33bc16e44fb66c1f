use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::core::domain::Identifiable;
use crate::gateway::api::SearchHit;
use crate::utils::date::parse_day;

// ItemRecord is an item document as returned by search; the metadata is kept
// verbatim so view code can render fields this crate does not model.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct ItemRecord {
    pub id: String,
    pub metadata: Value,
}

impl ItemRecord {
    pub fn from_hit(hit: &SearchHit) -> Self {
        ItemRecord {
            id: hit.id.clone(),
            metadata: hit.metadata.clone(),
        }
    }

    pub fn title(&self) -> Option<&str> {
        self.metadata["title"].as_str()
    }

    pub fn barcode(&self) -> Option<&str> {
        self.metadata["barcode"].as_str()
    }

    // the holdings list under metadata._circulation; absent or malformed
    // entries are skipped
    pub fn holdings(&self) -> Vec<Holding> {
        self.metadata["_circulation"]["holdings"]
            .as_array()
            .map(|entries| entries.iter().filter_map(Holding::from_value).collect())
            .unwrap_or_default()
    }
}

impl Identifiable for ItemRecord {
    fn id(&self) -> String {
        self.id.to_string()
    }
}

// Holding is one hold entry on an item document.
#[derive(Debug, PartialEq, Clone)]
pub struct Holding {
    pub id: String,
    pub user_id: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl Holding {
    pub fn from_value(value: &Value) -> Option<Holding> {
        let user_id = value["user_id"].as_str()?;
        Some(Holding {
            id: value["id"].as_str().unwrap_or_default().to_string(),
            user_id: user_id.to_string(),
            start_date: value["start_date"].as_str().and_then(parse_day),
            end_date: value["end_date"].as_str().and_then(parse_day),
        })
    }
}

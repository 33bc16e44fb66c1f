use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::items::domain::model::{Holding, ItemRecord};
use crate::utils::date::opt_serializer;

// Hold is a loan or request association between a user and an item. The loan
// flag is derived once, at categorization time: a hold whose start date has
// passed is an active loan, anything else is a pending request.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Hold {
    pub id: String,
    pub user_id: String,
    pub item_id: String,
    pub item_index: usize,
    #[serde(with = "opt_serializer")]
    pub start_date: Option<NaiveDate>,
    #[serde(with = "opt_serializer")]
    pub end_date: Option<NaiveDate>,
    pub loan: bool,
}

impl Hold {
    pub fn from_holding(holding: &Holding, item: &ItemRecord, item_index: usize,
                        today: NaiveDate) -> Self {
        Hold {
            id: holding.id.to_string(),
            user_id: holding.user_id.to_string(),
            item_id: item.id.to_string(),
            item_index,
            start_date: holding.start_date,
            end_date: holding.end_date,
            loan: holding.start_date.map(|d| d <= today).unwrap_or(false),
        }
    }
}

impl Identifiable for Hold {
    fn id(&self) -> String {
        self.id.to_string()
    }
}

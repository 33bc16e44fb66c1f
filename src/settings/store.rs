use chrono::NaiveDate;
use serde_json::{Map, Value};
use crate::core::circulation::Delivery;
use crate::core::domain::Configuration;
use crate::utils::date::format_day;

// Settings holds the filter and action parameters chosen for the current
// circulation session. Mutated only by user input, read whenever a request
// payload is built.
#[derive(Debug, PartialEq, Clone)]
pub struct Settings {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub deliveries: Vec<Delivery>,
    pub delivery: Option<Delivery>,
    pub waitlist: bool,
}

impl Settings {
    pub fn new(config: &Configuration) -> Self {
        Settings {
            start_date: None,
            end_date: None,
            deliveries: config.deliveries.clone(),
            delivery: Some(config.default_delivery),
            waitlist: false,
        }
    }

    // Builds the request body for circulation calls. Keys whose value is
    // empty or null are dropped; `waitlist: false` is a real value and stays.
    pub fn payload(&self) -> Map<String, Value> {
        let mut data = Map::new();
        data.insert("start_date".to_string(),
                    self.start_date.map_or(Value::Null, |d| Value::String(format_day(&d))));
        data.insert("end_date".to_string(),
                    self.end_date.map_or(Value::Null, |d| Value::String(format_day(&d))));
        data.insert("delivery".to_string(),
                    self.delivery.map_or(Value::Null, |d| Value::String(d.to_string())));
        data.insert("waitlist".to_string(), Value::Bool(self.waitlist));
        prune_empty(&mut data);
        data
    }
}

// Removes keys whose value is null or the empty string.
pub fn prune_empty(data: &mut Map<String, Value>) {
    data.retain(|_, value| {
        match value {
            Value::Null => false,
            Value::String(s) => !s.is_empty(),
            _ => true,
        }
    });
}

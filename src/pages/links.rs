use chrono::NaiveDate;
use serde_json::{Map, Value};
use crate::core::domain::Configuration;
use crate::pages::state::{CirculationState, UserRecordParams};

// Navigation IS routing for these pages: every interaction rebuilds a URL
// and replaces the location with it.

pub fn circulation_url(state: &CirculationState) -> String {
    format!("/circulation/circulation/{}", urlencoding::encode(state.encode().as_str()))
}

// extracts the state segment out of a full circulation page URL; anything
// unexpected yields the default state
pub fn circulation_state_from_url(url: &str, config: &Configuration,
                                  today: NaiveDate) -> CirculationState {
    let parts: Vec<&str> = url.split('/').collect();
    let segment = parts.iter()
        .position(|part| *part == "circulation")
        .and_then(|pos| parts.get(pos + 2));
    match segment {
        Some(segment) => {
            let decoded = urlencoding::decode(segment)
                .map(|d| d.into_owned())
                .unwrap_or_else(|_| segment.to_string());
            CirculationState::parse(decoded.as_str(), config, today)
        }
        None => CirculationState::default_state(config, today),
    }
}

pub fn user_record_url(record_id: &str, params: &UserRecordParams) -> String {
    format!("/circulation/user/record/{}/{}", record_id, params.encode())
}

pub fn list_detail_url(link: &str, params: &Map<String, Value>) -> String {
    let encoded = urlencoding::encode(Value::Object(params.clone()).to_string().as_str()).into_owned();
    format!("/circulation/lists/{}/detail/{}", link, encoded)
}

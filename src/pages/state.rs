use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use crate::core::circulation::Delivery;
use crate::core::domain::Configuration;
use crate::utils::date::{format_day, parse_day};

// CirculationState is the whole workbench state carried in the page URL:
// <items>:<users>:<records>:<from>:<to>:<waitlist>:<delivery>:<search>
// The search field is the final split remainder, so it may itself contain
// colons. Every field and list element is percent-escaped on encode, which
// keeps delimiter characters in ids from corrupting the format while leaving
// delimiter-free values byte-identical to the legacy encoding.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct CirculationState {
    pub items: Vec<String>,
    pub users: Vec<String>,
    pub records: Vec<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub waitlist: bool,
    pub delivery: Delivery,
    pub search: String,
}

impl CirculationState {
    pub fn default_state(config: &Configuration, today: NaiveDate) -> Self {
        CirculationState {
            items: Vec::new(),
            users: Vec::new(),
            records: Vec::new(),
            start_date: Some(today),
            end_date: Some(today + Duration::days(config.loan_period_days)),
            waitlist: false,
            delivery: config.default_delivery,
            search: String::new(),
        }
    }

    // a malformed state string degrades to the default state, it never fails
    pub fn parse(state: &str, config: &Configuration, today: NaiveDate) -> Self {
        let fields: Vec<&str> = state.splitn(8, ':').collect();
        if fields.len() < 8 {
            return Self::default_state(config, today);
        }
        CirculationState {
            items: parse_list(fields[0]),
            users: parse_list(fields[1]),
            records: parse_list(fields[2]),
            start_date: parse_day(unescape(fields[3]).as_str()),
            end_date: parse_day(unescape(fields[4]).as_str()),
            waitlist: unescape(fields[5]).to_lowercase() == "true",
            delivery: Delivery::from(unescape(fields[6])),
            search: unescape(fields[7]),
        }
    }

    pub fn encode(&self) -> String {
        format!("{}:{}:{}:{}:{}:{}:{}:{}",
                encode_list(&self.items),
                encode_list(&self.users),
                encode_list(&self.records),
                self.start_date.map(|d| format_day(&d)).unwrap_or_default(),
                self.end_date.map(|d| format_day(&d)).unwrap_or_default(),
                self.waitlist,
                escape(self.delivery.to_string().as_str()),
                escape(self.search.as_str()))
    }

    pub fn remove_item(&mut self, id: &str) -> bool {
        remove_id(&mut self.items, id)
    }

    pub fn remove_user(&mut self, id: &str) -> bool {
        remove_id(&mut self.users, id)
    }

    pub fn remove_record(&mut self, id: &str) -> bool {
        remove_id(&mut self.records, id)
    }

    // picking a concrete item resolves its record: the record id leaves the
    // state and the item id joins it
    pub fn select_item(&mut self, record_id: &str, item_id: &str) {
        self.remove_record(record_id);
        self.items.push(item_id.to_string());
    }
}

fn remove_id(list: &mut Vec<String>, id: &str) -> bool {
    match list.iter().position(|entry| entry == id) {
        Some(index) => {
            list.remove(index);
            true
        }
        None => false,
    }
}

fn parse_list(field: &str) -> Vec<String> {
    if field.is_empty() {
        Vec::new()
    } else {
        field.split(',').map(unescape).collect()
    }
}

fn encode_list(list: &[String]) -> String {
    list.iter()
        .map(|entry| escape(entry.as_str()))
        .collect::<Vec<String>>()
        .join(",")
}

fn escape(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

fn unescape(value: &str) -> String {
    urlencoding::decode(value)
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| value.to_string())
}

// UserRecordParams is the smaller state carried by the user record page:
// <from>:<to>:<waitlist>:<delivery>
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct UserRecordParams {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub waitlist: bool,
    pub delivery: Delivery,
}

impl UserRecordParams {
    pub fn default_params(config: &Configuration, today: NaiveDate) -> Self {
        UserRecordParams {
            start_date: today,
            end_date: today + Duration::days(config.loan_period_days),
            waitlist: false,
            delivery: config.default_delivery,
        }
    }

    pub fn parse(state: Option<&str>, config: &Configuration, today: NaiveDate) -> Self {
        let state = match state {
            Some(s) if !s.is_empty() => s,
            _ => return Self::default_params(config, today),
        };
        let fields: Vec<&str> = state.splitn(4, ':').collect();
        if fields.len() < 4 {
            return Self::default_params(config, today);
        }
        let defaults = Self::default_params(config, today);
        UserRecordParams {
            start_date: parse_day(fields[0]).unwrap_or(defaults.start_date),
            end_date: parse_day(fields[1]).unwrap_or(defaults.end_date),
            waitlist: fields[2].to_lowercase() == "true",
            delivery: Delivery::from(fields[3].to_string()),
        }
    }

    pub fn encode(&self) -> String {
        format!("{}:{}:{}:{}",
                format_day(&self.start_date),
                format_day(&self.end_date),
                self.waitlist,
                self.delivery)
    }
}

use serde::{Deserialize, Serialize};
use crate::core::circulation::Delivery;

// Identifiable defines common traits that can be shared by stored records
pub trait Identifiable: Sync + Send {
    fn id(&self) -> String;
}

// ActionSpec pairs the label a result is recorded under with the server-side
// hook name the action is dispatched to.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct ActionSpec {
    pub label: String,
    pub hook: String,
}

impl ActionSpec {
    pub fn new(label: &str, hook: &str) -> Self {
        ActionSpec {
            label: label.to_string(),
            hook: hook.to_string(),
        }
    }
}

// Configuration abstracts config options for the circulation desk
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub base_url: String,
    pub search_endpoint: String,
    pub loan_period_days: i64,
    pub deliveries: Vec<Delivery>,
    pub default_delivery: Delivery,
    pub item_actions: Vec<ActionSpec>,
    pub hold_actions: Vec<ActionSpec>,
}

impl Configuration {
    pub fn new(base_url: &str) -> Self {
        Configuration {
            base_url: base_url.trim_end_matches('/').to_string(),
            search_endpoint: "/circulation/api/search".to_string(),
            loan_period_days: 28,
            deliveries: vec![Delivery::Mail, Delivery::Pickup],
            default_delivery: Delivery::Pickup,
            item_actions: vec![
                ActionSpec::new("loan", "loan"),
                ActionSpec::new("request", "request"),
                ActionSpec::new("ret", "return"),
            ],
            hold_actions: vec![
                ActionSpec::new("extend", "extend"),
                ActionSpec::new("lose", "lose"),
                ActionSpec::new("cancel", "cancel"),
            ],
        }
    }

    pub fn item_action(&self, label: &str) -> Option<&ActionSpec> {
        self.item_actions.iter().find(|spec| spec.label == label)
    }

    pub fn hold_action(&self, label: &str) -> Option<&ActionSpec> {
        self.hold_actions.iter().find(|spec| spec.label == label)
    }
}

#[cfg(test)]
mod tests {
    use crate::core::circulation::Delivery;
    use crate::core::domain::Configuration;

    #[tokio::test]
    async fn test_should_build_config() {
        let config = Configuration::new("http://localhost:5000/");
        assert_eq!("http://localhost:5000", config.base_url);
        assert_eq!(28, config.loan_period_days);
        assert_eq!(Delivery::Pickup, config.default_delivery);
        assert_eq!(3, config.item_actions.len());
        assert_eq!(3, config.hold_actions.len());
    }

    #[tokio::test]
    async fn test_should_find_actions_by_label() {
        let config = Configuration::new("http://localhost:5000");
        assert_eq!("return", config.item_action("ret").expect("should find action").hook);
        assert_eq!("extend", config.hold_action("extend").expect("should find action").hook);
        assert!(config.item_action("missing").is_none());
    }
}

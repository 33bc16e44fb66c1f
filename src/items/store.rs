use std::collections::HashMap;
use std::sync::Arc;
use serde_json::{Map, Value};
use tracing::debug;
use crate::core::circulation::{ActionOutcome, CirculationError, CirculationResult};
use crate::core::domain::ActionSpec;
use crate::gateway::api::CirculationGateway;
use crate::items::domain::model::ItemRecord;

// TrackedItem pairs an item with its own action-outcome map, so removal can
// never leave a record and its results out of step.
#[derive(Debug, Clone)]
pub struct TrackedItem {
    pub item: ItemRecord,
    pub results: HashMap<String, ActionOutcome>,
}

impl TrackedItem {
    fn new(item: ItemRecord) -> Self {
        TrackedItem {
            item,
            results: HashMap::new(),
        }
    }
}

// ItemStore holds the items selected into the circulation session and their
// dry-run validation outcomes.
pub struct ItemStore {
    gateway: Arc<dyn CirculationGateway>,
    records: Vec<TrackedItem>,
}

impl ItemStore {
    pub fn new(gateway: Arc<dyn CirculationGateway>) -> Self {
        Self {
            gateway,
            records: Vec::new(),
        }
    }

    pub fn records(&self) -> &[TrackedItem] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn ids(&self) -> Vec<String> {
        self.records.iter().map(|r| r.item.id.clone()).collect()
    }

    // appends items, each with a fresh empty outcome map
    pub fn extend(&mut self, items: Vec<ItemRecord>) {
        for item in items {
            self.records.push(TrackedItem::new(item));
        }
    }

    // list-loader semantics: drop everything, then fill from the new result
    pub fn replace(&mut self, items: Vec<ItemRecord>) {
        self.records.clear();
        self.extend(items);
    }

    pub fn remove(&mut self, index: usize) -> Option<ItemRecord> {
        if index < self.records.len() {
            Some(self.records.remove(index).item)
        } else {
            None
        }
    }

    pub fn results(&self, index: usize) -> Option<&HashMap<String, ActionOutcome>> {
        self.records.get(index).map(|r| &r.results)
    }

    // one dry-run post per action; a rejected dry run records Denied, it is
    // not an error of the validation pass itself
    pub async fn validate_item(&mut self, index: usize, actions: &[ActionSpec],
                               payload: &Map<String, Value>) -> CirculationResult<()> {
        let item_id = match self.records.get(index) {
            Some(record) => record.item.id.clone(),
            None => {
                return Err(CirculationError::validation(
                    format!("no item at index {}", index).as_str(), None));
            }
        };
        for spec in actions {
            let mut data = payload.clone();
            data.insert("item_id".to_string(), Value::String(item_id.clone()));
            let outcome = match self.gateway.hook_action(spec.hook.as_str(), &data, true).await {
                Ok(()) => ActionOutcome::Allowed,
                Err(err) => {
                    debug!("dry run {} denied for item {}: {}", spec.hook, item_id, err);
                    ActionOutcome::Denied
                }
            };
            self.records[index].results.insert(spec.label.clone(), outcome);
        }
        Ok(())
    }

    pub async fn validate_all(&mut self, actions: &[ActionSpec],
                              payload: &Map<String, Value>) -> CirculationResult<()> {
        for index in 0..self.records.len() {
            self.validate_item(index, actions, payload).await?;
        }
        Ok(())
    }

    // the real, non-dry-run action; failures surface to the caller
    pub async fn perform(&self, index: usize, hook: &str,
                         payload: &Map<String, Value>) -> CirculationResult<()> {
        let record = self.records.get(index).ok_or_else(|| {
            CirculationError::validation(format!("no item at index {}", index).as_str(), None)
        })?;
        let mut data = payload.clone();
        data.insert("item_id".to_string(), Value::String(record.item.id.clone()));
        self.gateway.hook_action(hook, &data, false).await
    }

    // aggregate status for bulk-action enablement: Unknown when the store is
    // empty, Denied as soon as any record is denied, Allowed otherwise
    pub fn action_state(&self, label: &str) -> ActionOutcome {
        if self.records.is_empty() {
            return ActionOutcome::Unknown;
        }
        let denied = self.records.iter().any(|record| {
            record.results.get(label) == Some(&ActionOutcome::Denied)
        });
        if denied {
            ActionOutcome::Denied
        } else {
            ActionOutcome::Allowed
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use serde_json::json;
    use crate::core::circulation::ActionOutcome;
    use crate::core::domain::Configuration;
    use crate::gateway::api::SearchHit;
    use crate::gateway::memory::InMemoryGateway;
    use crate::items::domain::model::ItemRecord;
    use crate::items::store::ItemStore;
    use crate::settings::store::Settings;

    fn item(id: &str) -> ItemRecord {
        ItemRecord::from_hit(&SearchHit { id: id.to_string(), metadata: json!({}) })
    }

    fn store() -> (Arc<InMemoryGateway>, ItemStore) {
        let gateway = Arc::new(InMemoryGateway::new());
        let store = ItemStore::new(gateway.clone());
        (gateway, store)
    }

    #[tokio::test]
    async fn test_should_extend_and_remove_items() {
        let (_, mut store) = store();
        store.extend(vec![item("item1"), item("item2")]);
        assert_eq!(2, store.len());
        assert_eq!(vec!["item1".to_string(), "item2".to_string()], store.ids());
        let removed = store.remove(0).expect("should remove item");
        assert_eq!("item1", removed.id.as_str());
        assert_eq!(vec!["item2".to_string()], store.ids());
        assert!(store.remove(5).is_none());
    }

    #[tokio::test]
    async fn test_should_keep_results_with_their_record() {
        let (gateway, mut store) = store();
        let config = Configuration::new("http://localhost:5000");
        let payload = Settings::new(&config).payload();
        store.extend(vec![item("item1"), item("item2")]);
        gateway.deny("loan").await;
        store.validate_item(0, &config.item_actions, &payload).await.expect("should validate");
        gateway.allow("loan").await;
        store.validate_item(1, &config.item_actions, &payload).await.expect("should validate");
        // removing the denied record takes its results with it
        store.remove(0);
        assert_eq!(1, store.len());
        assert_eq!(Some(&ActionOutcome::Allowed),
                   store.results(0).expect("should have results").get("loan"));
        assert_eq!(ActionOutcome::Allowed, store.action_state("loan"));
    }

    #[tokio::test]
    async fn test_should_replace_items() {
        let (_, mut store) = store();
        store.extend(vec![item("item1")]);
        store.replace(vec![item("item2"), item("item3")]);
        assert_eq!(vec!["item2".to_string(), "item3".to_string()], store.ids());
    }

    #[tokio::test]
    async fn test_should_record_denied_outcome() {
        let (gateway, mut store) = store();
        let config = Configuration::new("http://localhost:5000");
        let payload = Settings::new(&config).payload();
        store.extend(vec![item("item1")]);
        gateway.deny("request").await;
        store.validate_all(&config.item_actions, &payload).await.expect("should validate");
        let results = store.results(0).expect("should have results");
        assert_eq!(Some(&ActionOutcome::Allowed), results.get("loan"));
        assert_eq!(Some(&ActionOutcome::Denied), results.get("request"));
        assert_eq!(Some(&ActionOutcome::Allowed), results.get("ret"));
    }

    #[tokio::test]
    async fn test_should_aggregate_action_state() {
        let (gateway, mut store) = store();
        let config = Configuration::new("http://localhost:5000");
        let payload = Settings::new(&config).payload();
        // empty store has no opinion
        assert_eq!(ActionOutcome::Unknown, store.action_state("loan"));
        store.extend(vec![item("itemA"), item("itemB")]);
        // itemA denied, itemB allowed
        gateway.deny("loan").await;
        store.validate_item(0, &config.item_actions, &payload).await.expect("should validate");
        gateway.allow("loan").await;
        store.validate_item(1, &config.item_actions, &payload).await.expect("should validate");
        assert_eq!(ActionOutcome::Denied, store.action_state("loan"));
        assert_eq!(ActionOutcome::Allowed, store.action_state("request"));
    }

    #[tokio::test]
    async fn test_should_perform_real_action() {
        let (gateway, mut store) = store();
        let config = Configuration::new("http://localhost:5000");
        let payload = Settings::new(&config).payload();
        store.extend(vec![item("item1")]);
        store.perform(0, "loan", &payload).await.expect("should perform action");
        let performed = gateway.performed().await;
        assert_eq!(1, performed.len());
        assert_eq!("loan", performed[0].hook.as_str());
        assert_eq!(false, performed[0].dry_run);
        assert_eq!(Some(&json!("item1")), performed[0].payload.get("item_id"));
        assert!(store.perform(9, "loan", &payload).await.is_err());
    }

    #[tokio::test]
    async fn test_should_reject_validation_of_missing_index() {
        let (_, mut store) = store();
        let config = Configuration::new("http://localhost:5000");
        let payload = Settings::new(&config).payload();
        assert!(store.validate_item(0, &config.item_actions, &payload).await.is_err());
    }
}

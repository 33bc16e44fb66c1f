use std::collections::HashMap;
use std::sync::Arc;
use serde_json::{Map, Value};
use crate::core::circulation::{ActionOutcome, CirculationResult};
use crate::core::domain::ActionSpec;
use crate::gateway::api::SearchGateway;
use crate::items::domain::model::ItemRecord;
use crate::items::store::ItemStore;

// CirculationList fills an item store from a search endpoint, replacing
// whatever was displayed before.
pub struct CirculationList {
    search: Arc<dyn SearchGateway>,
    pub store: ItemStore,
}

impl CirculationList {
    pub fn new(search: Arc<dyn SearchGateway>, store: ItemStore) -> Self {
        Self { search, store }
    }

    pub async fn load(&mut self, query: &str) -> CirculationResult<usize> {
        let hits = self.search.search(query).await?;
        self.store.replace(hits.iter().map(ItemRecord::from_hit).collect());
        Ok(self.store.len())
    }

    // admin-item panel behavior: validate a single item on attach and hand
    // back a snapshot of its outcomes
    pub async fn inspect(&mut self, index: usize, actions: &[ActionSpec],
                         payload: &Map<String, Value>)
                         -> CirculationResult<HashMap<String, ActionOutcome>> {
        self.store.validate_item(index, actions, payload).await?;
        Ok(self.store.results(index).cloned().unwrap_or_default())
    }
}

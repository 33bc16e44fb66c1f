use std::collections::HashMap;
use std::sync::Arc;
use chrono::NaiveDate;
use serde_json::{Map, Value};
use tracing::debug;
use crate::core::circulation::{ActionOutcome, CirculationError, CirculationResult};
use crate::core::domain::ActionSpec;
use crate::gateway::api::CirculationGateway;
use crate::holds::domain::model::Hold;
use crate::items::domain::model::ItemRecord;

#[derive(Debug, Clone)]
pub struct TrackedHold {
    pub hold: Hold,
    pub results: HashMap<String, ActionOutcome>,
}

impl TrackedHold {
    fn new(hold: Hold) -> Self {
        TrackedHold {
            hold,
            results: HashMap::new(),
        }
    }
}

// HoldStore holds the categorized holds of one user and their dry-run
// validation outcomes.
pub struct HoldStore {
    gateway: Arc<dyn CirculationGateway>,
    records: Vec<TrackedHold>,
}

impl HoldStore {
    pub fn new(gateway: Arc<dyn CirculationGateway>) -> Self {
        Self {
            gateway,
            records: Vec::new(),
        }
    }

    pub fn records(&self) -> &[TrackedHold] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn results(&self, index: usize) -> Option<&HashMap<String, ActionOutcome>> {
        self.records.get(index).map(|r| &r.results)
    }

    // walks every item's holdings and keeps the ones belonging to the user,
    // stamped with the item reference and the loan flag
    pub fn categorize(&mut self, user_id: &str, items: &[ItemRecord],
                      today: NaiveDate) -> usize {
        let mut appended = 0;
        for (index, item) in items.iter().enumerate() {
            for holding in item.holdings() {
                if holding.user_id == user_id {
                    self.records.push(TrackedHold::new(
                        Hold::from_holding(&holding, item, index, today)));
                    appended += 1;
                }
            }
        }
        appended
    }

    pub fn remove(&mut self, index: usize) -> Option<Hold> {
        if index < self.records.len() {
            Some(self.records.remove(index).hold)
        } else {
            None
        }
    }

    pub async fn validate_hold(&mut self, index: usize, actions: &[ActionSpec],
                               payload: &Map<String, Value>) -> CirculationResult<()> {
        let (hold_id, item_id) = match self.records.get(index) {
            Some(record) => (record.hold.id.clone(), record.hold.item_id.clone()),
            None => {
                return Err(CirculationError::validation(
                    format!("no hold at index {}", index).as_str(), None));
            }
        };
        for spec in actions {
            let mut data = payload.clone();
            data.insert("hold_id".to_string(), Value::String(hold_id.clone()));
            data.insert("item_id".to_string(), Value::String(item_id.clone()));
            let outcome = match self.gateway.hook_action(spec.hook.as_str(), &data, true).await {
                Ok(()) => ActionOutcome::Allowed,
                Err(err) => {
                    debug!("dry run {} denied for hold {}: {}", spec.hook, hold_id, err);
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
            self.validate_hold(index, actions, payload).await?;
        }
        Ok(())
    }

    pub async fn perform(&self, index: usize, hook: &str,
                         payload: &Map<String, Value>) -> CirculationResult<()> {
        let record = self.records.get(index).ok_or_else(|| {
            CirculationError::validation(format!("no hold at index {}", index).as_str(), None)
        })?;
        let mut data = payload.clone();
        data.insert("hold_id".to_string(), Value::String(record.hold.id.clone()));
        data.insert("item_id".to_string(), Value::String(record.hold.item_id.clone()));
        self.gateway.hook_action(hook, &data, false).await
    }
}

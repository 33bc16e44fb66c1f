use std::sync::Arc;
use chrono::NaiveDate;
use tracing::info;
use crate::core::circulation::CirculationResult;
use crate::core::domain::Configuration;
use crate::gateway::api::SearchGateway;
use crate::holds::store::{HoldStore, TrackedHold};
use crate::items::domain::model::ItemRecord;
use crate::settings::store::Settings;

// UserHub drives the current-holds page of one user: it loads the user's
// holds from search, keeps them partitioned into current loans and current
// requests, and runs the extend/lose/cancel actions.
pub struct UserHub {
    user_id: String,
    config: Configuration,
    settings: Settings,
    search: Arc<dyn SearchGateway>,
    store: HoldStore,
    current_loans: Vec<usize>,
    current_requests: Vec<usize>,
}

impl UserHub {
    pub fn new(user_id: &str, config: &Configuration, search: Arc<dyn SearchGateway>,
               store: HoldStore) -> Self {
        Self {
            user_id: user_id.to_string(),
            config: config.clone(),
            settings: Settings::new(config),
            search,
            store,
            current_loans: Vec::new(),
            current_requests: Vec::new(),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn holds(&self) -> &[TrackedHold] {
        self.store.records()
    }

    pub fn current_loans(&self) -> Vec<&TrackedHold> {
        self.current_loans.iter().filter_map(|&i| self.store.records().get(i)).collect()
    }

    pub fn current_requests(&self) -> Vec<&TrackedHold> {
        self.current_requests.iter().filter_map(|&i| self.store.records().get(i)).collect()
    }

    pub async fn load(&mut self, today: NaiveDate) -> CirculationResult<usize> {
        let query = format!("_circulation.holdings.user_id:{}", self.user_id);
        let hits = self.search.search(query.as_str()).await?;
        let items: Vec<ItemRecord> = hits.iter().map(ItemRecord::from_hit).collect();
        let appended = self.store.categorize(self.user_id.as_str(), &items, today);
        info!("categorized {} holds for user {}", appended, self.user_id);
        self.revalidate().await?;
        self.distribute();
        Ok(appended)
    }

    // re-runs the dry-run validation of every hold against the current
    // settings; called after every settings mutation
    pub async fn revalidate(&mut self) -> CirculationResult<()> {
        let payload = self.settings.payload();
        self.store.validate_all(&self.config.hold_actions, &payload).await
    }

    pub async fn update_settings<F>(&mut self, mutate: F) -> CirculationResult<()>
        where F: FnOnce(&mut Settings) {
        mutate(&mut self.settings);
        self.revalidate().await
    }

    pub async fn extend_loan(&mut self, index: usize) -> CirculationResult<()> {
        let payload = self.settings.payload();
        self.store.perform(index, self.hold_hook("extend").as_str(), &payload).await
    }

    pub async fn lose_hold(&mut self, index: usize) -> CirculationResult<()> {
        let payload = self.settings.payload();
        self.store.perform(index, self.hold_hook("lose").as_str(), &payload).await?;
        self.store.remove(index);
        self.distribute();
        Ok(())
    }

    pub async fn cancel_request(&mut self, index: usize) -> CirculationResult<()> {
        let payload = self.settings.payload();
        self.store.perform(index, self.hold_hook("cancel").as_str(), &payload).await?;
        self.store.remove(index);
        self.distribute();
        Ok(())
    }

    fn hold_hook(&self, label: &str) -> String {
        self.config.hold_action(label)
            .map(|spec| spec.hook.clone())
            .unwrap_or_else(|| label.to_string())
    }

    fn distribute(&mut self) {
        self.current_loans.clear();
        self.current_requests.clear();
        for (index, record) in self.store.records().iter().enumerate() {
            if record.hold.loan {
                self.current_loans.push(index);
            } else {
                self.current_requests.push(index);
            }
        }
    }
}

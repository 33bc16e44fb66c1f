use serde::{Deserialize, Serialize};
use tracing::warn;
use crate::core::circulation::{ActionOutcome, CirculationResult};
use crate::core::domain::Configuration;
use crate::items::domain::model::ItemRecord;
use crate::items::store::ItemStore;
use crate::settings::store::Settings;
use crate::users::domain::model::UserRecord;
use crate::users::store::UserStore;

// Aggregate enablement state of the three bulk buttons.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub struct ActionStatus {
    pub loan: ActionOutcome,
    pub request: ActionOutcome,
    pub ret: ActionOutcome,
}

impl ActionStatus {
    pub fn new() -> Self {
        ActionStatus {
            loan: ActionOutcome::Unknown,
            request: ActionOutcome::Unknown,
            ret: ActionOutcome::Unknown,
        }
    }
}

// CirculationDesk drives the main circulation page: the selected items and
// users, the current settings, and the bulk loan/request/return actions.
// Every mutation that can change an outcome re-validates and recomputes the
// aggregate status.
pub struct CirculationDesk {
    config: Configuration,
    settings: Settings,
    items: ItemStore,
    users: UserStore,
    action_status: ActionStatus,
}

impl CirculationDesk {
    pub fn new(config: &Configuration, items: ItemStore) -> Self {
        Self {
            config: config.clone(),
            settings: Settings::new(config),
            items,
            users: UserStore::new(),
            action_status: ActionStatus::new(),
        }
    }

    pub fn items(&self) -> &ItemStore {
        &self.items
    }

    pub fn users(&self) -> &UserStore {
        &self.users
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn action_status(&self) -> ActionStatus {
        self.action_status
    }

    pub async fn add_items(&mut self, items: Vec<ItemRecord>) -> CirculationResult<()> {
        self.items.extend(items);
        self.refresh().await
    }

    pub async fn add_users(&mut self, users: Vec<UserRecord>) -> CirculationResult<()> {
        self.users.extend(users);
        self.refresh().await
    }

    // dropping an item needs no new dry runs, only a fresh aggregate
    pub fn remove_item(&mut self, index: usize) -> Option<ItemRecord> {
        let removed = self.items.remove(index);
        self.recompute_status();
        removed
    }

    pub async fn remove_user(&mut self, index: usize) -> CirculationResult<Option<UserRecord>> {
        let removed = self.users.remove(index);
        self.refresh().await?;
        Ok(removed)
    }

    pub async fn update_settings<F>(&mut self, mutate: F) -> CirculationResult<()>
        where F: FnOnce(&mut Settings) {
        mutate(&mut self.settings);
        self.refresh().await
    }

    // re-validates every item against the current settings and recomputes
    // the aggregate status
    pub async fn refresh(&mut self) -> CirculationResult<()> {
        let payload = self.settings.payload();
        self.items.validate_all(&self.config.item_actions, &payload).await?;
        self.recompute_status();
        Ok(())
    }

    pub async fn loan_items(&mut self) -> CirculationResult<usize> {
        self.perform_on_items("loan").await
    }

    pub async fn request_items(&mut self) -> CirculationResult<usize> {
        self.perform_on_items("request").await
    }

    pub async fn return_items(&mut self) -> CirculationResult<usize> {
        self.perform_on_items("ret").await
    }

    // posts the action for every item; individual failures are logged and
    // counted out, then everything is re-validated
    async fn perform_on_items(&mut self, label: &str) -> CirculationResult<usize> {
        let hook = self.config.item_action(label)
            .map(|spec| spec.hook.clone())
            .unwrap_or_else(|| label.to_string());
        let payload = self.settings.payload();
        let mut performed = 0;
        for index in 0..self.items.len() {
            match self.items.perform(index, hook.as_str(), &payload).await {
                Ok(()) => performed += 1,
                Err(err) => {
                    warn!("bulk {} failed for item index {}: {}", hook, index, err);
                }
            }
        }
        self.refresh().await?;
        Ok(performed)
    }

    fn recompute_status(&mut self) {
        self.action_status = ActionStatus {
            loan: self.items.action_state("loan"),
            request: self.items.action_state("request"),
            ret: self.items.action_state("ret"),
        };
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use serde_json::json;
    use crate::core::circulation::ActionOutcome;
    use crate::core::domain::Configuration;
    use crate::desk::controller::CirculationDesk;
    use crate::gateway::api::SearchHit;
    use crate::gateway::memory::InMemoryGateway;
    use crate::items::domain::model::ItemRecord;
    use crate::items::store::ItemStore;
    use crate::users::domain::model::UserRecord;

    fn item(id: &str) -> ItemRecord {
        ItemRecord::from_hit(&SearchHit { id: id.to_string(), metadata: json!({}) })
    }

    fn user(id: &str) -> UserRecord {
        UserRecord::from_hit(&SearchHit { id: id.to_string(), metadata: json!({}) })
    }

    fn desk(gateway: &Arc<InMemoryGateway>) -> CirculationDesk {
        let config = Configuration::new("http://localhost:5000");
        CirculationDesk::new(&config, ItemStore::new(gateway.clone()))
    }

    #[tokio::test]
    async fn test_should_start_with_unknown_status() {
        let gateway = Arc::new(InMemoryGateway::new());
        let desk = desk(&gateway);
        assert_eq!(ActionOutcome::Unknown, desk.action_status().loan);
        assert_eq!(ActionOutcome::Unknown, desk.action_status().request);
        assert_eq!(ActionOutcome::Unknown, desk.action_status().ret);
    }

    #[tokio::test]
    async fn test_should_validate_added_items() {
        let gateway = Arc::new(InMemoryGateway::new());
        gateway.deny("request").await;
        let mut desk = desk(&gateway);
        desk.add_items(vec![item("item1"), item("item2")]).await.expect("should add items");
        assert_eq!(ActionOutcome::Allowed, desk.action_status().loan);
        assert_eq!(ActionOutcome::Denied, desk.action_status().request);
        assert_eq!(ActionOutcome::Allowed, desk.action_status().ret);
    }

    #[tokio::test]
    async fn test_should_recompute_status_on_item_removal() {
        let gateway = Arc::new(InMemoryGateway::new());
        let mut desk = desk(&gateway);
        desk.add_items(vec![item("item1")]).await.expect("should add items");
        assert_eq!(ActionOutcome::Allowed, desk.action_status().loan);
        let removed = desk.remove_item(0).expect("should remove item");
        assert_eq!("item1", removed.id.as_str());
        assert_eq!(ActionOutcome::Unknown, desk.action_status().loan);
    }

    #[tokio::test]
    async fn test_should_revalidate_on_settings_change() {
        let gateway = Arc::new(InMemoryGateway::new());
        let mut desk = desk(&gateway);
        desk.add_items(vec![item("item1")]).await.expect("should add items");
        let before = gateway.performed().await.len();
        desk.update_settings(|settings| settings.waitlist = true).await
            .expect("should update settings");
        assert!(gateway.performed().await.len() > before);
        let last = gateway.performed().await.pop().expect("should have dry runs");
        assert_eq!(Some(&json!(true)), last.payload.get("waitlist"));
    }

    #[tokio::test]
    async fn test_should_revalidate_on_user_change() {
        let gateway = Arc::new(InMemoryGateway::new());
        let mut desk = desk(&gateway);
        desk.add_items(vec![item("item1")]).await.expect("should add items");
        desk.add_users(vec![user("user1")]).await.expect("should add users");
        let before = gateway.performed().await.len();
        let removed = desk.remove_user(0).await.expect("should remove user");
        assert_eq!("user1", removed.expect("should return removed user").id.as_str());
        assert!(gateway.performed().await.len() > before);
    }

    #[tokio::test]
    async fn test_should_perform_bulk_actions_and_revalidate() {
        let gateway = Arc::new(InMemoryGateway::new());
        let mut desk = desk(&gateway);
        desk.add_items(vec![item("item1"), item("item2")]).await.expect("should add items");
        let performed = desk.loan_items().await.expect("should loan items");
        assert_eq!(2, performed);
        let real: Vec<_> = gateway.performed().await.into_iter()
            .filter(|p| !p.dry_run).collect();
        assert_eq!(2, real.len());
        assert!(real.iter().all(|p| p.hook == "loan"));
    }

    #[tokio::test]
    async fn test_should_count_out_failed_bulk_actions() {
        let gateway = Arc::new(InMemoryGateway::new());
        let mut desk = desk(&gateway);
        desk.add_items(vec![item("item1"), item("item2")]).await.expect("should add items");
        gateway.deny("return").await;
        let performed = desk.return_items().await.expect("should run bulk return");
        assert_eq!(0, performed);
        assert_eq!(ActionOutcome::Denied, desk.action_status().ret);
    }
}

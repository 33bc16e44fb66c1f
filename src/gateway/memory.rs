use std::collections::HashMap;
use async_trait::async_trait;
use chrono::{Duration, NaiveDate};
use rand::Rng;
use serde_json::{json, Map, Value};
use tokio::sync::Mutex;
use tracing::debug;
use uuid::Uuid;
use crate::core::circulation::{CirculationError, CirculationResult};
use crate::gateway::api::{ActionRequest, CirculationGateway, EntityGateway,
                          SearchGateway, SearchHit, Suggestion, USER_ACTIONS};
use crate::entities::domain::EntityKind;

// A recorded call against the in-memory gateway, dry runs included.
#[derive(Debug, PartialEq, Clone)]
pub struct PerformedAction {
    pub hook: String,
    pub payload: Map<String, Value>,
    pub dry_run: bool,
}

// InMemoryGateway is the local backend: every trait call is answered from
// process memory. Verdicts are scriptable per hook/action name; everything
// else records what it was asked so callers can assert on it.
pub struct InMemoryGateway {
    verdicts: Mutex<HashMap<String, bool>>,
    performed: Mutex<Vec<PerformedAction>>,
    actions: Mutex<Vec<ActionRequest>>,
    hits: Mutex<Vec<SearchHit>>,
    entities: Mutex<HashMap<String, Value>>,
    suggestions: Mutex<HashMap<String, Vec<Suggestion>>>,
}

impl InMemoryGateway {
    pub fn new() -> Self {
        Self {
            verdicts: Mutex::new(HashMap::new()),
            performed: Mutex::new(Vec::new()),
            actions: Mutex::new(Vec::new()),
            hits: Mutex::new(Vec::new()),
            entities: Mutex::new(HashMap::new()),
            suggestions: Mutex::new(HashMap::new()),
        }
    }

    pub async fn deny(&self, name: &str) {
        self.verdicts.lock().await.insert(name.to_string(), false);
    }

    pub async fn allow(&self, name: &str) {
        self.verdicts.lock().await.insert(name.to_string(), true);
    }

    pub async fn seed_hits(&self, hits: Vec<SearchHit>) {
        *self.hits.lock().await = hits;
    }

    pub async fn seed_suggestions(&self, kind: EntityKind, suggestions: Vec<Suggestion>) {
        self.suggestions.lock().await.insert(kind.to_string(), suggestions);
    }

    pub async fn seed_entity(&self, kind: EntityKind, id: &str, data: Value) {
        self.entities.lock().await.insert(entity_key(kind, id), data);
    }

    pub async fn performed(&self) -> Vec<PerformedAction> {
        self.performed.lock().await.clone()
    }

    pub async fn actions(&self) -> Vec<ActionRequest> {
        self.actions.lock().await.clone()
    }

    pub async fn entity(&self, kind: EntityKind, id: &str) -> Option<Value> {
        self.entities.lock().await.get(entity_key(kind, id).as_str()).cloned()
    }

    // Seeds one item document with two holdings for the given user: a loan
    // that started yesterday and a request starting tomorrow.
    pub async fn seed_demo(&self, user_id: &str, today: NaiveDate) -> String {
        let item_id = Uuid::new_v4().to_string();
        let barcode = format!("{}", rand::thread_rng().gen_range(100000..999999));
        let yesterday = today - Duration::days(1);
        let tomorrow = today + Duration::days(1);
        let hit = SearchHit {
            id: item_id.clone(),
            metadata: json!({
                "barcode": barcode,
                "title": "demo item",
                "_circulation": {"holdings": [
                    {
                        "id": Uuid::new_v4().to_string(),
                        "user_id": user_id,
                        "start_date": yesterday.format("%Y-%m-%d").to_string(),
                        "end_date": today.format("%Y-%m-%d").to_string(),
                    },
                    {
                        "id": Uuid::new_v4().to_string(),
                        "user_id": user_id,
                        "start_date": tomorrow.format("%Y-%m-%d").to_string(),
                        "end_date": tomorrow.format("%Y-%m-%d").to_string(),
                    }
                ]}
            }),
        };
        self.hits.lock().await.push(hit);
        item_id
    }

    async fn verdict(&self, name: &str) -> bool {
        *self.verdicts.lock().await.get(name).unwrap_or(&true)
    }
}

fn entity_key(kind: EntityKind, id: &str) -> String {
    format!("{}/{}", kind, id)
}

#[async_trait]
impl CirculationGateway for InMemoryGateway {
    async fn hook_action(&self, hook: &str, payload: &Map<String, Value>,
                         dry_run: bool) -> CirculationResult<()> {
        self.performed.lock().await.push(PerformedAction {
            hook: hook.to_string(),
            payload: payload.clone(),
            dry_run,
        });
        if self.verdict(hook).await {
            Ok(())
        } else {
            Err(CirculationError::validation(
                format!("action {} denied", hook).as_str(), Some("400".to_string())))
        }
    }

    async fn run_action(&self, req: &ActionRequest) -> CirculationResult<()> {
        self.actions.lock().await.push(req.clone());
        if self.verdict(req.action.as_str()).await {
            Ok(())
        } else {
            Err(CirculationError::validation(
                format!("action {} denied", req.action).as_str(), Some("500".to_string())))
        }
    }

    async fn try_action(&self, req: &ActionRequest) -> CirculationResult<bool> {
        Ok(self.verdict(req.action.as_str()).await)
    }

    async fn run_user_action(&self, req: &ActionRequest) -> CirculationResult<()> {
        if !USER_ACTIONS.contains(&req.action.as_str()) {
            return Err(CirculationError::validation(
                format!("user action {} is not permitted", req.action).as_str(),
                Some("400".to_string())));
        }
        self.run_action(req).await
    }
}

#[async_trait]
impl EntityGateway for InMemoryGateway {
    async fn create_entity(&self, kind: EntityKind, data: &Value) -> CirculationResult<()> {
        let id = Uuid::new_v4().to_string();
        debug!("creating {} entity {}", kind, id);
        self.entities.lock().await.insert(entity_key(kind, id.as_str()), data.clone());
        Ok(())
    }

    async fn update_entity(&self, kind: EntityKind, id: &str, data: &Value) -> CirculationResult<()> {
        let mut entities = self.entities.lock().await;
        let key = entity_key(kind, id);
        if !entities.contains_key(key.as_str()) {
            return Err(CirculationError::not_found(
                format!("{} entity with id {} not found", kind, id).as_str()));
        }
        entities.insert(key, data.clone());
        Ok(())
    }

    async fn delete_entity(&self, kind: EntityKind, id: &str) -> CirculationResult<()> {
        let mut entities = self.entities.lock().await;
        if entities.remove(entity_key(kind, id).as_str()).is_none() {
            return Err(CirculationError::not_found(
                format!("{} entity with id {} not found", kind, id).as_str()));
        }
        Ok(())
    }

    async fn search_entities(&self, kind: EntityKind, search: &str) -> CirculationResult<Vec<Value>> {
        let prefix = format!("{}/", kind);
        let entities = self.entities.lock().await;
        Ok(entities.iter()
            .filter(|(key, value)| {
                key.starts_with(prefix.as_str()) && value.to_string().contains(search)
            })
            .map(|(_, value)| value.clone())
            .collect())
    }

    async fn search_autocomplete(&self, kind: EntityKind, search: &str) -> CirculationResult<Vec<Suggestion>> {
        let suggestions = self.suggestions.lock().await;
        Ok(suggestions.get(kind.to_string().as_str())
            .map(|list| {
                list.iter()
                    .filter(|s| s.value.contains(search))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }
}

#[async_trait]
impl SearchGateway for InMemoryGateway {
    // the in-memory index has no query language; it returns what was seeded
    async fn search(&self, query: &str) -> CirculationResult<Vec<SearchHit>> {
        debug!("searching {}", query);
        Ok(self.hits.lock().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Map};
    use crate::core::circulation::CirculationError;
    use crate::entities::domain::EntityKind;
    use crate::gateway::api::{ActionRequest, CirculationGateway, EntityGateway,
                              SearchGateway, Suggestion};
    use crate::gateway::memory::InMemoryGateway;

    #[tokio::test]
    async fn test_should_record_hook_actions() {
        let gateway = InMemoryGateway::new();
        let payload = Map::new();
        gateway.hook_action("loan", &payload, true).await.expect("should allow by default");
        gateway.deny("loan").await;
        let res = gateway.hook_action("loan", &payload, false).await;
        assert!(matches!(res, Err(CirculationError::Validation { message: _, reason_code: _ })));
        let performed = gateway.performed().await;
        assert_eq!(2, performed.len());
        assert_eq!(true, performed[0].dry_run);
        assert_eq!(false, performed[1].dry_run);
    }

    #[tokio::test]
    async fn test_should_run_and_try_actions() {
        let gateway = InMemoryGateway::new();
        let req = ActionRequest::new("loan");
        gateway.run_action(&req).await.expect("should run action");
        assert_eq!(true, gateway.try_action(&req).await.expect("should try action"));
        gateway.deny("loan").await;
        assert_eq!(false, gateway.try_action(&req).await.expect("should try action"));
        assert!(gateway.run_action(&req).await.is_err());
        assert_eq!(2, gateway.actions().await.len());
    }

    #[tokio::test]
    async fn test_should_restrict_user_actions() {
        let gateway = InMemoryGateway::new();
        let res = gateway.run_user_action(&ActionRequest::new("loan")).await;
        assert!(res.is_err());
        gateway.run_user_action(&ActionRequest::new("loan_extension")).await
            .expect("should run permitted user action");
    }

    #[tokio::test]
    async fn test_should_create_update_delete_entity() {
        let gateway = InMemoryGateway::new();
        gateway.seed_entity(EntityKind::Location, "loc1", json!({"code": "A"})).await;
        gateway.update_entity(EntityKind::Location, "loc1", &json!({"code": "B"})).await
            .expect("should update entity");
        assert_eq!(json!({"code": "B"}),
                   gateway.entity(EntityKind::Location, "loc1").await.expect("should get entity"));
        gateway.delete_entity(EntityKind::Location, "loc1").await.expect("should delete entity");
        assert!(gateway.delete_entity(EntityKind::Location, "loc1").await.is_err());
        assert!(gateway.update_entity(EntityKind::Location, "loc1", &json!({})).await.is_err());
    }

    #[tokio::test]
    async fn test_should_search_entities_by_content() {
        let gateway = InMemoryGateway::new();
        gateway.seed_entity(EntityKind::User, "u1", json!({"name": "Doe, John"})).await;
        gateway.seed_entity(EntityKind::User, "u2", json!({"name": "Roe, Jane"})).await;
        let found = gateway.search_entities(EntityKind::User, "Doe").await
            .expect("should search entities");
        assert_eq!(1, found.len());
    }

    #[tokio::test]
    async fn test_should_filter_suggestions() {
        let gateway = InMemoryGateway::new();
        gateway.seed_suggestions(EntityKind::User, vec![
            Suggestion::new("1", "Doe, John"),
            Suggestion::new("2", "Roe, Jane"),
        ]).await;
        let found = gateway.search_autocomplete(EntityKind::User, "Roe").await
            .expect("should autocomplete");
        assert_eq!(1, found.len());
        assert_eq!("2", found[0].id);
    }

    #[tokio::test]
    async fn test_should_seed_demo_holdings() {
        let gateway = InMemoryGateway::new();
        let today = chrono::NaiveDate::from_ymd_opt(2016, 3, 1).unwrap();
        let item_id = gateway.seed_demo("user1", today).await;
        let hits = gateway.search("_circulation.holdings.user_id:user1").await
            .expect("should search");
        assert_eq!(1, hits.len());
        assert_eq!(item_id, hits[0].id);
        assert_eq!(2, hits[0].metadata["_circulation"]["holdings"].as_array()
            .expect("should have holdings").len());
    }
}

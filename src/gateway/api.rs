use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use crate::core::circulation::CirculationResult;
use crate::entities::domain::EntityKind;

// Actions the server accepts on the user-facing run_action endpoint.
pub const USER_ACTIONS: &[&str] = &["request", "loan_extension", "cancel_clcs"];

// ActionRequest carries an action name plus its free-form parameters, the
// way the circulation pages collect them from settings and data attributes.
#[derive(Debug, PartialEq, Clone)]
pub struct ActionRequest {
    pub action: String,
    pub params: Map<String, Value>,
}

impl ActionRequest {
    pub fn new(action: &str) -> Self {
        ActionRequest {
            action: action.to_string(),
            params: Map::new(),
        }
    }

    pub fn with(mut self, key: &str, value: Value) -> Self {
        self.params.insert(key.to_string(), value);
        self
    }

    pub fn with_params(mut self, params: &Map<String, Value>) -> Self {
        for (key, value) in params {
            self.params.insert(key.clone(), value.clone());
        }
        self
    }

    pub fn body(&self) -> Value {
        let mut data = self.params.clone();
        data.insert("action".to_string(), Value::String(self.action.clone()));
        Value::Object(data)
    }
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Suggestion {
    pub id: String,
    pub value: String,
}

impl Suggestion {
    pub fn new(id: &str, value: &str) -> Self {
        Suggestion {
            id: id.to_string(),
            value: value.to_string(),
        }
    }
}

// A single document from the search endpoint's hits/hits envelope.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct SearchHit {
    pub id: String,
    #[serde(default)]
    pub metadata: Value,
}

#[derive(Debug, Deserialize)]
pub struct SearchEnvelope {
    pub hits: SearchHits,
}

#[derive(Debug, Deserialize)]
pub struct SearchHits {
    pub hits: Vec<SearchHit>,
}

#[async_trait]
pub trait CirculationGateway: Sync + Send {
    // posts to the circulation_{hook} receiver; dry_run reports feasibility
    // without mutating server state
    async fn hook_action(&self, hook: &str, payload: &Map<String, Value>,
                         dry_run: bool) -> CirculationResult<()>;

    async fn run_action(&self, req: &ActionRequest) -> CirculationResult<()>;

    async fn try_action(&self, req: &ActionRequest) -> CirculationResult<bool>;

    async fn run_user_action(&self, req: &ActionRequest) -> CirculationResult<()>;
}

#[async_trait]
pub trait EntityGateway: Sync + Send {
    async fn create_entity(&self, kind: EntityKind, data: &Value) -> CirculationResult<()>;

    async fn update_entity(&self, kind: EntityKind, id: &str, data: &Value) -> CirculationResult<()>;

    async fn delete_entity(&self, kind: EntityKind, id: &str) -> CirculationResult<()>;

    async fn search_entities(&self, kind: EntityKind, search: &str) -> CirculationResult<Vec<Value>>;

    async fn search_autocomplete(&self, kind: EntityKind, search: &str) -> CirculationResult<Vec<Suggestion>>;
}

#[async_trait]
pub trait SearchGateway: Sync + Send {
    async fn search(&self, query: &str) -> CirculationResult<Vec<SearchHit>>;
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Map, Value};
    use crate::gateway::api::{ActionRequest, SearchEnvelope, Suggestion};

    #[tokio::test]
    async fn test_should_build_action_request_body() {
        let mut settings = Map::new();
        settings.insert("waitlist".to_string(), Value::Bool(false));
        let req = ActionRequest::new("loan")
            .with("item_id", json!("item1"))
            .with_params(&settings);
        let body = req.body();
        assert_eq!(json!("loan"), body["action"]);
        assert_eq!(json!("item1"), body["item_id"]);
        assert_eq!(json!(false), body["waitlist"]);
    }

    #[tokio::test]
    async fn test_should_build_suggestion() {
        let suggestion = Suggestion::new("1", "Doe, John - CERN");
        assert_eq!("1", suggestion.id);
        assert_eq!("Doe, John - CERN", suggestion.value);
    }

    #[tokio::test]
    async fn test_should_parse_search_envelope() {
        let raw = json!({"hits": {"hits": [
            {"id": "item1", "metadata": {"title": "test"}},
            {"id": "item2"}
        ]}});
        let envelope: SearchEnvelope = serde_json::from_value(raw).expect("should parse envelope");
        assert_eq!(2, envelope.hits.hits.len());
        assert_eq!("item1", envelope.hits.hits[0].id);
        assert_eq!(Value::Null, envelope.hits.hits[1].metadata);
    }
}

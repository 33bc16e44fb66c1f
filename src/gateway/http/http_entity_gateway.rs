use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::debug;
use crate::core::circulation::CirculationResult;
use crate::core::domain::Configuration;
use crate::entities::domain::EntityKind;
use crate::gateway::api::{EntityGateway, Suggestion};
use crate::gateway::http::{build_client, post_wrapped};

// HttpEntityGateway drives the uniform entity create/search/update/delete API.
pub struct HttpEntityGateway {
    client: reqwest::Client,
    base_url: String,
}

impl HttpEntityGateway {
    pub fn new(config: &Configuration) -> CirculationResult<Self> {
        Ok(Self {
            client: build_client()?,
            base_url: config.base_url.clone(),
        })
    }

    fn entity_url(&self, path: &str) -> String {
        format!("{}/circulation/api/entity/{}", self.base_url, path)
    }
}

#[async_trait]
impl EntityGateway for HttpEntityGateway {
    async fn create_entity(&self, kind: EntityKind, data: &Value) -> CirculationResult<()> {
        let body = json!({"entity": kind.to_string(), "data": data});
        debug!("creating {} entity", kind);
        let _ = post_wrapped(&self.client, self.entity_url("create").as_str(), &body).await?;
        Ok(())
    }

    async fn update_entity(&self, kind: EntityKind, id: &str, data: &Value) -> CirculationResult<()> {
        let body = json!({"entity": kind.to_string(), "id": id, "data": data});
        debug!("updating {} entity {}", kind, id);
        let _ = post_wrapped(&self.client, self.entity_url("update").as_str(), &body).await?;
        Ok(())
    }

    async fn delete_entity(&self, kind: EntityKind, id: &str) -> CirculationResult<()> {
        let body = json!({"entity": kind.to_string(), "id": id});
        debug!("deleting {} entity {}", kind, id);
        let _ = post_wrapped(&self.client, self.entity_url("delete").as_str(), &body).await?;
        Ok(())
    }

    async fn search_entities(&self, kind: EntityKind, search: &str) -> CirculationResult<Vec<Value>> {
        let body = json!({"entity": kind.to_string(), "search": search});
        let text = post_wrapped(&self.client, self.entity_url("search").as_str(), &body).await?;
        let entities: Vec<Value> = serde_json::from_str(text.as_str())?;
        Ok(entities)
    }

    async fn search_autocomplete(&self, kind: EntityKind, search: &str) -> CirculationResult<Vec<Suggestion>> {
        let body = json!({"entity": kind.to_string(), "search": search});
        let text = post_wrapped(&self.client, self.entity_url("search_autocomplete").as_str(), &body).await?;
        let suggestions: Vec<Suggestion> = serde_json::from_str(text.as_str())?;
        Ok(suggestions)
    }
}

use std::sync::Arc;
use serde_json::Value;
use crate::core::command::{Command, CommandError};
use crate::core::circulation::CirculationResult;
use crate::entities::command::autocomplete_cmd::{AutocompleteCommand, AutocompleteCommandRequest, AutocompleteCommandResponse};
use crate::entities::command::create_entity_cmd::{CreateEntityCommand, CreateEntityCommandRequest, CreateEntityCommandResponse};
use crate::entities::command::delete_entity_cmd::{DeleteEntityCommand, DeleteEntityCommandRequest, DeleteEntityCommandResponse};
use crate::entities::command::update_entity_cmd::{UpdateEntityCommand, UpdateEntityCommandRequest, UpdateEntityCommandResponse};
use crate::entities::domain::EntityKind;
use crate::gateway::api::EntityGateway;

// EntityHub drives the entity pages: search, create, update, delete, and the
// id-completion boxes, plus the URL plumbing those pages navigate with.
pub struct EntityHub {
    entity_gateway: Arc<dyn EntityGateway>,
}

impl EntityHub {
    pub fn new(entity_gateway: Arc<dyn EntityGateway>) -> Self {
        Self {
            entity_gateway,
        }
    }

    pub async fn create(&self, kind: EntityKind, data: Value) -> Result<CreateEntityCommandResponse, CommandError> {
        CreateEntityCommand::new(self.entity_gateway.clone())
            .execute(CreateEntityCommandRequest::new(kind, data)).await
    }

    pub async fn update(&self, kind: EntityKind, id: &str, data: Value) -> Result<UpdateEntityCommandResponse, CommandError> {
        UpdateEntityCommand::new(self.entity_gateway.clone())
            .execute(UpdateEntityCommandRequest::new(kind, id, data)).await
    }

    pub async fn delete(&self, kind: EntityKind, id: &str) -> Result<DeleteEntityCommandResponse, CommandError> {
        DeleteEntityCommand::new(self.entity_gateway.clone())
            .execute(DeleteEntityCommandRequest::new(kind, id)).await
    }

    pub async fn autocomplete(&self, kind: EntityKind, search: &str) -> Result<AutocompleteCommandResponse, CommandError> {
        AutocompleteCommand::new(self.entity_gateway.clone())
            .execute(AutocompleteCommandRequest::new(kind, search)).await
    }

    pub async fn search(&self, kind: EntityKind, search: &str) -> CirculationResult<Vec<Value>> {
        self.entity_gateway.search_entities(kind, search).await
    }
}

pub fn hub_url(kind: EntityKind) -> String {
    format!("/circulation/entities/{}", kind)
}

pub fn search_url(kind: EntityKind, search: &str) -> String {
    format!("/circulation/entities/action/search/{}/{}", kind, urlencoding::encode(search))
}

pub fn create_url(kind: EntityKind) -> String {
    format!("/circulation/entities/action/create/{}", kind)
}

// the entity detail page addresses records as …/<entity>/<id>
pub fn entity_ref_from_url(url: &str) -> Option<(EntityKind, String)> {
    let parts: Vec<&str> = url.split('/').filter(|p| !p.is_empty()).collect();
    if parts.len() < 2 {
        return None;
    }
    let kind = EntityKind::parse(parts[parts.len() - 2])?;
    Some((kind, parts[parts.len() - 1].to_string()))
}

pub fn kind_from_url(url: &str) -> Option<EntityKind> {
    let parts: Vec<&str> = url.split('/').collect();
    parts.iter()
        .position(|part| *part == "entities")
        .and_then(|pos| parts.get(pos + 1))
        .and_then(|part| EntityKind::parse(part))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use serde_json::json;
    use crate::entities::controller::{create_url, entity_ref_from_url, hub_url,
                                      kind_from_url, search_url, EntityHub};
    use crate::entities::domain::EntityKind;
    use crate::gateway::memory::InMemoryGateway;

    #[tokio::test]
    async fn test_should_build_entity_urls() {
        assert_eq!("/circulation/entities/location", hub_url(EntityKind::Location));
        assert_eq!("/circulation/entities/action/create/user", create_url(EntityKind::User));
        assert_eq!("/circulation/entities/action/search/user/Doe%2C%20John",
                   search_url(EntityKind::User, "Doe, John"));
    }

    #[tokio::test]
    async fn test_should_parse_entity_ref_from_url() {
        let (kind, id) = entity_ref_from_url("http://localhost:5000/circulation/entities/location/loc1")
            .expect("should parse entity ref");
        assert_eq!(EntityKind::Location, kind);
        assert_eq!("loc1", id.as_str());
        assert!(entity_ref_from_url("http://localhost:5000/").is_none());
    }

    #[tokio::test]
    async fn test_should_parse_kind_from_url() {
        assert_eq!(Some(EntityKind::MailTemplate),
                   kind_from_url("http://localhost:5000/circulation/entities/mail_template"));
        assert_eq!(None, kind_from_url("http://localhost:5000/circulation/user"));
    }

    #[tokio::test]
    async fn test_should_drive_entity_lifecycle() {
        let gateway = Arc::new(InMemoryGateway::new());
        let hub = EntityHub::new(gateway.clone());
        let res = hub.create(EntityKind::Location, json!({"code": "AB-12"})).await
            .expect("should create entity");
        assert_eq!("/circulation/entities/location", res.redirect.as_str());
        let found = hub.search(EntityKind::Location, "AB-12").await.expect("should search");
        assert_eq!(1, found.len());
    }
}

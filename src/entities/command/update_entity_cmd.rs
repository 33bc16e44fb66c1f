use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::core::command::{Command, CommandError};
use crate::entities::domain::EntityKind;
use crate::gateway::api::EntityGateway;

pub struct UpdateEntityCommand {
    entity_gateway: Arc<dyn EntityGateway>,
}

impl UpdateEntityCommand {
    pub fn new(entity_gateway: Arc<dyn EntityGateway>) -> Self {
        Self {
            entity_gateway,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateEntityCommandRequest {
    pub kind: EntityKind,
    pub id: String,
    pub data: Value,
}

impl UpdateEntityCommandRequest {
    pub fn new(kind: EntityKind, id: &str, data: Value) -> Self {
        Self {
            kind,
            id: id.to_string(),
            data,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UpdateEntityCommandResponse {
    // the entity detail page refreshes itself after a successful update
    pub reload: bool,
}

#[async_trait]
impl Command<UpdateEntityCommandRequest, UpdateEntityCommandResponse> for UpdateEntityCommand {
    async fn execute(&self, req: UpdateEntityCommandRequest) -> Result<UpdateEntityCommandResponse, CommandError> {
        self.entity_gateway.update_entity(req.kind, req.id.as_str(), &req.data).await
            .map_err(CommandError::from)
            .map(|_| UpdateEntityCommandResponse { reload: true })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use serde_json::json;
    use crate::core::command::Command;
    use crate::entities::command::update_entity_cmd::{UpdateEntityCommand, UpdateEntityCommandRequest};
    use crate::entities::domain::EntityKind;
    use crate::gateway::memory::InMemoryGateway;

    #[tokio::test]
    async fn test_should_run_update_entity() {
        let gateway = Arc::new(InMemoryGateway::new());
        gateway.seed_entity(EntityKind::Location, "loc1", json!({"code": "A"})).await;
        let cmd = UpdateEntityCommand::new(gateway.clone());
        let res = cmd.execute(UpdateEntityCommandRequest::new(
            EntityKind::Location, "loc1", json!({"code": "B"}))).await
            .expect("should update entity");
        assert_eq!(true, res.reload);
        assert_eq!(json!({"code": "B"}),
                   gateway.entity(EntityKind::Location, "loc1").await.expect("should get entity"));
    }

    #[tokio::test]
    async fn test_should_fail_update_of_missing_entity() {
        let gateway = Arc::new(InMemoryGateway::new());
        let cmd = UpdateEntityCommand::new(gateway);
        let res = cmd.execute(UpdateEntityCommandRequest::new(
            EntityKind::Location, "missing", json!({}))).await;
        assert!(res.is_err());
    }
}

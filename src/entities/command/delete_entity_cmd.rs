use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::entities::domain::EntityKind;
use crate::gateway::api::EntityGateway;

pub struct DeleteEntityCommand {
    entity_gateway: Arc<dyn EntityGateway>,
}

impl DeleteEntityCommand {
    pub fn new(entity_gateway: Arc<dyn EntityGateway>) -> Self {
        Self {
            entity_gateway,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct DeleteEntityCommandRequest {
    pub kind: EntityKind,
    pub id: String,
}

impl DeleteEntityCommandRequest {
    pub fn new(kind: EntityKind, id: &str) -> Self {
        Self {
            kind,
            id: id.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DeleteEntityCommandResponse {
    pub reload: bool,
}

#[async_trait]
impl Command<DeleteEntityCommandRequest, DeleteEntityCommandResponse> for DeleteEntityCommand {
    async fn execute(&self, req: DeleteEntityCommandRequest) -> Result<DeleteEntityCommandResponse, CommandError> {
        self.entity_gateway.delete_entity(req.kind, req.id.as_str()).await
            .map_err(CommandError::from)
            .map(|_| DeleteEntityCommandResponse { reload: true })
    }
}

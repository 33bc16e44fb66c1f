use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::core::command::{Command, CommandError};
use crate::entities::domain::EntityKind;
use crate::gateway::api::EntityGateway;

pub struct CreateEntityCommand {
    entity_gateway: Arc<dyn EntityGateway>,
}

impl CreateEntityCommand {
    pub fn new(entity_gateway: Arc<dyn EntityGateway>) -> Self {
        Self {
            entity_gateway,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateEntityCommandRequest {
    pub kind: EntityKind,
    pub data: Value,
}

impl CreateEntityCommandRequest {
    pub fn new(kind: EntityKind, data: Value) -> Self {
        Self {
            kind,
            data,
        }
    }

    // the schema editor cannot express null for integer fields, so zero
    // stands in for "unset" and is normalized away before submission
    pub fn normalized_data(&self) -> Value {
        let mut data = self.data.clone();
        if let Value::Object(map) = &mut data {
            for (_, value) in map.iter_mut() {
                let zero = match value {
                    Value::Number(n) => n.as_f64() == Some(0.0),
                    _ => false,
                };
                if zero {
                    *value = Value::Null;
                }
            }
        }
        data
    }
}

#[derive(Debug, Serialize)]
pub struct CreateEntityCommandResponse {
    pub redirect: String,
}

impl CreateEntityCommandResponse {
    pub fn new(kind: EntityKind) -> Self {
        Self {
            redirect: format!("/circulation/entities/{}", kind),
        }
    }
}

#[async_trait]
impl Command<CreateEntityCommandRequest, CreateEntityCommandResponse> for CreateEntityCommand {
    async fn execute(&self, req: CreateEntityCommandRequest) -> Result<CreateEntityCommandResponse, CommandError> {
        let data = req.normalized_data();
        self.entity_gateway.create_entity(req.kind, &data).await
            .map_err(CommandError::from)
            .map(|_| CreateEntityCommandResponse::new(req.kind))
    }
}

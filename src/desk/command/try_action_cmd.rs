use std::sync::Arc;
use async_trait::async_trait;
use serde::Serialize;
use serde_json::{Map, Value};
use crate::core::command::{Command, CommandError};
use crate::gateway::api::{ActionRequest, CirculationGateway};

// TryActionCommand asks the server whether an action with the given
// parameters would succeed; the modal submit button is enabled from this.
pub struct TryActionCommand {
    circulation_gateway: Arc<dyn CirculationGateway>,
}

impl TryActionCommand {
    pub fn new(circulation_gateway: Arc<dyn CirculationGateway>) -> Self {
        Self {
            circulation_gateway,
        }
    }
}

#[derive(Debug)]
pub struct TryActionCommandRequest {
    pub action: String,
    pub params: Map<String, Value>,
}

impl TryActionCommandRequest {
    pub fn new(action: &str, params: Map<String, Value>) -> Self {
        Self {
            action: action.to_string(),
            params,
        }
    }

    pub fn build_request(&self) -> ActionRequest {
        ActionRequest::new(self.action.as_str()).with_params(&self.params)
    }
}

#[derive(Debug, Serialize)]
pub struct TryActionCommandResponse {
    pub allowed: bool,
}

#[async_trait]
impl Command<TryActionCommandRequest, TryActionCommandResponse> for TryActionCommand {
    async fn execute(&self, req: TryActionCommandRequest) -> Result<TryActionCommandResponse, CommandError> {
        self.circulation_gateway.try_action(&req.build_request()).await
            .map_err(CommandError::from)
            .map(|allowed| TryActionCommandResponse { allowed })
    }
}

use std::sync::Arc;
use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use crate::core::command::{Command, CommandError};
use crate::gateway::api::{ActionRequest, CirculationGateway};
use crate::settings::store::Settings;

// RunActionCommand submits one bulk circulation action for the selected
// users and items, the way the circulation page does it.
pub struct RunActionCommand {
    circulation_gateway: Arc<dyn CirculationGateway>,
}

impl RunActionCommand {
    pub fn new(circulation_gateway: Arc<dyn CirculationGateway>) -> Self {
        Self {
            circulation_gateway,
        }
    }
}

#[derive(Debug)]
pub struct RunActionCommandRequest {
    pub action: String,
    pub users: Vec<String>,
    pub items: Vec<String>,
    pub settings: Settings,
}

impl RunActionCommandRequest {
    pub fn new(action: &str, users: Vec<String>, items: Vec<String>, settings: &Settings) -> Self {
        Self {
            action: action.to_string(),
            users,
            items,
            settings: settings.clone(),
        }
    }

    pub fn build_request(&self) -> ActionRequest {
        ActionRequest::new(self.action.as_str())
            .with_params(&self.settings.payload())
            .with("users", Value::from(self.users.clone()))
            .with("items", Value::from(self.items.clone()))
    }
}

#[derive(Debug, Serialize)]
pub struct RunActionCommandResponse {
    // a successful bulk action lands back on the empty circulation page
    pub redirect: String,
}

impl RunActionCommandResponse {
    pub fn new() -> Self {
        Self {
            redirect: "/circulation/".to_string(),
        }
    }
}

#[async_trait]
impl Command<RunActionCommandRequest, RunActionCommandResponse> for RunActionCommand {
    async fn execute(&self, req: RunActionCommandRequest) -> Result<RunActionCommandResponse, CommandError> {
        self.circulation_gateway.run_action(&req.build_request()).await
            .map_err(CommandError::from)
            .map(|_| RunActionCommandResponse::new())
    }
}

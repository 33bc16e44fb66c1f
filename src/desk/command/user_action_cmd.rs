use std::sync::Arc;
use async_trait::async_trait;
use serde::Serialize;
use serde_json::{Map, Value};
use crate::core::command::{Command, CommandError};
use crate::gateway::api::{ActionRequest, CirculationGateway};
use crate::settings::store::Settings;

// RunUserActionCommand runs one of the user-facing hold actions (request,
// loan_extension, cancel_clcs) with the page's data attributes plus the
// current settings merged in.
pub struct RunUserActionCommand {
    circulation_gateway: Arc<dyn CirculationGateway>,
}

impl RunUserActionCommand {
    pub fn new(circulation_gateway: Arc<dyn CirculationGateway>) -> Self {
        Self {
            circulation_gateway,
        }
    }
}

#[derive(Debug)]
pub struct RunUserActionCommandRequest {
    pub action: String,
    pub params: Map<String, Value>,
    pub settings: Settings,
}

impl RunUserActionCommandRequest {
    pub fn new(action: &str, params: Map<String, Value>, settings: &Settings) -> Self {
        Self {
            action: action.to_string(),
            params,
            settings: settings.clone(),
        }
    }

    pub fn build_request(&self) -> ActionRequest {
        ActionRequest::new(self.action.as_str())
            .with_params(&self.params)
            .with_params(&self.settings.payload())
    }
}

#[derive(Debug, Serialize)]
pub struct RunUserActionCommandResponse {
    // the holds page reloads itself after a successful action
    pub reload: bool,
}

#[async_trait]
impl Command<RunUserActionCommandRequest, RunUserActionCommandResponse> for RunUserActionCommand {
    async fn execute(&self, req: RunUserActionCommandRequest) -> Result<RunUserActionCommandResponse, CommandError> {
        self.circulation_gateway.run_user_action(&req.build_request()).await
            .map_err(CommandError::from)
            .map(|_| RunUserActionCommandResponse { reload: true })
    }
}

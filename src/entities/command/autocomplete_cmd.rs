use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::entities::domain::EntityKind;
use crate::gateway::api::{EntityGateway, Suggestion};

pub struct AutocompleteCommand {
    entity_gateway: Arc<dyn EntityGateway>,
}

impl AutocompleteCommand {
    pub fn new(entity_gateway: Arc<dyn EntityGateway>) -> Self {
        Self {
            entity_gateway,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AutocompleteCommandRequest {
    pub kind: EntityKind,
    pub search: String,
}

impl AutocompleteCommandRequest {
    pub fn new(kind: EntityKind, search: &str) -> Self {
        Self {
            kind,
            search: search.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AutocompleteCommandResponse {
    pub suggestions: Vec<Suggestion>,
}

#[async_trait]
impl Command<AutocompleteCommandRequest, AutocompleteCommandResponse> for AutocompleteCommand {
    async fn execute(&self, req: AutocompleteCommandRequest) -> Result<AutocompleteCommandResponse, CommandError> {
        self.entity_gateway.search_autocomplete(req.kind, req.search.as_str()).await
            .map_err(CommandError::from)
            .map(|suggestions| AutocompleteCommandResponse { suggestions })
    }
}

use async_trait::async_trait;
use serde_json::{Map, Value};
use tracing::debug;
use crate::core::circulation::{CirculationError, CirculationResult};
use crate::core::domain::Configuration;
use crate::gateway::api::{ActionRequest, CirculationGateway, USER_ACTIONS};
use crate::gateway::http::{build_client, post_wrapped};

// HttpCirculationGateway dispatches circulation actions to the server's
// webhook receivers and the circulation/user action APIs.
pub struct HttpCirculationGateway {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCirculationGateway {
    pub fn new(config: &Configuration) -> CirculationResult<Self> {
        Ok(Self {
            client: build_client()?,
            base_url: config.base_url.clone(),
        })
    }

    fn hook_url(&self, hook: &str) -> String {
        format!("{}/hooks/receivers/circulation_{}/events/",
                self.base_url, urlencoding::encode(hook))
    }

    fn circulation_url(&self, path: &str) -> String {
        format!("{}/circulation/api/circulation/{}", self.base_url, path)
    }
}

#[async_trait]
impl CirculationGateway for HttpCirculationGateway {
    async fn hook_action(&self, hook: &str, payload: &Map<String, Value>,
                         dry_run: bool) -> CirculationResult<()> {
        let mut data = payload.clone();
        if dry_run {
            data.insert("dry_run".to_string(), Value::Bool(true));
        }
        let url = self.hook_url(hook);
        debug!("posting circulation hook {}", url);
        let response = self.client.post(url.as_str())
            .json(&Value::Object(data))
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CirculationError::from_status(url.as_str(), status.as_u16()));
        }
        Ok(())
    }

    async fn run_action(&self, req: &ActionRequest) -> CirculationResult<()> {
        let url = self.circulation_url("run_action");
        debug!("running circulation action {}", req.action);
        let _ = post_wrapped(&self.client, url.as_str(), &req.body()).await?;
        Ok(())
    }

    async fn try_action(&self, req: &ActionRequest) -> CirculationResult<bool> {
        let url = self.circulation_url("try_action");
        let text = post_wrapped(&self.client, url.as_str(), &req.body()).await?;
        let allowed: bool = serde_json::from_str(text.trim())?;
        Ok(allowed)
    }

    async fn run_user_action(&self, req: &ActionRequest) -> CirculationResult<()> {
        if !USER_ACTIONS.contains(&req.action.as_str()) {
            return Err(CirculationError::validation(
                format!("user action {} is not permitted", req.action).as_str(),
                Some("400".to_string())));
        }
        let url = format!("{}/circulation/api/user/run_action", self.base_url);
        debug!("running user action {}", req.action);
        let _ = post_wrapped(&self.client, url.as_str(), &req.body()).await?;
        Ok(())
    }
}

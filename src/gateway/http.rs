use std::time::Duration;
use serde_json::Value;
use crate::core::circulation::{CirculationError, CirculationResult};

pub mod http_circulation_gateway;
pub mod http_entity_gateway;
pub mod http_search_gateway;

pub(crate) fn build_client() -> CirculationResult<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .map_err(CirculationError::from)
}

// The /circulation/api family expects its JSON document wrapped in an outer
// JSON string; the server unwraps it with a second json.loads.
pub(crate) async fn post_wrapped(client: &reqwest::Client, url: &str,
                                 body: &Value) -> CirculationResult<String> {
    let wrapped = serde_json::to_string(body)?;
    let response = client.post(url)
        .json(&wrapped)
        .send()
        .await?;
    let status = response.status();
    if !status.is_success() {
        return Err(CirculationError::from_status(url, status.as_u16()));
    }
    response.text().await.map_err(CirculationError::from)
}

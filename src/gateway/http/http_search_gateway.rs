use async_trait::async_trait;
use tracing::debug;
use crate::core::circulation::{CirculationError, CirculationResult};
use crate::core::domain::Configuration;
use crate::gateway::api::{SearchEnvelope, SearchGateway, SearchHit};
use crate::gateway::http::build_client;

// HttpSearchGateway queries the record search endpoint and unwraps the
// hits/hits envelope.
pub struct HttpSearchGateway {
    client: reqwest::Client,
    url: String,
}

impl HttpSearchGateway {
    pub fn new(config: &Configuration) -> CirculationResult<Self> {
        Ok(Self {
            client: build_client()?,
            url: format!("{}{}", config.base_url, config.search_endpoint),
        })
    }
}

#[async_trait]
impl SearchGateway for HttpSearchGateway {
    async fn search(&self, query: &str) -> CirculationResult<Vec<SearchHit>> {
        debug!("searching {}", query);
        let response = self.client.get(self.url.as_str())
            .query(&[("q", query)])
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CirculationError::from_status(self.url.as_str(), status.as_u16()));
        }
        let envelope: SearchEnvelope = response.json().await?;
        Ok(envelope.hits.hits)
    }
}

use std::sync::Arc;
use crate::core::circulation::CirculationResult;
use crate::core::domain::Configuration;
use crate::gateway::GatewayVia;
use crate::gateway::api::{CirculationGateway, EntityGateway, SearchGateway};
use crate::gateway::http::http_circulation_gateway::HttpCirculationGateway;
use crate::gateway::http::http_entity_gateway::HttpEntityGateway;
use crate::gateway::http::http_search_gateway::HttpSearchGateway;
use crate::gateway::memory::InMemoryGateway;

pub fn create_circulation_gateway(via: GatewayVia, config: &Configuration)
                                  -> CirculationResult<Arc<dyn CirculationGateway>> {
    match via {
        GatewayVia::Http => {
            Ok(Arc::new(HttpCirculationGateway::new(config)?))
        }
        GatewayVia::InMemory => {
            Ok(Arc::new(InMemoryGateway::new()))
        }
    }
}

pub fn create_entity_gateway(via: GatewayVia, config: &Configuration)
                             -> CirculationResult<Arc<dyn EntityGateway>> {
    match via {
        GatewayVia::Http => {
            Ok(Arc::new(HttpEntityGateway::new(config)?))
        }
        GatewayVia::InMemory => {
            Ok(Arc::new(InMemoryGateway::new()))
        }
    }
}

pub fn create_search_gateway(via: GatewayVia, config: &Configuration)
                             -> CirculationResult<Arc<dyn SearchGateway>> {
    match via {
        GatewayVia::Http => {
            Ok(Arc::new(HttpSearchGateway::new(config)?))
        }
        GatewayVia::InMemory => {
            Ok(Arc::new(InMemoryGateway::new()))
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::domain::Configuration;
    use crate::gateway::GatewayVia;
    use crate::gateway::factory::{create_circulation_gateway, create_entity_gateway,
                                  create_search_gateway};

    #[tokio::test]
    async fn test_should_create_gateways() {
        let config = Configuration::new("http://localhost:5000");
        for via in [GatewayVia::Http, GatewayVia::InMemory] {
            let _ = create_circulation_gateway(via, &config).expect("should create circulation gateway");
            let _ = create_entity_gateway(via, &config).expect("should create entity gateway");
            let _ = create_search_gateway(via, &config).expect("should create search gateway");
        }
    }
}

pub mod api;
pub mod factory;
pub mod http;
pub mod memory;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum GatewayVia {
    Http,
    InMemory,
}

#[cfg(test)]
mod tests {
    use crate::gateway::GatewayVia;

    #[tokio::test]
    async fn test_should_create_gateway_via() {
        let _ = GatewayVia::Http;
        let _ = GatewayVia::InMemory;
    }
}

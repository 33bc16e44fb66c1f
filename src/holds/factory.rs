use crate::core::circulation::CirculationResult;
use crate::core::domain::Configuration;
use crate::gateway::GatewayVia;
use crate::gateway::factory::{create_circulation_gateway, create_search_gateway};
use crate::holds::controller::UserHub;
use crate::holds::store::HoldStore;

pub fn create_hold_store(via: GatewayVia, config: &Configuration) -> CirculationResult<HoldStore> {
    let gateway = create_circulation_gateway(via, config)?;
    Ok(HoldStore::new(gateway))
}

pub fn create_user_hub(user_id: &str, via: GatewayVia,
                       config: &Configuration) -> CirculationResult<UserHub> {
    let search = create_search_gateway(via, config)?;
    let store = create_hold_store(via, config)?;
    Ok(UserHub::new(user_id, config, search, store))
}

#[cfg(test)]
mod tests {
    use crate::core::domain::Configuration;
    use crate::gateway::GatewayVia;
    use crate::holds::factory::{create_hold_store, create_user_hub};

    #[tokio::test]
    async fn test_should_create_hold_store() {
        let config = Configuration::new("http://localhost:5000");
        let store = create_hold_store(GatewayVia::InMemory, &config).expect("should create store");
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_should_create_user_hub() {
        let config = Configuration::new("http://localhost:5000");
        let hub = create_user_hub("user1", GatewayVia::InMemory, &config)
            .expect("should create user hub");
        assert!(hub.holds().is_empty());
    }
}

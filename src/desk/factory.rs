use crate::core::circulation::CirculationResult;
use crate::core::domain::Configuration;
use crate::desk::controller::CirculationDesk;
use crate::gateway::GatewayVia;
use crate::items::factory::create_item_store;

pub fn create_circulation_desk(via: GatewayVia, config: &Configuration) -> CirculationResult<CirculationDesk> {
    let items = create_item_store(via, config)?;
    Ok(CirculationDesk::new(config, items))
}

#[cfg(test)]
mod tests {
    use crate::core::domain::Configuration;
    use crate::desk::factory::create_circulation_desk;
    use crate::gateway::GatewayVia;

    #[tokio::test]
    async fn test_should_create_circulation_desk() {
        let config = Configuration::new("http://localhost:5000");
        let desk = create_circulation_desk(GatewayVia::InMemory, &config)
            .expect("should create desk");
        assert!(desk.items().is_empty());
        assert!(desk.users().is_empty());
    }
}

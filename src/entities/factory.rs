use crate::core::circulation::CirculationResult;
use crate::core::domain::Configuration;
use crate::entities::controller::EntityHub;
use crate::gateway::GatewayVia;
use crate::gateway::factory::create_entity_gateway;

pub fn create_entity_hub(via: GatewayVia, config: &Configuration) -> CirculationResult<EntityHub> {
    let gateway = create_entity_gateway(via, config)?;
    Ok(EntityHub::new(gateway))
}

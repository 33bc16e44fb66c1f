use crate::core::circulation::CirculationResult;
use crate::core::domain::Configuration;
use crate::gateway::GatewayVia;
use crate::gateway::factory::{create_circulation_gateway, create_search_gateway};
use crate::items::controller::CirculationList;
use crate::items::store::ItemStore;

pub fn create_item_store(via: GatewayVia, config: &Configuration) -> CirculationResult<ItemStore> {
    let gateway = create_circulation_gateway(via, config)?;
    Ok(ItemStore::new(gateway))
}

pub fn create_circulation_list(via: GatewayVia, config: &Configuration) -> CirculationResult<CirculationList> {
    let search = create_search_gateway(via, config)?;
    let store = create_item_store(via, config)?;
    Ok(CirculationList::new(search, store))
}

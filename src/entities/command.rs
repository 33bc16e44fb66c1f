pub mod autocomplete_cmd;
pub mod create_entity_cmd;
pub mod delete_entity_cmd;
pub mod update_entity_cmd;

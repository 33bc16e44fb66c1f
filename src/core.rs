pub mod circulation;
pub mod command;
pub mod domain;

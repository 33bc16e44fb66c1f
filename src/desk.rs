pub mod command;
pub mod controller;
pub mod factory;

pub mod combat_service;

pub use combat_service::*;

pub mod messages;
pub mod ports;
pub mod types;

pub use messages::*;
pub use ports::*;
pub use types::*;

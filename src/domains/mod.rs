pub mod arena;
pub mod gunnery;
pub mod navigation;

pub use arena::*;
pub use gunnery::*;
pub use navigation::*;

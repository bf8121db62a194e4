pub mod memory_state;
pub mod script_engine;

pub use memory_state::*;
pub use script_engine::*;

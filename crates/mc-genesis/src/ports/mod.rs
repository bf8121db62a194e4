pub mod execution;
pub mod state;

pub use execution::*;
pub use state::*;

pub mod block;
pub mod builder;
pub mod errors;
pub mod operations;

pub use block::*;
pub use builder::*;
pub use errors::*;
pub use operations::*;

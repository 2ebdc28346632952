pub mod block;
pub mod field;
pub mod registry;

pub use block::*;
pub use field::*;
pub use registry::*;

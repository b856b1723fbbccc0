pub mod gateway;
pub mod index;
pub mod store;
pub mod traits;

pub use gateway::*;
pub use index::*;
pub use store::*;
pub use traits::*;

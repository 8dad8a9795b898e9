pub mod dynamodb;
pub mod memory;
pub mod models;

pub use dynamodb::*;
pub use memory::*;
pub use models::*;

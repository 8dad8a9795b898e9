//! Todo リソースのドメインモデルとストア抽象

pub mod errors;
pub mod store;
pub mod todo;

pub use errors::*;
pub use store::*;
pub use todo::*;

mod error;
pub mod loaders;
mod repository;

pub use error::*;
pub use repository::*;

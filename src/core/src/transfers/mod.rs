mod advisor;
mod transfer;

pub use advisor::*;
pub use transfer::*;

mod builder;
mod player;
mod position;
mod statistics;

pub use builder::*;
pub use player::*;
pub use position::*;
pub use statistics::*;

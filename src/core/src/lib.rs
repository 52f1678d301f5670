pub mod player;
pub mod source;
pub mod squad;
pub mod transfers;
pub mod utils;

pub use player::*;
pub use source::*;
pub use squad::*;
pub use transfers::*;

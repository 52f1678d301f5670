mod generator;
mod rules;
mod squad;
mod violation;

pub use generator::*;
pub use rules::*;
pub use squad::*;
pub use violation::*;

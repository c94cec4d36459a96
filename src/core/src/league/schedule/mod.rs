mod generator;
mod matches;

pub use generator::*;
pub use matches::*;

mod random;
mod result;
mod simulator;

pub use random::*;
pub use result::*;
pub use simulator::*;

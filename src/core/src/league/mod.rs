mod championship;
mod error;
mod schedule;
mod season;
mod settings;
mod statistics;
mod table;

pub use championship::*;
pub use error::*;
pub use schedule::*;
pub use season::*;
pub use settings::*;
pub use statistics::*;
pub use table::*;

pub mod builder;
pub mod collection;
mod team;

pub use builder::TeamBuilder;
pub use collection::TeamCollection;
pub use team::*;

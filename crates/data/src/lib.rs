//! Built-in game content and run persistence.

pub mod load;
pub mod persistence;

pub use load::*;
pub use persistence::*;

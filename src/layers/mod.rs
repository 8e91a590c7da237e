#[macro_use]
pub mod macros;

pub mod base;
pub mod earthquake;
pub mod manager;
pub mod plates;
pub mod tile;

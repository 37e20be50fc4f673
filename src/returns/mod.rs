//! Total-return multiplier tables

mod table;
pub mod loader;

pub use table::{ReturnTable, MAX_TABLE_YEAR, MIN_TABLE_YEAR};
pub use loader::DEFAULT_RETURNS_PATH;

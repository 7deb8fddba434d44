// PostRoute Library
// Collection route resolution for UK postcodes and Ireland cities

pub mod cli;
pub mod commands;
pub mod config;
pub mod db;
pub mod display;
pub mod error;
pub mod reference;
pub mod schedule;

pub use display::LookupDisplay;
pub use error::{Error, Result};
pub use reference::LookupResult;
pub use schedule::ScheduleBook;

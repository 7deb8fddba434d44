//! Command Handlers
//!
//! One submodule per area of functionality.
//!
//! ## Module Organization
//! - `state` - Application state shared by every handler
//! - `lookup` - Postcode / city lookups and the watch loop
//! - `schedule` - Route listing, stored collection dates, store stats

mod state;
pub mod lookup;
pub mod schedule;

pub use state::AppState;

pub mod init;
pub mod migrations;
pub mod schedule;

pub use init::{get_db_stats, init_db, init_memory_db, open_read_only, DbStats};

pub mod initialize;
pub mod migrate;
pub mod pool;

pub use initialize::init_db;
pub use migrate::run_pending_migrations;
pub use pool::DbPool;

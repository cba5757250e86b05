mod database;
mod logging;

pub use database::{init_database, migrate_database};
pub use logging::{init_logging, LoggingConfig, LoggingError};

//! SIS Core
//!
//! Entry point for applications built on the student information system.
//! Owns configuration and logging, and re-exports the domain types.

mod config;
mod error;

pub use config::Config;
pub use error::CoreError;

// Re-export domain components
pub use chrono::NaiveDate;
pub use sis_studentinfo::date::create_date;
pub use sis_studentinfo::{
    Course, Grade, GradingStrategy, MalformedUrl, Semester, Session, SessionError, SessionLength,
    SessionUrl, SharedStudent, Student, StudentError, SummerTerm, Weeks,
};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging with the default configuration
pub fn init_logging() {
    init_logging_with(&Config::default());
}

/// Initialize logging. `RUST_LOG` takes precedence over the configured
/// filter. Does nothing if a global subscriber is already installed.
pub fn init_logging_with(config: &Config) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    let installed = fmt()
        .with_env_filter(filter)
        .with_target(config.log_target)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(filter = %config.log_filter, "Logging initialized");
    }
}

// Shared plumbing: configuration, logging, error types

pub mod config;
pub mod error;
pub mod logging;

pub use config::ReportConfig;
pub use error::ReportError;

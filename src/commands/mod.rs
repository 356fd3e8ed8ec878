//! CLI command implementations.
//!
//! Available commands:
//! - **dashboard**: Run the interactive TUI dashboard
//! - **report**: Print or write the quality report directly
//! - **init**: Create a default configuration file

pub mod dashboard;
pub mod init;
pub mod report;

pub use dashboard::run_dashboard;
pub use init::init_config;
pub use report::{write_report, ReportConfig};

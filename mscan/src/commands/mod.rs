//! Command modules for the mscan CLI.
//!
//! Each subcommand is implemented in its own file.

pub mod config;
pub mod keywords;
pub mod scan;

pub use config::run_config;
pub use keywords::run_keywords;
pub use scan::{run_scan, ScanArgs};

//! Logging setup
//!
//! Installs the global `tracing` subscriber. `RUST_LOG`, when set, wins over the
//! configured level.

mod init;

pub use init::{build_filter, config_filter, init_logging};

//! Utility modules
//!
//! - **error**: Error types and result alias
//! - **logging**: Subscriber setup for `tracing`

pub mod error;
pub mod logging;

pub use error::{AuthzError, Result};

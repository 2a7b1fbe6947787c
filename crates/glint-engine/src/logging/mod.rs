//! Logging utilities.
//!
//! Centralizes logger initialization behind the standard `log` facade so
//! the engine and apps share one setup call.

mod init;

pub use init::init_logging;

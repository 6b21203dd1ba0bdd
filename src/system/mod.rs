//! System-level modules
//!
//! Process-wide concerns that do not belong to any one request: logging
//! initialization lives here.

pub mod logging;

pub use logging::init_logging;

//! pi-in-the-sky - network status display
//!
//! Core library: request parsing, display state, rendering, and the device
//! loop that serves them.

pub mod config;
pub mod device;
pub mod display;
pub mod http;
pub mod server;
pub mod status;

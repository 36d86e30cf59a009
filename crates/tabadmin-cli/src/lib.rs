//! Library surface of the admin panel CLI.
//!
//! The binary in `main.rs` is a thin wrapper; command implementations live
//! here so integration tests can drive them with injected environments.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;

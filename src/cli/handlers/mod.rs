//! Command handlers for CLI operations
//!
//! Handlers hold the loaded settings and do the wiring for one subcommand,
//! keeping execution separate from parsing and validation.

pub mod check;
pub mod send;

pub use check::CheckCommandHandler;
pub use send::SendCommandHandler;

//! Domain layer for mockpanel.
//!
//! Plain data and contracts shared by the engine, the file-backed adapters
//! and the CLI. Nothing in this crate performs I/O.

pub mod config;
pub mod error;
pub mod i18n;
pub mod payment;
pub mod persona;
pub mod report;
pub mod role;
pub mod session;

// Re-export common error type
pub use error::PanelError;

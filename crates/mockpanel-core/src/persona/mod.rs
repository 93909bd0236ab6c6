//! Persona domain module.
//!
//! This module contains the interviewer persona model and the default panel.
//!
//! # Module Structure
//!
//! - `model`: Core persona domain model (`Persona`)
//! - `preset`: The default five-member interview panel
//!
//! # Usage
//!
//! ```ignore
//! use mockpanel_core::persona::{Persona, default_panel};
//! ```

mod model;
mod preset;

// Re-export public API
pub use model::{Persona, validate_roster};
pub use preset::default_panel;

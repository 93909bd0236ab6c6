//! Session domain module.
//!
//! This module contains all session-related domain models: the transcript,
//! its messages, the session phase and the events the engine publishes.
//!
//! # Module Structure
//!
//! - `model`: Core session domain model (`Session`, `SessionPhase`, `SessionSnapshot`)
//! - `message`: Transcript message types (`Message`, `Transcript`)
//! - `event`: Events published while a session runs (`EngineEvent`)
//!
//! # Usage
//!
//! ```ignore
//! use mockpanel_core::session::{Session, SessionPhase, Message, EngineEvent};
//! ```

mod event;
mod message;
mod model;

// Re-export public API
pub use event::EngineEvent;
pub use message::{Message, Transcript, USER_SENDER_ID};
pub use model::{Session, SessionPhase, SessionSnapshot};

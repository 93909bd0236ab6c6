//! Panel session engine.
//!
//! [`PanelEngine`] owns one interview session and drives it on a virtual
//! clock; [`PanelRuntime`] runs an engine on tokio and hands out
//! [`PanelHandle`]s to front ends.

pub mod engine;
pub mod random;
pub mod registry;
pub mod runtime;
pub mod scheduler;
pub mod selector;
pub mod timer;

pub use engine::PanelEngine;
pub use random::{RandomSource, SequenceRandom, ThreadRandom};
pub use registry::PersonaRegistry;
pub use runtime::{Command, PanelHandle, PanelRuntime};

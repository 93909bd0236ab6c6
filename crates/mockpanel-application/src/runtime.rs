//! Tokio driver for the panel engine.
//!
//! The engine lives inside a single spawned task that acts as the event
//! loop: commands arrive over an `mpsc` channel, the task sleeps until the
//! next scheduled step or countdown tick, then advances the engine by the
//! wall-clock time that actually passed. Observers get the latest
//! [`SessionSnapshot`] on a `watch` channel and every [`EngineEvent`] on a
//! `broadcast` channel.

use crate::engine::PanelEngine;
use mockpanel_core::error::{PanelError, Result};
use mockpanel_core::session::{EngineEvent, SessionSnapshot};
use tokio::sync::{broadcast, mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Capacity of the event broadcast buffer.
const EVENT_BUFFER: usize = 256;

/// Commands accepted by the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    SubmitReply(String),
    Complete,
    Reset,
}

/// Cloneable front-end handle to a running panel.
#[derive(Clone)]
pub struct PanelHandle {
    commands: mpsc::UnboundedSender<Command>,
    snapshots: watch::Receiver<SessionSnapshot>,
    events: broadcast::Sender<EngineEvent>,
    shutdown: CancellationToken,
}

impl PanelHandle {
    pub fn start(&self) -> Result<()> {
        self.send(Command::Start)
    }

    pub fn submit_reply(&self, text: impl Into<String>) -> Result<()> {
        self.send(Command::SubmitReply(text.into()))
    }

    pub fn complete(&self) -> Result<()> {
        self.send(Command::Complete)
    }

    pub fn reset(&self) -> Result<()> {
        self.send(Command::Reset)
    }

    /// Latest published state.
    pub fn snapshot(&self) -> SessionSnapshot {
        self.snapshots.borrow().clone()
    }

    /// Receiver that is notified on every published state.
    pub fn watch(&self) -> watch::Receiver<SessionSnapshot> {
        self.snapshots.clone()
    }

    /// Stream of engine events from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<EngineEvent> {
        self.events.subscribe()
    }

    /// Stops the event loop. Pending steps are abandoned.
    pub fn shutdown(&self) {
        self.shutdown.cancel();
    }

    fn send(&self, command: Command) -> Result<()> {
        self.commands
            .send(command)
            .map_err(|_| PanelError::internal("panel runtime has stopped"))
    }
}

/// Spawns panel engines onto the current tokio runtime.
pub struct PanelRuntime;

impl PanelRuntime {
    /// Moves `engine` into a background task.
    ///
    /// The join handle yields the engine back once the loop stops (shutdown
    /// or every handle dropped).
    pub fn spawn(engine: PanelEngine) -> (PanelHandle, JoinHandle<PanelEngine>) {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (snapshot_tx, snapshot_rx) = watch::channel(engine.snapshot());
        let (event_tx, _) = broadcast::channel(EVENT_BUFFER);
        let shutdown = CancellationToken::new();

        let handle = PanelHandle {
            commands: command_tx,
            snapshots: snapshot_rx,
            events: event_tx.clone(),
            shutdown: shutdown.clone(),
        };

        let task = tokio::spawn(run_loop(engine, command_rx, snapshot_tx, event_tx, shutdown));
        (handle, task)
    }
}

async fn run_loop(
    mut engine: PanelEngine,
    mut commands: mpsc::UnboundedReceiver<Command>,
    snapshots: watch::Sender<SessionSnapshot>,
    events: broadcast::Sender<EngineEvent>,
    shutdown: CancellationToken,
) -> PanelEngine {
    info!("Panel runtime started");
    let mut last = Instant::now();

    loop {
        let wait = engine.time_until_next_event();
        let next_event = async move {
            match wait {
                Some(delay) => tokio::time::sleep(delay).await,
                None => std::future::pending::<()>().await,
            }
        };

        tokio::select! {
            _ = shutdown.cancelled() => break,
            command = commands.recv() => {
                last = catch_up(&mut engine, last);
                match command {
                    Some(command) => apply(&mut engine, command),
                    None => break,
                }
            }
            _ = next_event => {
                last = catch_up(&mut engine, last);
            }
        }

        publish(&mut engine, &snapshots, &events);
    }

    publish(&mut engine, &snapshots, &events);
    info!("Panel runtime stopped");
    engine
}

fn catch_up(engine: &mut PanelEngine, last: Instant) -> Instant {
    let now = Instant::now();
    engine.advance(now.saturating_duration_since(last));
    now
}

fn apply(engine: &mut PanelEngine, command: Command) {
    debug!(?command, "Applying command");
    match command {
        Command::Start => {
            engine.start();
        }
        Command::SubmitReply(text) => {
            engine.submit_reply(&text);
        }
        Command::Complete => {
            engine.complete();
        }
        Command::Reset => engine.reset(),
    }
}

fn publish(
    engine: &mut PanelEngine,
    snapshots: &watch::Sender<SessionSnapshot>,
    events: &broadcast::Sender<EngineEvent>,
) {
    for event in engine.drain_events() {
        // No subscribers is fine.
        let _ = events.send(event);
    }
    snapshots.send_if_modified(|current| {
        let next = engine.snapshot();
        if *current == next {
            false
        } else {
            *current = next;
            true
        }
    });
}

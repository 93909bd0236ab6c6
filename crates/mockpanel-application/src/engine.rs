//! Panel session engine.
//!
//! Drives a simulated panel interview: introductions, interviewer rotation,
//! question selection, transition phrases and completion on either the
//! transcript threshold or the countdown.
//!
//! The engine is synchronous and single-owner. Time only moves when the
//! owner calls [`PanelEngine::advance`]; [`PanelEngine::flush`] runs every
//! pending step immediately. Both produce the same message sequence, so the
//! presentation delays carry no correctness weight.

use crate::random::{RandomSource, ThreadRandom};
use crate::registry::PersonaRegistry;
use crate::scheduler::{Generation, Scheduled, Scheduler};
use crate::selector::select_next_question;
use crate::timer::{CountdownTimer, TickOutcome};
use mockpanel_core::config::{EngineConfig, MessageTemplates, Pacing};
use mockpanel_core::error::Result;
use mockpanel_core::i18n::interpolate;
use mockpanel_core::session::{EngineEvent, Message, Session, SessionPhase, SessionSnapshot};
use std::time::Duration;
use tracing::{debug, info, trace};

/// Transcript length multiplier that ends the interview.
const MESSAGES_PER_PERSONA: usize = 3;

/// Deferred engine work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    /// Persona at `index` introduces itself.
    Introduce { index: usize },
    /// First persona hands over to the questions.
    Ready,
    /// Active persona asks its next question.
    AskQuestion,
    /// Decide between completing and continuing after a reply.
    EvaluateTurn,
}

/// The panel interview state machine.
pub struct PanelEngine {
    registry: PersonaRegistry,
    transition_phrases: Vec<String>,
    templates: MessageTemplates,
    role_title: String,
    pacing: Pacing,
    random: Box<dyn RandomSource>,
    session: Session,
    scheduler: Scheduler<Step>,
    timer: CountdownTimer,
    /// Virtual clock
    now: Duration,
    events: Vec<EngineEvent>,
}

impl PanelEngine {
    /// Builds an engine from a validated configuration.
    pub fn new(config: EngineConfig, random: Box<dyn RandomSource>) -> Result<Self> {
        config.validate()?;
        let registry = PersonaRegistry::new(config.personas)?;

        Ok(Self {
            registry,
            transition_phrases: config.transition_phrases,
            templates: config.templates,
            role_title: config.role_title,
            pacing: config.pacing,
            random,
            session: Session::new(config.timer_budget_seconds),
            scheduler: Scheduler::new(),
            timer: CountdownTimer::new(config.timer_budget_seconds, config.pacing.tick_interval()),
            now: Duration::ZERO,
            events: Vec::new(),
        })
    }

    /// Builds an engine drawing from OS-seeded randomness.
    pub fn with_thread_random(config: EngineConfig) -> Result<Self> {
        Self::new(config, Box::new(ThreadRandom::new()))
    }

    // ============================================================================
    // Queries
    // ============================================================================

    pub fn phase(&self) -> SessionPhase {
        self.session.phase
    }

    pub fn transcript(&self) -> &[Message] {
        &self.session.transcript
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.session.remaining_seconds
    }

    pub fn active_persona_index(&self) -> usize {
        self.session.active_persona_index
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.session.snapshot()
    }

    pub fn registry(&self) -> &PersonaRegistry {
        &self.registry
    }

    /// Current generation. Ticks stamped with an older one are dropped.
    pub fn generation(&self) -> Generation {
        self.scheduler.generation()
    }

    /// Virtual time elapsed since the engine was created.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of steps waiting on the scheduler.
    pub fn pending_steps(&self) -> usize {
        self.scheduler.len()
    }

    /// How long until the next scheduled step or countdown tick.
    pub fn time_until_next_event(&self) -> Option<Duration> {
        let next = match (self.scheduler.next_due(), self.timer.next_tick_at()) {
            (Some(step), Some(tick)) => Some(step.min(tick)),
            (step, tick) => step.or(tick),
        };
        next.map(|at| at.saturating_sub(self.now))
    }

    /// Takes the events published since the last call.
    pub fn drain_events(&mut self) -> Vec<EngineEvent> {
        std::mem::take(&mut self.events)
    }

    // ============================================================================
    // Commands
    // ============================================================================

    /// Opens the session: welcome, scheduled introductions, first question.
    ///
    /// Ignored unless the session is `NotStarted`.
    pub fn start(&mut self) -> bool {
        if self.session.phase != SessionPhase::NotStarted {
            debug!(phase = %self.session.phase, "Ignoring start outside NotStarted");
            return false;
        }

        info!(
            personas = self.registry.len(),
            budget_seconds = self.timer.budget_seconds(),
            role = %self.role_title,
            "Starting panel session"
        );

        self.set_phase(SessionPhase::Introducing);
        self.timer.start(self.now, &mut self.session);

        let (host_id, welcome) = {
            let host = self.registry.first();
            let welcome = interpolate(
                &self.templates.welcome,
                &[("role", self.role_title.as_str()), ("name", host.name.as_str())],
            );
            (host.id, welcome)
        };
        self.append_persona_message(host_id, welcome);

        let first = self.now + self.pacing.step_delay();
        let stride = self.pacing.introduction_stride();
        let count = self.registry.len();
        for index in 0..count {
            self.scheduler
                .schedule_at(first + stride * index as u32, Step::Introduce { index });
        }
        self.scheduler
            .schedule_at(first + stride * count as u32, Step::Ready);

        true
    }

    /// Records the candidate's answer and hands the turn to the next persona.
    ///
    /// Ignored unless a question is awaiting an answer and `text` has
    /// non-whitespace content.
    pub fn submit_reply(&mut self, text: &str) -> bool {
        if self.session.phase != SessionPhase::AwaitingAnswer {
            debug!(phase = %self.session.phase, "Ignoring reply outside AwaitingAnswer");
            return false;
        }
        let text = text.trim();
        if text.is_empty() {
            debug!("Ignoring empty reply");
            return false;
        }

        self.append_user_message(text);
        self.session.rotate_persona(self.registry.len());
        self.set_phase(SessionPhase::AdvancingTurn);
        self.schedule_after(self.pacing.step_delay(), Step::EvaluateTurn);
        true
    }

    /// Ends the session with a closing message from a random persona.
    ///
    /// Cancels every pending step and stops the countdown. Returns false
    /// (and does nothing) if the session is already complete.
    pub fn complete(&mut self) -> bool {
        if self.session.phase == SessionPhase::Complete {
            debug!("Session already complete");
            return false;
        }

        self.timer.stop(&mut self.session);
        self.scheduler.cancel_all();

        let index = self.random.next_index(self.registry.len());
        let (closer_id, closing) = {
            let closer = self.registry.at(index);
            let closing = interpolate(&self.templates.closing, &[("name", closer.name.as_str())]);
            (closer.id, closing)
        };
        self.append_persona_message(closer_id, closing);
        self.set_phase(SessionPhase::Complete);

        info!(
            messages = self.session.transcript.len(),
            replies = self.session.reply_count(),
            remaining_seconds = self.session.remaining_seconds,
            "Panel session complete"
        );
        true
    }

    /// Discards the session and returns to `NotStarted` with a full clock.
    pub fn reset(&mut self) {
        self.scheduler.cancel_all();
        self.timer.stop(&mut self.session);

        let from = self.session.phase;
        self.session.reset(self.timer.budget_seconds());
        if from != SessionPhase::NotStarted {
            self.events.push(EngineEvent::PhaseChanged {
                from,
                to: SessionPhase::NotStarted,
            });
        }
        info!(from = %from, "Panel session reset");
    }

    /// Delivers one countdown tick stamped with `generation`.
    pub fn on_tick(&mut self, generation: Generation) {
        if !self.scheduler.is_current(generation) {
            trace!(generation = generation.value(), "Dropping stale tick");
            return;
        }

        match self.timer.tick(self.now, &mut self.session) {
            TickOutcome::Ignored => {}
            TickOutcome::Ticked { remaining_seconds } => {
                self.events.push(EngineEvent::TimerTick { remaining_seconds });
            }
            TickOutcome::Expired => {
                self.events.push(EngineEvent::TimerTick {
                    remaining_seconds: 0,
                });
                info!(phase = %self.session.phase, "Time is up");
                self.complete();
            }
        }
    }

    // ============================================================================
    // Clock
    // ============================================================================

    /// Moves the virtual clock forward, firing steps and ticks in time order.
    ///
    /// A step and a tick due at the same instant run step first.
    pub fn advance(&mut self, elapsed: Duration) {
        let target = self.now + elapsed;

        loop {
            let next_step = self.scheduler.next_due().filter(|at| *at <= target);
            let next_tick = self.timer.next_tick_at().filter(|at| *at <= target);

            match (next_step, next_tick) {
                (Some(step_at), Some(tick_at)) if tick_at < step_at => self.fire_tick_at(tick_at),
                (Some(step_at), _) => {
                    self.now = self.now.max(step_at);
                    if let Some(scheduled) = self.scheduler.pop_next() {
                        self.dispatch(scheduled);
                    }
                }
                (None, Some(tick_at)) => self.fire_tick_at(tick_at),
                (None, None) => break,
            }
        }

        self.now = target;
    }

    /// Runs every pending step now, ignoring presentation delays.
    ///
    /// The countdown does not move.
    pub fn flush(&mut self) {
        while let Some(scheduled) = self.scheduler.pop_next() {
            self.dispatch(scheduled);
        }
    }

    // ============================================================================
    // Internals
    // ============================================================================

    fn fire_tick_at(&mut self, at: Duration) {
        self.now = self.now.max(at);
        let generation = self.scheduler.generation();
        self.on_tick(generation);
    }

    fn dispatch(&mut self, scheduled: Scheduled<Step>) {
        if !self.scheduler.is_current(scheduled.generation) {
            trace!(step = ?scheduled.action, "Dropping stale step");
            return;
        }

        match scheduled.action {
            Step::Introduce { index } => self.introduce(index),
            Step::Ready => self.ready(),
            Step::AskQuestion => self.ask_question(),
            Step::EvaluateTurn => self.evaluate_turn(),
        }
    }

    fn introduce(&mut self, index: usize) {
        let (id, introduction) = {
            let persona = self.registry.at(index);
            (persona.id, persona.introduction.clone())
        };
        self.session.introduced_persona_ids.insert(id);
        self.append_persona_message(id, introduction);
    }

    fn ready(&mut self) {
        let host_id = self.registry.first().id;
        let ready = self.templates.ready.clone();
        self.append_persona_message(host_id, ready);
        self.schedule_after(self.pacing.step_delay(), Step::AskQuestion);
    }

    fn ask_question(&mut self) {
        let persona = self.registry.at(self.session.active_persona_index);
        let question =
            select_next_question(persona, &self.session.transcript, self.random.as_mut()).to_string();
        let persona_id = persona.id;

        self.append_persona_message(persona_id, question);
        self.set_phase(SessionPhase::AwaitingAnswer);
    }

    fn evaluate_turn(&mut self) {
        if self.session.phase != SessionPhase::AdvancingTurn {
            trace!(phase = %self.session.phase, "Skipping turn evaluation");
            return;
        }

        let threshold = self.registry.len() * MESSAGES_PER_PERSONA;
        let length = self.session.transcript.len();
        if length >= threshold || self.session.remaining_seconds == 0 {
            debug!(length, threshold, "Exit condition reached");
            self.complete();
            return;
        }

        let phrase_index = self.random.next_index(self.transition_phrases.len());
        let phrase = self.transition_phrases[phrase_index].clone();
        let speaker_id = self.registry.at(self.session.active_persona_index).id;
        self.append_persona_message(speaker_id, phrase);
        self.schedule_after(self.pacing.step_delay(), Step::AskQuestion);
    }

    fn schedule_after(&mut self, delay: Duration, step: Step) {
        self.scheduler.schedule_at(self.now + delay, step);
    }

    fn set_phase(&mut self, to: SessionPhase) {
        let from = self.session.phase;
        if from != to {
            debug!(from = %from, to = %to, "Phase change");
            self.session.phase = to;
            self.events.push(EngineEvent::PhaseChanged { from, to });
        }
    }

    fn append_persona_message(&mut self, persona_id: u32, content: String) {
        let message = self.session.append_persona_message(persona_id, content);
        self.events.push(EngineEvent::MessageAppended { message });
    }

    fn append_user_message(&mut self, content: &str) {
        let message = self.session.append_user_message(content);
        self.events.push(EngineEvent::MessageAppended { message });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::SequenceRandom;

    fn engine() -> PanelEngine {
        PanelEngine::new(EngineConfig::default(), Box::new(SequenceRandom::first())).unwrap()
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let mut config = EngineConfig::default();
        config.personas.clear();
        assert!(PanelEngine::new(config, Box::new(SequenceRandom::first())).is_err());
    }

    #[test]
    fn test_start_schedules_introductions_with_stride() {
        let mut engine = engine();
        assert!(engine.start());

        assert_eq!(engine.transcript().len(), 1);
        assert_eq!(engine.phase(), SessionPhase::Introducing);
        // 5 introductions plus the ready line.
        assert_eq!(engine.pending_steps(), 6);
        assert_eq!(engine.time_until_next_event(), Some(Duration::from_secs(1)));

        // First introduction lands at 1.5s, the second at 3.5s.
        engine.advance(Duration::from_millis(1500));
        assert_eq!(engine.transcript().len(), 2);
        engine.advance(Duration::from_millis(1999));
        assert_eq!(engine.transcript().len(), 2);
        engine.advance(Duration::from_millis(1));
        assert_eq!(engine.transcript().len(), 3);
    }

    #[test]
    fn test_start_twice_is_ignored() {
        let mut engine = engine();
        assert!(engine.start());
        assert!(!engine.start());
        assert_eq!(engine.transcript().len(), 1);
    }

    #[test]
    fn test_welcome_mentions_role_and_host() {
        let mut config = EngineConfig::default();
        config.role_title = "Data Scientist".to_string();
        let mut engine = PanelEngine::new(config, Box::new(SequenceRandom::first())).unwrap();
        engine.start();

        let welcome = &engine.transcript()[0].content;
        assert!(welcome.contains("Data Scientist"));
        assert!(welcome.contains("Priya"));
    }

    #[test]
    fn test_events_follow_transcript() {
        let mut engine = engine();
        engine.start();
        engine.flush();

        let appended = engine
            .drain_events()
            .into_iter()
            .filter_map(|e| match e {
                EngineEvent::MessageAppended { message } => Some(message),
                _ => None,
            })
            .collect::<Vec<_>>();
        assert_eq!(appended.as_slice(), engine.transcript());
        assert!(engine.drain_events().is_empty());
    }
}

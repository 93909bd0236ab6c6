//! Session countdown.

use mockpanel_core::session::{Session, SessionPhase};
use std::time::Duration;

/// Result of delivering one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Timer stopped or session complete; nothing changed.
    Ignored,
    /// One second elapsed.
    Ticked { remaining_seconds: u32 },
    /// The countdown just reached zero. The session must complete.
    Expired,
}

/// One-decrement-per-interval countdown over `Session::remaining_seconds`.
///
/// The session holds the observable state (`remaining_seconds`,
/// `timer_running`); the timer only tracks when the next tick is due on the
/// engine's virtual clock.
#[derive(Debug, Clone)]
pub struct CountdownTimer {
    budget_seconds: u32,
    interval: Duration,
    next_tick_at: Option<Duration>,
}

impl CountdownTimer {
    pub fn new(budget_seconds: u32, interval: Duration) -> Self {
        Self {
            budget_seconds,
            interval,
            next_tick_at: None,
        }
    }

    pub fn budget_seconds(&self) -> u32 {
        self.budget_seconds
    }

    pub fn next_tick_at(&self) -> Option<Duration> {
        self.next_tick_at
    }

    pub fn start(&mut self, now: Duration, session: &mut Session) {
        session.timer_running = true;
        self.next_tick_at = Some(now + self.interval);
    }

    pub fn stop(&mut self, session: &mut Session) {
        session.timer_running = false;
        self.next_tick_at = None;
    }

    /// Applies one tick at virtual time `now`.
    pub fn tick(&mut self, now: Duration, session: &mut Session) -> TickOutcome {
        if !session.timer_running || session.phase == SessionPhase::Complete {
            self.next_tick_at = None;
            return TickOutcome::Ignored;
        }

        session.remaining_seconds = session.remaining_seconds.saturating_sub(1);
        self.next_tick_at = Some(now + self.interval);

        if session.remaining_seconds == 0 {
            TickOutcome::Expired
        } else {
            TickOutcome::Ticked {
                remaining_seconds: session.remaining_seconds,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_down_to_expiry() {
        let mut session = Session::new(3);
        session.phase = SessionPhase::AwaitingAnswer;
        let mut timer = CountdownTimer::new(3, Duration::from_secs(1));
        timer.start(Duration::ZERO, &mut session);

        assert_eq!(
            timer.tick(Duration::from_secs(1), &mut session),
            TickOutcome::Ticked { remaining_seconds: 2 }
        );
        assert_eq!(timer.next_tick_at(), Some(Duration::from_secs(2)));
        timer.tick(Duration::from_secs(2), &mut session);
        assert_eq!(
            timer.tick(Duration::from_secs(3), &mut session),
            TickOutcome::Expired
        );
    }

    #[test]
    fn test_stopped_timer_ignores_ticks() {
        let mut session = Session::new(10);
        let mut timer = CountdownTimer::new(10, Duration::from_secs(1));
        timer.start(Duration::ZERO, &mut session);
        timer.stop(&mut session);

        assert_eq!(timer.tick(Duration::from_secs(1), &mut session), TickOutcome::Ignored);
        assert_eq!(session.remaining_seconds, 10);
        assert_eq!(timer.next_tick_at(), None);
    }

    #[test]
    fn test_complete_session_ignores_ticks() {
        let mut session = Session::new(10);
        let mut timer = CountdownTimer::new(10, Duration::from_secs(1));
        timer.start(Duration::ZERO, &mut session);
        session.phase = SessionPhase::Complete;

        assert_eq!(timer.tick(Duration::from_secs(1), &mut session), TickOutcome::Ignored);
        assert_eq!(session.remaining_seconds, 10);
    }
}

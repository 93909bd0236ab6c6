//! Cancellable turn scheduler.
//!
//! A queue of `(due, action)` entries on a virtual clock. Entries fire in due
//! order, ties in insertion order. Every entry is stamped with the
//! [`Generation`] that was current when it was scheduled; `cancel_all` starts
//! a new generation so nothing scheduled earlier can ever fire again.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::Duration;

/// Session generation counter. Bumped on every cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Generation(u64);

impl Generation {
    fn next(self) -> Self {
        Generation(self.0 + 1)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

/// An action taken off the queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scheduled<A> {
    pub due: Duration,
    pub generation: Generation,
    pub action: A,
}

struct Entry<A> {
    due: Duration,
    seq: u64,
    generation: Generation,
    action: A,
}

impl<A> PartialEq for Entry<A> {
    fn eq(&self, other: &Self) -> bool {
        self.due == other.due && self.seq == other.seq
    }
}

impl<A> Eq for Entry<A> {}

impl<A> PartialOrd for Entry<A> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<A> Ord for Entry<A> {
    // Reversed: BinaryHeap is a max-heap, the earliest entry must be on top.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .due
            .cmp(&self.due)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Single-shot delayed actions with bulk cancellation.
pub struct Scheduler<A> {
    queue: BinaryHeap<Entry<A>>,
    generation: Generation,
    next_seq: u64,
}

impl<A> Default for Scheduler<A> {
    fn default() -> Self {
        Self {
            queue: BinaryHeap::new(),
            generation: Generation::default(),
            next_seq: 0,
        }
    }
}

impl<A> Scheduler<A> {
    pub fn new() -> Self {
        Self::default()
    }

    /// The generation new entries are stamped with.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// True if `generation` has not been cancelled.
    pub fn is_current(&self, generation: Generation) -> bool {
        generation == self.generation
    }

    /// Queues `action` to fire at virtual time `due`.
    pub fn schedule_at(&mut self, due: Duration, action: A) -> Generation {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.queue.push(Entry {
            due,
            seq,
            generation: self.generation,
            action,
        });
        self.generation
    }

    /// Drops every pending entry and starts a new generation.
    pub fn cancel_all(&mut self) -> Generation {
        self.queue.clear();
        self.generation = self.generation.next();
        self.generation
    }

    /// Due time of the earliest pending entry.
    pub fn next_due(&self) -> Option<Duration> {
        self.queue.peek().map(|e| e.due)
    }

    /// Pops the earliest entry if it is due at `now`.
    pub fn pop_due(&mut self, now: Duration) -> Option<Scheduled<A>> {
        match self.next_due() {
            Some(due) if due <= now => self.pop_next(),
            _ => None,
        }
    }

    /// Pops the earliest entry regardless of its due time.
    pub fn pop_next(&mut self) -> Option<Scheduled<A>> {
        while let Some(entry) = self.queue.pop() {
            if self.is_current(entry.generation) {
                return Some(Scheduled {
                    due: entry.due,
                    generation: entry.generation,
                    action: entry.action,
                });
            }
            tracing::trace!(generation = entry.generation.value(), "Dropping stale entry");
        }
        None
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

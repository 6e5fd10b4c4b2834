//! Deferred work for the game: the elapsed-time ticker and the delayed pair
//! resolution / win declaration.
//!
//! Time is measured in milliseconds of a clock owned by the scheduler. The
//! driver decides how fast that clock moves: tests step it explicitly, the
//! terminal session feeds it real elapsed time.

use alloc::collections::BTreeMap;

/// Work the game can defer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    /// One period of the elapsed-time ticker.
    Tick,
    /// Reset the in-flight counter and turn unmatched cards face down.
    FlipBack,
    /// All cards are matched; finish the game.
    DeclareWin,
}

/// Handle of a scheduled task, used for cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

/// Capability to run tasks later.
pub trait Scheduler {
    /// Current clock reading.
    fn now(&self) -> u64;

    /// Run `task` once, `delay` ms from now.
    fn schedule(&mut self, delay: u64, task: Task) -> TimerId;

    /// Run `task` every `interval` ms, first after one interval.
    fn schedule_repeating(&mut self, interval: u64, task: Task) -> TimerId;

    /// Cancel a pending timer. Returns `false` if it was unknown, already
    /// fired (one-shot) or already cancelled.
    fn cancel(&mut self, id: TimerId) -> bool;

    /// Remove and return the earliest task due at or before `deadline`,
    /// moving the clock to its due time. Tasks with equal due times come out
    /// in the order they were scheduled. When nothing is due the clock moves
    /// to `deadline` and `None` is returned.
    fn pop_due(&mut self, deadline: u64) -> Option<Task>;
}

#[derive(Debug)]
struct Entry {
    id: TimerId,
    task: Task,
    repeat: Option<u64>,
}

/// Deterministic scheduler whose clock only moves when asked to.
#[derive(Debug, Default)]
pub struct VirtualClock {
    now: u64,
    next_seq: u64,
    // keyed by (due, seq) so equal due times keep insertion order
    queue: BTreeMap<(u64, u64), Entry>,
    keys: BTreeMap<TimerId, (u64, u64)>,
}

impl VirtualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of timers still pending.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Returns `true` if `id` is still pending.
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.keys.contains_key(&id)
    }

    fn bump_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }

    fn insert(&mut self, due: u64, id: TimerId, task: Task, repeat: Option<u64>) {
        let key = (due, self.bump_seq());
        self.queue.insert(key, Entry { id, task, repeat });
        self.keys.insert(id, key);
    }
}

impl Scheduler for VirtualClock {
    fn now(&self) -> u64 {
        self.now
    }

    fn schedule(&mut self, delay: u64, task: Task) -> TimerId {
        let id = TimerId(self.next_seq);
        self.insert(self.now + delay, id, task, None);
        id
    }

    fn schedule_repeating(&mut self, interval: u64, task: Task) -> TimerId {
        let interval = interval.max(1);
        let id = TimerId(self.next_seq);
        self.insert(self.now + interval, id, task, Some(interval));
        id
    }

    fn cancel(&mut self, id: TimerId) -> bool {
        match self.keys.remove(&id) {
            Some(key) => {
                self.queue.remove(&key);
                true
            }
            None => false,
        }
    }

    fn pop_due(&mut self, deadline: u64) -> Option<Task> {
        let due = match self.queue.keys().next() {
            Some(&(due, _)) if due <= deadline => due,
            _ => {
                self.now = self.now.max(deadline);
                return None;
            }
        };
        let (_, entry) = self.queue.pop_first()?;
        self.keys.remove(&entry.id);
        self.now = due;
        if let Some(interval) = entry.repeat {
            self.insert(due + interval, entry.id, entry.task, Some(interval));
        }
        Some(entry.task)
    }
}

//! Cooperative Timer Queue
//!
//! A deterministic stand-in for the host UI event loop. Every mounted
//! component owns one scheduler; timers are keyed by virtual time since
//! mount, so surfaces drive them from a wall clock while tests drive them
//! from plain `Duration`s.
//!
//! Nothing here sleeps or spawns. Time only moves when the owner asks for
//! the next due timer (`pop_due`) or fast-forwards the clock.

use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

/// Shortest period a repeating timer may have
///
/// A zero-length interval would fire forever without virtual time moving.
pub const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// Handle to a scheduled timer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

/// A timer that came due
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fired<T> {
    /// Which timer fired
    pub id: TimerId,
    /// Deadline it fired at
    pub at: Duration,
    /// Payload given when it was scheduled
    pub payload: T,
    /// Whether the timer is still armed for another period
    pub repeating: bool,
}

#[derive(Debug)]
struct Pending<T> {
    id: TimerId,
    period: Option<Duration>,
    payload: T,
}

/// Virtual-time timer queue
#[derive(Debug)]
pub struct Scheduler<T> {
    /// Current virtual time
    now: Duration,
    /// Monotonic counter for ids and same-deadline ordering
    next_seq: u64,
    /// Pending timers ordered by (deadline, scheduling order)
    queue: BTreeMap<(Duration, u64), Pending<T>>,
    /// Timer id to its current queue key
    index: HashMap<TimerId, (Duration, u64)>,
}

impl<T> Scheduler<T> {
    /// Create an empty scheduler at virtual time zero
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_seq: 0,
            queue: BTreeMap::new(),
            index: HashMap::new(),
        }
    }

    /// Current virtual time
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of armed timers
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Deadline of the earliest armed timer
    pub fn next_deadline(&self) -> Option<Duration> {
        self.queue.keys().next().map(|&(deadline, _)| deadline)
    }

    /// Whether `id` is still armed
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.index.contains_key(&id)
    }

    /// Schedule a one-shot timer `delay` from now
    pub fn set_timeout(&mut self, delay: Duration, payload: T) -> TimerId {
        self.insert(self.now + delay, None, payload)
    }

    /// Schedule a repeating timer, first firing one `period` from now
    pub fn set_interval(&mut self, period: Duration, payload: T) -> TimerId {
        let period = period.max(MIN_INTERVAL);
        self.insert(self.now + period, Some(period), payload)
    }

    /// Cancel a timer
    ///
    /// Returns `false` if the timer already fired (one-shot) or was cleared.
    pub fn clear(&mut self, id: TimerId) -> bool {
        match self.index.remove(&id) {
            Some(key) => self.queue.remove(&key).is_some(),
            None => false,
        }
    }

    /// Cancel every armed timer, returning how many there were
    pub fn clear_all(&mut self) -> usize {
        let count = self.queue.len();
        self.queue.clear();
        self.index.clear();
        count
    }

    /// Move the clock forward without firing anything
    ///
    /// Time never runs backwards; an earlier `until` is ignored.
    pub fn advance_clock(&mut self, until: Duration) {
        if until > self.now {
            self.now = until;
        }
    }

    fn insert(&mut self, deadline: Duration, period: Option<Duration>, payload: T) -> TimerId {
        let seq = self.bump();
        let id = TimerId(seq);
        self.queue.insert((deadline, seq), Pending { id, period, payload });
        self.index.insert(id, (deadline, seq));
        id
    }

    fn bump(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }
}

impl<T: Clone> Scheduler<T> {
    /// Take the earliest timer due at or before `until`
    ///
    /// The clock moves to the timer's deadline. Repeating timers are re-armed
    /// one period after that deadline before being returned, so a handler can
    /// still clear them.
    pub fn pop_due(&mut self, until: Duration) -> Option<Fired<T>> {
        let key = *self.queue.keys().next()?;
        if key.0 > until {
            return None;
        }

        let pending = self.queue.remove(&key)?;
        self.index.remove(&pending.id);
        self.advance_clock(key.0);

        let repeating = match pending.period {
            Some(period) => {
                let deadline = key.0 + period;
                let seq = self.bump();
                self.index.insert(pending.id, (deadline, seq));
                self.queue.insert(
                    (deadline, seq),
                    Pending {
                        id: pending.id,
                        period: Some(period),
                        payload: pending.payload.clone(),
                    },
                );
                true
            }
            None => false,
        };

        Some(Fired {
            id: pending.id,
            at: key.0,
            payload: pending.payload,
            repeating,
        })
    }
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn drain(s: &mut Scheduler<&'static str>, until: Duration) -> Vec<(&'static str, u64)> {
        let mut out = Vec::new();
        while let Some(f) = s.pop_due(until) {
            out.push((f.payload, f.at.as_millis() as u64));
        }
        s.advance_clock(until);
        out
    }

    #[test]
    fn test_timeouts_fire_in_deadline_order() {
        let mut s = Scheduler::new();
        s.set_timeout(ms(30), "c");
        s.set_timeout(ms(10), "a");
        s.set_timeout(ms(20), "b");

        assert_eq!(drain(&mut s, ms(100)), vec![("a", 10), ("b", 20), ("c", 30)]);
        assert_eq!(s.pending(), 0);
        assert_eq!(s.now(), ms(100));
    }

    #[test]
    fn test_same_deadline_keeps_scheduling_order() {
        let mut s = Scheduler::new();
        s.set_timeout(ms(5), "first");
        s.set_timeout(ms(5), "second");

        assert_eq!(drain(&mut s, ms(5)), vec![("first", 5), ("second", 5)]);
    }

    #[test]
    fn test_not_due_stays_pending() {
        let mut s = Scheduler::new();
        s.set_timeout(ms(50), "later");

        assert!(drain(&mut s, ms(49)).is_empty());
        assert_eq!(s.pending(), 1);
        assert_eq!(s.next_deadline(), Some(ms(50)));
    }

    #[test]
    fn test_interval_rearms_from_previous_deadline() {
        let mut s = Scheduler::new();
        s.set_interval(ms(18), "tick");

        let fired = drain(&mut s, ms(60));
        assert_eq!(fired, vec![("tick", 18), ("tick", 36), ("tick", 54)]);
        assert_eq!(s.next_deadline(), Some(ms(72)));
    }

    #[test]
    fn test_clear_cancels_interval_mid_dispatch() {
        let mut s = Scheduler::new();
        let id = s.set_interval(ms(10), "tick");

        let first = s.pop_due(ms(100)).unwrap();
        assert!(first.repeating);
        assert!(s.clear(id));
        assert!(s.pop_due(ms(100)).is_none());
    }

    #[test]
    fn test_clear_unknown_or_fired_is_noop() {
        let mut s = Scheduler::new();
        let id = s.set_timeout(ms(1), "once");
        drain(&mut s, ms(1));

        assert!(!s.clear(id));
        assert!(!s.is_pending(id));
    }

    #[test]
    fn test_zero_interval_is_clamped() {
        let mut s = Scheduler::new();
        s.set_interval(Duration::ZERO, "spin");

        assert_eq!(drain(&mut s, ms(3)).len(), 3);
    }

    #[test]
    fn test_clock_never_runs_backwards() {
        let mut s: Scheduler<()> = Scheduler::new();
        s.advance_clock(ms(500));
        s.advance_clock(ms(100));
        assert_eq!(s.now(), ms(500));
    }

    #[test]
    fn test_timeout_relative_to_current_time() {
        let mut s = Scheduler::new();
        s.advance_clock(ms(1000));
        s.set_timeout(ms(250), "relative");

        assert_eq!(s.next_deadline(), Some(ms(1250)));
    }

    #[test]
    fn test_clear_all_reports_count() {
        let mut s = Scheduler::new();
        s.set_timeout(ms(1), "a");
        s.set_interval(ms(2), "b");

        assert_eq!(s.clear_all(), 2);
        assert_eq!(s.pending(), 0);
    }
}

//! Timer queue on a virtual clock
//!
//! Widgets never block: expiry, auto-advance and artificial latency are all
//! callbacks scheduled here. The clock only moves when the host advances it, either
//! from a real-time loop or from a test.
//!
//! Callbacks run with the queue unlocked, so a callback may freely schedule or clear
//! other timers (including itself).
//!
//! ```ignore
//! let timers = scheduler();
//! let id = timers.set_timeout(500, "announce", || println!("fired"));
//! timers.advance_by(499); // nothing
//! timers.advance_by(1);   // "fired"
//! assert!(!timers.is_pending(id));
//! ```

use slotmap::{new_key_type, SlotMap};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

new_key_type! {
    /// Handle to a scheduled timeout or interval
    pub struct TimerId;
}

type TimeoutFn = Box<dyn FnOnce() + Send>;
type IntervalFn = Arc<dyn Fn() + Send + Sync>;

enum TimerKind {
    Timeout(Option<TimeoutFn>),
    Interval { period_ms: u64, callback: IntervalFn },
}

struct TimerEntry {
    due_ms: u64,
    /// Tie-breaker so timers due at the same instant fire in scheduling order
    seq: u64,
    label: &'static str,
    kind: TimerKind,
}

/// A callback taken out of the queue, ready to run without the lock held
enum Fired {
    Once(TimeoutFn),
    Repeating(IntervalFn),
}

impl Fired {
    fn call(self) {
        match self {
            Fired::Once(f) => f(),
            Fired::Repeating(f) => f(),
        }
    }
}

/// Pending timers ordered by due time
pub struct TimerQueue {
    now_ms: u64,
    next_seq: u64,
    timers: SlotMap<TimerId, TimerEntry>,
}

impl TimerQueue {
    /// Create an empty queue with the clock at zero
    pub fn new() -> Self {
        Self {
            now_ms: 0,
            next_seq: 0,
            timers: SlotMap::with_key(),
        }
    }

    /// Current virtual time in milliseconds
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Run `f` once, `delay_ms` from now
    pub fn set_timeout(
        &mut self,
        delay_ms: u64,
        label: &'static str,
        f: impl FnOnce() + Send + 'static,
    ) -> TimerId {
        let due_ms = self.now_ms.saturating_add(delay_ms);
        let id = self.insert(due_ms, label, TimerKind::Timeout(Some(Box::new(f))));
        tracing::debug!(?id, label, due_ms, "timeout scheduled");
        id
    }

    /// Run `f` every `period_ms` (at least 1ms) until cleared
    pub fn set_interval(
        &mut self,
        period_ms: u64,
        label: &'static str,
        f: impl Fn() + Send + Sync + 'static,
    ) -> TimerId {
        let period_ms = period_ms.max(1);
        let due_ms = self.now_ms.saturating_add(period_ms);
        let id = self.insert(
            due_ms,
            label,
            TimerKind::Interval {
                period_ms,
                callback: Arc::new(f),
            },
        );
        tracing::debug!(?id, label, period_ms, "interval scheduled");
        id
    }

    /// Cancel a timer. Returns false when it already fired or was cleared.
    pub fn clear(&mut self, id: TimerId) -> bool {
        match self.timers.remove(id) {
            Some(entry) => {
                tracing::debug!(?id, label = entry.label, "timer cleared");
                true
            }
            None => false,
        }
    }

    /// Whether a timer is still scheduled
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.timers.contains_key(id)
    }

    /// Number of scheduled timers
    pub fn pending_count(&self) -> usize {
        self.timers.len()
    }

    /// Due time of the earliest scheduled timer
    pub fn next_due_ms(&self) -> Option<u64> {
        self.timers.values().map(|t| t.due_ms).min()
    }

    fn insert(&mut self, due_ms: u64, label: &'static str, kind: TimerKind) -> TimerId {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.timers.insert(TimerEntry {
            due_ms,
            seq,
            label,
            kind,
        })
    }

    /// Take the earliest timer due at or before `until`, moving the clock to its due time
    fn pop_due(&mut self, until: u64) -> Option<Fired> {
        let (id, due_ms) = self
            .timers
            .iter()
            .filter(|(_, t)| t.due_ms <= until)
            .min_by_key(|(_, t)| (t.due_ms, t.seq))
            .map(|(id, t)| (id, t.due_ms))?;

        self.now_ms = self.now_ms.max(due_ms);
        let seq = self.next_seq;

        let entry = self.timers.get_mut(id)?;
        tracing::debug!(?id, label = entry.label, at_ms = due_ms, "timer fired");
        match &mut entry.kind {
            TimerKind::Timeout(f) => {
                let f = f.take();
                self.timers.remove(id);
                f.map(Fired::Once)
            }
            TimerKind::Interval {
                period_ms,
                callback,
            } => {
                let fired = Fired::Repeating(Arc::clone(callback));
                entry.due_ms = due_ms.saturating_add(*period_ms);
                entry.seq = seq;
                self.next_seq += 1;
                Some(fired)
            }
        }
    }
}

impl Default for TimerQueue {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared timer queue handle
pub type Scheduler = Arc<Mutex<TimerQueue>>;

/// Create a new scheduler with the clock at zero
pub fn scheduler() -> Scheduler {
    Arc::new(Mutex::new(TimerQueue::new()))
}

fn lock(scheduler: &Scheduler) -> MutexGuard<'_, TimerQueue> {
    scheduler.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Locking conveniences for [`Scheduler`]
pub trait SchedulerExt {
    /// Current virtual time in milliseconds
    fn now_ms(&self) -> u64;
    /// Run `f` once after `delay_ms`
    fn set_timeout(
        &self,
        delay_ms: u64,
        label: &'static str,
        f: impl FnOnce() + Send + 'static,
    ) -> TimerId;
    /// Run `f` every `period_ms` until cleared
    fn set_interval(
        &self,
        period_ms: u64,
        label: &'static str,
        f: impl Fn() + Send + Sync + 'static,
    ) -> TimerId;
    /// Cancel a timer
    fn clear(&self, id: TimerId) -> bool;
    /// Whether a timer is still scheduled
    fn is_pending(&self, id: TimerId) -> bool;
    /// Number of scheduled timers
    fn pending_count(&self) -> usize;
    /// Due time of the earliest scheduled timer
    fn next_due_ms(&self) -> Option<u64>;
    /// Move the clock to `target_ms`, firing everything due on the way.
    /// Returns the number of callbacks run.
    fn advance_to(&self, target_ms: u64) -> usize;
    /// Move the clock forward by `delta_ms`
    fn advance_by(&self, delta_ms: u64) -> usize;
}

impl SchedulerExt for Scheduler {
    fn now_ms(&self) -> u64 {
        lock(self).now_ms()
    }

    fn set_timeout(
        &self,
        delay_ms: u64,
        label: &'static str,
        f: impl FnOnce() + Send + 'static,
    ) -> TimerId {
        lock(self).set_timeout(delay_ms, label, f)
    }

    fn set_interval(
        &self,
        period_ms: u64,
        label: &'static str,
        f: impl Fn() + Send + Sync + 'static,
    ) -> TimerId {
        lock(self).set_interval(period_ms, label, f)
    }

    fn clear(&self, id: TimerId) -> bool {
        lock(self).clear(id)
    }

    fn is_pending(&self, id: TimerId) -> bool {
        lock(self).is_pending(id)
    }

    fn pending_count(&self) -> usize {
        lock(self).pending_count()
    }

    fn next_due_ms(&self) -> Option<u64> {
        lock(self).next_due_ms()
    }

    fn advance_to(&self, target_ms: u64) -> usize {
        let mut fired = 0;
        loop {
            // The guard is dropped before the callback runs
            let next = lock(self).pop_due(target_ms);
            match next {
                Some(callback) => {
                    callback.call();
                    fired += 1;
                }
                None => break,
            }
        }

        let mut queue = lock(self);
        queue.now_ms = queue.now_ms.max(target_ms);
        fired
    }

    fn advance_by(&self, delta_ms: u64) -> usize {
        let target = self.now_ms().saturating_add(delta_ms);
        self.advance_to(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_timeout_fires_once_at_due_time() {
        let timers = scheduler();
        let hits = Arc::new(AtomicUsize::new(0));
        let hits_clone = hits.clone();
        let id = timers.set_timeout(100, "test", move || {
            hits_clone.fetch_add(1, Ordering::SeqCst);
        });

        assert_eq!(timers.advance_by(99), 0);
        assert!(timers.is_pending(id));
        assert_eq!(timers.advance_by(1), 1);
        assert_eq!(timers.advance_by(1000), 0);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert_eq!(timers.now_ms(), 1100);
    }

    #[test]
    fn test_clear_cancels() {
        let timers = scheduler();
        let hits = Arc::new(AtomicUsize::new(0));
        let hits_clone = hits.clone();
        let id = timers.set_timeout(10, "test", move || {
            hits_clone.fetch_add(1, Ordering::SeqCst);
        });

        assert!(timers.clear(id));
        assert!(!timers.clear(id));
        timers.advance_by(50);
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_interval_repeats_until_cleared() {
        let timers = scheduler();
        let hits = Arc::new(AtomicUsize::new(0));
        let hits_clone = hits.clone();
        let id = timers.set_interval(100, "tick", move || {
            hits_clone.fetch_add(1, Ordering::SeqCst);
        });

        assert_eq!(timers.advance_by(350), 3);
        timers.clear(id);
        assert_eq!(timers.advance_by(1000), 0);
        assert_eq!(hits.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_fire_order_is_due_then_schedule_order() {
        let timers = scheduler();
        let order = Arc::new(Mutex::new(Vec::new()));

        for (delay, name) in [(30, "c"), (10, "a"), (30, "d"), (20, "b")] {
            let order = order.clone();
            timers.set_timeout(delay, "order", move || order.lock().unwrap().push(name));
        }

        timers.advance_by(100);
        assert_eq!(*order.lock().unwrap(), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_callback_can_schedule_more_timers() {
        let timers = scheduler();
        let hits = Arc::new(AtomicUsize::new(0));

        let inner_timers = timers.clone();
        let inner_hits = hits.clone();
        timers.set_timeout(10, "outer", move || {
            let hits = inner_hits.clone();
            inner_timers.set_timeout(10, "inner", move || {
                hits.fetch_add(1, Ordering::SeqCst);
            });
        });

        // Both the outer and the chained inner timer fall inside the window
        assert_eq!(timers.advance_by(20), 2);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert_eq!(timers.pending_count(), 0);
    }
}

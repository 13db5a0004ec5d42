//! Per-application runtime: one reactive graph, one rebuild flag, one timer queue
//!
//! Everything a widget needs to keep state and schedule work hangs off a
//! [`ShowcaseRuntime`]. The runtime is cheap to clone; clones share the same graph
//! and clock.

use crate::reactive::{
    lock_graph, DirtyFlag, Effect, ReactiveGraph, ReactiveStats, SharedReactiveGraph, State,
};
use crate::timer::{scheduler, Scheduler, SchedulerExt};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct ShowcaseRuntime {
    reactive: SharedReactiveGraph,
    dirty: DirtyFlag,
    timers: Scheduler,
}

impl ShowcaseRuntime {
    pub fn new() -> Self {
        Self {
            reactive: Arc::new(Mutex::new(ReactiveGraph::new())),
            dirty: Arc::new(AtomicBool::new(true)),
            timers: scheduler(),
        }
    }

    /// Create a state handle bound to this runtime's graph
    pub fn use_state<T: Clone + Send + 'static>(&self, initial: T) -> State<T> {
        let signal = lock_graph(&self.reactive).create_signal(initial);
        State::new(signal, Arc::clone(&self.reactive), Arc::clone(&self.dirty))
    }

    /// Register an effect that re-runs whenever the signals it reads change
    pub fn create_effect(&self, run: impl FnMut(&ReactiveGraph) + Send + 'static) -> Effect {
        lock_graph(&self.reactive).create_effect(run)
    }

    pub fn dispose_effect(&self, effect: Effect) {
        lock_graph(&self.reactive).dispose_effect(effect);
    }

    /// The shared timer queue
    pub fn timers(&self) -> &Scheduler {
        &self.timers
    }

    /// Current virtual time
    pub fn now_ms(&self) -> u64 {
        self.timers.now_ms()
    }

    /// Advance the clock, firing due timers. Returns the number of callbacks run.
    pub fn advance_by(&self, delta_ms: u64) -> usize {
        self.timers.advance_by(delta_ms)
    }

    /// Mark the tree as needing a rebuild
    pub fn request_rebuild(&self) {
        self.dirty.store(true, Ordering::SeqCst);
    }

    /// Whether a rebuild was requested since the last `take_dirty`
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear and return the rebuild flag
    pub fn take_dirty(&self) -> bool {
        self.dirty.swap(false, Ordering::SeqCst)
    }

    pub fn stats(&self) -> ReactiveStats {
        lock_graph(&self.reactive).stats()
    }
}

impl Default for ShowcaseRuntime {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ShowcaseRuntime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShowcaseRuntime")
            .field("now_ms", &self.now_ms())
            .field("dirty", &self.is_dirty())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_rebuild_sets_dirty() {
        let rt = ShowcaseRuntime::new();
        assert!(rt.take_dirty());
        assert!(!rt.is_dirty());

        let count = rt.use_state(0u32);
        count.set(1);
        assert!(!rt.is_dirty());

        count.update_rebuild(|c| c + 1);
        assert_eq!(count.get(), 2);
        assert!(rt.take_dirty());
    }

    #[test]
    fn test_effect_sees_state_changes() {
        let rt = ShowcaseRuntime::new();
        let theme = rt.use_state("light".to_string());
        let seen = Arc::new(Mutex::new(Vec::new()));

        let signal = theme.signal();
        let seen_clone = seen.clone();
        rt.create_effect(move |graph| {
            if let Some(value) = graph.get(signal) {
                seen_clone.lock().unwrap().push(value);
            }
        });

        theme.set("dark".to_string());
        assert_eq!(*seen.lock().unwrap(), vec!["light", "dark"]);
    }

    #[test]
    fn test_clones_share_clock() {
        let rt = ShowcaseRuntime::new();
        let other = rt.clone();
        rt.advance_by(250);
        assert_eq!(other.now_ms(), 250);
    }
}

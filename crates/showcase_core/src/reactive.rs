//! Signals, effects and the `State<T>` handle
//!
//! A signal holds one value. An effect is a closure that reads signals through the
//! graph; the signals it read on its last run are its sources, and writing any of
//! them queues the effect again. The queue is drained right after each write.
//!
//! Widgets never touch the graph directly. They keep a [`State<T>`], which pairs a
//! signal with the shared graph and the rebuild flag:
//!
//! ```ignore
//! let open: State<bool> = runtime.use_state(false);
//! open.update_rebuild(|v| !v);
//! assert!(open.get());
//! ```

use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;
use std::any::Any;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::marker::PhantomData;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

new_key_type! {
    pub struct SignalId;
    pub struct EffectId;
}

/// Typed handle to a signal. Copy; the value lives in the graph.
#[derive(Debug)]
pub struct Signal<T> {
    id: SignalId,
    _marker: PhantomData<T>,
}

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Signal<T> {}

impl<T> Signal<T> {
    pub fn id(&self) -> SignalId {
        self.id
    }
}

/// Handle to a registered effect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Effect {
    id: EffectId,
}

impl Effect {
    pub fn id(&self) -> EffectId {
        self.id
    }
}

type EffectFn = Box<dyn FnMut(&ReactiveGraph) + Send>;
type Sources = SmallVec<[SignalId; 4]>;

struct SignalSlot {
    value: Box<dyn Any + Send>,
    version: u64,
    observers: SmallVec<[EffectId; 4]>,
}

struct EffectSlot {
    /// None while the closure is running
    body: Option<EffectFn>,
    sources: Sources,
    queued: bool,
}

/// Owner of every signal value and effect
pub struct ReactiveGraph {
    signals: SlotMap<SignalId, SignalSlot>,
    effects: SlotMap<EffectId, EffectSlot>,
    queue: VecDeque<EffectId>,
    /// Signals read by the effect currently running
    reads: RefCell<Option<Sources>>,
    writes: u64,
}

impl ReactiveGraph {
    pub fn new() -> Self {
        Self {
            signals: SlotMap::with_key(),
            effects: SlotMap::with_key(),
            queue: VecDeque::new(),
            reads: RefCell::new(None),
            writes: 0,
        }
    }

    pub fn create_signal<T: Send + 'static>(&mut self, initial: T) -> Signal<T> {
        let id = self.signals.insert(SignalSlot {
            value: Box::new(initial),
            version: 0,
            observers: SmallVec::new(),
        });
        Signal {
            id,
            _marker: PhantomData,
        }
    }

    /// Read a signal. Inside an effect the read makes the signal one of its sources.
    pub fn get<T: Clone + 'static>(&self, signal: Signal<T>) -> Option<T> {
        if let Some(reads) = self.reads.borrow_mut().as_mut() {
            if !reads.contains(&signal.id) {
                reads.push(signal.id);
            }
        }
        self.peek(signal)
    }

    /// Read a signal without recording it
    pub fn peek<T: Clone + 'static>(&self, signal: Signal<T>) -> Option<T> {
        self.borrow(signal).cloned()
    }

    fn borrow<T: 'static>(&self, signal: Signal<T>) -> Option<&T> {
        self.signals
            .get(signal.id)
            .and_then(|slot| slot.value.downcast_ref::<T>())
    }

    /// Replace a signal's value and run the effects observing it
    pub fn set<T: Send + 'static>(&mut self, signal: Signal<T>, value: T) {
        let Some(slot) = self.signals.get_mut(signal.id) else {
            return;
        };
        slot.value = Box::new(value);
        slot.version += 1;
        self.writes += 1;

        let observers = slot.observers.clone();
        for effect in observers {
            self.enqueue(effect);
        }
        self.flush();
    }

    pub fn update<T: Clone + Send + 'static>(&mut self, signal: Signal<T>, f: impl FnOnce(T) -> T) {
        if let Some(current) = self.peek(signal) {
            self.set(signal, f(current));
        }
    }

    /// Number of writes to `id` so far
    pub fn version(&self, id: SignalId) -> Option<u64> {
        self.signals.get(id).map(|slot| slot.version)
    }

    /// Register an effect and run it once to collect its sources
    pub fn create_effect(&mut self, body: impl FnMut(&ReactiveGraph) + Send + 'static) -> Effect {
        let id = self.effects.insert(EffectSlot {
            body: Some(Box::new(body)),
            sources: SmallVec::new(),
            queued: false,
        });
        self.enqueue(id);
        self.flush();
        Effect { id }
    }

    /// Remove an effect. It will not run again.
    pub fn dispose_effect(&mut self, effect: Effect) {
        let Some(slot) = self.effects.remove(effect.id) else {
            return;
        };
        self.unobserve(effect.id, &slot.sources);
        self.queue.retain(|queued| *queued != effect.id);
    }

    /// Remove a signal. Effects that read it stop observing it; later reads give `None`.
    pub fn dispose_signal(&mut self, id: SignalId) -> bool {
        let Some(slot) = self.signals.remove(id) else {
            return false;
        };
        for observer in slot.observers {
            if let Some(effect) = self.effects.get_mut(observer) {
                effect.sources.retain(|source| *source != id);
            }
        }
        true
    }

    fn enqueue(&mut self, id: EffectId) {
        if let Some(slot) = self.effects.get_mut(id) {
            if !slot.queued {
                slot.queued = true;
                self.queue.push_back(id);
            }
        }
    }

    fn flush(&mut self) {
        while let Some(id) = self.queue.pop_front() {
            self.run(id);
        }
    }

    fn run(&mut self, id: EffectId) {
        let Some(mut body) = self.effects.get_mut(id).and_then(|slot| {
            slot.queued = false;
            slot.body.take()
        }) else {
            return;
        };

        let outer = self.reads.replace(Some(SmallVec::new()));
        body(&*self);
        let sources = self.reads.replace(outer).unwrap_or_default();

        let previous = self
            .effects
            .get(id)
            .map(|slot| slot.sources.clone())
            .unwrap_or_default();
        self.unobserve(id, &previous);
        for &source in &sources {
            if let Some(signal) = self.signals.get_mut(source) {
                signal.observers.push(id);
            }
        }

        if let Some(slot) = self.effects.get_mut(id) {
            slot.body = Some(body);
            slot.sources = sources;
        }
    }

    fn unobserve(&mut self, effect: EffectId, sources: &[SignalId]) {
        for &source in sources {
            if let Some(signal) = self.signals.get_mut(source) {
                signal.observers.retain(|observer| *observer != effect);
            }
        }
    }

    pub fn stats(&self) -> ReactiveStats {
        ReactiveStats {
            signal_count: self.signals.len(),
            effect_count: self.effects.len(),
            queued_effects: self.queue.len(),
            writes: self.writes,
        }
    }
}

impl Default for ReactiveGraph {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReactiveStats {
    pub signal_count: usize,
    pub effect_count: usize,
    pub queued_effects: usize,
    /// Total signal writes since the graph was created
    pub writes: u64,
}

/// The graph as shared by a runtime and its state handles
pub type SharedReactiveGraph = Arc<Mutex<ReactiveGraph>>;

/// Set when some state change asked for the tree to be rendered again
pub type DirtyFlag = Arc<AtomicBool>;

/// Lock the shared graph, recovering from a poisoned lock
pub fn lock_graph(graph: &SharedReactiveGraph) -> MutexGuard<'_, ReactiveGraph> {
    graph.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Removes its signal from the graph when dropped
struct SignalOwner {
    id: SignalId,
    graph: SharedReactiveGraph,
}

impl Drop for SignalOwner {
    fn drop(&mut self) {
        lock_graph(&self.graph).dispose_signal(self.id);
    }
}

/// Widget state: a signal bound to its graph and the rebuild flag
///
/// The handle owns its signal. Clones share it, and the signal is removed from the
/// graph when the last clone is dropped, so an unmounted widget leaves nothing behind.
///
/// Effects run while the graph is locked, so an effect must never touch or capture a
/// `State` handle; it receives the graph directly and reads through [`State::signal`].
pub struct State<T> {
    signal: Signal<T>,
    owner: Arc<SignalOwner>,
    dirty: DirtyFlag,
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            signal: self.signal,
            owner: Arc::clone(&self.owner),
            dirty: Arc::clone(&self.dirty),
        }
    }
}

impl<T> std::fmt::Debug for State<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("State").field("signal", &self.signal.id).finish()
    }
}

impl<T: Clone + Send + 'static> State<T> {
    /// Take ownership of `signal`
    pub fn new(signal: Signal<T>, graph: SharedReactiveGraph, dirty: DirtyFlag) -> Self {
        Self {
            signal,
            owner: Arc::new(SignalOwner {
                id: signal.id,
                graph,
            }),
            dirty,
        }
    }

    fn graph(&self) -> MutexGuard<'_, ReactiveGraph> {
        lock_graph(&self.owner.graph)
    }

    /// Current value, or the default if the signal is gone
    pub fn get(&self) -> T
    where
        T: Default,
    {
        self.try_get().unwrap_or_default()
    }

    pub fn try_get(&self) -> Option<T> {
        self.graph().peek(self.signal)
    }

    /// Look at the value without cloning it
    pub fn with<R>(&self, f: impl FnOnce(Option<&T>) -> R) -> R {
        let graph = self.graph();
        f(graph.borrow(self.signal))
    }

    pub fn set(&self, value: T) {
        self.graph().set(self.signal, value);
    }

    /// Set and request a rebuild
    pub fn set_rebuild(&self, value: T) {
        self.set(value);
        self.dirty.store(true, Ordering::SeqCst);
    }

    pub fn update(&self, f: impl FnOnce(T) -> T) {
        self.graph().update(self.signal, f);
    }

    /// Update and request a rebuild
    pub fn update_rebuild(&self, f: impl FnOnce(T) -> T) {
        self.update(f);
        self.dirty.store(true, Ordering::SeqCst);
    }

    /// The signal behind this handle, for reading inside effects
    pub fn signal(&self) -> Signal<T> {
        self.signal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder<T: Send + 'static>() -> (Arc<Mutex<Vec<T>>>, Arc<Mutex<Vec<T>>>) {
        let log = Arc::new(Mutex::new(Vec::new()));
        (log.clone(), log)
    }

    #[test]
    fn test_set_and_version() {
        let mut graph = ReactiveGraph::new();
        let count = graph.create_signal(0i32);
        assert_eq!(graph.get(count), Some(0));

        graph.set(count, 42);
        graph.update(count, |c| c + 1);
        assert_eq!(graph.peek(count), Some(43));
        assert_eq!(graph.version(count.id()), Some(2));
        assert_eq!(graph.stats().writes, 2);
    }

    #[test]
    fn test_effect_reruns_on_source_write() {
        let mut graph = ReactiveGraph::new();
        let count = graph.create_signal(0i32);
        let (log, seen) = recorder();

        graph.create_effect(move |g| {
            log.lock().unwrap().push(g.get(count).unwrap_or(-1));
        });
        graph.set(count, 1);
        graph.set(count, 2);
        assert_eq!(*seen.lock().unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn test_unread_signal_does_not_trigger() {
        let mut graph = ReactiveGraph::new();
        let read = graph.create_signal(1u8);
        let ignored = graph.create_signal(1u8);
        let (log, seen) = recorder();

        graph.create_effect(move |g| {
            log.lock().unwrap().push(g.get(read));
            let _ = g.peek(ignored);
        });
        graph.set(ignored, 2);
        assert_eq!(seen.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_sources_follow_the_last_run() {
        let mut graph = ReactiveGraph::new();
        let use_a = graph.create_signal(true);
        let a = graph.create_signal("a");
        let b = graph.create_signal("b");
        let (log, seen) = recorder();

        graph.create_effect(move |g| {
            let pick = if g.get(use_a).unwrap_or(false) { a } else { b };
            log.lock().unwrap().push(g.get(pick).unwrap_or_default());
        });
        graph.set(use_a, false);
        graph.set(a, "a2");
        assert_eq!(*seen.lock().unwrap(), vec!["a", "b"]);

        graph.set(b, "b2");
        assert_eq!(*seen.lock().unwrap(), vec!["a", "b", "b2"]);
    }

    #[test]
    fn test_disposed_effect_stays_quiet() {
        let mut graph = ReactiveGraph::new();
        let count = graph.create_signal(0i32);
        let (log, seen) = recorder();

        let effect = graph.create_effect(move |g| {
            log.lock().unwrap().push(g.get(count));
        });
        graph.dispose_effect(effect);
        graph.set(count, 5);
        assert_eq!(seen.lock().unwrap().len(), 1);
        assert_eq!(graph.stats().effect_count, 0);
    }

    #[test]
    fn test_state_rebuild_flag() {
        let mut graph = ReactiveGraph::new();
        let signal = graph.create_signal(vec![1u32]);
        let dirty: DirtyFlag = Arc::new(AtomicBool::new(false));
        let state = State::new(signal, Arc::new(Mutex::new(graph)), dirty.clone());

        state.update(|mut v| {
            v.push(2);
            v
        });
        assert!(!dirty.load(Ordering::SeqCst));

        state.update_rebuild(|mut v| {
            v.push(3);
            v
        });
        assert!(dirty.load(Ordering::SeqCst));
        assert_eq!(state.get(), vec![1, 2, 3]);
        assert_eq!(state.with(|v| v.map(Vec::len)), Some(3));
    }

    #[test]
    fn test_last_state_clone_frees_signal() {
        let graph: SharedReactiveGraph = Arc::new(Mutex::new(ReactiveGraph::new()));
        let dirty: DirtyFlag = Arc::new(AtomicBool::new(false));
        let signal = lock_graph(&graph).create_signal(7u8);
        let state = State::new(signal, graph.clone(), dirty);

        let copy = state.clone();
        drop(state);
        assert_eq!(copy.get(), 7);
        assert_eq!(lock_graph(&graph).stats().signal_count, 1);

        drop(copy);
        assert_eq!(lock_graph(&graph).stats().signal_count, 0);
        assert_eq!(lock_graph(&graph).peek(signal), None);
    }

    #[test]
    fn test_disposed_signal_leaves_effect_sources() {
        let mut graph = ReactiveGraph::new();
        let count = graph.create_signal(1i32);
        let (log, seen) = recorder();

        graph.create_effect(move |g| {
            log.lock().unwrap().push(g.get(count));
        });
        assert!(graph.dispose_signal(count.id()));
        assert!(!graph.dispose_signal(count.id()));
        graph.set(count, 2);
        assert_eq!(*seen.lock().unwrap(), vec![Some(1)]);
        assert_eq!(graph.stats().signal_count, 0);
    }
}

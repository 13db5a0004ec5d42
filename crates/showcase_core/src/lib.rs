//! Showcase core runtime
//!
//! The pieces every widget in the gallery builds on:
//!
//! - [`reactive`]: signals, effects and the [`State`] handle
//! - [`timer`]: a virtual-clock timer queue for expiry, autoplay and latency
//! - [`context`]: scoped provider/consumer lookup
//! - [`geometry`]: bounds and sizes for positioning
//! - [`runtime`]: the per-application bundle of the above

pub mod context;
pub mod geometry;
pub mod reactive;
pub mod runtime;
pub mod timer;

pub use context::{ContextError, Scope};
pub use geometry::{Bounds, Size};
pub use reactive::{
    lock_graph, DirtyFlag, Effect, EffectId, ReactiveGraph, ReactiveStats, SharedReactiveGraph,
    Signal, SignalId, State,
};
pub use runtime::ShowcaseRuntime;
pub use timer::{scheduler, Scheduler, SchedulerExt, TimerId, TimerQueue};

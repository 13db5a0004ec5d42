//! Scoped context: explicit provider/consumer boundaries
//!
//! A [`Scope`] is a node in the component tree. A provider stores a value in its
//! scope with [`Scope::provide`]; any descendant scope can look it up by type. Lookups
//! never see values provided by siblings or by descendants.
//!
//! ```ignore
//! let root = Scope::root();
//! root.provide(toasts.clone());
//!
//! let page = root.child("page");
//! let toasts: ToastProvider = page.expect_context("use_toast", "ToastProvider");
//! ```

use rustc_hash::FxHashMap;
use std::any::{Any, TypeId};
use std::sync::{Arc, PoisonError, RwLock};
use thiserror::Error;

/// Context lookup failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContextError {
    /// Nothing of the requested type was provided on the path to the root
    #[error("no `{type_name}` provided above scope `{scope}`")]
    Missing {
        type_name: &'static str,
        scope: String,
    },
}

type ContextValue = Arc<dyn Any + Send + Sync>;

struct ScopeInner {
    name: &'static str,
    parent: Option<Scope>,
    values: RwLock<FxHashMap<TypeId, ContextValue>>,
}

/// A node in the provider tree (cheap to clone)
#[derive(Clone)]
pub struct Scope {
    inner: Arc<ScopeInner>,
}

impl Scope {
    /// Create a root scope with no parent
    pub fn root() -> Self {
        Self::with_parent("root", None)
    }

    /// Create a child scope that can see everything provided above it
    pub fn child(&self, name: &'static str) -> Self {
        Self::with_parent(name, Some(self.clone()))
    }

    fn with_parent(name: &'static str, parent: Option<Scope>) -> Self {
        Self {
            inner: Arc::new(ScopeInner {
                name,
                parent,
                values: RwLock::new(FxHashMap::default()),
            }),
        }
    }

    /// Scope name
    pub fn name(&self) -> &'static str {
        self.inner.name
    }

    /// Slash-separated path from the root, for diagnostics
    pub fn path(&self) -> String {
        match &self.inner.parent {
            Some(parent) => format!("{}/{}", parent.path(), self.inner.name),
            None => self.inner.name.to_string(),
        }
    }

    /// Provide a value to this scope and its descendants, replacing any previous value
    /// of the same type in this scope
    pub fn provide<T: Clone + Send + Sync + 'static>(&self, value: T) {
        tracing::debug!(
            scope = self.inner.name,
            type_name = std::any::type_name::<T>(),
            "context provided"
        );
        self.inner
            .values
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(TypeId::of::<T>(), Arc::new(value));
    }

    /// Look up a value provided here or in an ancestor
    pub fn try_use_context<T: Clone + Send + Sync + 'static>(&self) -> Result<T, ContextError> {
        let mut scope = Some(self);
        while let Some(current) = scope {
            let found = current
                .inner
                .values
                .read()
                .unwrap_or_else(PoisonError::into_inner)
                .get(&TypeId::of::<T>())
                .and_then(|v| v.downcast_ref::<T>().cloned());
            if let Some(value) = found {
                return Ok(value);
            }
            scope = current.inner.parent.as_ref();
        }

        Err(ContextError::Missing {
            type_name: std::any::type_name::<T>(),
            scope: self.path(),
        })
    }

    /// Look up a value, returning None when it is not provided
    pub fn use_context<T: Clone + Send + Sync + 'static>(&self) -> Option<T> {
        self.try_use_context().ok()
    }

    /// Look up a value that must be provided
    ///
    /// # Panics
    ///
    /// Panics when no ancestor provides `T`. This is a wiring mistake, not a runtime
    /// condition.
    #[track_caller]
    pub fn expect_context<T: Clone + Send + Sync + 'static>(
        &self,
        hook: &str,
        provider: &str,
    ) -> T {
        match self.try_use_context() {
            Ok(value) => value,
            Err(err) => panic!("{hook} must be used within <{provider}>: {err}"),
        }
    }
}

impl std::fmt::Debug for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scope").field("path", &self.path()).finish()
    }
}

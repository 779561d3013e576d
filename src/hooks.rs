//! Hook dispatch for build-session extensions.
//!
//! Listeners are registered against a `(category, event)` pair during
//! pipeline setup. The cleaner triggers exactly one event per cleanup,
//! `("clean", "on_obsolete")`, handing listeners the obsolete path list so
//! they can add, drop, or reorder entries before anything is deleted.
//!
//! # Example
//!
//! ```
//! use sitesweep::hooks::{HookDispatcher, Hooks, CLEAN, ON_OBSOLETE};
//! use std::path::PathBuf;
//!
//! let mut hooks = Hooks::new();
//! hooks.register(CLEAN, ON_OBSOLETE, |paths: &mut Vec<PathBuf>| {
//!     paths.retain(|p| p.extension().map_or(true, |ext| ext != "pdf"));
//! });
//!
//! let mut obsolete = vec![PathBuf::from("/out/old.html"), PathBuf::from("/out/brochure.pdf")];
//! hooks.trigger(CLEAN, ON_OBSOLETE, &mut obsolete);
//! assert_eq!(obsolete, vec![PathBuf::from("/out/old.html")]);
//! ```

use std::collections::HashMap;
use std::path::PathBuf;

/// Hook category owned by the cleaner.
pub const CLEAN: &str = "clean";

/// Event fired once per cleanup with the obsolete path list.
pub const ON_OBSOLETE: &str = "on_obsolete";

/// A registered listener. Receives the payload by mutable reference.
pub type Listener = Box<dyn Fn(&mut Vec<PathBuf>) + Send + Sync>;

/// Anything that can fan an event out to listeners.
pub trait HookDispatcher {
    /// Run every listener for `(category, event)` synchronously, in
    /// registration order.
    fn trigger(&self, category: &str, event: &str, payload: &mut Vec<PathBuf>);
}

/// A dispatcher with no listeners.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoHooks;

impl HookDispatcher for NoHooks {
    fn trigger(&self, _category: &str, _event: &str, _payload: &mut Vec<PathBuf>) {}
}

/// Registry mapping `(category, event)` to an ordered listener list.
#[derive(Default)]
pub struct Hooks {
    listeners: HashMap<(String, String), Vec<Listener>>,
}

impl std::fmt::Debug for Hooks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let counts: HashMap<_, _> =
            self.listeners.iter().map(|(key, list)| (key, list.len())).collect();
        f.debug_struct("Hooks").field("listeners", &counts).finish()
    }
}

impl Hooks {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a listener for `(category, event)`.
    pub fn register<F>(&mut self, category: &str, event: &str, listener: F)
    where
        F: Fn(&mut Vec<PathBuf>) + Send + Sync + 'static,
    {
        self.listeners
            .entry((category.to_string(), event.to_string()))
            .or_default()
            .push(Box::new(listener));
    }

    /// Number of listeners registered for `(category, event)`.
    pub fn listener_count(&self, category: &str, event: &str) -> usize {
        self.listeners
            .get(&(category.to_string(), event.to_string()))
            .map_or(0, Vec::len)
    }

    /// Check if no listeners are registered at all.
    pub fn is_empty(&self) -> bool {
        self.listeners.values().all(Vec::is_empty)
    }

    /// Remove all listeners.
    pub fn clear(&mut self) {
        self.listeners.clear();
    }
}

impl HookDispatcher for Hooks {
    fn trigger(&self, category: &str, event: &str, payload: &mut Vec<PathBuf>) {
        if let Some(listeners) = self.listeners.get(&(category.to_string(), event.to_string())) {
            for listener in listeners {
                listener(payload);
            }
        }
    }
}

impl<T: HookDispatcher + ?Sized> HookDispatcher for &T {
    fn trigger(&self, category: &str, event: &str, payload: &mut Vec<PathBuf>) {
        (**self).trigger(category, event, payload)
    }
}

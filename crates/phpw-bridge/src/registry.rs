//! Shutdown-hook registry.
//!
//! Scripts register named callbacks to run after execution finishes.
//! The registry preserves insertion order, re-registration replaces a
//! descriptor in place without moving it, and the backing store is
//! allocated lazily on first registration and released at teardown.

use indexmap::IndexMap;

/// A script-level value bound into a deferred call.
#[derive(Debug, Clone, PartialEq)]
pub enum HookArg {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

/// A fault raised by a shutdown hook.
///
/// The interpreter-level analogue of an uncaught exception. Absorbed by
/// the dispatcher; never propagated to the host.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct HookFault {
    pub message: String,
}

impl HookFault {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

type HookFn = Box<dyn Fn(&[HookArg]) -> Result<(), HookFault>>;

/// One user-registered shutdown hook: a callable plus the arguments it
/// will later be invoked with. Immutable once registered; owned by the
/// registry entry holding it.
pub struct DeferredCall {
    callback: HookFn,
    args: Vec<HookArg>,
}

impl DeferredCall {
    /// A deferred call with no bound arguments.
    pub fn new(callback: impl Fn(&[HookArg]) -> Result<(), HookFault> + 'static) -> Self {
        Self::with_args(callback, Vec::new())
    }

    /// A deferred call with its argument-binding context.
    pub fn with_args(
        callback: impl Fn(&[HookArg]) -> Result<(), HookFault> + 'static,
        args: Vec<HookArg>,
    ) -> Self {
        Self {
            callback: Box::new(callback),
            args,
        }
    }

    /// Invoke the callable with its bound arguments.
    pub fn invoke(&self) -> Result<(), HookFault> {
        (self.callback)(&self.args)
    }

    pub fn args(&self) -> &[HookArg] {
        &self.args
    }
}

impl std::fmt::Debug for DeferredCall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeferredCall")
            .field("args", &self.args)
            .finish_non_exhaustive()
    }
}

/// Insertion-ordered mapping from hook name to deferred call.
///
/// Lives for at most one evaluation cycle; the entry point tears it
/// down unconditionally after dispatch, whether or not dispatch was
/// clean.
#[derive(Debug, Default)]
pub struct ShutdownRegistry {
    /// Allocated on first registration, dropped at teardown.
    entries: Option<IndexMap<String, DeferredCall>>,
}

impl ShutdownRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the hook registered under `name`.
    ///
    /// Replacement keeps the name's original insertion position.
    pub fn register(&mut self, name: impl Into<String>, call: DeferredCall) {
        let name = name.into();
        debug_assert!(!name.is_empty(), "hook names must be non-empty");
        self.entries.get_or_insert_with(IndexMap::new).insert(name, call);
    }

    /// Remove the hook registered under `name`. No-op if absent.
    pub fn remove(&mut self, name: &str) {
        if let Some(entries) = self.entries.as_mut() {
            entries.shift_remove(name);
        }
    }

    /// The live registrations, in insertion order.
    ///
    /// Does not mutate the registry; discarding the entries afterwards
    /// is [`teardown`](Self::teardown)'s job.
    pub fn drain(&self) -> impl Iterator<Item = (&str, &DeferredCall)> {
        self.entries
            .iter()
            .flat_map(|entries| entries.iter())
            .map(|(name, call)| (name.as_str(), call))
    }

    /// Release the backing store. Safe to call when nothing was ever
    /// registered, and safe to call twice.
    pub fn teardown(&mut self) {
        self.entries = None;
    }

    pub fn len(&self) -> usize {
        self.entries.as_ref().map_or(0, IndexMap::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

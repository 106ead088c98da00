//! Shutdown-hook dispatcher.
//!
//! Walks the registry in insertion order and invokes each hook exactly
//! once. A faulting hook must not stop the hooks after it and must not
//! escape the embedding boundary, so every invocation is scoped to its
//! own result and faults are folded into the aggregate report instead
//! of unwinding.

use crate::registry::{HookFault, ShutdownRegistry};

/// A recorded fault from a single hook invocation.
#[derive(Debug, Clone)]
pub struct FaultRecord {
    pub hook: String,
    pub fault: HookFault,
}

/// Aggregate outcome of a dispatch pass.
#[derive(Debug, Default)]
pub struct DispatchReport {
    /// How many hooks were invoked (faulted or not).
    pub invoked: usize,
    /// Absorbed faults, in invocation order.
    pub faults: Vec<FaultRecord>,
}

impl DispatchReport {
    /// True when every hook ran without fault.
    pub fn is_clean(&self) -> bool {
        self.faults.is_empty()
    }
}

/// Invoke every registered hook in insertion order, passing each its
/// bound arguments.
///
/// Return values are discarded; faults are logged and collected, never
/// re-raised. The registry itself is left untouched — the entry point
/// tears it down afterwards.
pub fn dispatch(registry: &ShutdownRegistry) -> DispatchReport {
    let mut report = DispatchReport::default();
    for (name, call) in registry.drain() {
        report.invoked += 1;
        match call.invoke() {
            Ok(()) => tracing::debug!(hook = %name, "shutdown hook completed"),
            Err(fault) => {
                tracing::warn!(hook = %name, %fault, "shutdown hook faulted");
                report.faults.push(FaultRecord {
                    hook: name.to_string(),
                    fault,
                });
            }
        }
    }
    report
}

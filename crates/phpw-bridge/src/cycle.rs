//! Host entry point — the per-cycle state machine.
//!
//! One call to [`EmbedBridge::run_cycle`] is one evaluation cycle:
//! bootstrap-check, script execution, shutdown-hook draining, registry
//! teardown, status code. Shutdown hooks run whether or not the script
//! faulted, and teardown runs whether or not dispatch was clean.

use crate::bootstrap::bootstrap;
use crate::dispatch::dispatch;
use crate::registry::ShutdownRegistry;

/// Phases of a single evaluation cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CycleState {
    #[default]
    Uninitialized,
    Ready,
    Executing,
    Draining,
    /// Terminal for this invocation; the next cycle starts fresh.
    TornDown,
}

/// Completion signal from the script-execution collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecOutcome {
    /// The script ran to the end.
    Completed,
    /// The script raised an uncaught fault. Shutdown hooks still run.
    Faulted,
}

/// The external script-execution collaborator.
///
/// Invoked exactly once per cycle. May register or remove shutdown
/// hooks through the registry it is handed; the bridge inspects nothing
/// beyond the completion signal.
pub trait ScriptExecutor {
    fn execute(&mut self, registry: &mut ShutdownRegistry) -> ExecOutcome;
}

/// Adapter that runs a closure as the script body.
pub struct FnExecutor<F>(pub F);

impl<F> ScriptExecutor for FnExecutor<F>
where
    F: FnMut(&mut ShutdownRegistry) -> ExecOutcome,
{
    fn execute(&mut self, registry: &mut ShutdownRegistry) -> ExecOutcome {
        (self.0)(registry)
    }
}

/// Executor that runs no script at all. Used when the host only wants
/// the lifecycle driven, e.g. through the bare `pib_init` export.
#[derive(Debug, Default)]
pub struct NoopExecutor;

impl ScriptExecutor for NoopExecutor {
    fn execute(&mut self, _registry: &mut ShutdownRegistry) -> ExecOutcome {
        ExecOutcome::Completed
    }
}

/// Status code reported to the embedding host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStatus {
    /// The cycle ran all the way to teardown. Script faults and hook
    /// faults are absorbed on the way.
    Completed,
    /// Interpreter globals could not be initialized; the cycle never
    /// reached script execution.
    BootstrapFailed,
}

impl HostStatus {
    /// Integer form handed across the embedding boundary.
    pub fn code(self) -> i32 {
        match self {
            HostStatus::Completed => 1,
            HostStatus::BootstrapFailed => 0,
        }
    }
}

/// Drives evaluation cycles on behalf of the host.
///
/// Owns the shutdown registry outright; "one active cycle per process"
/// is enforced by this state machine rather than by global visibility.
#[derive(Debug, Default)]
pub struct EmbedBridge {
    registry: ShutdownRegistry,
    state: CycleState,
}

impl EmbedBridge {
    pub fn new() -> Self {
        Self::default()
    }

    /// The phase the most recent cycle reached.
    pub fn state(&self) -> CycleState {
        self.state
    }

    /// The registry backing the current cycle.
    pub fn registry(&self) -> &ShutdownRegistry {
        &self.registry
    }

    /// Run one full evaluation cycle and report the status code.
    ///
    /// Re-enterable: bootstrap is idempotent, so every call after the
    /// first effectively starts at `Ready`.
    pub fn run_cycle(&mut self, executor: &mut dyn ScriptExecutor) -> HostStatus {
        if let Err(err) = bootstrap() {
            tracing::error!(%err, "interpreter bootstrap failed, aborting cycle");
            return HostStatus::BootstrapFailed;
        }
        self.state = CycleState::Ready;

        self.state = CycleState::Executing;
        if executor.execute(&mut self.registry) == ExecOutcome::Faulted {
            // Draining proceeds regardless; hooks are guaranteed to run.
            tracing::warn!("script execution faulted");
        }

        self.state = CycleState::Draining;
        let report = dispatch(&self.registry);
        if !report.is_clean() {
            tracing::warn!(
                invoked = report.invoked,
                faulted = report.faults.len(),
                "shutdown dispatch finished with absorbed faults"
            );
        }

        self.registry.teardown();
        self.state = CycleState::TornDown;
        HostStatus::Completed
    }
}

//! phpw-bridge — the embedded-runtime lifecycle bridge.
//!
//! Drives one evaluation cycle of the embedded interpreter on behalf of
//! a foreign host: bootstrap (idempotent, once per process) → script
//! execution → shutdown-hook draining → registry teardown → status code
//! back to the host. Shutdown hooks run even when the script faulted,
//! a faulting hook never stops the hooks after it, and teardown runs
//! unconditionally.
//!
//! # Architecture
//!
//! ```text
//! host shell ── pib_init() ──▶ EmbedBridge::run_cycle
//!                                ├── bootstrap()          (once per process)
//!                                ├── ScriptExecutor       (external collaborator)
//!                                ├── dispatch(&registry)  (fault-isolated)
//!                                └── registry.teardown()  (unconditional)
//! ```

pub mod bootstrap;
pub mod cycle;
pub mod dispatch;
pub mod ffi;
pub mod registry;

pub use bootstrap::{BootstrapError, RuntimeGlobals, bootstrap};
pub use cycle::{
    CycleState, EmbedBridge, ExecOutcome, FnExecutor, HostStatus, NoopExecutor, ScriptExecutor,
};
pub use dispatch::{DispatchReport, FaultRecord, dispatch};
pub use registry::{DeferredCall, HookArg, HookFault, ShutdownRegistry};

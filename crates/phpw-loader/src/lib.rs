//! phpw-loader — the host embedding shell.
//!
//! Compiles the interpreter module, instantiates it, and drives
//! evaluation cycles by calling the guest's exported `pib_init`. The
//! shell blocks for the duration of each cycle; there is no background
//! execution and no mid-cycle cancellation — once a cycle starts, it
//! runs to completion before control returns.

pub mod config;

use std::path::Path;

use anyhow::Context;
use wasmtime::{Engine, Linker, Module, Store, TypedFunc};

/// Name of the guest's cycle entry export.
pub const ENTRY_SYMBOL: &str = "pib_init";

/// Outcome of one evaluation cycle, decoded from the guest status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalStatus {
    /// Status 1: the cycle ran to teardown. Callback faults inside the
    /// guest are absorbed and still count as completion.
    Completed,
    /// Status 0: the guest could not initialize its interpreter.
    BootstrapFailed,
}

impl EvalStatus {
    fn from_code(code: i32) -> anyhow::Result<Self> {
        match code {
            1 => Ok(EvalStatus::Completed),
            0 => Ok(EvalStatus::BootstrapFailed),
            other => anyhow::bail!("guest returned unknown status code {other}"),
        }
    }
}

/// The embedding shell: owns the engine and compiles guest modules.
pub struct Loader {
    engine: Engine,
}

impl Loader {
    /// Create a loader with the default synchronous engine.
    pub fn new() -> anyhow::Result<Self> {
        let engine = Engine::default();
        tracing::info!("loader engine initialized");
        Ok(Self { engine })
    }

    /// Compile a guest module from a `.wasm` (or `.wat`) file and
    /// prepare it for evaluation.
    pub fn load_file(&self, name: &str, path: &Path) -> anyhow::Result<Evaluator> {
        let module = Module::from_file(&self.engine, path)
            .with_context(|| format!("failed to compile module from {}", path.display()))?;
        tracing::info!(%name, path = %path.display(), "compiled guest module");
        self.instantiate(name, module)
    }

    /// Compile a guest module from raw bytes and prepare it for
    /// evaluation.
    pub fn load_bytes(&self, name: &str, bytes: &[u8]) -> anyhow::Result<Evaluator> {
        let module = Module::new(&self.engine, bytes)
            .with_context(|| format!("failed to compile module {name}"))?;
        tracing::info!(%name, "compiled guest module from bytes");
        self.instantiate(name, module)
    }

    fn instantiate(&self, name: &str, module: Module) -> anyhow::Result<Evaluator> {
        let mut store = Store::new(&self.engine, ());
        let linker = Linker::new(&self.engine);
        let instance = linker
            .instantiate(&mut store, &module)
            .with_context(|| format!("failed to instantiate module {name}"))?;
        let entry = instance
            .get_typed_func::<(), i32>(&mut store, ENTRY_SYMBOL)
            .with_context(|| format!("module {name} does not export `{ENTRY_SYMBOL}`"))?;

        Ok(Evaluator {
            store,
            entry,
            module_name: name.to_string(),
        })
    }
}

/// A loaded guest with its store and resolved entry export.
///
/// Each [`evaluate`](Evaluator::evaluate) call is one full cycle; the
/// guest's entry is re-enterable, so the same instance can be driven
/// repeatedly.
pub struct Evaluator {
    store: Store<()>,
    entry: TypedFunc<(), i32>,
    module_name: String,
}

impl std::fmt::Debug for Evaluator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Evaluator")
            .field("module_name", &self.module_name)
            .finish_non_exhaustive()
    }
}

impl Evaluator {
    /// Drive one evaluation cycle and decode the guest's status code.
    ///
    /// A guest trap is a loader-level error — distinct from
    /// `BootstrapFailed`, which is the guest reporting an orderly
    /// bootstrap abort.
    pub fn evaluate(&mut self) -> anyhow::Result<EvalStatus> {
        let code = self
            .entry
            .call(&mut self.store, ())
            .with_context(|| format!("`{ENTRY_SYMBOL}` trapped in {}", self.module_name))?;
        let status = EvalStatus::from_code(code)?;
        tracing::info!(module = %self.module_name, ?status, "evaluation cycle finished");
        Ok(status)
    }

    /// The module name this evaluator was created from.
    pub fn module_name(&self) -> &str {
        &self.module_name
    }
}

//! C ABI for the embedding shell.
//!
//! The shell sees exactly one symbol, [`pib_init`], called once per
//! desired evaluation cycle. Host-side glue may install a script
//! executor beforehand with [`set_cycle_executor`]; without one the
//! cycle drives the lifecycle with no script body.
//!
//! The bridge instance behind the symbol is thread-local: the embedding
//! model is single-threaded and synchronous, with exactly one active
//! cycle at a time.

use std::cell::RefCell;
use std::os::raw::c_int;

use crate::cycle::{EmbedBridge, NoopExecutor, ScriptExecutor};

thread_local! {
    static BRIDGE: RefCell<EmbedBridge> = RefCell::new(EmbedBridge::new());
    static EXECUTOR: RefCell<Option<Box<dyn ScriptExecutor>>> = const { RefCell::new(None) };
}

/// Install the script-execution collaborator used by [`pib_init`].
///
/// Replaces any previously installed executor.
pub fn set_cycle_executor(executor: Box<dyn ScriptExecutor>) {
    EXECUTOR.with(|slot| *slot.borrow_mut() = Some(executor));
}

/// Remove any installed executor, returning to the bare lifecycle.
pub fn clear_cycle_executor() {
    EXECUTOR.with(|slot| slot.borrow_mut().take());
}

/// Run one evaluation cycle.
///
/// Returns 1 when the cycle completed (script and hook faults are
/// absorbed internally), 0 when interpreter bootstrap failed.
#[unsafe(no_mangle)]
pub extern "C" fn pib_init() -> c_int {
    let status = BRIDGE.with(|bridge| {
        let mut bridge = bridge.borrow_mut();
        EXECUTOR.with(|slot| match slot.borrow_mut().as_mut() {
            Some(executor) => bridge.run_cycle(executor.as_mut()),
            None => bridge.run_cycle(&mut NoopExecutor),
        })
    });
    status.code() as c_int
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::cycle::{ExecOutcome, FnExecutor};
    use crate::registry::{DeferredCall, ShutdownRegistry};

    #[test]
    fn bare_entry_reports_completion() {
        clear_cycle_executor();
        assert_eq!(pib_init(), 1);
        // Re-enterable: a second cycle starts fresh.
        assert_eq!(pib_init(), 1);
    }

    #[test]
    fn installed_executor_drives_the_cycle() {
        let ran = Rc::new(RefCell::new(false));
        {
            let ran = Rc::clone(&ran);
            set_cycle_executor(Box::new(FnExecutor(
                move |registry: &mut ShutdownRegistry| {
                    let ran = Rc::clone(&ran);
                    registry.register(
                        "flush",
                        DeferredCall::new(move |_| {
                            *ran.borrow_mut() = true;
                            Ok(())
                        }),
                    );
                    ExecOutcome::Completed
                },
            )));
        }

        assert_eq!(pib_init(), 1);
        assert!(*ran.borrow());
        clear_cycle_executor();
    }
}

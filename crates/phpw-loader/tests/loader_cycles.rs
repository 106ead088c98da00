//! Loader integration tests against small WAT guests that model the
//! embedding contract: a `pib_init` export returning the cycle status.

use phpw_loader::{EvalStatus, Loader};

/// A well-behaved guest: every cycle completes.
const GUEST_OK: &str = r#"(module (func (export "pib_init") (result i32) (i32.const 1)))"#;

/// A guest whose interpreter cannot come up.
const GUEST_BOOT_FAIL: &str = r#"(module (func (export "pib_init") (result i32) (i32.const 0)))"#;

/// A guest that returns a status outside the contract.
const GUEST_BAD_STATUS: &str = r#"(module (func (export "pib_init") (result i32) (i32.const 7)))"#;

/// A guest that traps instead of returning.
const GUEST_TRAP: &str = r#"(module (func (export "pib_init") (result i32) unreachable))"#;

/// A guest without the entry export at all.
const GUEST_NO_ENTRY: &str = r#"(module (func (export "other") (result i32) (i32.const 1)))"#;

#[test]
fn completed_cycle() {
    let loader = Loader::new().unwrap();
    let mut evaluator = loader.load_bytes("ok", GUEST_OK.as_bytes()).unwrap();
    assert_eq!(evaluator.evaluate().unwrap(), EvalStatus::Completed);
    assert_eq!(evaluator.module_name(), "ok");
}

#[test]
fn cycles_are_reenterable() {
    let loader = Loader::new().unwrap();
    let mut evaluator = loader.load_bytes("ok", GUEST_OK.as_bytes()).unwrap();
    for _ in 0..3 {
        assert_eq!(evaluator.evaluate().unwrap(), EvalStatus::Completed);
    }
}

#[test]
fn bootstrap_failure_is_reported_not_an_error() {
    let loader = Loader::new().unwrap();
    let mut evaluator = loader
        .load_bytes("boot-fail", GUEST_BOOT_FAIL.as_bytes())
        .unwrap();
    assert_eq!(evaluator.evaluate().unwrap(), EvalStatus::BootstrapFailed);
}

#[test]
fn unknown_status_code_is_an_error() {
    let loader = Loader::new().unwrap();
    let mut evaluator = loader
        .load_bytes("bad-status", GUEST_BAD_STATUS.as_bytes())
        .unwrap();
    let err = evaluator.evaluate().unwrap_err();
    assert!(err.to_string().contains("unknown status code 7"));
}

#[test]
fn guest_trap_surfaces_as_loader_error() {
    let loader = Loader::new().unwrap();
    let mut evaluator = loader.load_bytes("trap", GUEST_TRAP.as_bytes()).unwrap();
    let err = evaluator.evaluate().unwrap_err();
    assert!(err.to_string().contains("trapped"));
}

#[test]
fn missing_entry_export_fails_at_load_time() {
    let loader = Loader::new().unwrap();
    let err = loader
        .load_bytes("no-entry", GUEST_NO_ENTRY.as_bytes())
        .unwrap_err();
    assert!(err.to_string().contains("pib_init"));
}

#[test]
fn invalid_module_bytes_fail_to_compile() {
    let loader = Loader::new().unwrap();
    assert!(loader.load_bytes("garbage", b"\x00not wasm").is_err());
}

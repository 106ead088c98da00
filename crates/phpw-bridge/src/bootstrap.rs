//! Process-wide interpreter bootstrap.
//!
//! Interpreter global state — the constant table and the facility
//! backing the shutdown registry — is initialized once per process.
//! The host may invoke the entry point repeatedly; every call after the
//! first observes the same globals.

use std::collections::HashMap;

use once_cell::sync::OnceCell;

static GLOBALS: OnceCell<RuntimeGlobals> = OnceCell::new();

/// Interpreter state shared by every evaluation cycle in the process.
#[derive(Debug)]
pub struct RuntimeGlobals {
    /// Script-visible integer constants, keyed by name.
    constants: HashMap<String, i64>,
}

impl RuntimeGlobals {
    fn build() -> Result<Self, BootstrapError> {
        Self::from_constants(phpw_mysqli::report_constants())
    }

    fn from_constants(
        table: impl IntoIterator<Item = (&'static str, i64)>,
    ) -> Result<Self, BootstrapError> {
        let mut constants = HashMap::new();
        for (name, value) in table {
            if constants.insert(name.to_string(), value).is_some() {
                return Err(BootstrapError::DuplicateConstant(name.to_string()));
            }
        }
        Ok(Self { constants })
    }

    /// Look up a registered constant by its script-visible name.
    pub fn constant(&self, name: &str) -> Option<i64> {
        self.constants.get(name).copied()
    }

    pub fn constant_count(&self) -> usize {
        self.constants.len()
    }
}

/// Errors raised while bringing up interpreter globals. All of them are
/// fatal for the cycle: the entry point must not proceed to script
/// execution.
#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    #[error("constant {0:?} registered twice")]
    DuplicateConstant(String),
}

/// Initialize interpreter globals, once per process.
///
/// Idempotent: later calls return the already-initialized state without
/// rebuilding anything.
pub fn bootstrap() -> Result<&'static RuntimeGlobals, BootstrapError> {
    GLOBALS.get_or_try_init(|| {
        let globals = RuntimeGlobals::build()?;
        tracing::info!(
            constants = globals.constant_count(),
            "interpreter globals initialized"
        );
        Ok(globals)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bootstrap_is_idempotent() {
        let first = bootstrap().unwrap();
        let second = bootstrap().unwrap();
        assert!(std::ptr::eq(first, second));
        assert_eq!(first.constant_count(), second.constant_count());
    }

    #[test]
    fn report_constants_are_registered() {
        let globals = bootstrap().unwrap();
        assert_eq!(globals.constant("MYSQLI_REPORT_OFF"), Some(0));
        assert_eq!(globals.constant("MYSQLI_REPORT_ALL"), Some(255));
        assert_eq!(globals.constant("MYSQLI_REPORT_INDEX"), Some(4));
        assert_eq!(globals.constant("NO_SUCH_CONSTANT"), None);
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let err = RuntimeGlobals::from_constants([("DUP", 1), ("DUP", 2)]).unwrap_err();
        assert!(matches!(err, BootstrapError::DuplicateConstant(ref name) if name == "DUP"));
        assert_eq!(err.to_string(), "constant \"DUP\" registered twice");
    }

    #[test]
    fn builtin_table_builds_without_collisions() {
        let globals = RuntimeGlobals::from_constants(phpw_mysqli::report_constants()).unwrap();
        assert_eq!(globals.constant("MYSQLI_REPORT_STRICT"), Some(2));
        assert_eq!(globals.constant_count(), 5);
    }
}

//! phpw-mysqli — the inert mysqli client API surface.
//!
//! The embedded interpreter ships without a real MySQL driver, but
//! scripts written against the stock client still expect the mysqli
//! functions to exist. This crate provides that surface: every function
//! is a context-free constant return. No I/O is ever performed and no
//! call can fail.
//!
//! Return shapes come from a closed set ([`StubValue`]); the
//! connection-like object is a plain record ([`ConnectionInfo`]) built
//! fresh on every call rather than a dynamically registered class.

pub mod connection;
pub mod stubs;

pub use connection::ConnectionInfo;
pub use stubs::{FUNCTION_TABLE, StubFn, report_constants};

/// A value produced by a stub call.
///
/// The empty string and zero are spelled `Str(String::new())` and
/// `Int(0)`.
#[derive(Debug, Clone, PartialEq)]
pub enum StubValue {
    True,
    Null,
    Str(String),
    Int(i64),
    Connection(ConnectionInfo),
}

impl StubValue {
    pub fn empty_string() -> Self {
        StubValue::Str(String::new())
    }
}

/// Call a stub function by its script-visible name.
///
/// Returns `None` for names outside the shim's function table.
pub fn call(name: &str, args: &[StubValue]) -> Option<StubValue> {
    let (_, stub) = FUNCTION_TABLE.iter().find(|(n, _)| *n == name)?;
    Some(stub(args))
}

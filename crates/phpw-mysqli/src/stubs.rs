//! Stub implementations of the mysqli function table.
//!
//! Each function accepts arbitrary arguments and ignores them; the
//! return value never depends on input. `report_constants` exposes the
//! report-mode constants for registration into the interpreter
//! constant table at bootstrap.

use crate::StubValue;
use crate::connection::ConnectionInfo;

/// `mysqli_report()` error-reporting modes.
pub const REPORT_OFF: i64 = 0;
pub const REPORT_ERROR: i64 = 1;
pub const REPORT_STRICT: i64 = 2;
pub const REPORT_INDEX: i64 = 4;
pub const REPORT_ALL: i64 = 255;

/// Script-visible report-mode constants, in registration order.
pub fn report_constants() -> [(&'static str, i64); 5] {
    [
        ("MYSQLI_REPORT_OFF", REPORT_OFF),
        ("MYSQLI_REPORT_ERROR", REPORT_ERROR),
        ("MYSQLI_REPORT_STRICT", REPORT_STRICT),
        ("MYSQLI_REPORT_INDEX", REPORT_INDEX),
        ("MYSQLI_REPORT_ALL", REPORT_ALL),
    ]
}

/// Signature shared by every stub in the function table.
pub type StubFn = fn(&[StubValue]) -> StubValue;

/// The shim's function table, keyed by script-visible name.
pub const FUNCTION_TABLE: &[(&str, StubFn)] = &[
    ("mysqli_report", report),
    ("mysqli_get_server_info", get_server_info),
    ("mysqli_init", init),
    ("mysqli_connect", connect),
    ("mysqli_real_connect", real_connect),
    ("mysqli_query", query),
    ("mysqli_fetch_array", fetch_array),
    ("mysqli_select_db", select_db),
    ("mysqli_close", close),
    ("mysqli_real_escape_string", real_escape_string),
    ("mysqli_errno", errno),
    ("mysqli_error", error),
];

pub fn report(_args: &[StubValue]) -> StubValue {
    StubValue::True
}

pub fn get_server_info(_args: &[StubValue]) -> StubValue {
    StubValue::Str(format!("php-wasm-{}", env!("CARGO_PKG_VERSION")))
}

pub fn init(_args: &[StubValue]) -> StubValue {
    StubValue::Connection(ConnectionInfo::new())
}

pub fn connect(_args: &[StubValue]) -> StubValue {
    tracing::trace!("mysqli_connect stubbed, handing out inert connection");
    StubValue::Connection(ConnectionInfo::new())
}

pub fn real_connect(_args: &[StubValue]) -> StubValue {
    StubValue::True
}

pub fn query(_args: &[StubValue]) -> StubValue {
    StubValue::True
}

/// There is never a result set to iterate, so fetching yields null.
pub fn fetch_array(_args: &[StubValue]) -> StubValue {
    StubValue::Null
}

pub fn select_db(_args: &[StubValue]) -> StubValue {
    StubValue::True
}

pub fn close(_args: &[StubValue]) -> StubValue {
    StubValue::True
}

pub fn real_escape_string(_args: &[StubValue]) -> StubValue {
    StubValue::empty_string()
}

pub fn errno(_args: &[StubValue]) -> StubValue {
    StubValue::Int(0)
}

pub fn error(_args: &[StubValue]) -> StubValue {
    StubValue::empty_string()
}

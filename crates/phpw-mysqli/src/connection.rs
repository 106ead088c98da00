//! The connection-like record handed out by `mysqli_init` and
//! `mysqli_connect`.

/// Property bag of a stub connection.
///
/// Field names and defaults mirror the stock client's connection
/// object, so code that reads them keeps working against the inert
/// shim. `errno` stays 0 and `error` stays empty no matter what —
/// there is no richer error model behind them.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectionInfo {
    pub host: String,
    pub username: String,
    pub password: String,
    pub database: String,
    pub port: u16,
    pub socket: String,
    pub errno: i64,
    pub error: String,
    pub sqlstate: String,
    pub affected_rows: i64,
    pub insert_id: i64,
    pub client_info: String,
    pub client_version: i64,
    pub server_info: String,
    pub server_version: i64,
    pub character_set_name: String,
    /// The wire protocol version is reported as a string by the stock
    /// client, so the shim does the same.
    pub protocol_version: String,
    pub thread_id: i64,
    pub warning_count: i64,
    pub info: Option<String>,
    pub connect_errno: bool,
    pub connect_error: String,
}

impl ConnectionInfo {
    /// Build a fresh connection record with the fixed defaults.
    pub fn new() -> Self {
        Self {
            host: String::new(),
            username: String::new(),
            password: String::new(),
            database: String::new(),
            port: 3306,
            socket: String::new(),
            errno: 0,
            error: String::new(),
            sqlstate: "00000".to_string(),
            affected_rows: 0,
            insert_id: 0,
            client_info: "mysqli_polyfill".to_string(),
            client_version: 0,
            server_info: "mysqli_polyfill".to_string(),
            server_version: 0,
            character_set_name: "utf8".to_string(),
            protocol_version: "10".to_string(),
            thread_id: 0,
            warning_count: 0,
            info: None,
            connect_errno: false,
            connect_error: String::new(),
        }
    }
}

impl Default for ConnectionInfo {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_stock_client_bag() {
        let conn = ConnectionInfo::new();
        assert_eq!(conn.port, 3306);
        assert_eq!(conn.sqlstate, "00000");
        assert_eq!(conn.character_set_name, "utf8");
        assert_eq!(conn.protocol_version, "10");
        assert_eq!(conn.errno, 0);
        assert_eq!(conn.error, "");
        assert_eq!(conn.affected_rows, 0);
        assert_eq!(conn.insert_id, 0);
        assert_eq!(conn.thread_id, 0);
        assert_eq!(conn.warning_count, 0);
        assert!(!conn.connect_errno);
        assert_eq!(conn.connect_error, "");
        assert!(conn.info.is_none());
    }

    #[test]
    fn every_call_builds_an_identical_bag() {
        assert_eq!(ConnectionInfo::new(), ConnectionInfo::default());
    }
}

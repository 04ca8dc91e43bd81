//! Argument bags for the driver operations.
//!
//! Each operation accepts `impl Into<XxxArgs>`, so callers can pass
//! positional tuples or build the bag with keyed setters. Tuples seed the
//! fields in positional order and setters overwrite whatever is already
//! there, which gives keyed options precedence over positional values.
//! [`ConnectArgs`] adds a third layer on top: values read from a
//! preferences file override everything supplied in code.
//!
//! The scalar-or-list distinction is carried in the bag ([`Keys`],
//! [`Records`]) and decides which wire method variant an operation
//! dispatches to. A list with one element is still a list.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::prefs::Preferences;
use crate::timestamp::Timestamp;
use crate::value::Value;

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 1717;
pub const DEFAULT_USERNAME: &str = "admin";
pub const DEFAULT_PASSWORD: &str = "admin";

/// One key or several.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Keys {
    Single(String),
    Many(Vec<String>),
}

impl From<&str> for Keys {
    fn from(key: &str) -> Self {
        Keys::Single(key.to_string())
    }
}

impl From<String> for Keys {
    fn from(key: String) -> Self {
        Keys::Single(key)
    }
}

impl From<Vec<String>> for Keys {
    fn from(keys: Vec<String>) -> Self {
        Keys::Many(keys)
    }
}

impl From<Vec<&str>> for Keys {
    fn from(keys: Vec<&str>) -> Self {
        Keys::Many(keys.into_iter().map(String::from).collect())
    }
}

impl From<&[&str]> for Keys {
    fn from(keys: &[&str]) -> Self {
        Keys::Many(keys.iter().map(|k| k.to_string()).collect())
    }
}

/// One record id or several.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Records {
    Single(i64),
    Many(Vec<i64>),
}

impl From<i64> for Records {
    fn from(record: i64) -> Self {
        Records::Single(record)
    }
}

impl From<Vec<i64>> for Records {
    fn from(records: Vec<i64>) -> Self {
        Records::Many(records)
    }
}

impl From<&[i64]> for Records {
    fn from(records: &[i64]) -> Self {
        Records::Many(records.to_vec())
    }
}

/// Arguments for [`Concourse::connect`](crate::Concourse::connect).
///
/// Resolution order, weakest to strongest: built-in defaults, positional
/// tuple values, keyed setters, preferences file. A `prefs` path pointing
/// at a missing or malformed file is an error rather than a silent
/// fallback.
#[derive(Debug, Clone, Default)]
pub struct ConnectArgs {
    pub(crate) host: Option<String>,
    pub(crate) port: Option<u16>,
    pub(crate) username: Option<String>,
    pub(crate) password: Option<String>,
    pub(crate) environment: Option<String>,
    pub(crate) prefs: Option<PathBuf>,
}

impl ConnectArgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    pub fn environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = Some(environment.into());
        self
    }

    /// Path to a TOML preferences file. Values found there win over every
    /// other source. A leading `~` is expanded to the home directory.
    pub fn prefs(mut self, path: impl Into<PathBuf>) -> Self {
        self.prefs = Some(path.into());
        self
    }

    pub(crate) fn resolve(self) -> Result<ResolvedConnect> {
        let prefs = match &self.prefs {
            Some(path) => Preferences::load(path)?,
            None => Preferences::default(),
        };
        Ok(ResolvedConnect {
            host: prefs
                .host
                .or(self.host)
                .unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: prefs.port.or(self.port).unwrap_or(DEFAULT_PORT),
            username: prefs
                .username
                .or(self.username)
                .unwrap_or_else(|| DEFAULT_USERNAME.to_string()),
            password: prefs
                .password
                .or(self.password)
                .unwrap_or_else(|| DEFAULT_PASSWORD.to_string()),
            environment: prefs
                .environment
                .or(self.environment)
                .unwrap_or_default(),
        })
    }
}

impl From<&str> for ConnectArgs {
    fn from(host: &str) -> Self {
        ConnectArgs::new().host(host)
    }
}

impl From<(&str, u16)> for ConnectArgs {
    fn from((host, port): (&str, u16)) -> Self {
        ConnectArgs::new().host(host).port(port)
    }
}

impl From<(&str, u16, &str, &str)> for ConnectArgs {
    fn from((host, port, username, password): (&str, u16, &str, &str)) -> Self {
        ConnectArgs::new()
            .host(host)
            .port(port)
            .username(username)
            .password(password)
    }
}

impl From<(&str, u16, &str, &str, &str)> for ConnectArgs {
    fn from(
        (host, port, username, password, environment): (&str, u16, &str, &str, &str),
    ) -> Self {
        ConnectArgs::new()
            .host(host)
            .port(port)
            .username(username)
            .password(password)
            .environment(environment)
    }
}

impl From<&Path> for ConnectArgs {
    fn from(prefs: &Path) -> Self {
        ConnectArgs::new().prefs(prefs)
    }
}

/// Fully resolved connection parameters.
#[derive(Debug, Clone)]
pub(crate) struct ResolvedConnect {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub environment: String,
}

/// Arguments for [`Concourse::add`](crate::Concourse::add).
#[derive(Debug, Clone, Default)]
pub struct AddArgs {
    pub(crate) key: Option<String>,
    pub(crate) value: Option<Value>,
    pub(crate) records: Option<Records>,
}

impl AddArgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn value(mut self, value: impl Into<Value>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn record(mut self, record: i64) -> Self {
        self.records = Some(Records::Single(record));
        self
    }

    /// Alias for [`record`](Self::record) that accepts a list.
    pub fn records(mut self, records: impl Into<Records>) -> Self {
        self.records = Some(records.into());
        self
    }
}

impl<K: Into<String>, V: Into<Value>> From<(K, V)> for AddArgs {
    fn from((key, value): (K, V)) -> Self {
        AddArgs::new().key(key).value(value)
    }
}

impl<K: Into<String>, V: Into<Value>> From<(K, V, i64)> for AddArgs {
    fn from((key, value, record): (K, V, i64)) -> Self {
        AddArgs::new().key(key).value(value).record(record)
    }
}

impl<K: Into<String>, V: Into<Value>> From<(K, V, Vec<i64>)> for AddArgs {
    fn from((key, value, records): (K, V, Vec<i64>)) -> Self {
        AddArgs::new().key(key).value(value).records(records)
    }
}

/// Arguments for [`Concourse::remove`](crate::Concourse::remove).
#[derive(Debug, Clone, Default)]
pub struct RemoveArgs {
    pub(crate) key: Option<String>,
    pub(crate) value: Option<Value>,
    pub(crate) records: Option<Records>,
}

impl RemoveArgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn value(mut self, value: impl Into<Value>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn record(mut self, record: i64) -> Self {
        self.records = Some(Records::Single(record));
        self
    }

    pub fn records(mut self, records: impl Into<Records>) -> Self {
        self.records = Some(records.into());
        self
    }
}

impl<K: Into<String>, V: Into<Value>> From<(K, V, i64)> for RemoveArgs {
    fn from((key, value, record): (K, V, i64)) -> Self {
        RemoveArgs::new().key(key).value(value).record(record)
    }
}

impl<K: Into<String>, V: Into<Value>> From<(K, V, Vec<i64>)> for RemoveArgs {
    fn from((key, value, records): (K, V, Vec<i64>)) -> Self {
        RemoveArgs::new().key(key).value(value).records(records)
    }
}

/// Arguments for [`Concourse::set`](crate::Concourse::set).
#[derive(Debug, Clone, Default)]
pub struct SetArgs {
    pub(crate) key: Option<String>,
    pub(crate) value: Option<Value>,
    pub(crate) records: Option<Records>,
}

impl SetArgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn value(mut self, value: impl Into<Value>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn record(mut self, record: i64) -> Self {
        self.records = Some(Records::Single(record));
        self
    }

    pub fn records(mut self, records: impl Into<Records>) -> Self {
        self.records = Some(records.into());
        self
    }
}

impl<K: Into<String>, V: Into<Value>> From<(K, V)> for SetArgs {
    fn from((key, value): (K, V)) -> Self {
        SetArgs::new().key(key).value(value)
    }
}

impl<K: Into<String>, V: Into<Value>> From<(K, V, i64)> for SetArgs {
    fn from((key, value, record): (K, V, i64)) -> Self {
        SetArgs::new().key(key).value(value).record(record)
    }
}

impl<K: Into<String>, V: Into<Value>> From<(K, V, Vec<i64>)> for SetArgs {
    fn from((key, value, records): (K, V, Vec<i64>)) -> Self {
        SetArgs::new().key(key).value(value).records(records)
    }
}

/// Arguments for [`Concourse::audit`](crate::Concourse::audit).
///
/// `audit(1)` reads as "audit record 1", so a bare integer seeds the
/// record field rather than the key.
#[derive(Debug, Clone, Default)]
pub struct AuditArgs {
    pub(crate) key: Option<String>,
    pub(crate) record: Option<i64>,
    pub(crate) start: Option<Timestamp>,
    pub(crate) end: Option<Timestamp>,
}

impl AuditArgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn record(mut self, record: i64) -> Self {
        self.record = Some(record);
        self
    }

    pub fn start(mut self, start: impl Into<Timestamp>) -> Self {
        self.start = Some(start.into());
        self
    }

    /// Alias for [`start`](Self::start).
    pub fn timestamp(mut self, start: impl Into<Timestamp>) -> Self {
        self.start = Some(start.into());
        self
    }

    pub fn end(mut self, end: impl Into<Timestamp>) -> Self {
        self.end = Some(end.into());
        self
    }
}

impl From<i64> for AuditArgs {
    fn from(record: i64) -> Self {
        AuditArgs::new().record(record)
    }
}

impl<K: Into<String>> From<(K, i64)> for AuditArgs {
    fn from((key, record): (K, i64)) -> Self {
        AuditArgs::new().key(key).record(record)
    }
}

impl<K: Into<String>, T: Into<Timestamp>> From<(K, i64, T)> for AuditArgs {
    fn from((key, record, start): (K, i64, T)) -> Self {
        AuditArgs::new().key(key).record(record).start(start)
    }
}

/// Arguments for [`Concourse::browse`](crate::Concourse::browse).
#[derive(Debug, Clone, Default)]
pub struct BrowseArgs {
    pub(crate) keys: Option<Keys>,
    pub(crate) time: Option<Timestamp>,
}

impl BrowseArgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.keys = Some(Keys::Single(key.into()));
        self
    }

    pub fn keys(mut self, keys: impl Into<Keys>) -> Self {
        self.keys = Some(keys.into());
        self
    }

    pub fn time(mut self, time: impl Into<Timestamp>) -> Self {
        self.time = Some(time.into());
        self
    }

    /// Alias for [`time`](Self::time).
    pub fn timestamp(mut self, time: impl Into<Timestamp>) -> Self {
        self.time = Some(time.into());
        self
    }
}

impl From<&str> for BrowseArgs {
    fn from(key: &str) -> Self {
        BrowseArgs::new().key(key)
    }
}

impl From<String> for BrowseArgs {
    fn from(key: String) -> Self {
        BrowseArgs::new().key(key)
    }
}

impl From<Vec<&str>> for BrowseArgs {
    fn from(keys: Vec<&str>) -> Self {
        BrowseArgs::new().keys(keys)
    }
}

impl From<Vec<String>> for BrowseArgs {
    fn from(keys: Vec<String>) -> Self {
        BrowseArgs::new().keys(keys)
    }
}

impl<T: Into<Timestamp>> From<(&str, T)> for BrowseArgs {
    fn from((key, time): (&str, T)) -> Self {
        BrowseArgs::new().key(key).time(time)
    }
}

impl<T: Into<Timestamp>> From<(Vec<&str>, T)> for BrowseArgs {
    fn from((keys, time): (Vec<&str>, T)) -> Self {
        BrowseArgs::new().keys(keys).time(time)
    }
}

/// Arguments for [`Concourse::get`](crate::Concourse::get).
#[derive(Debug, Clone, Default)]
pub struct GetArgs {
    pub(crate) keys: Option<Keys>,
    pub(crate) records: Option<Records>,
    pub(crate) time: Option<Timestamp>,
}

impl GetArgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.keys = Some(Keys::Single(key.into()));
        self
    }

    pub fn keys(mut self, keys: impl Into<Keys>) -> Self {
        self.keys = Some(keys.into());
        self
    }

    pub fn record(mut self, record: i64) -> Self {
        self.records = Some(Records::Single(record));
        self
    }

    pub fn records(mut self, records: impl Into<Records>) -> Self {
        self.records = Some(records.into());
        self
    }

    pub fn time(mut self, time: impl Into<Timestamp>) -> Self {
        self.time = Some(time.into());
        self
    }

    /// Alias for [`time`](Self::time).
    pub fn timestamp(mut self, time: impl Into<Timestamp>) -> Self {
        self.time = Some(time.into());
        self
    }
}

impl<K: Into<Keys>, R: Into<Records>> From<(K, R)> for GetArgs {
    fn from((keys, records): (K, R)) -> Self {
        GetArgs::new().keys(keys).records(records)
    }
}

impl<K: Into<Keys>, R: Into<Records>, T: Into<Timestamp>> From<(K, R, T)> for GetArgs {
    fn from((keys, records, time): (K, R, T)) -> Self {
        GetArgs::new().keys(keys).records(records).time(time)
    }
}

/// Arguments for [`Concourse::describe`](crate::Concourse::describe).
#[derive(Debug, Clone, Default)]
pub struct DescribeArgs {
    pub(crate) record: Option<i64>,
    pub(crate) time: Option<Timestamp>,
}

impl DescribeArgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(mut self, record: i64) -> Self {
        self.record = Some(record);
        self
    }

    pub fn time(mut self, time: impl Into<Timestamp>) -> Self {
        self.time = Some(time.into());
        self
    }

    /// Alias for [`time`](Self::time).
    pub fn timestamp(mut self, time: impl Into<Timestamp>) -> Self {
        self.time = Some(time.into());
        self
    }
}

impl From<i64> for DescribeArgs {
    fn from(record: i64) -> Self {
        DescribeArgs::new().record(record)
    }
}

impl<T: Into<Timestamp>> From<(i64, T)> for DescribeArgs {
    fn from((record, time): (i64, T)) -> Self {
        DescribeArgs::new().record(record).time(time)
    }
}

/// Arguments for [`Concourse::verify`](crate::Concourse::verify).
#[derive(Debug, Clone, Default)]
pub struct VerifyArgs {
    pub(crate) key: Option<String>,
    pub(crate) value: Option<Value>,
    pub(crate) record: Option<i64>,
    pub(crate) time: Option<Timestamp>,
}

impl VerifyArgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn value(mut self, value: impl Into<Value>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn record(mut self, record: i64) -> Self {
        self.record = Some(record);
        self
    }

    pub fn time(mut self, time: impl Into<Timestamp>) -> Self {
        self.time = Some(time.into());
        self
    }

    /// Alias for [`time`](Self::time).
    pub fn timestamp(mut self, time: impl Into<Timestamp>) -> Self {
        self.time = Some(time.into());
        self
    }
}

impl<K: Into<String>, V: Into<Value>> From<(K, V, i64)> for VerifyArgs {
    fn from((key, value, record): (K, V, i64)) -> Self {
        VerifyArgs::new().key(key).value(value).record(record)
    }
}

impl<K: Into<String>, V: Into<Value>, T: Into<Timestamp>> From<(K, V, i64, T)> for VerifyArgs {
    fn from((key, value, record, time): (K, V, i64, T)) -> Self {
        VerifyArgs::new()
            .key(key)
            .value(value)
            .record(record)
            .time(time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_positional_tuple_seeds_fields() {
        let args = AddArgs::from(("name", "jeff", 1));
        assert_eq!(args.key.as_deref(), Some("name"));
        assert_eq!(args.value, Some(Value::string("jeff")));
        assert_eq!(args.records, Some(Records::Single(1)));
    }

    #[test]
    fn test_keyed_overrides_positional() {
        let args = AddArgs::from(("name", "jeff", 1)).record(2);
        assert_eq!(args.records, Some(Records::Single(2)));

        let args = GetArgs::from(("name", 1)).key("age");
        assert_eq!(args.keys, Some(Keys::Single("age".to_string())));
    }

    #[test]
    fn test_timestamp_alias() {
        let a = BrowseArgs::from("name").time(123i64);
        let b = BrowseArgs::from("name").timestamp(123i64);
        assert_eq!(a.time, b.time);

        // On audit the alias feeds the start of the range
        let c = AuditArgs::from(1).timestamp("last week");
        assert_eq!(c.start, Some(Timestamp::Phrase("last week".to_string())));
        assert_eq!(c.end, None);
    }

    #[test]
    fn test_audit_bare_integer_is_record() {
        let args = AuditArgs::from(1);
        assert_eq!(args.record, Some(1));
        assert_eq!(args.key, None);
    }

    #[test]
    fn test_list_of_one_stays_a_list() {
        assert_eq!(Records::from(vec![1]), Records::Many(vec![1]));
        assert_eq!(
            Keys::from(vec!["name"]),
            Keys::Many(vec!["name".to_string()])
        );
    }

    #[test]
    fn test_connect_defaults() {
        let resolved = ConnectArgs::new().resolve().unwrap();
        assert_eq!(resolved.host, DEFAULT_HOST);
        assert_eq!(resolved.port, DEFAULT_PORT);
        assert_eq!(resolved.username, DEFAULT_USERNAME);
        assert_eq!(resolved.password, DEFAULT_PASSWORD);
        assert_eq!(resolved.environment, "");
    }

    #[test]
    fn test_connect_keyed_over_positional() {
        let resolved = ConnectArgs::from(("remote", 9010))
            .host("other")
            .resolve()
            .unwrap();
        assert_eq!(resolved.host, "other");
        assert_eq!(resolved.port, 9010);
    }

    #[test]
    fn test_connect_prefs_over_keyed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "host = \"fromfile\"\nport = 4040").unwrap();

        let resolved = ConnectArgs::new()
            .host("keyed")
            .username("bob")
            .prefs(file.path())
            .resolve()
            .unwrap();
        assert_eq!(resolved.host, "fromfile");
        assert_eq!(resolved.port, 4040);
        // Fields absent from the file keep the next strongest source
        assert_eq!(resolved.username, "bob");
    }

    #[test]
    fn test_connect_missing_prefs_is_an_error() {
        let result = ConnectArgs::new()
            .prefs("/definitely/not/a/real/prefs.toml")
            .resolve();
        assert!(result.is_err());
    }
}

//! Messages and client for the `concourse` proto package.
//!
//! Kept in lockstep with `proto/concourse.proto` by hand so that the
//! workspace builds without `protoc` installed.

use std::collections::HashMap;

// ---------------------------------------------------------------------------
// Shared messages
// ---------------------------------------------------------------------------

/// A scalar stored under a key in a record.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Value {
    #[prost(oneof = "value::Value", tags = "1, 2, 3, 4, 5, 6, 7")]
    pub value: Option<value::Value>,
}

pub mod value {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Value {
        #[prost(bool, tag = "1")]
        BooleanValue(bool),
        #[prost(int64, tag = "2")]
        IntegerValue(i64),
        #[prost(double, tag = "3")]
        DoubleValue(f64),
        #[prost(string, tag = "4")]
        StringValue(String),
        #[prost(string, tag = "5")]
        TagValue(String),
        #[prost(int64, tag = "6")]
        LinkValue(i64),
        #[prost(int64, tag = "7")]
        TimestampValue(i64),
    }
}

/// Opaque session credential minted by `Login` and attached to every
/// subsequent request.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AccessToken {
    #[prost(bytes = "vec", tag = "1")]
    pub token: Vec<u8>,
}

/// Handle for a staged group of operations.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TransactionToken {
    #[prost(message, optional, tag = "1")]
    pub access_token: Option<AccessToken>,
    #[prost(int64, tag = "2")]
    pub timestamp: i64,
}

/// One entry of a value index. Proto maps cannot be keyed by a message,
/// so indexes are shipped as repeated pairs.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ValueRecords {
    #[prost(message, optional, tag = "1")]
    pub value: Option<Value>,
    #[prost(int64, repeated, tag = "2")]
    pub records: Vec<i64>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ValueIndex {
    #[prost(message, repeated, tag = "1")]
    pub entries: Vec<ValueRecords>,
}

/// Values stored under each key of a single record.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct KeyValues {
    #[prost(map = "string, message", tag = "1")]
    pub values: HashMap<String, Value>,
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LoginRequest {
    #[prost(string, tag = "1")]
    pub username: String,
    #[prost(string, tag = "2")]
    pub password: String,
    #[prost(string, tag = "3")]
    pub environment: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LoginResponse {
    #[prost(message, optional, tag = "1")]
    pub token: Option<AccessToken>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LogoutRequest {
    #[prost(message, optional, tag = "1")]
    pub creds: Option<AccessToken>,
    #[prost(string, tag = "2")]
    pub environment: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LogoutResponse {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct StageRequest {
    #[prost(message, optional, tag = "1")]
    pub creds: Option<AccessToken>,
    #[prost(string, tag = "2")]
    pub environment: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct StageResponse {
    #[prost(message, optional, tag = "1")]
    pub transaction: Option<TransactionToken>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AbortRequest {
    #[prost(message, optional, tag = "1")]
    pub creds: Option<AccessToken>,
    #[prost(message, optional, tag = "2")]
    pub transaction: Option<TransactionToken>,
    #[prost(string, tag = "3")]
    pub environment: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AbortResponse {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CommitRequest {
    #[prost(message, optional, tag = "1")]
    pub creds: Option<AccessToken>,
    #[prost(message, optional, tag = "2")]
    pub transaction: Option<TransactionToken>,
    #[prost(string, tag = "3")]
    pub environment: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CommitResponse {
    #[prost(bool, tag = "1")]
    pub committed: bool,
}

// ---------------------------------------------------------------------------
// Clock
// ---------------------------------------------------------------------------

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TimeRequest {
    #[prost(message, optional, tag = "1")]
    pub creds: Option<AccessToken>,
    #[prost(message, optional, tag = "2")]
    pub transaction: Option<TransactionToken>,
    #[prost(string, tag = "3")]
    pub environment: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TimePhraseRequest {
    #[prost(string, tag = "1")]
    pub phrase: String,
    #[prost(message, optional, tag = "2")]
    pub creds: Option<AccessToken>,
    #[prost(message, optional, tag = "3")]
    pub transaction: Option<TransactionToken>,
    #[prost(string, tag = "4")]
    pub environment: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TimeResponse {
    #[prost(int64, tag = "1")]
    pub micros: i64,
}

// ---------------------------------------------------------------------------
// Writes
// ---------------------------------------------------------------------------

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AddKeyValueRequest {
    #[prost(string, tag = "1")]
    pub key: String,
    #[prost(message, optional, tag = "2")]
    pub value: Option<Value>,
    #[prost(message, optional, tag = "3")]
    pub creds: Option<AccessToken>,
    #[prost(message, optional, tag = "4")]
    pub transaction: Option<TransactionToken>,
    #[prost(string, tag = "5")]
    pub environment: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AddKeyValueResponse {
    /// Id of the record created to hold the data.
    #[prost(int64, tag = "1")]
    pub record: i64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AddKeyValueRecordRequest {
    #[prost(string, tag = "1")]
    pub key: String,
    #[prost(message, optional, tag = "2")]
    pub value: Option<Value>,
    #[prost(int64, tag = "3")]
    pub record: i64,
    #[prost(message, optional, tag = "4")]
    pub creds: Option<AccessToken>,
    #[prost(message, optional, tag = "5")]
    pub transaction: Option<TransactionToken>,
    #[prost(string, tag = "6")]
    pub environment: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AddKeyValueRecordResponse {
    #[prost(bool, tag = "1")]
    pub added: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AddKeyValueRecordsRequest {
    #[prost(string, tag = "1")]
    pub key: String,
    #[prost(message, optional, tag = "2")]
    pub value: Option<Value>,
    #[prost(int64, repeated, tag = "3")]
    pub records: Vec<i64>,
    #[prost(message, optional, tag = "4")]
    pub creds: Option<AccessToken>,
    #[prost(message, optional, tag = "5")]
    pub transaction: Option<TransactionToken>,
    #[prost(string, tag = "6")]
    pub environment: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AddKeyValueRecordsResponse {
    #[prost(map = "int64, bool", tag = "1")]
    pub results: HashMap<i64, bool>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RemoveKeyValueRecordRequest {
    #[prost(string, tag = "1")]
    pub key: String,
    #[prost(message, optional, tag = "2")]
    pub value: Option<Value>,
    #[prost(int64, tag = "3")]
    pub record: i64,
    #[prost(message, optional, tag = "4")]
    pub creds: Option<AccessToken>,
    #[prost(message, optional, tag = "5")]
    pub transaction: Option<TransactionToken>,
    #[prost(string, tag = "6")]
    pub environment: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RemoveKeyValueRecordResponse {
    #[prost(bool, tag = "1")]
    pub removed: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RemoveKeyValueRecordsRequest {
    #[prost(string, tag = "1")]
    pub key: String,
    #[prost(message, optional, tag = "2")]
    pub value: Option<Value>,
    #[prost(int64, repeated, tag = "3")]
    pub records: Vec<i64>,
    #[prost(message, optional, tag = "4")]
    pub creds: Option<AccessToken>,
    #[prost(message, optional, tag = "5")]
    pub transaction: Option<TransactionToken>,
    #[prost(string, tag = "6")]
    pub environment: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RemoveKeyValueRecordsResponse {
    #[prost(map = "int64, bool", tag = "1")]
    pub results: HashMap<i64, bool>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SetKeyValueRequest {
    #[prost(string, tag = "1")]
    pub key: String,
    #[prost(message, optional, tag = "2")]
    pub value: Option<Value>,
    #[prost(message, optional, tag = "3")]
    pub creds: Option<AccessToken>,
    #[prost(message, optional, tag = "4")]
    pub transaction: Option<TransactionToken>,
    #[prost(string, tag = "5")]
    pub environment: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SetKeyValueResponse {
    #[prost(int64, tag = "1")]
    pub record: i64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SetKeyValueRecordRequest {
    #[prost(string, tag = "1")]
    pub key: String,
    #[prost(message, optional, tag = "2")]
    pub value: Option<Value>,
    #[prost(int64, tag = "3")]
    pub record: i64,
    #[prost(message, optional, tag = "4")]
    pub creds: Option<AccessToken>,
    #[prost(message, optional, tag = "5")]
    pub transaction: Option<TransactionToken>,
    #[prost(string, tag = "6")]
    pub environment: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SetKeyValueRecordResponse {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SetKeyValueRecordsRequest {
    #[prost(string, tag = "1")]
    pub key: String,
    #[prost(message, optional, tag = "2")]
    pub value: Option<Value>,
    #[prost(int64, repeated, tag = "3")]
    pub records: Vec<i64>,
    #[prost(message, optional, tag = "4")]
    pub creds: Option<AccessToken>,
    #[prost(message, optional, tag = "5")]
    pub transaction: Option<TransactionToken>,
    #[prost(string, tag = "6")]
    pub environment: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SetKeyValueRecordsResponse {}

// ---------------------------------------------------------------------------
// Audit
// ---------------------------------------------------------------------------

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AuditRecordRequest {
    #[prost(int64, tag = "1")]
    pub record: i64,
    #[prost(message, optional, tag = "2")]
    pub creds: Option<AccessToken>,
    #[prost(message, optional, tag = "3")]
    pub transaction: Option<TransactionToken>,
    #[prost(string, tag = "4")]
    pub environment: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AuditRecordStartRequest {
    #[prost(int64, tag = "1")]
    pub record: i64,
    #[prost(int64, tag = "2")]
    pub start: i64,
    #[prost(message, optional, tag = "3")]
    pub creds: Option<AccessToken>,
    #[prost(message, optional, tag = "4")]
    pub transaction: Option<TransactionToken>,
    #[prost(string, tag = "5")]
    pub environment: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AuditRecordStartstrRequest {
    #[prost(int64, tag = "1")]
    pub record: i64,
    #[prost(string, tag = "2")]
    pub start: String,
    #[prost(message, optional, tag = "3")]
    pub creds: Option<AccessToken>,
    #[prost(message, optional, tag = "4")]
    pub transaction: Option<TransactionToken>,
    #[prost(string, tag = "5")]
    pub environment: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AuditRecordStartEndRequest {
    #[prost(int64, tag = "1")]
    pub record: i64,
    #[prost(int64, tag = "2")]
    pub start: i64,
    #[prost(int64, tag = "3")]
    pub end: i64,
    #[prost(message, optional, tag = "4")]
    pub creds: Option<AccessToken>,
    #[prost(message, optional, tag = "5")]
    pub transaction: Option<TransactionToken>,
    #[prost(string, tag = "6")]
    pub environment: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AuditRecordStartstrEndstrRequest {
    #[prost(int64, tag = "1")]
    pub record: i64,
    #[prost(string, tag = "2")]
    pub start: String,
    #[prost(string, tag = "3")]
    pub end: String,
    #[prost(message, optional, tag = "4")]
    pub creds: Option<AccessToken>,
    #[prost(message, optional, tag = "5")]
    pub transaction: Option<TransactionToken>,
    #[prost(string, tag = "6")]
    pub environment: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AuditKeyRecordRequest {
    #[prost(string, tag = "1")]
    pub key: String,
    #[prost(int64, tag = "2")]
    pub record: i64,
    #[prost(message, optional, tag = "3")]
    pub creds: Option<AccessToken>,
    #[prost(message, optional, tag = "4")]
    pub transaction: Option<TransactionToken>,
    #[prost(string, tag = "5")]
    pub environment: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AuditKeyRecordStartRequest {
    #[prost(string, tag = "1")]
    pub key: String,
    #[prost(int64, tag = "2")]
    pub record: i64,
    #[prost(int64, tag = "3")]
    pub start: i64,
    #[prost(message, optional, tag = "4")]
    pub creds: Option<AccessToken>,
    #[prost(message, optional, tag = "5")]
    pub transaction: Option<TransactionToken>,
    #[prost(string, tag = "6")]
    pub environment: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AuditKeyRecordStartstrRequest {
    #[prost(string, tag = "1")]
    pub key: String,
    #[prost(int64, tag = "2")]
    pub record: i64,
    #[prost(string, tag = "3")]
    pub start: String,
    #[prost(message, optional, tag = "4")]
    pub creds: Option<AccessToken>,
    #[prost(message, optional, tag = "5")]
    pub transaction: Option<TransactionToken>,
    #[prost(string, tag = "6")]
    pub environment: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AuditKeyRecordStartEndRequest {
    #[prost(string, tag = "1")]
    pub key: String,
    #[prost(int64, tag = "2")]
    pub record: i64,
    #[prost(int64, tag = "3")]
    pub start: i64,
    #[prost(int64, tag = "4")]
    pub end: i64,
    #[prost(message, optional, tag = "5")]
    pub creds: Option<AccessToken>,
    #[prost(message, optional, tag = "6")]
    pub transaction: Option<TransactionToken>,
    #[prost(string, tag = "7")]
    pub environment: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AuditKeyRecordStartstrEndstrRequest {
    #[prost(string, tag = "1")]
    pub key: String,
    #[prost(int64, tag = "2")]
    pub record: i64,
    #[prost(string, tag = "3")]
    pub start: String,
    #[prost(string, tag = "4")]
    pub end: String,
    #[prost(message, optional, tag = "5")]
    pub creds: Option<AccessToken>,
    #[prost(message, optional, tag = "6")]
    pub transaction: Option<TransactionToken>,
    #[prost(string, tag = "7")]
    pub environment: String,
}

/// Revision log keyed by the commit timestamp in microseconds.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AuditResponse {
    #[prost(map = "int64, string", tag = "1")]
    pub log: HashMap<i64, String>,
}

// ---------------------------------------------------------------------------
// Browse
// ---------------------------------------------------------------------------

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BrowseKeyRequest {
    #[prost(string, tag = "1")]
    pub key: String,
    #[prost(message, optional, tag = "2")]
    pub creds: Option<AccessToken>,
    #[prost(message, optional, tag = "3")]
    pub transaction: Option<TransactionToken>,
    #[prost(string, tag = "4")]
    pub environment: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BrowseKeyTimeRequest {
    #[prost(string, tag = "1")]
    pub key: String,
    #[prost(int64, tag = "2")]
    pub time: i64,
    #[prost(message, optional, tag = "3")]
    pub creds: Option<AccessToken>,
    #[prost(message, optional, tag = "4")]
    pub transaction: Option<TransactionToken>,
    #[prost(string, tag = "5")]
    pub environment: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BrowseKeyTimestrRequest {
    #[prost(string, tag = "1")]
    pub key: String,
    #[prost(string, tag = "2")]
    pub time: String,
    #[prost(message, optional, tag = "3")]
    pub creds: Option<AccessToken>,
    #[prost(message, optional, tag = "4")]
    pub transaction: Option<TransactionToken>,
    #[prost(string, tag = "5")]
    pub environment: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BrowseKeyResponse {
    #[prost(message, repeated, tag = "1")]
    pub values: Vec<ValueRecords>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BrowseKeysRequest {
    #[prost(string, repeated, tag = "1")]
    pub keys: Vec<String>,
    #[prost(message, optional, tag = "2")]
    pub creds: Option<AccessToken>,
    #[prost(message, optional, tag = "3")]
    pub transaction: Option<TransactionToken>,
    #[prost(string, tag = "4")]
    pub environment: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BrowseKeysTimeRequest {
    #[prost(string, repeated, tag = "1")]
    pub keys: Vec<String>,
    #[prost(int64, tag = "2")]
    pub time: i64,
    #[prost(message, optional, tag = "3")]
    pub creds: Option<AccessToken>,
    #[prost(message, optional, tag = "4")]
    pub transaction: Option<TransactionToken>,
    #[prost(string, tag = "5")]
    pub environment: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BrowseKeysTimestrRequest {
    #[prost(string, repeated, tag = "1")]
    pub keys: Vec<String>,
    #[prost(string, tag = "2")]
    pub time: String,
    #[prost(message, optional, tag = "3")]
    pub creds: Option<AccessToken>,
    #[prost(message, optional, tag = "4")]
    pub transaction: Option<TransactionToken>,
    #[prost(string, tag = "5")]
    pub environment: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BrowseKeysResponse {
    #[prost(map = "string, message", tag = "1")]
    pub entries: HashMap<String, ValueIndex>,
}

// ---------------------------------------------------------------------------
// Get
// ---------------------------------------------------------------------------

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetKeyRecordRequest {
    #[prost(string, tag = "1")]
    pub key: String,
    #[prost(int64, tag = "2")]
    pub record: i64,
    #[prost(message, optional, tag = "3")]
    pub creds: Option<AccessToken>,
    #[prost(message, optional, tag = "4")]
    pub transaction: Option<TransactionToken>,
    #[prost(string, tag = "5")]
    pub environment: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetKeyRecordTimeRequest {
    #[prost(string, tag = "1")]
    pub key: String,
    #[prost(int64, tag = "2")]
    pub record: i64,
    #[prost(int64, tag = "3")]
    pub time: i64,
    #[prost(message, optional, tag = "4")]
    pub creds: Option<AccessToken>,
    #[prost(message, optional, tag = "5")]
    pub transaction: Option<TransactionToken>,
    #[prost(string, tag = "6")]
    pub environment: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetKeyRecordTimestrRequest {
    #[prost(string, tag = "1")]
    pub key: String,
    #[prost(int64, tag = "2")]
    pub record: i64,
    #[prost(string, tag = "3")]
    pub time: String,
    #[prost(message, optional, tag = "4")]
    pub creds: Option<AccessToken>,
    #[prost(message, optional, tag = "5")]
    pub transaction: Option<TransactionToken>,
    #[prost(string, tag = "6")]
    pub environment: String,
}

/// Absent value means the key holds nothing in the record.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetValueResponse {
    #[prost(message, optional, tag = "1")]
    pub value: Option<Value>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetKeyRecordsRequest {
    #[prost(string, tag = "1")]
    pub key: String,
    #[prost(int64, repeated, tag = "2")]
    pub records: Vec<i64>,
    #[prost(message, optional, tag = "3")]
    pub creds: Option<AccessToken>,
    #[prost(message, optional, tag = "4")]
    pub transaction: Option<TransactionToken>,
    #[prost(string, tag = "5")]
    pub environment: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetKeyRecordsTimeRequest {
    #[prost(string, tag = "1")]
    pub key: String,
    #[prost(int64, repeated, tag = "2")]
    pub records: Vec<i64>,
    #[prost(int64, tag = "3")]
    pub time: i64,
    #[prost(message, optional, tag = "4")]
    pub creds: Option<AccessToken>,
    #[prost(message, optional, tag = "5")]
    pub transaction: Option<TransactionToken>,
    #[prost(string, tag = "6")]
    pub environment: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetKeyRecordsTimestrRequest {
    #[prost(string, tag = "1")]
    pub key: String,
    #[prost(int64, repeated, tag = "2")]
    pub records: Vec<i64>,
    #[prost(string, tag = "3")]
    pub time: String,
    #[prost(message, optional, tag = "4")]
    pub creds: Option<AccessToken>,
    #[prost(message, optional, tag = "5")]
    pub transaction: Option<TransactionToken>,
    #[prost(string, tag = "6")]
    pub environment: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetRecordValuesResponse {
    #[prost(map = "int64, message", tag = "1")]
    pub values: HashMap<i64, Value>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetKeysRecordRequest {
    #[prost(string, repeated, tag = "1")]
    pub keys: Vec<String>,
    #[prost(int64, tag = "2")]
    pub record: i64,
    #[prost(message, optional, tag = "3")]
    pub creds: Option<AccessToken>,
    #[prost(message, optional, tag = "4")]
    pub transaction: Option<TransactionToken>,
    #[prost(string, tag = "5")]
    pub environment: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetKeysRecordTimeRequest {
    #[prost(string, repeated, tag = "1")]
    pub keys: Vec<String>,
    #[prost(int64, tag = "2")]
    pub record: i64,
    #[prost(int64, tag = "3")]
    pub time: i64,
    #[prost(message, optional, tag = "4")]
    pub creds: Option<AccessToken>,
    #[prost(message, optional, tag = "5")]
    pub transaction: Option<TransactionToken>,
    #[prost(string, tag = "6")]
    pub environment: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetKeysRecordTimestrRequest {
    #[prost(string, repeated, tag = "1")]
    pub keys: Vec<String>,
    #[prost(int64, tag = "2")]
    pub record: i64,
    #[prost(string, tag = "3")]
    pub time: String,
    #[prost(message, optional, tag = "4")]
    pub creds: Option<AccessToken>,
    #[prost(message, optional, tag = "5")]
    pub transaction: Option<TransactionToken>,
    #[prost(string, tag = "6")]
    pub environment: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetKeyValuesResponse {
    #[prost(map = "string, message", tag = "1")]
    pub values: HashMap<String, Value>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetKeysRecordsRequest {
    #[prost(string, repeated, tag = "1")]
    pub keys: Vec<String>,
    #[prost(int64, repeated, tag = "2")]
    pub records: Vec<i64>,
    #[prost(message, optional, tag = "3")]
    pub creds: Option<AccessToken>,
    #[prost(message, optional, tag = "4")]
    pub transaction: Option<TransactionToken>,
    #[prost(string, tag = "5")]
    pub environment: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetKeysRecordsTimeRequest {
    #[prost(string, repeated, tag = "1")]
    pub keys: Vec<String>,
    #[prost(int64, repeated, tag = "2")]
    pub records: Vec<i64>,
    #[prost(int64, tag = "3")]
    pub time: i64,
    #[prost(message, optional, tag = "4")]
    pub creds: Option<AccessToken>,
    #[prost(message, optional, tag = "5")]
    pub transaction: Option<TransactionToken>,
    #[prost(string, tag = "6")]
    pub environment: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetKeysRecordsTimestrRequest {
    #[prost(string, repeated, tag = "1")]
    pub keys: Vec<String>,
    #[prost(int64, repeated, tag = "2")]
    pub records: Vec<i64>,
    #[prost(string, tag = "3")]
    pub time: String,
    #[prost(message, optional, tag = "4")]
    pub creds: Option<AccessToken>,
    #[prost(message, optional, tag = "5")]
    pub transaction: Option<TransactionToken>,
    #[prost(string, tag = "6")]
    pub environment: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetRecordKeyValuesResponse {
    #[prost(map = "int64, message", tag = "1")]
    pub records: HashMap<i64, KeyValues>,
}

// ---------------------------------------------------------------------------
// Inspection
// ---------------------------------------------------------------------------

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DescribeRecordRequest {
    #[prost(int64, tag = "1")]
    pub record: i64,
    #[prost(message, optional, tag = "2")]
    pub creds: Option<AccessToken>,
    #[prost(message, optional, tag = "3")]
    pub transaction: Option<TransactionToken>,
    #[prost(string, tag = "4")]
    pub environment: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DescribeRecordTimeRequest {
    #[prost(int64, tag = "1")]
    pub record: i64,
    #[prost(int64, tag = "2")]
    pub time: i64,
    #[prost(message, optional, tag = "3")]
    pub creds: Option<AccessToken>,
    #[prost(message, optional, tag = "4")]
    pub transaction: Option<TransactionToken>,
    #[prost(string, tag = "5")]
    pub environment: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DescribeRecordTimestrRequest {
    #[prost(int64, tag = "1")]
    pub record: i64,
    #[prost(string, tag = "2")]
    pub time: String,
    #[prost(message, optional, tag = "3")]
    pub creds: Option<AccessToken>,
    #[prost(message, optional, tag = "4")]
    pub transaction: Option<TransactionToken>,
    #[prost(string, tag = "5")]
    pub environment: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DescribeResponse {
    #[prost(string, repeated, tag = "1")]
    pub keys: Vec<String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct VerifyKeyValueRecordRequest {
    #[prost(string, tag = "1")]
    pub key: String,
    #[prost(message, optional, tag = "2")]
    pub value: Option<Value>,
    #[prost(int64, tag = "3")]
    pub record: i64,
    #[prost(message, optional, tag = "4")]
    pub creds: Option<AccessToken>,
    #[prost(message, optional, tag = "5")]
    pub transaction: Option<TransactionToken>,
    #[prost(string, tag = "6")]
    pub environment: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct VerifyKeyValueRecordTimeRequest {
    #[prost(string, tag = "1")]
    pub key: String,
    #[prost(message, optional, tag = "2")]
    pub value: Option<Value>,
    #[prost(int64, tag = "3")]
    pub record: i64,
    #[prost(int64, tag = "4")]
    pub time: i64,
    #[prost(message, optional, tag = "5")]
    pub creds: Option<AccessToken>,
    #[prost(message, optional, tag = "6")]
    pub transaction: Option<TransactionToken>,
    #[prost(string, tag = "7")]
    pub environment: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct VerifyKeyValueRecordTimestrRequest {
    #[prost(string, tag = "1")]
    pub key: String,
    #[prost(message, optional, tag = "2")]
    pub value: Option<Value>,
    #[prost(int64, tag = "3")]
    pub record: i64,
    #[prost(string, tag = "4")]
    pub time: String,
    #[prost(message, optional, tag = "5")]
    pub creds: Option<AccessToken>,
    #[prost(message, optional, tag = "6")]
    pub transaction: Option<TransactionToken>,
    #[prost(string, tag = "7")]
    pub environment: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct VerifyResponse {
    #[prost(bool, tag = "1")]
    pub verified: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PingRecordRequest {
    #[prost(int64, tag = "1")]
    pub record: i64,
    #[prost(message, optional, tag = "2")]
    pub creds: Option<AccessToken>,
    #[prost(message, optional, tag = "3")]
    pub transaction: Option<TransactionToken>,
    #[prost(string, tag = "4")]
    pub environment: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PingResponse {
    #[prost(bool, tag = "1")]
    pub alive: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetServerVersionRequest {
    #[prost(message, optional, tag = "1")]
    pub creds: Option<AccessToken>,
    #[prost(string, tag = "2")]
    pub environment: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetServerVersionResponse {
    #[prost(string, tag = "1")]
    pub version: String,
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// Client for the `concourse.ConcourseService` rpc service.
pub mod concourse_service_client {
    use super::*;
    use tonic::codegen::{http, Body, Bytes, StdError};

    #[derive(Debug, Clone)]
    pub struct ConcourseServiceClient<T> {
        inner: tonic::client::Grpc<T>,
    }

    impl ConcourseServiceClient<tonic::transport::Channel> {
        /// Attempt to create a new client by connecting to a given endpoint.
        pub async fn connect<D>(dst: D) -> Result<Self, tonic::transport::Error>
        where
            D: TryInto<tonic::transport::Endpoint>,
            D::Error: Into<StdError>,
        {
            let conn = tonic::transport::Endpoint::new(dst)?.connect().await?;
            Ok(Self::new(conn))
        }
    }

    impl<T> ConcourseServiceClient<T>
    where
        T: tonic::client::GrpcService<tonic::body::BoxBody>,
        T::Error: Into<StdError>,
        T::ResponseBody: Body<Data = Bytes> + Send + 'static,
        <T::ResponseBody as Body>::Error: Into<StdError> + Send,
    {
        pub fn new(inner: T) -> Self {
            Self {
                inner: tonic::client::Grpc::new(inner),
            }
        }

        /// Limit the maximum size of a decoded message.
        pub fn max_decoding_message_size(mut self, limit: usize) -> Self {
            self.inner = self.inner.max_decoding_message_size(limit);
            self
        }

        /// Limit the maximum size of an encoded message.
        pub fn max_encoding_message_size(mut self, limit: usize) -> Self {
            self.inner = self.inner.max_encoding_message_size(limit);
            self
        }

        async fn unary<Req, Res>(
            &mut self,
            path: &'static str,
            request: Req,
        ) -> Result<Res, tonic::Status>
        where
            Req: prost::Message + Send + Sync + 'static,
            Res: prost::Message + Default + Send + Sync + 'static,
        {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(path);
            self.inner
                .unary(tonic::Request::new(request), path, codec)
                .await
                .map(tonic::Response::into_inner)
        }

        // Session

        pub async fn login(
            &mut self,
            request: LoginRequest,
        ) -> Result<LoginResponse, tonic::Status> {
            self.unary("/concourse.ConcourseService/Login", request).await
        }

        pub async fn logout(
            &mut self,
            request: LogoutRequest,
        ) -> Result<LogoutResponse, tonic::Status> {
            self.unary("/concourse.ConcourseService/Logout", request).await
        }

        pub async fn stage(
            &mut self,
            request: StageRequest,
        ) -> Result<StageResponse, tonic::Status> {
            self.unary("/concourse.ConcourseService/Stage", request).await
        }

        pub async fn abort(
            &mut self,
            request: AbortRequest,
        ) -> Result<AbortResponse, tonic::Status> {
            self.unary("/concourse.ConcourseService/Abort", request).await
        }

        pub async fn commit(
            &mut self,
            request: CommitRequest,
        ) -> Result<CommitResponse, tonic::Status> {
            self.unary("/concourse.ConcourseService/Commit", request).await
        }

        // Clock

        pub async fn time(
            &mut self,
            request: TimeRequest,
        ) -> Result<TimeResponse, tonic::Status> {
            self.unary("/concourse.ConcourseService/Time", request).await
        }

        pub async fn time_phrase(
            &mut self,
            request: TimePhraseRequest,
        ) -> Result<TimeResponse, tonic::Status> {
            self.unary("/concourse.ConcourseService/TimePhrase", request).await
        }

        // Writes

        pub async fn add_key_value(
            &mut self,
            request: AddKeyValueRequest,
        ) -> Result<AddKeyValueResponse, tonic::Status> {
            self.unary("/concourse.ConcourseService/AddKeyValue", request).await
        }

        pub async fn add_key_value_record(
            &mut self,
            request: AddKeyValueRecordRequest,
        ) -> Result<AddKeyValueRecordResponse, tonic::Status> {
            self.unary("/concourse.ConcourseService/AddKeyValueRecord", request)
                .await
        }

        pub async fn add_key_value_records(
            &mut self,
            request: AddKeyValueRecordsRequest,
        ) -> Result<AddKeyValueRecordsResponse, tonic::Status> {
            self.unary("/concourse.ConcourseService/AddKeyValueRecords", request)
                .await
        }

        pub async fn remove_key_value_record(
            &mut self,
            request: RemoveKeyValueRecordRequest,
        ) -> Result<RemoveKeyValueRecordResponse, tonic::Status> {
            self.unary("/concourse.ConcourseService/RemoveKeyValueRecord", request)
                .await
        }

        pub async fn remove_key_value_records(
            &mut self,
            request: RemoveKeyValueRecordsRequest,
        ) -> Result<RemoveKeyValueRecordsResponse, tonic::Status> {
            self.unary("/concourse.ConcourseService/RemoveKeyValueRecords", request)
                .await
        }

        pub async fn set_key_value(
            &mut self,
            request: SetKeyValueRequest,
        ) -> Result<SetKeyValueResponse, tonic::Status> {
            self.unary("/concourse.ConcourseService/SetKeyValue", request).await
        }

        pub async fn set_key_value_record(
            &mut self,
            request: SetKeyValueRecordRequest,
        ) -> Result<SetKeyValueRecordResponse, tonic::Status> {
            self.unary("/concourse.ConcourseService/SetKeyValueRecord", request)
                .await
        }

        pub async fn set_key_value_records(
            &mut self,
            request: SetKeyValueRecordsRequest,
        ) -> Result<SetKeyValueRecordsResponse, tonic::Status> {
            self.unary("/concourse.ConcourseService/SetKeyValueRecords", request)
                .await
        }

        // Audit

        pub async fn audit_record(
            &mut self,
            request: AuditRecordRequest,
        ) -> Result<AuditResponse, tonic::Status> {
            self.unary("/concourse.ConcourseService/AuditRecord", request).await
        }

        pub async fn audit_record_start(
            &mut self,
            request: AuditRecordStartRequest,
        ) -> Result<AuditResponse, tonic::Status> {
            self.unary("/concourse.ConcourseService/AuditRecordStart", request)
                .await
        }

        pub async fn audit_record_startstr(
            &mut self,
            request: AuditRecordStartstrRequest,
        ) -> Result<AuditResponse, tonic::Status> {
            self.unary("/concourse.ConcourseService/AuditRecordStartstr", request)
                .await
        }

        pub async fn audit_record_start_end(
            &mut self,
            request: AuditRecordStartEndRequest,
        ) -> Result<AuditResponse, tonic::Status> {
            self.unary("/concourse.ConcourseService/AuditRecordStartEnd", request)
                .await
        }

        pub async fn audit_record_startstr_endstr(
            &mut self,
            request: AuditRecordStartstrEndstrRequest,
        ) -> Result<AuditResponse, tonic::Status> {
            self.unary(
                "/concourse.ConcourseService/AuditRecordStartstrEndstr",
                request,
            )
            .await
        }

        pub async fn audit_key_record(
            &mut self,
            request: AuditKeyRecordRequest,
        ) -> Result<AuditResponse, tonic::Status> {
            self.unary("/concourse.ConcourseService/AuditKeyRecord", request)
                .await
        }

        pub async fn audit_key_record_start(
            &mut self,
            request: AuditKeyRecordStartRequest,
        ) -> Result<AuditResponse, tonic::Status> {
            self.unary("/concourse.ConcourseService/AuditKeyRecordStart", request)
                .await
        }

        pub async fn audit_key_record_startstr(
            &mut self,
            request: AuditKeyRecordStartstrRequest,
        ) -> Result<AuditResponse, tonic::Status> {
            self.unary("/concourse.ConcourseService/AuditKeyRecordStartstr", request)
                .await
        }

        pub async fn audit_key_record_start_end(
            &mut self,
            request: AuditKeyRecordStartEndRequest,
        ) -> Result<AuditResponse, tonic::Status> {
            self.unary("/concourse.ConcourseService/AuditKeyRecordStartEnd", request)
                .await
        }

        pub async fn audit_key_record_startstr_endstr(
            &mut self,
            request: AuditKeyRecordStartstrEndstrRequest,
        ) -> Result<AuditResponse, tonic::Status> {
            self.unary(
                "/concourse.ConcourseService/AuditKeyRecordStartstrEndstr",
                request,
            )
            .await
        }

        // Browse

        pub async fn browse_key(
            &mut self,
            request: BrowseKeyRequest,
        ) -> Result<BrowseKeyResponse, tonic::Status> {
            self.unary("/concourse.ConcourseService/BrowseKey", request).await
        }

        pub async fn browse_key_time(
            &mut self,
            request: BrowseKeyTimeRequest,
        ) -> Result<BrowseKeyResponse, tonic::Status> {
            self.unary("/concourse.ConcourseService/BrowseKeyTime", request).await
        }

        pub async fn browse_key_timestr(
            &mut self,
            request: BrowseKeyTimestrRequest,
        ) -> Result<BrowseKeyResponse, tonic::Status> {
            self.unary("/concourse.ConcourseService/BrowseKeyTimestr", request)
                .await
        }

        pub async fn browse_keys(
            &mut self,
            request: BrowseKeysRequest,
        ) -> Result<BrowseKeysResponse, tonic::Status> {
            self.unary("/concourse.ConcourseService/BrowseKeys", request).await
        }

        pub async fn browse_keys_time(
            &mut self,
            request: BrowseKeysTimeRequest,
        ) -> Result<BrowseKeysResponse, tonic::Status> {
            self.unary("/concourse.ConcourseService/BrowseKeysTime", request).await
        }

        pub async fn browse_keys_timestr(
            &mut self,
            request: BrowseKeysTimestrRequest,
        ) -> Result<BrowseKeysResponse, tonic::Status> {
            self.unary("/concourse.ConcourseService/BrowseKeysTimestr", request)
                .await
        }

        // Get

        pub async fn get_key_record(
            &mut self,
            request: GetKeyRecordRequest,
        ) -> Result<GetValueResponse, tonic::Status> {
            self.unary("/concourse.ConcourseService/GetKeyRecord", request).await
        }

        pub async fn get_key_record_time(
            &mut self,
            request: GetKeyRecordTimeRequest,
        ) -> Result<GetValueResponse, tonic::Status> {
            self.unary("/concourse.ConcourseService/GetKeyRecordTime", request)
                .await
        }

        pub async fn get_key_record_timestr(
            &mut self,
            request: GetKeyRecordTimestrRequest,
        ) -> Result<GetValueResponse, tonic::Status> {
            self.unary("/concourse.ConcourseService/GetKeyRecordTimestr", request)
                .await
        }

        pub async fn get_key_records(
            &mut self,
            request: GetKeyRecordsRequest,
        ) -> Result<GetRecordValuesResponse, tonic::Status> {
            self.unary("/concourse.ConcourseService/GetKeyRecords", request).await
        }

        pub async fn get_key_records_time(
            &mut self,
            request: GetKeyRecordsTimeRequest,
        ) -> Result<GetRecordValuesResponse, tonic::Status> {
            self.unary("/concourse.ConcourseService/GetKeyRecordsTime", request)
                .await
        }

        pub async fn get_key_records_timestr(
            &mut self,
            request: GetKeyRecordsTimestrRequest,
        ) -> Result<GetRecordValuesResponse, tonic::Status> {
            self.unary("/concourse.ConcourseService/GetKeyRecordsTimestr", request)
                .await
        }

        pub async fn get_keys_record(
            &mut self,
            request: GetKeysRecordRequest,
        ) -> Result<GetKeyValuesResponse, tonic::Status> {
            self.unary("/concourse.ConcourseService/GetKeysRecord", request).await
        }

        pub async fn get_keys_record_time(
            &mut self,
            request: GetKeysRecordTimeRequest,
        ) -> Result<GetKeyValuesResponse, tonic::Status> {
            self.unary("/concourse.ConcourseService/GetKeysRecordTime", request)
                .await
        }

        pub async fn get_keys_record_timestr(
            &mut self,
            request: GetKeysRecordTimestrRequest,
        ) -> Result<GetKeyValuesResponse, tonic::Status> {
            self.unary("/concourse.ConcourseService/GetKeysRecordTimestr", request)
                .await
        }

        pub async fn get_keys_records(
            &mut self,
            request: GetKeysRecordsRequest,
        ) -> Result<GetRecordKeyValuesResponse, tonic::Status> {
            self.unary("/concourse.ConcourseService/GetKeysRecords", request).await
        }

        pub async fn get_keys_records_time(
            &mut self,
            request: GetKeysRecordsTimeRequest,
        ) -> Result<GetRecordKeyValuesResponse, tonic::Status> {
            self.unary("/concourse.ConcourseService/GetKeysRecordsTime", request)
                .await
        }

        pub async fn get_keys_records_timestr(
            &mut self,
            request: GetKeysRecordsTimestrRequest,
        ) -> Result<GetRecordKeyValuesResponse, tonic::Status> {
            self.unary("/concourse.ConcourseService/GetKeysRecordsTimestr", request)
                .await
        }

        // Inspection

        pub async fn describe_record(
            &mut self,
            request: DescribeRecordRequest,
        ) -> Result<DescribeResponse, tonic::Status> {
            self.unary("/concourse.ConcourseService/DescribeRecord", request)
                .await
        }

        pub async fn describe_record_time(
            &mut self,
            request: DescribeRecordTimeRequest,
        ) -> Result<DescribeResponse, tonic::Status> {
            self.unary("/concourse.ConcourseService/DescribeRecordTime", request)
                .await
        }

        pub async fn describe_record_timestr(
            &mut self,
            request: DescribeRecordTimestrRequest,
        ) -> Result<DescribeResponse, tonic::Status> {
            self.unary("/concourse.ConcourseService/DescribeRecordTimestr", request)
                .await
        }

        pub async fn verify_key_value_record(
            &mut self,
            request: VerifyKeyValueRecordRequest,
        ) -> Result<VerifyResponse, tonic::Status> {
            self.unary("/concourse.ConcourseService/VerifyKeyValueRecord", request)
                .await
        }

        pub async fn verify_key_value_record_time(
            &mut self,
            request: VerifyKeyValueRecordTimeRequest,
        ) -> Result<VerifyResponse, tonic::Status> {
            self.unary(
                "/concourse.ConcourseService/VerifyKeyValueRecordTime",
                request,
            )
            .await
        }

        pub async fn verify_key_value_record_timestr(
            &mut self,
            request: VerifyKeyValueRecordTimestrRequest,
        ) -> Result<VerifyResponse, tonic::Status> {
            self.unary(
                "/concourse.ConcourseService/VerifyKeyValueRecordTimestr",
                request,
            )
            .await
        }

        pub async fn ping_record(
            &mut self,
            request: PingRecordRequest,
        ) -> Result<PingResponse, tonic::Status> {
            self.unary("/concourse.ConcourseService/PingRecord", request).await
        }

        pub async fn get_server_version(
            &mut self,
            request: GetServerVersionRequest,
        ) -> Result<GetServerVersionResponse, tonic::Status> {
            self.unary("/concourse.ConcourseService/GetServerVersion", request)
                .await
        }
    }
}

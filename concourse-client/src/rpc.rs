/// Transport seam between the driver and Concourse Server
///
/// [`ConcourseRpc`] mirrors the wire contract one method per rpc, so the
/// dispatch layer can be exercised against [`MockRpc`] in tests while
/// production traffic goes through [`GrpcRpc`].
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use concourse_proto::{self as proto, concourse_service_client::ConcourseServiceClient};
use tonic::transport::Channel;
use tonic::Status;
use tracing::debug;

use crate::error::{ClientError, Result};

/// Remote operations exposed by Concourse Server, one method per wire
/// variant.
#[async_trait]
pub trait ConcourseRpc: Send {
    // Session
    async fn login(
        &mut self,
        req: proto::LoginRequest,
    ) -> std::result::Result<proto::LoginResponse, Status>;
    async fn logout(
        &mut self,
        req: proto::LogoutRequest,
    ) -> std::result::Result<proto::LogoutResponse, Status>;
    async fn stage(
        &mut self,
        req: proto::StageRequest,
    ) -> std::result::Result<proto::StageResponse, Status>;
    async fn abort(
        &mut self,
        req: proto::AbortRequest,
    ) -> std::result::Result<proto::AbortResponse, Status>;
    async fn commit(
        &mut self,
        req: proto::CommitRequest,
    ) -> std::result::Result<proto::CommitResponse, Status>;

    // Clock
    async fn time(
        &mut self,
        req: proto::TimeRequest,
    ) -> std::result::Result<proto::TimeResponse, Status>;
    async fn time_phrase(
        &mut self,
        req: proto::TimePhraseRequest,
    ) -> std::result::Result<proto::TimeResponse, Status>;

    // Writes
    async fn add_key_value(
        &mut self,
        req: proto::AddKeyValueRequest,
    ) -> std::result::Result<proto::AddKeyValueResponse, Status>;
    async fn add_key_value_record(
        &mut self,
        req: proto::AddKeyValueRecordRequest,
    ) -> std::result::Result<proto::AddKeyValueRecordResponse, Status>;
    async fn add_key_value_records(
        &mut self,
        req: proto::AddKeyValueRecordsRequest,
    ) -> std::result::Result<proto::AddKeyValueRecordsResponse, Status>;
    async fn remove_key_value_record(
        &mut self,
        req: proto::RemoveKeyValueRecordRequest,
    ) -> std::result::Result<proto::RemoveKeyValueRecordResponse, Status>;
    async fn remove_key_value_records(
        &mut self,
        req: proto::RemoveKeyValueRecordsRequest,
    ) -> std::result::Result<proto::RemoveKeyValueRecordsResponse, Status>;
    async fn set_key_value(
        &mut self,
        req: proto::SetKeyValueRequest,
    ) -> std::result::Result<proto::SetKeyValueResponse, Status>;
    async fn set_key_value_record(
        &mut self,
        req: proto::SetKeyValueRecordRequest,
    ) -> std::result::Result<proto::SetKeyValueRecordResponse, Status>;
    async fn set_key_value_records(
        &mut self,
        req: proto::SetKeyValueRecordsRequest,
    ) -> std::result::Result<proto::SetKeyValueRecordsResponse, Status>;

    // Audit
    async fn audit_record(
        &mut self,
        req: proto::AuditRecordRequest,
    ) -> std::result::Result<proto::AuditResponse, Status>;
    async fn audit_record_start(
        &mut self,
        req: proto::AuditRecordStartRequest,
    ) -> std::result::Result<proto::AuditResponse, Status>;
    async fn audit_record_startstr(
        &mut self,
        req: proto::AuditRecordStartstrRequest,
    ) -> std::result::Result<proto::AuditResponse, Status>;
    async fn audit_record_start_end(
        &mut self,
        req: proto::AuditRecordStartEndRequest,
    ) -> std::result::Result<proto::AuditResponse, Status>;
    async fn audit_record_startstr_endstr(
        &mut self,
        req: proto::AuditRecordStartstrEndstrRequest,
    ) -> std::result::Result<proto::AuditResponse, Status>;
    async fn audit_key_record(
        &mut self,
        req: proto::AuditKeyRecordRequest,
    ) -> std::result::Result<proto::AuditResponse, Status>;
    async fn audit_key_record_start(
        &mut self,
        req: proto::AuditKeyRecordStartRequest,
    ) -> std::result::Result<proto::AuditResponse, Status>;
    async fn audit_key_record_startstr(
        &mut self,
        req: proto::AuditKeyRecordStartstrRequest,
    ) -> std::result::Result<proto::AuditResponse, Status>;
    async fn audit_key_record_start_end(
        &mut self,
        req: proto::AuditKeyRecordStartEndRequest,
    ) -> std::result::Result<proto::AuditResponse, Status>;
    async fn audit_key_record_startstr_endstr(
        &mut self,
        req: proto::AuditKeyRecordStartstrEndstrRequest,
    ) -> std::result::Result<proto::AuditResponse, Status>;

    // Browse
    async fn browse_key(
        &mut self,
        req: proto::BrowseKeyRequest,
    ) -> std::result::Result<proto::BrowseKeyResponse, Status>;
    async fn browse_key_time(
        &mut self,
        req: proto::BrowseKeyTimeRequest,
    ) -> std::result::Result<proto::BrowseKeyResponse, Status>;
    async fn browse_key_timestr(
        &mut self,
        req: proto::BrowseKeyTimestrRequest,
    ) -> std::result::Result<proto::BrowseKeyResponse, Status>;
    async fn browse_keys(
        &mut self,
        req: proto::BrowseKeysRequest,
    ) -> std::result::Result<proto::BrowseKeysResponse, Status>;
    async fn browse_keys_time(
        &mut self,
        req: proto::BrowseKeysTimeRequest,
    ) -> std::result::Result<proto::BrowseKeysResponse, Status>;
    async fn browse_keys_timestr(
        &mut self,
        req: proto::BrowseKeysTimestrRequest,
    ) -> std::result::Result<proto::BrowseKeysResponse, Status>;

    // Get
    async fn get_key_record(
        &mut self,
        req: proto::GetKeyRecordRequest,
    ) -> std::result::Result<proto::GetValueResponse, Status>;
    async fn get_key_record_time(
        &mut self,
        req: proto::GetKeyRecordTimeRequest,
    ) -> std::result::Result<proto::GetValueResponse, Status>;
    async fn get_key_record_timestr(
        &mut self,
        req: proto::GetKeyRecordTimestrRequest,
    ) -> std::result::Result<proto::GetValueResponse, Status>;
    async fn get_key_records(
        &mut self,
        req: proto::GetKeyRecordsRequest,
    ) -> std::result::Result<proto::GetRecordValuesResponse, Status>;
    async fn get_key_records_time(
        &mut self,
        req: proto::GetKeyRecordsTimeRequest,
    ) -> std::result::Result<proto::GetRecordValuesResponse, Status>;
    async fn get_key_records_timestr(
        &mut self,
        req: proto::GetKeyRecordsTimestrRequest,
    ) -> std::result::Result<proto::GetRecordValuesResponse, Status>;
    async fn get_keys_record(
        &mut self,
        req: proto::GetKeysRecordRequest,
    ) -> std::result::Result<proto::GetKeyValuesResponse, Status>;
    async fn get_keys_record_time(
        &mut self,
        req: proto::GetKeysRecordTimeRequest,
    ) -> std::result::Result<proto::GetKeyValuesResponse, Status>;
    async fn get_keys_record_timestr(
        &mut self,
        req: proto::GetKeysRecordTimestrRequest,
    ) -> std::result::Result<proto::GetKeyValuesResponse, Status>;
    async fn get_keys_records(
        &mut self,
        req: proto::GetKeysRecordsRequest,
    ) -> std::result::Result<proto::GetRecordKeyValuesResponse, Status>;
    async fn get_keys_records_time(
        &mut self,
        req: proto::GetKeysRecordsTimeRequest,
    ) -> std::result::Result<proto::GetRecordKeyValuesResponse, Status>;
    async fn get_keys_records_timestr(
        &mut self,
        req: proto::GetKeysRecordsTimestrRequest,
    ) -> std::result::Result<proto::GetRecordKeyValuesResponse, Status>;

    // Inspection
    async fn describe_record(
        &mut self,
        req: proto::DescribeRecordRequest,
    ) -> std::result::Result<proto::DescribeResponse, Status>;
    async fn describe_record_time(
        &mut self,
        req: proto::DescribeRecordTimeRequest,
    ) -> std::result::Result<proto::DescribeResponse, Status>;
    async fn describe_record_timestr(
        &mut self,
        req: proto::DescribeRecordTimestrRequest,
    ) -> std::result::Result<proto::DescribeResponse, Status>;
    async fn verify_key_value_record(
        &mut self,
        req: proto::VerifyKeyValueRecordRequest,
    ) -> std::result::Result<proto::VerifyResponse, Status>;
    async fn verify_key_value_record_time(
        &mut self,
        req: proto::VerifyKeyValueRecordTimeRequest,
    ) -> std::result::Result<proto::VerifyResponse, Status>;
    async fn verify_key_value_record_timestr(
        &mut self,
        req: proto::VerifyKeyValueRecordTimestrRequest,
    ) -> std::result::Result<proto::VerifyResponse, Status>;
    async fn ping_record(
        &mut self,
        req: proto::PingRecordRequest,
    ) -> std::result::Result<proto::PingResponse, Status>;
    async fn get_server_version(
        &mut self,
        req: proto::GetServerVersionRequest,
    ) -> std::result::Result<proto::GetServerVersionResponse, Status>;
}

/// Production transport over a tonic channel.
pub struct GrpcRpc {
    inner: ConcourseServiceClient<Channel>,
}

impl GrpcRpc {
    /// Open a channel to `addr` (for example `http://localhost:1717`).
    pub async fn connect(addr: impl Into<String>) -> Result<Self> {
        let addr = addr.into();
        debug!("connecting to {}", addr);
        let channel = Channel::from_shared(addr)
            .map_err(|e| ClientError::Connect(format!("Invalid address: {}", e)))?
            .connect()
            .await
            .map_err(|e| ClientError::Connect(format!("Failed to connect: {}", e)))?;
        Ok(Self {
            inner: ConcourseServiceClient::new(channel),
        })
    }
}

#[async_trait]
impl ConcourseRpc for GrpcRpc {
    async fn login(
        &mut self,
        req: proto::LoginRequest,
    ) -> std::result::Result<proto::LoginResponse, Status> {
        self.inner.login(req).await
    }

    async fn logout(
        &mut self,
        req: proto::LogoutRequest,
    ) -> std::result::Result<proto::LogoutResponse, Status> {
        self.inner.logout(req).await
    }

    async fn stage(
        &mut self,
        req: proto::StageRequest,
    ) -> std::result::Result<proto::StageResponse, Status> {
        self.inner.stage(req).await
    }

    async fn abort(
        &mut self,
        req: proto::AbortRequest,
    ) -> std::result::Result<proto::AbortResponse, Status> {
        self.inner.abort(req).await
    }

    async fn commit(
        &mut self,
        req: proto::CommitRequest,
    ) -> std::result::Result<proto::CommitResponse, Status> {
        self.inner.commit(req).await
    }

    async fn time(
        &mut self,
        req: proto::TimeRequest,
    ) -> std::result::Result<proto::TimeResponse, Status> {
        self.inner.time(req).await
    }

    async fn time_phrase(
        &mut self,
        req: proto::TimePhraseRequest,
    ) -> std::result::Result<proto::TimeResponse, Status> {
        self.inner.time_phrase(req).await
    }

    async fn add_key_value(
        &mut self,
        req: proto::AddKeyValueRequest,
    ) -> std::result::Result<proto::AddKeyValueResponse, Status> {
        self.inner.add_key_value(req).await
    }

    async fn add_key_value_record(
        &mut self,
        req: proto::AddKeyValueRecordRequest,
    ) -> std::result::Result<proto::AddKeyValueRecordResponse, Status> {
        self.inner.add_key_value_record(req).await
    }

    async fn add_key_value_records(
        &mut self,
        req: proto::AddKeyValueRecordsRequest,
    ) -> std::result::Result<proto::AddKeyValueRecordsResponse, Status> {
        self.inner.add_key_value_records(req).await
    }

    async fn remove_key_value_record(
        &mut self,
        req: proto::RemoveKeyValueRecordRequest,
    ) -> std::result::Result<proto::RemoveKeyValueRecordResponse, Status> {
        self.inner.remove_key_value_record(req).await
    }

    async fn remove_key_value_records(
        &mut self,
        req: proto::RemoveKeyValueRecordsRequest,
    ) -> std::result::Result<proto::RemoveKeyValueRecordsResponse, Status> {
        self.inner.remove_key_value_records(req).await
    }

    async fn set_key_value(
        &mut self,
        req: proto::SetKeyValueRequest,
    ) -> std::result::Result<proto::SetKeyValueResponse, Status> {
        self.inner.set_key_value(req).await
    }

    async fn set_key_value_record(
        &mut self,
        req: proto::SetKeyValueRecordRequest,
    ) -> std::result::Result<proto::SetKeyValueRecordResponse, Status> {
        self.inner.set_key_value_record(req).await
    }

    async fn set_key_value_records(
        &mut self,
        req: proto::SetKeyValueRecordsRequest,
    ) -> std::result::Result<proto::SetKeyValueRecordsResponse, Status> {
        self.inner.set_key_value_records(req).await
    }

    async fn audit_record(
        &mut self,
        req: proto::AuditRecordRequest,
    ) -> std::result::Result<proto::AuditResponse, Status> {
        self.inner.audit_record(req).await
    }

    async fn audit_record_start(
        &mut self,
        req: proto::AuditRecordStartRequest,
    ) -> std::result::Result<proto::AuditResponse, Status> {
        self.inner.audit_record_start(req).await
    }

    async fn audit_record_startstr(
        &mut self,
        req: proto::AuditRecordStartstrRequest,
    ) -> std::result::Result<proto::AuditResponse, Status> {
        self.inner.audit_record_startstr(req).await
    }

    async fn audit_record_start_end(
        &mut self,
        req: proto::AuditRecordStartEndRequest,
    ) -> std::result::Result<proto::AuditResponse, Status> {
        self.inner.audit_record_start_end(req).await
    }

    async fn audit_record_startstr_endstr(
        &mut self,
        req: proto::AuditRecordStartstrEndstrRequest,
    ) -> std::result::Result<proto::AuditResponse, Status> {
        self.inner.audit_record_startstr_endstr(req).await
    }

    async fn audit_key_record(
        &mut self,
        req: proto::AuditKeyRecordRequest,
    ) -> std::result::Result<proto::AuditResponse, Status> {
        self.inner.audit_key_record(req).await
    }

    async fn audit_key_record_start(
        &mut self,
        req: proto::AuditKeyRecordStartRequest,
    ) -> std::result::Result<proto::AuditResponse, Status> {
        self.inner.audit_key_record_start(req).await
    }

    async fn audit_key_record_startstr(
        &mut self,
        req: proto::AuditKeyRecordStartstrRequest,
    ) -> std::result::Result<proto::AuditResponse, Status> {
        self.inner.audit_key_record_startstr(req).await
    }

    async fn audit_key_record_start_end(
        &mut self,
        req: proto::AuditKeyRecordStartEndRequest,
    ) -> std::result::Result<proto::AuditResponse, Status> {
        self.inner.audit_key_record_start_end(req).await
    }

    async fn audit_key_record_startstr_endstr(
        &mut self,
        req: proto::AuditKeyRecordStartstrEndstrRequest,
    ) -> std::result::Result<proto::AuditResponse, Status> {
        self.inner.audit_key_record_startstr_endstr(req).await
    }

    async fn browse_key(
        &mut self,
        req: proto::BrowseKeyRequest,
    ) -> std::result::Result<proto::BrowseKeyResponse, Status> {
        self.inner.browse_key(req).await
    }

    async fn browse_key_time(
        &mut self,
        req: proto::BrowseKeyTimeRequest,
    ) -> std::result::Result<proto::BrowseKeyResponse, Status> {
        self.inner.browse_key_time(req).await
    }

    async fn browse_key_timestr(
        &mut self,
        req: proto::BrowseKeyTimestrRequest,
    ) -> std::result::Result<proto::BrowseKeyResponse, Status> {
        self.inner.browse_key_timestr(req).await
    }

    async fn browse_keys(
        &mut self,
        req: proto::BrowseKeysRequest,
    ) -> std::result::Result<proto::BrowseKeysResponse, Status> {
        self.inner.browse_keys(req).await
    }

    async fn browse_keys_time(
        &mut self,
        req: proto::BrowseKeysTimeRequest,
    ) -> std::result::Result<proto::BrowseKeysResponse, Status> {
        self.inner.browse_keys_time(req).await
    }

    async fn browse_keys_timestr(
        &mut self,
        req: proto::BrowseKeysTimestrRequest,
    ) -> std::result::Result<proto::BrowseKeysResponse, Status> {
        self.inner.browse_keys_timestr(req).await
    }

    async fn get_key_record(
        &mut self,
        req: proto::GetKeyRecordRequest,
    ) -> std::result::Result<proto::GetValueResponse, Status> {
        self.inner.get_key_record(req).await
    }

    async fn get_key_record_time(
        &mut self,
        req: proto::GetKeyRecordTimeRequest,
    ) -> std::result::Result<proto::GetValueResponse, Status> {
        self.inner.get_key_record_time(req).await
    }

    async fn get_key_record_timestr(
        &mut self,
        req: proto::GetKeyRecordTimestrRequest,
    ) -> std::result::Result<proto::GetValueResponse, Status> {
        self.inner.get_key_record_timestr(req).await
    }

    async fn get_key_records(
        &mut self,
        req: proto::GetKeyRecordsRequest,
    ) -> std::result::Result<proto::GetRecordValuesResponse, Status> {
        self.inner.get_key_records(req).await
    }

    async fn get_key_records_time(
        &mut self,
        req: proto::GetKeyRecordsTimeRequest,
    ) -> std::result::Result<proto::GetRecordValuesResponse, Status> {
        self.inner.get_key_records_time(req).await
    }

    async fn get_key_records_timestr(
        &mut self,
        req: proto::GetKeyRecordsTimestrRequest,
    ) -> std::result::Result<proto::GetRecordValuesResponse, Status> {
        self.inner.get_key_records_timestr(req).await
    }

    async fn get_keys_record(
        &mut self,
        req: proto::GetKeysRecordRequest,
    ) -> std::result::Result<proto::GetKeyValuesResponse, Status> {
        self.inner.get_keys_record(req).await
    }

    async fn get_keys_record_time(
        &mut self,
        req: proto::GetKeysRecordTimeRequest,
    ) -> std::result::Result<proto::GetKeyValuesResponse, Status> {
        self.inner.get_keys_record_time(req).await
    }

    async fn get_keys_record_timestr(
        &mut self,
        req: proto::GetKeysRecordTimestrRequest,
    ) -> std::result::Result<proto::GetKeyValuesResponse, Status> {
        self.inner.get_keys_record_timestr(req).await
    }

    async fn get_keys_records(
        &mut self,
        req: proto::GetKeysRecordsRequest,
    ) -> std::result::Result<proto::GetRecordKeyValuesResponse, Status> {
        self.inner.get_keys_records(req).await
    }

    async fn get_keys_records_time(
        &mut self,
        req: proto::GetKeysRecordsTimeRequest,
    ) -> std::result::Result<proto::GetRecordKeyValuesResponse, Status> {
        self.inner.get_keys_records_time(req).await
    }

    async fn get_keys_records_timestr(
        &mut self,
        req: proto::GetKeysRecordsTimestrRequest,
    ) -> std::result::Result<proto::GetRecordKeyValuesResponse, Status> {
        self.inner.get_keys_records_timestr(req).await
    }

    async fn describe_record(
        &mut self,
        req: proto::DescribeRecordRequest,
    ) -> std::result::Result<proto::DescribeResponse, Status> {
        self.inner.describe_record(req).await
    }

    async fn describe_record_time(
        &mut self,
        req: proto::DescribeRecordTimeRequest,
    ) -> std::result::Result<proto::DescribeResponse, Status> {
        self.inner.describe_record_time(req).await
    }

    async fn describe_record_timestr(
        &mut self,
        req: proto::DescribeRecordTimestrRequest,
    ) -> std::result::Result<proto::DescribeResponse, Status> {
        self.inner.describe_record_timestr(req).await
    }

    async fn verify_key_value_record(
        &mut self,
        req: proto::VerifyKeyValueRecordRequest,
    ) -> std::result::Result<proto::VerifyResponse, Status> {
        self.inner.verify_key_value_record(req).await
    }

    async fn verify_key_value_record_time(
        &mut self,
        req: proto::VerifyKeyValueRecordTimeRequest,
    ) -> std::result::Result<proto::VerifyResponse, Status> {
        self.inner.verify_key_value_record_time(req).await
    }

    async fn verify_key_value_record_timestr(
        &mut self,
        req: proto::VerifyKeyValueRecordTimestrRequest,
    ) -> std::result::Result<proto::VerifyResponse, Status> {
        self.inner.verify_key_value_record_timestr(req).await
    }

    async fn ping_record(
        &mut self,
        req: proto::PingRecordRequest,
    ) -> std::result::Result<proto::PingResponse, Status> {
        self.inner.ping_record(req).await
    }

    async fn get_server_version(
        &mut self,
        req: proto::GetServerVersionRequest,
    ) -> std::result::Result<proto::GetServerVersionResponse, Status> {
        self.inner.get_server_version(req).await
    }
}

/// One recorded wire call: the method name and the ambient session fields
/// that were attached to the request.
#[derive(Debug, Clone)]
pub struct Invocation {
    pub method: &'static str,
    pub creds: Option<Vec<u8>>,
    pub transaction: Option<proto::TransactionToken>,
    pub environment: String,
}

/// Shared view of the calls a [`MockRpc`] has received. Cloning the log
/// keeps it readable after the driver (and the mock inside it) is gone.
#[derive(Debug, Clone, Default)]
pub struct CallLog {
    calls: Arc<Mutex<Vec<Invocation>>>,
}

impl CallLog {
    pub fn calls(&self) -> Vec<Invocation> {
        self.calls.lock().unwrap().clone()
    }

    pub fn methods(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().iter().map(|c| c.method).collect()
    }

    pub fn len(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn push(&self, invocation: Invocation) {
        self.calls.lock().unwrap().push(invocation);
    }
}

/// Mock transport for testing.
///
/// Records every call with its session fields and answers from canned
/// response data. The canned fields are plain `pub` so tests can shape
/// responses directly.
pub struct MockRpc {
    log: CallLog,
    pub token: Vec<u8>,
    pub transaction_timestamp: i64,
    pub committed: bool,
    pub record_id: i64,
    pub flag: bool,
    pub results: HashMap<i64, bool>,
    pub revision_log: HashMap<i64, String>,
    pub index: Vec<proto::ValueRecords>,
    pub keyed_index: HashMap<String, proto::ValueIndex>,
    pub value: Option<proto::Value>,
    pub values_by_record: HashMap<i64, proto::Value>,
    pub values_by_key: HashMap<String, proto::Value>,
    pub key_values_by_record: HashMap<i64, proto::KeyValues>,
    pub keys: Vec<String>,
    pub micros: i64,
    pub version: String,
}

impl MockRpc {
    pub fn new() -> Self {
        Self {
            log: CallLog::default(),
            token: b"mock-token".to_vec(),
            transaction_timestamp: 1,
            committed: true,
            record_id: 1,
            flag: true,
            results: HashMap::new(),
            revision_log: HashMap::new(),
            index: Vec::new(),
            keyed_index: HashMap::new(),
            value: None,
            values_by_record: HashMap::new(),
            values_by_key: HashMap::new(),
            key_values_by_record: HashMap::new(),
            keys: Vec::new(),
            micros: 1_000_000,
            version: "0.11.0".to_string(),
        }
    }

    /// Handle to the call log that stays readable after the mock is moved
    /// into a driver.
    pub fn log(&self) -> CallLog {
        self.log.clone()
    }

    pub fn calls(&self) -> Vec<Invocation> {
        self.log.calls()
    }

    pub fn methods(&self) -> Vec<&'static str> {
        self.log.methods()
    }

    fn log_call(
        &self,
        method: &'static str,
        creds: &Option<proto::AccessToken>,
        transaction: &Option<proto::TransactionToken>,
        environment: &str,
    ) {
        self.log.push(Invocation {
            method,
            creds: creds.as_ref().map(|c| c.token.clone()),
            transaction: transaction.clone(),
            environment: environment.to_string(),
        });
    }
}

impl Default for MockRpc {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConcourseRpc for MockRpc {
    async fn login(
        &mut self,
        req: proto::LoginRequest,
    ) -> std::result::Result<proto::LoginResponse, Status> {
        self.log_call("Login", &None, &None, &req.environment);
        Ok(proto::LoginResponse {
            token: Some(proto::AccessToken {
                token: self.token.clone(),
            }),
        })
    }

    async fn logout(
        &mut self,
        req: proto::LogoutRequest,
    ) -> std::result::Result<proto::LogoutResponse, Status> {
        self.log_call("Logout", &req.creds, &None, &req.environment);
        Ok(proto::LogoutResponse {})
    }

    async fn stage(
        &mut self,
        req: proto::StageRequest,
    ) -> std::result::Result<proto::StageResponse, Status> {
        self.log_call("Stage", &req.creds, &None, &req.environment);
        Ok(proto::StageResponse {
            transaction: Some(proto::TransactionToken {
                access_token: req.creds,
                timestamp: self.transaction_timestamp,
            }),
        })
    }

    async fn abort(
        &mut self,
        req: proto::AbortRequest,
    ) -> std::result::Result<proto::AbortResponse, Status> {
        self.log_call("Abort", &req.creds, &req.transaction, &req.environment);
        Ok(proto::AbortResponse {})
    }

    async fn commit(
        &mut self,
        req: proto::CommitRequest,
    ) -> std::result::Result<proto::CommitResponse, Status> {
        self.log_call("Commit", &req.creds, &req.transaction, &req.environment);
        Ok(proto::CommitResponse {
            committed: self.committed,
        })
    }

    async fn time(
        &mut self,
        req: proto::TimeRequest,
    ) -> std::result::Result<proto::TimeResponse, Status> {
        self.log_call("Time", &req.creds, &req.transaction, &req.environment);
        Ok(proto::TimeResponse { micros: self.micros })
    }

    async fn time_phrase(
        &mut self,
        req: proto::TimePhraseRequest,
    ) -> std::result::Result<proto::TimeResponse, Status> {
        self.log_call("TimePhrase", &req.creds, &req.transaction, &req.environment);
        Ok(proto::TimeResponse { micros: self.micros })
    }

    async fn add_key_value(
        &mut self,
        req: proto::AddKeyValueRequest,
    ) -> std::result::Result<proto::AddKeyValueResponse, Status> {
        self.log_call("AddKeyValue", &req.creds, &req.transaction, &req.environment);
        Ok(proto::AddKeyValueResponse {
            record: self.record_id,
        })
    }

    async fn add_key_value_record(
        &mut self,
        req: proto::AddKeyValueRecordRequest,
    ) -> std::result::Result<proto::AddKeyValueRecordResponse, Status> {
        self.log_call(
            "AddKeyValueRecord",
            &req.creds,
            &req.transaction,
            &req.environment,
        );
        Ok(proto::AddKeyValueRecordResponse { added: self.flag })
    }

    async fn add_key_value_records(
        &mut self,
        req: proto::AddKeyValueRecordsRequest,
    ) -> std::result::Result<proto::AddKeyValueRecordsResponse, Status> {
        self.log_call(
            "AddKeyValueRecords",
            &req.creds,
            &req.transaction,
            &req.environment,
        );
        Ok(proto::AddKeyValueRecordsResponse {
            results: self.results.clone(),
        })
    }

    async fn remove_key_value_record(
        &mut self,
        req: proto::RemoveKeyValueRecordRequest,
    ) -> std::result::Result<proto::RemoveKeyValueRecordResponse, Status> {
        self.log_call(
            "RemoveKeyValueRecord",
            &req.creds,
            &req.transaction,
            &req.environment,
        );
        Ok(proto::RemoveKeyValueRecordResponse { removed: self.flag })
    }

    async fn remove_key_value_records(
        &mut self,
        req: proto::RemoveKeyValueRecordsRequest,
    ) -> std::result::Result<proto::RemoveKeyValueRecordsResponse, Status> {
        self.log_call(
            "RemoveKeyValueRecords",
            &req.creds,
            &req.transaction,
            &req.environment,
        );
        Ok(proto::RemoveKeyValueRecordsResponse {
            results: self.results.clone(),
        })
    }

    async fn set_key_value(
        &mut self,
        req: proto::SetKeyValueRequest,
    ) -> std::result::Result<proto::SetKeyValueResponse, Status> {
        self.log_call("SetKeyValue", &req.creds, &req.transaction, &req.environment);
        Ok(proto::SetKeyValueResponse {
            record: self.record_id,
        })
    }

    async fn set_key_value_record(
        &mut self,
        req: proto::SetKeyValueRecordRequest,
    ) -> std::result::Result<proto::SetKeyValueRecordResponse, Status> {
        self.log_call(
            "SetKeyValueRecord",
            &req.creds,
            &req.transaction,
            &req.environment,
        );
        Ok(proto::SetKeyValueRecordResponse {})
    }

    async fn set_key_value_records(
        &mut self,
        req: proto::SetKeyValueRecordsRequest,
    ) -> std::result::Result<proto::SetKeyValueRecordsResponse, Status> {
        self.log_call(
            "SetKeyValueRecords",
            &req.creds,
            &req.transaction,
            &req.environment,
        );
        Ok(proto::SetKeyValueRecordsResponse {})
    }

    async fn audit_record(
        &mut self,
        req: proto::AuditRecordRequest,
    ) -> std::result::Result<proto::AuditResponse, Status> {
        self.log_call("AuditRecord", &req.creds, &req.transaction, &req.environment);
        Ok(proto::AuditResponse {
            log: self.revision_log.clone(),
        })
    }

    async fn audit_record_start(
        &mut self,
        req: proto::AuditRecordStartRequest,
    ) -> std::result::Result<proto::AuditResponse, Status> {
        self.log_call(
            "AuditRecordStart",
            &req.creds,
            &req.transaction,
            &req.environment,
        );
        Ok(proto::AuditResponse {
            log: self.revision_log.clone(),
        })
    }

    async fn audit_record_startstr(
        &mut self,
        req: proto::AuditRecordStartstrRequest,
    ) -> std::result::Result<proto::AuditResponse, Status> {
        self.log_call(
            "AuditRecordStartstr",
            &req.creds,
            &req.transaction,
            &req.environment,
        );
        Ok(proto::AuditResponse {
            log: self.revision_log.clone(),
        })
    }

    async fn audit_record_start_end(
        &mut self,
        req: proto::AuditRecordStartEndRequest,
    ) -> std::result::Result<proto::AuditResponse, Status> {
        self.log_call(
            "AuditRecordStartEnd",
            &req.creds,
            &req.transaction,
            &req.environment,
        );
        Ok(proto::AuditResponse {
            log: self.revision_log.clone(),
        })
    }

    async fn audit_record_startstr_endstr(
        &mut self,
        req: proto::AuditRecordStartstrEndstrRequest,
    ) -> std::result::Result<proto::AuditResponse, Status> {
        self.log_call(
            "AuditRecordStartstrEndstr",
            &req.creds,
            &req.transaction,
            &req.environment,
        );
        Ok(proto::AuditResponse {
            log: self.revision_log.clone(),
        })
    }

    async fn audit_key_record(
        &mut self,
        req: proto::AuditKeyRecordRequest,
    ) -> std::result::Result<proto::AuditResponse, Status> {
        self.log_call(
            "AuditKeyRecord",
            &req.creds,
            &req.transaction,
            &req.environment,
        );
        Ok(proto::AuditResponse {
            log: self.revision_log.clone(),
        })
    }

    async fn audit_key_record_start(
        &mut self,
        req: proto::AuditKeyRecordStartRequest,
    ) -> std::result::Result<proto::AuditResponse, Status> {
        self.log_call(
            "AuditKeyRecordStart",
            &req.creds,
            &req.transaction,
            &req.environment,
        );
        Ok(proto::AuditResponse {
            log: self.revision_log.clone(),
        })
    }

    async fn audit_key_record_startstr(
        &mut self,
        req: proto::AuditKeyRecordStartstrRequest,
    ) -> std::result::Result<proto::AuditResponse, Status> {
        self.log_call(
            "AuditKeyRecordStartstr",
            &req.creds,
            &req.transaction,
            &req.environment,
        );
        Ok(proto::AuditResponse {
            log: self.revision_log.clone(),
        })
    }

    async fn audit_key_record_start_end(
        &mut self,
        req: proto::AuditKeyRecordStartEndRequest,
    ) -> std::result::Result<proto::AuditResponse, Status> {
        self.log_call(
            "AuditKeyRecordStartEnd",
            &req.creds,
            &req.transaction,
            &req.environment,
        );
        Ok(proto::AuditResponse {
            log: self.revision_log.clone(),
        })
    }

    async fn audit_key_record_startstr_endstr(
        &mut self,
        req: proto::AuditKeyRecordStartstrEndstrRequest,
    ) -> std::result::Result<proto::AuditResponse, Status> {
        self.log_call(
            "AuditKeyRecordStartstrEndstr",
            &req.creds,
            &req.transaction,
            &req.environment,
        );
        Ok(proto::AuditResponse {
            log: self.revision_log.clone(),
        })
    }

    async fn browse_key(
        &mut self,
        req: proto::BrowseKeyRequest,
    ) -> std::result::Result<proto::BrowseKeyResponse, Status> {
        self.log_call("BrowseKey", &req.creds, &req.transaction, &req.environment);
        Ok(proto::BrowseKeyResponse {
            values: self.index.clone(),
        })
    }

    async fn browse_key_time(
        &mut self,
        req: proto::BrowseKeyTimeRequest,
    ) -> std::result::Result<proto::BrowseKeyResponse, Status> {
        self.log_call(
            "BrowseKeyTime",
            &req.creds,
            &req.transaction,
            &req.environment,
        );
        Ok(proto::BrowseKeyResponse {
            values: self.index.clone(),
        })
    }

    async fn browse_key_timestr(
        &mut self,
        req: proto::BrowseKeyTimestrRequest,
    ) -> std::result::Result<proto::BrowseKeyResponse, Status> {
        self.log_call(
            "BrowseKeyTimestr",
            &req.creds,
            &req.transaction,
            &req.environment,
        );
        Ok(proto::BrowseKeyResponse {
            values: self.index.clone(),
        })
    }

    async fn browse_keys(
        &mut self,
        req: proto::BrowseKeysRequest,
    ) -> std::result::Result<proto::BrowseKeysResponse, Status> {
        self.log_call("BrowseKeys", &req.creds, &req.transaction, &req.environment);
        Ok(proto::BrowseKeysResponse {
            entries: self.keyed_index.clone(),
        })
    }

    async fn browse_keys_time(
        &mut self,
        req: proto::BrowseKeysTimeRequest,
    ) -> std::result::Result<proto::BrowseKeysResponse, Status> {
        self.log_call(
            "BrowseKeysTime",
            &req.creds,
            &req.transaction,
            &req.environment,
        );
        Ok(proto::BrowseKeysResponse {
            entries: self.keyed_index.clone(),
        })
    }

    async fn browse_keys_timestr(
        &mut self,
        req: proto::BrowseKeysTimestrRequest,
    ) -> std::result::Result<proto::BrowseKeysResponse, Status> {
        self.log_call(
            "BrowseKeysTimestr",
            &req.creds,
            &req.transaction,
            &req.environment,
        );
        Ok(proto::BrowseKeysResponse {
            entries: self.keyed_index.clone(),
        })
    }

    async fn get_key_record(
        &mut self,
        req: proto::GetKeyRecordRequest,
    ) -> std::result::Result<proto::GetValueResponse, Status> {
        self.log_call("GetKeyRecord", &req.creds, &req.transaction, &req.environment);
        Ok(proto::GetValueResponse {
            value: self.value.clone(),
        })
    }

    async fn get_key_record_time(
        &mut self,
        req: proto::GetKeyRecordTimeRequest,
    ) -> std::result::Result<proto::GetValueResponse, Status> {
        self.log_call(
            "GetKeyRecordTime",
            &req.creds,
            &req.transaction,
            &req.environment,
        );
        Ok(proto::GetValueResponse {
            value: self.value.clone(),
        })
    }

    async fn get_key_record_timestr(
        &mut self,
        req: proto::GetKeyRecordTimestrRequest,
    ) -> std::result::Result<proto::GetValueResponse, Status> {
        self.log_call(
            "GetKeyRecordTimestr",
            &req.creds,
            &req.transaction,
            &req.environment,
        );
        Ok(proto::GetValueResponse {
            value: self.value.clone(),
        })
    }

    async fn get_key_records(
        &mut self,
        req: proto::GetKeyRecordsRequest,
    ) -> std::result::Result<proto::GetRecordValuesResponse, Status> {
        self.log_call(
            "GetKeyRecords",
            &req.creds,
            &req.transaction,
            &req.environment,
        );
        Ok(proto::GetRecordValuesResponse {
            values: self.values_by_record.clone(),
        })
    }

    async fn get_key_records_time(
        &mut self,
        req: proto::GetKeyRecordsTimeRequest,
    ) -> std::result::Result<proto::GetRecordValuesResponse, Status> {
        self.log_call(
            "GetKeyRecordsTime",
            &req.creds,
            &req.transaction,
            &req.environment,
        );
        Ok(proto::GetRecordValuesResponse {
            values: self.values_by_record.clone(),
        })
    }

    async fn get_key_records_timestr(
        &mut self,
        req: proto::GetKeyRecordsTimestrRequest,
    ) -> std::result::Result<proto::GetRecordValuesResponse, Status> {
        self.log_call(
            "GetKeyRecordsTimestr",
            &req.creds,
            &req.transaction,
            &req.environment,
        );
        Ok(proto::GetRecordValuesResponse {
            values: self.values_by_record.clone(),
        })
    }

    async fn get_keys_record(
        &mut self,
        req: proto::GetKeysRecordRequest,
    ) -> std::result::Result<proto::GetKeyValuesResponse, Status> {
        self.log_call(
            "GetKeysRecord",
            &req.creds,
            &req.transaction,
            &req.environment,
        );
        Ok(proto::GetKeyValuesResponse {
            values: self.values_by_key.clone(),
        })
    }

    async fn get_keys_record_time(
        &mut self,
        req: proto::GetKeysRecordTimeRequest,
    ) -> std::result::Result<proto::GetKeyValuesResponse, Status> {
        self.log_call(
            "GetKeysRecordTime",
            &req.creds,
            &req.transaction,
            &req.environment,
        );
        Ok(proto::GetKeyValuesResponse {
            values: self.values_by_key.clone(),
        })
    }

    async fn get_keys_record_timestr(
        &mut self,
        req: proto::GetKeysRecordTimestrRequest,
    ) -> std::result::Result<proto::GetKeyValuesResponse, Status> {
        self.log_call(
            "GetKeysRecordTimestr",
            &req.creds,
            &req.transaction,
            &req.environment,
        );
        Ok(proto::GetKeyValuesResponse {
            values: self.values_by_key.clone(),
        })
    }

    async fn get_keys_records(
        &mut self,
        req: proto::GetKeysRecordsRequest,
    ) -> std::result::Result<proto::GetRecordKeyValuesResponse, Status> {
        self.log_call(
            "GetKeysRecords",
            &req.creds,
            &req.transaction,
            &req.environment,
        );
        Ok(proto::GetRecordKeyValuesResponse {
            records: self.key_values_by_record.clone(),
        })
    }

    async fn get_keys_records_time(
        &mut self,
        req: proto::GetKeysRecordsTimeRequest,
    ) -> std::result::Result<proto::GetRecordKeyValuesResponse, Status> {
        self.log_call(
            "GetKeysRecordsTime",
            &req.creds,
            &req.transaction,
            &req.environment,
        );
        Ok(proto::GetRecordKeyValuesResponse {
            records: self.key_values_by_record.clone(),
        })
    }

    async fn get_keys_records_timestr(
        &mut self,
        req: proto::GetKeysRecordsTimestrRequest,
    ) -> std::result::Result<proto::GetRecordKeyValuesResponse, Status> {
        self.log_call(
            "GetKeysRecordsTimestr",
            &req.creds,
            &req.transaction,
            &req.environment,
        );
        Ok(proto::GetRecordKeyValuesResponse {
            records: self.key_values_by_record.clone(),
        })
    }

    async fn describe_record(
        &mut self,
        req: proto::DescribeRecordRequest,
    ) -> std::result::Result<proto::DescribeResponse, Status> {
        self.log_call(
            "DescribeRecord",
            &req.creds,
            &req.transaction,
            &req.environment,
        );
        Ok(proto::DescribeResponse {
            keys: self.keys.clone(),
        })
    }

    async fn describe_record_time(
        &mut self,
        req: proto::DescribeRecordTimeRequest,
    ) -> std::result::Result<proto::DescribeResponse, Status> {
        self.log_call(
            "DescribeRecordTime",
            &req.creds,
            &req.transaction,
            &req.environment,
        );
        Ok(proto::DescribeResponse {
            keys: self.keys.clone(),
        })
    }

    async fn describe_record_timestr(
        &mut self,
        req: proto::DescribeRecordTimestrRequest,
    ) -> std::result::Result<proto::DescribeResponse, Status> {
        self.log_call(
            "DescribeRecordTimestr",
            &req.creds,
            &req.transaction,
            &req.environment,
        );
        Ok(proto::DescribeResponse {
            keys: self.keys.clone(),
        })
    }

    async fn verify_key_value_record(
        &mut self,
        req: proto::VerifyKeyValueRecordRequest,
    ) -> std::result::Result<proto::VerifyResponse, Status> {
        self.log_call(
            "VerifyKeyValueRecord",
            &req.creds,
            &req.transaction,
            &req.environment,
        );
        Ok(proto::VerifyResponse {
            verified: self.flag,
        })
    }

    async fn verify_key_value_record_time(
        &mut self,
        req: proto::VerifyKeyValueRecordTimeRequest,
    ) -> std::result::Result<proto::VerifyResponse, Status> {
        self.log_call(
            "VerifyKeyValueRecordTime",
            &req.creds,
            &req.transaction,
            &req.environment,
        );
        Ok(proto::VerifyResponse {
            verified: self.flag,
        })
    }

    async fn verify_key_value_record_timestr(
        &mut self,
        req: proto::VerifyKeyValueRecordTimestrRequest,
    ) -> std::result::Result<proto::VerifyResponse, Status> {
        self.log_call(
            "VerifyKeyValueRecordTimestr",
            &req.creds,
            &req.transaction,
            &req.environment,
        );
        Ok(proto::VerifyResponse {
            verified: self.flag,
        })
    }

    async fn ping_record(
        &mut self,
        req: proto::PingRecordRequest,
    ) -> std::result::Result<proto::PingResponse, Status> {
        self.log_call("PingRecord", &req.creds, &req.transaction, &req.environment);
        Ok(proto::PingResponse { alive: self.flag })
    }

    async fn get_server_version(
        &mut self,
        req: proto::GetServerVersionRequest,
    ) -> std::result::Result<proto::GetServerVersionResponse, Status> {
        self.log_call("GetServerVersion", &req.creds, &None, &req.environment);
        Ok(proto::GetServerVersionResponse {
            version: self.version.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_records_session_fields() {
        let mut rpc = MockRpc::new();

        let resp = rpc
            .login(proto::LoginRequest {
                username: "admin".to_string(),
                password: "admin".to_string(),
                environment: "sandbox".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(resp.token.unwrap().token, b"mock-token");

        rpc.add_key_value(proto::AddKeyValueRequest {
            key: "name".to_string(),
            value: None,
            creds: Some(proto::AccessToken {
                token: b"mock-token".to_vec(),
            }),
            transaction: None,
            environment: "sandbox".to_string(),
        })
        .await
        .unwrap();

        let calls = rpc.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].method, "Login");
        assert_eq!(calls[1].method, "AddKeyValue");
        assert_eq!(calls[1].creds.as_deref(), Some(b"mock-token".as_ref()));
        assert_eq!(calls[1].environment, "sandbox");
    }

    #[tokio::test]
    async fn test_log_handle_outlives_mock() {
        let mut rpc = MockRpc::new();
        let log = rpc.log();

        rpc.ping_record(proto::PingRecordRequest {
            record: 1,
            creds: None,
            transaction: None,
            environment: String::new(),
        })
        .await
        .unwrap();
        drop(rpc);

        assert_eq!(log.methods(), vec!["PingRecord"]);
    }
}

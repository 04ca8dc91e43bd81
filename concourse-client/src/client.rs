/// Concourse driver handle and operation dispatch
use std::collections::{BTreeMap, BTreeSet};

use concourse_proto as proto;
use tracing::{debug, trace};

use crate::args::{
    AddArgs, AuditArgs, BrowseArgs, ConnectArgs, DescribeArgs, GetArgs, Keys, Records, RemoveArgs,
    ResolvedConnect, SetArgs, VerifyArgs,
};
use crate::convert;
use crate::error::{ClientError, Result};
use crate::results::{AddResult, BrowseResult, GetResult, RemoveResult};
use crate::rpc::{ConcourseRpc, GrpcRpc};
use crate::timestamp::Timestamp;

/// Handle for one authenticated session with Concourse Server.
///
/// Operations take `&mut self`, so a handle runs one call at a time.
/// Every request carries the session's access token, the current
/// transaction token (if [`stage`](Self::stage) is active) and the
/// environment name.
///
/// Each operation picks exactly one wire method from the shape of its
/// arguments: one key or several, one record or several, no timestamp,
/// a microsecond instant, or a natural language phrase. Arguments that
/// fit no variant fail with [`ClientError::InvalidArgument`] before
/// anything is sent.
///
/// # Example
/// ```no_run
/// # use concourse_client::Concourse;
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let mut db = Concourse::connect(("localhost", 1717)).await?;
/// let created = db.add(("name", "jeff")).await?;
/// # Ok(())
/// # }
/// ```
pub struct Concourse<R: ConcourseRpc = GrpcRpc> {
    rpc: R,
    creds: proto::AccessToken,
    transaction: Option<proto::TransactionToken>,
    environment: String,
    host: String,
    port: u16,
}

impl Concourse<GrpcRpc> {
    /// Connect to Concourse Server and authenticate.
    ///
    /// Accepts anything that converts into [`ConnectArgs`]: nothing but
    /// defaults (`ConnectArgs::new()`), a positional tuple, or a bag
    /// built with keyed setters. Values from a preferences file, when
    /// one is configured, win over both.
    ///
    /// # Example
    /// ```no_run
    /// # use concourse_client::{Concourse, ConnectArgs};
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let db = Concourse::connect(("db.example.com", 1717, "admin", "admin")).await?;
    ///
    /// let staging = Concourse::connect(
    ///     ConnectArgs::new()
    ///         .environment("staging")
    ///         .prefs("~/concourse_client_prefs.toml"),
    /// )
    /// .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn connect(args: impl Into<ConnectArgs>) -> Result<Self> {
        let resolved = args.into().resolve()?;
        let addr = format!("http://{}:{}", resolved.host, resolved.port);
        let rpc = GrpcRpc::connect(addr).await?;
        Self::authenticate(rpc, resolved).await
    }
}

impl<R: ConcourseRpc> Concourse<R> {
    /// Authenticate over an already constructed transport.
    ///
    /// This is how tests drive the dispatch layer against
    /// [`MockRpc`](crate::rpc::MockRpc).
    pub async fn login_with(rpc: R, args: impl Into<ConnectArgs>) -> Result<Self> {
        let resolved = args.into().resolve()?;
        Self::authenticate(rpc, resolved).await
    }

    async fn authenticate(mut rpc: R, resolved: ResolvedConnect) -> Result<Self> {
        let response = rpc
            .login(proto::LoginRequest {
                username: resolved.username.clone(),
                password: resolved.password,
                environment: resolved.environment.clone(),
            })
            .await?;
        let creds = response.token.ok_or_else(|| {
            ClientError::Connect("server did not return an access token".to_string())
        })?;
        debug!(
            "logged in as {} at {}:{}",
            resolved.username, resolved.host, resolved.port
        );
        Ok(Self {
            rpc,
            creds,
            transaction: None,
            environment: resolved.environment,
            host: resolved.host,
            port: resolved.port,
        })
    }

    /// The environment this session operates on. Empty means the server
    /// default.
    pub fn environment(&self) -> &str {
        &self.environment
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Whether a staged transaction is currently open.
    pub fn in_transaction(&self) -> bool {
        self.transaction.is_some()
    }

    /// The underlying transport. Mostly useful for inspecting a mock in
    /// tests.
    pub fn rpc(&self) -> &R {
        &self.rpc
    }

    // ------------------------------------------------------------------
    // Transactions
    // ------------------------------------------------------------------

    /// Start a transaction.
    ///
    /// Until [`commit`](Self::commit) or [`abort`](Self::abort), every
    /// operation on this handle carries the transaction token and is
    /// staged instead of applied immediately. Transactions do not nest:
    /// staging while staged is an error.
    pub async fn stage(&mut self) -> Result<()> {
        if self.transaction.is_some() {
            return Err(ClientError::InvalidArgument(
                "a transaction is already staged; commit or abort it first".to_string(),
            ));
        }
        let response = self
            .rpc
            .stage(proto::StageRequest {
                creds: self.creds(),
                environment: self.env(),
            })
            .await?;
        let token = response.transaction.ok_or_else(|| {
            ClientError::Server("server did not return a transaction token".to_string())
        })?;
        debug!("staged transaction at {}", token.timestamp);
        self.transaction = Some(token);
        Ok(())
    }

    /// Discard the staged transaction.
    ///
    /// Without a staged transaction this is a no-op and nothing is sent
    /// to the server. The handle returns to autocommit before the server
    /// call, so it is usable even if the abort itself fails.
    pub async fn abort(&mut self) -> Result<()> {
        if let Some(token) = self.transaction.take() {
            debug!("aborting staged transaction");
            self.rpc
                .abort(proto::AbortRequest {
                    creds: self.creds(),
                    transaction: Some(token),
                    environment: self.env(),
                })
                .await?;
        }
        Ok(())
    }

    /// Apply the staged transaction atomically.
    ///
    /// Returns whether the server accepted the commit. Without a staged
    /// transaction this is a no-op that returns `false`.
    pub async fn commit(&mut self) -> Result<bool> {
        match self.transaction.take() {
            None => Ok(false),
            Some(token) => {
                debug!("committing staged transaction");
                let response = self
                    .rpc
                    .commit(proto::CommitRequest {
                        creds: self.creds(),
                        transaction: Some(token),
                        environment: self.env(),
                    })
                    .await?;
                Ok(response.committed)
            }
        }
    }

    /// End the session: abort any staged transaction and log out.
    pub async fn exit(mut self) -> Result<()> {
        self.abort().await?;
        self.rpc
            .logout(proto::LogoutRequest {
                creds: Some(self.creds.clone()),
                environment: self.env(),
            })
            .await?;
        debug!("session closed");
        Ok(())
    }

    // ------------------------------------------------------------------
    // Clock
    // ------------------------------------------------------------------

    /// The server's current time in microseconds since the Unix epoch.
    pub async fn time(&mut self) -> Result<i64> {
        let response = self
            .rpc
            .time(proto::TimeRequest {
                creds: self.creds(),
                transaction: self.tx(),
                environment: self.env(),
            })
            .await?;
        Ok(response.micros)
    }

    /// Resolve a natural language phrase (for example `"3 weeks ago"`)
    /// to the instant the server reads it as.
    pub async fn time_phrase(&mut self, phrase: impl Into<String>) -> Result<i64> {
        let response = self
            .rpc
            .time_phrase(proto::TimePhraseRequest {
                phrase: phrase.into(),
                creds: self.creds(),
                transaction: self.tx(),
                environment: self.env(),
            })
            .await?;
        Ok(response.micros)
    }

    // ------------------------------------------------------------------
    // Writes
    // ------------------------------------------------------------------

    /// Append `key` = `value`.
    ///
    /// With no record the server creates one and returns its id; with a
    /// record the result says whether the value was new; with a list of
    /// records it says so per record. Requires a key and a value.
    ///
    /// # Example
    /// ```no_run
    /// # use concourse_client::{AddArgs, Concourse};
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// # let mut db = Concourse::connect(("localhost", 1717)).await?;
    /// let created = db.add(("name", "jeff")).await?;
    /// let applied = db.add(("name", "jeff", 1)).await?;
    /// let per_record = db.add(AddArgs::new().key("vip").value(true).records(vec![1, 2])).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn add(&mut self, args: impl Into<AddArgs>) -> Result<AddResult> {
        let AddArgs { key, value, records } = args.into();
        let key = require(key, "add", "a key")?;
        let value = require(value, "add", "a value")?;
        let value = Some(convert::value_to_proto(&value));
        match records {
            None => {
                trace!("add dispatched to AddKeyValue");
                let response = self
                    .rpc
                    .add_key_value(proto::AddKeyValueRequest {
                        key,
                        value,
                        creds: self.creds(),
                        transaction: self.tx(),
                        environment: self.env(),
                    })
                    .await?;
                Ok(AddResult::Created(response.record))
            }
            Some(Records::Single(record)) => {
                trace!("add dispatched to AddKeyValueRecord");
                let response = self
                    .rpc
                    .add_key_value_record(proto::AddKeyValueRecordRequest {
                        key,
                        value,
                        record,
                        creds: self.creds(),
                        transaction: self.tx(),
                        environment: self.env(),
                    })
                    .await?;
                Ok(AddResult::Applied(response.added))
            }
            Some(Records::Many(records)) => {
                trace!("add dispatched to AddKeyValueRecords");
                let response = self
                    .rpc
                    .add_key_value_records(proto::AddKeyValueRecordsRequest {
                        key,
                        value,
                        records,
                        creds: self.creds(),
                        transaction: self.tx(),
                        environment: self.env(),
                    })
                    .await?;
                Ok(AddResult::PerRecord(convert::bool_results(response.results)))
            }
        }
    }

    /// Remove `key` = `value` from one or more records.
    ///
    /// Requires a key, a value and at least one record; there is no
    /// remove-from-nowhere variant.
    pub async fn remove(&mut self, args: impl Into<RemoveArgs>) -> Result<RemoveResult> {
        let RemoveArgs { key, value, records } = args.into();
        let key = require(key, "remove", "a key")?;
        let value = require(value, "remove", "a value")?;
        let records = require(records, "remove", "a record or records")?;
        let value = Some(convert::value_to_proto(&value));
        match records {
            Records::Single(record) => {
                trace!("remove dispatched to RemoveKeyValueRecord");
                let response = self
                    .rpc
                    .remove_key_value_record(proto::RemoveKeyValueRecordRequest {
                        key,
                        value,
                        record,
                        creds: self.creds(),
                        transaction: self.tx(),
                        environment: self.env(),
                    })
                    .await?;
                Ok(RemoveResult::Applied(response.removed))
            }
            Records::Many(records) => {
                trace!("remove dispatched to RemoveKeyValueRecords");
                let response = self
                    .rpc
                    .remove_key_value_records(proto::RemoveKeyValueRecordsRequest {
                        key,
                        value,
                        records,
                        creds: self.creds(),
                        transaction: self.tx(),
                        environment: self.env(),
                    })
                    .await?;
                Ok(RemoveResult::PerRecord(convert::bool_results(
                    response.results,
                )))
            }
        }
    }

    /// Atomically clear `key` and write `value` in its place.
    ///
    /// With no record the server creates one and its id comes back as
    /// `Some`; targeting existing records answers `None`.
    pub async fn set(&mut self, args: impl Into<SetArgs>) -> Result<Option<i64>> {
        let SetArgs { key, value, records } = args.into();
        let key = require(key, "set", "a key")?;
        let value = require(value, "set", "a value")?;
        let value = Some(convert::value_to_proto(&value));
        match records {
            None => {
                trace!("set dispatched to SetKeyValue");
                let response = self
                    .rpc
                    .set_key_value(proto::SetKeyValueRequest {
                        key,
                        value,
                        creds: self.creds(),
                        transaction: self.tx(),
                        environment: self.env(),
                    })
                    .await?;
                Ok(Some(response.record))
            }
            Some(Records::Single(record)) => {
                trace!("set dispatched to SetKeyValueRecord");
                self.rpc
                    .set_key_value_record(proto::SetKeyValueRecordRequest {
                        key,
                        value,
                        record,
                        creds: self.creds(),
                        transaction: self.tx(),
                        environment: self.env(),
                    })
                    .await?;
                Ok(None)
            }
            Some(Records::Many(records)) => {
                trace!("set dispatched to SetKeyValueRecords");
                self.rpc
                    .set_key_value_records(proto::SetKeyValueRecordsRequest {
                        key,
                        value,
                        records,
                        creds: self.creds(),
                        transaction: self.tx(),
                        environment: self.env(),
                    })
                    .await?;
                Ok(None)
            }
        }
    }

    // ------------------------------------------------------------------
    // Audit
    // ------------------------------------------------------------------

    /// Fetch the revision log for a record, or for one key in a record,
    /// ordered by commit time.
    ///
    /// A start timestamp narrows the log to revisions at or after it and
    /// an end timestamp caps the range. An end without a start, or a
    /// range mixing an instant with a phrase, fits no wire variant and
    /// is rejected locally.
    pub async fn audit(&mut self, args: impl Into<AuditArgs>) -> Result<BTreeMap<i64, String>> {
        let AuditArgs { key, record, start, end } = args.into();
        let record = require(record, "audit", "a record")?;
        let response = match (key, start, end) {
            (None, None, None) => {
                trace!("audit dispatched to AuditRecord");
                self.rpc
                    .audit_record(proto::AuditRecordRequest {
                        record,
                        creds: self.creds(),
                        transaction: self.tx(),
                        environment: self.env(),
                    })
                    .await?
            }
            (None, Some(Timestamp::Micros(start)), None) => {
                trace!("audit dispatched to AuditRecordStart");
                self.rpc
                    .audit_record_start(proto::AuditRecordStartRequest {
                        record,
                        start,
                        creds: self.creds(),
                        transaction: self.tx(),
                        environment: self.env(),
                    })
                    .await?
            }
            (None, Some(Timestamp::Phrase(start)), None) => {
                trace!("audit dispatched to AuditRecordStartstr");
                self.rpc
                    .audit_record_startstr(proto::AuditRecordStartstrRequest {
                        record,
                        start,
                        creds: self.creds(),
                        transaction: self.tx(),
                        environment: self.env(),
                    })
                    .await?
            }
            (None, Some(Timestamp::Micros(start)), Some(Timestamp::Micros(end))) => {
                trace!("audit dispatched to AuditRecordStartEnd");
                self.rpc
                    .audit_record_start_end(proto::AuditRecordStartEndRequest {
                        record,
                        start,
                        end,
                        creds: self.creds(),
                        transaction: self.tx(),
                        environment: self.env(),
                    })
                    .await?
            }
            (None, Some(Timestamp::Phrase(start)), Some(Timestamp::Phrase(end))) => {
                trace!("audit dispatched to AuditRecordStartstrEndstr");
                self.rpc
                    .audit_record_startstr_endstr(proto::AuditRecordStartstrEndstrRequest {
                        record,
                        start,
                        end,
                        creds: self.creds(),
                        transaction: self.tx(),
                        environment: self.env(),
                    })
                    .await?
            }
            (Some(key), None, None) => {
                trace!("audit dispatched to AuditKeyRecord");
                self.rpc
                    .audit_key_record(proto::AuditKeyRecordRequest {
                        key,
                        record,
                        creds: self.creds(),
                        transaction: self.tx(),
                        environment: self.env(),
                    })
                    .await?
            }
            (Some(key), Some(Timestamp::Micros(start)), None) => {
                trace!("audit dispatched to AuditKeyRecordStart");
                self.rpc
                    .audit_key_record_start(proto::AuditKeyRecordStartRequest {
                        key,
                        record,
                        start,
                        creds: self.creds(),
                        transaction: self.tx(),
                        environment: self.env(),
                    })
                    .await?
            }
            (Some(key), Some(Timestamp::Phrase(start)), None) => {
                trace!("audit dispatched to AuditKeyRecordStartstr");
                self.rpc
                    .audit_key_record_startstr(proto::AuditKeyRecordStartstrRequest {
                        key,
                        record,
                        start,
                        creds: self.creds(),
                        transaction: self.tx(),
                        environment: self.env(),
                    })
                    .await?
            }
            (Some(key), Some(Timestamp::Micros(start)), Some(Timestamp::Micros(end))) => {
                trace!("audit dispatched to AuditKeyRecordStartEnd");
                self.rpc
                    .audit_key_record_start_end(proto::AuditKeyRecordStartEndRequest {
                        key,
                        record,
                        start,
                        end,
                        creds: self.creds(),
                        transaction: self.tx(),
                        environment: self.env(),
                    })
                    .await?
            }
            (Some(key), Some(Timestamp::Phrase(start)), Some(Timestamp::Phrase(end))) => {
                trace!("audit dispatched to AuditKeyRecordStartstrEndstr");
                self.rpc
                    .audit_key_record_startstr_endstr(proto::AuditKeyRecordStartstrEndstrRequest {
                        key,
                        record,
                        start,
                        end,
                        creds: self.creds(),
                        transaction: self.tx(),
                        environment: self.env(),
                    })
                    .await?
            }
            (_, None, Some(_)) => {
                return Err(ClientError::InvalidArgument(
                    "audit requires a start timestamp when an end is supplied".to_string(),
                ))
            }
            (_, Some(Timestamp::Micros(_)), Some(Timestamp::Phrase(_)))
            | (_, Some(Timestamp::Phrase(_)), Some(Timestamp::Micros(_))) => {
                return Err(ClientError::InvalidArgument(
                    "audit start and end must both be instants or both be phrases".to_string(),
                ))
            }
        };
        Ok(convert::audit_log(response.log))
    }

    // ------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------

    /// Fetch the index for one or more keys: every stored value and the
    /// records holding it, optionally as of a timestamp.
    pub async fn browse(&mut self, args: impl Into<BrowseArgs>) -> Result<BrowseResult> {
        let BrowseArgs { keys, time } = args.into();
        let keys = require(keys, "browse", "a key or keys")?;
        match (keys, time) {
            (Keys::Single(key), None) => {
                trace!("browse dispatched to BrowseKey");
                let response = self
                    .rpc
                    .browse_key(proto::BrowseKeyRequest {
                        key,
                        creds: self.creds(),
                        transaction: self.tx(),
                        environment: self.env(),
                    })
                    .await?;
                Ok(BrowseResult::Index(convert::value_index(response.values)?))
            }
            (Keys::Single(key), Some(Timestamp::Micros(time))) => {
                trace!("browse dispatched to BrowseKeyTime");
                let response = self
                    .rpc
                    .browse_key_time(proto::BrowseKeyTimeRequest {
                        key,
                        time,
                        creds: self.creds(),
                        transaction: self.tx(),
                        environment: self.env(),
                    })
                    .await?;
                Ok(BrowseResult::Index(convert::value_index(response.values)?))
            }
            (Keys::Single(key), Some(Timestamp::Phrase(time))) => {
                trace!("browse dispatched to BrowseKeyTimestr");
                let response = self
                    .rpc
                    .browse_key_timestr(proto::BrowseKeyTimestrRequest {
                        key,
                        time,
                        creds: self.creds(),
                        transaction: self.tx(),
                        environment: self.env(),
                    })
                    .await?;
                Ok(BrowseResult::Index(convert::value_index(response.values)?))
            }
            (Keys::Many(keys), None) => {
                trace!("browse dispatched to BrowseKeys");
                let response = self
                    .rpc
                    .browse_keys(proto::BrowseKeysRequest {
                        keys,
                        creds: self.creds(),
                        transaction: self.tx(),
                        environment: self.env(),
                    })
                    .await?;
                Ok(BrowseResult::PerKey(convert::keyed_value_index(
                    response.entries,
                )?))
            }
            (Keys::Many(keys), Some(Timestamp::Micros(time))) => {
                trace!("browse dispatched to BrowseKeysTime");
                let response = self
                    .rpc
                    .browse_keys_time(proto::BrowseKeysTimeRequest {
                        keys,
                        time,
                        creds: self.creds(),
                        transaction: self.tx(),
                        environment: self.env(),
                    })
                    .await?;
                Ok(BrowseResult::PerKey(convert::keyed_value_index(
                    response.entries,
                )?))
            }
            (Keys::Many(keys), Some(Timestamp::Phrase(time))) => {
                trace!("browse dispatched to BrowseKeysTimestr");
                let response = self
                    .rpc
                    .browse_keys_timestr(proto::BrowseKeysTimestrRequest {
                        keys,
                        time,
                        creds: self.creds(),
                        transaction: self.tx(),
                        environment: self.env(),
                    })
                    .await?;
                Ok(BrowseResult::PerKey(convert::keyed_value_index(
                    response.entries,
                )?))
            }
        }
    }

    /// Fetch the stored value for each requested key/record pair,
    /// optionally as of a timestamp.
    ///
    /// The result shape follows the request shape: one key and one
    /// record answer a single optional value, lists fan out into maps.
    ///
    /// # Example
    /// ```no_run
    /// # use concourse_client::Concourse;
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// # let mut db = Concourse::connect(("localhost", 1717)).await?;
    /// let one = db.get(("name", 1)).await?;
    /// let many = db.get((vec!["name", "age"], vec![1i64, 2])).await?;
    /// let last_week = db.get(("name", 1, "last week")).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get(&mut self, args: impl Into<GetArgs>) -> Result<GetResult> {
        let GetArgs { keys, records, time } = args.into();
        let keys = require(keys, "get", "a key or keys")?;
        let records = require(records, "get", "a record or records")?;
        match (keys, records, time) {
            (Keys::Single(key), Records::Single(record), None) => {
                trace!("get dispatched to GetKeyRecord");
                let response = self
                    .rpc
                    .get_key_record(proto::GetKeyRecordRequest {
                        key,
                        record,
                        creds: self.creds(),
                        transaction: self.tx(),
                        environment: self.env(),
                    })
                    .await?;
                Ok(GetResult::Value(
                    response.value.map(convert::value_from_proto).transpose()?,
                ))
            }
            (Keys::Single(key), Records::Single(record), Some(Timestamp::Micros(time))) => {
                trace!("get dispatched to GetKeyRecordTime");
                let response = self
                    .rpc
                    .get_key_record_time(proto::GetKeyRecordTimeRequest {
                        key,
                        record,
                        time,
                        creds: self.creds(),
                        transaction: self.tx(),
                        environment: self.env(),
                    })
                    .await?;
                Ok(GetResult::Value(
                    response.value.map(convert::value_from_proto).transpose()?,
                ))
            }
            (Keys::Single(key), Records::Single(record), Some(Timestamp::Phrase(time))) => {
                trace!("get dispatched to GetKeyRecordTimestr");
                let response = self
                    .rpc
                    .get_key_record_timestr(proto::GetKeyRecordTimestrRequest {
                        key,
                        record,
                        time,
                        creds: self.creds(),
                        transaction: self.tx(),
                        environment: self.env(),
                    })
                    .await?;
                Ok(GetResult::Value(
                    response.value.map(convert::value_from_proto).transpose()?,
                ))
            }
            (Keys::Single(key), Records::Many(records), None) => {
                trace!("get dispatched to GetKeyRecords");
                let response = self
                    .rpc
                    .get_key_records(proto::GetKeyRecordsRequest {
                        key,
                        records,
                        creds: self.creds(),
                        transaction: self.tx(),
                        environment: self.env(),
                    })
                    .await?;
                Ok(GetResult::PerRecord(convert::record_values(
                    response.values,
                )?))
            }
            (Keys::Single(key), Records::Many(records), Some(Timestamp::Micros(time))) => {
                trace!("get dispatched to GetKeyRecordsTime");
                let response = self
                    .rpc
                    .get_key_records_time(proto::GetKeyRecordsTimeRequest {
                        key,
                        records,
                        time,
                        creds: self.creds(),
                        transaction: self.tx(),
                        environment: self.env(),
                    })
                    .await?;
                Ok(GetResult::PerRecord(convert::record_values(
                    response.values,
                )?))
            }
            (Keys::Single(key), Records::Many(records), Some(Timestamp::Phrase(time))) => {
                trace!("get dispatched to GetKeyRecordsTimestr");
                let response = self
                    .rpc
                    .get_key_records_timestr(proto::GetKeyRecordsTimestrRequest {
                        key,
                        records,
                        time,
                        creds: self.creds(),
                        transaction: self.tx(),
                        environment: self.env(),
                    })
                    .await?;
                Ok(GetResult::PerRecord(convert::record_values(
                    response.values,
                )?))
            }
            (Keys::Many(keys), Records::Single(record), None) => {
                trace!("get dispatched to GetKeysRecord");
                let response = self
                    .rpc
                    .get_keys_record(proto::GetKeysRecordRequest {
                        keys,
                        record,
                        creds: self.creds(),
                        transaction: self.tx(),
                        environment: self.env(),
                    })
                    .await?;
                Ok(GetResult::PerKey(convert::key_values(response.values)?))
            }
            (Keys::Many(keys), Records::Single(record), Some(Timestamp::Micros(time))) => {
                trace!("get dispatched to GetKeysRecordTime");
                let response = self
                    .rpc
                    .get_keys_record_time(proto::GetKeysRecordTimeRequest {
                        keys,
                        record,
                        time,
                        creds: self.creds(),
                        transaction: self.tx(),
                        environment: self.env(),
                    })
                    .await?;
                Ok(GetResult::PerKey(convert::key_values(response.values)?))
            }
            (Keys::Many(keys), Records::Single(record), Some(Timestamp::Phrase(time))) => {
                trace!("get dispatched to GetKeysRecordTimestr");
                let response = self
                    .rpc
                    .get_keys_record_timestr(proto::GetKeysRecordTimestrRequest {
                        keys,
                        record,
                        time,
                        creds: self.creds(),
                        transaction: self.tx(),
                        environment: self.env(),
                    })
                    .await?;
                Ok(GetResult::PerKey(convert::key_values(response.values)?))
            }
            (Keys::Many(keys), Records::Many(records), None) => {
                trace!("get dispatched to GetKeysRecords");
                let response = self
                    .rpc
                    .get_keys_records(proto::GetKeysRecordsRequest {
                        keys,
                        records,
                        creds: self.creds(),
                        transaction: self.tx(),
                        environment: self.env(),
                    })
                    .await?;
                Ok(GetResult::PerKeyRecord(convert::record_key_values(
                    response.records,
                )?))
            }
            (Keys::Many(keys), Records::Many(records), Some(Timestamp::Micros(time))) => {
                trace!("get dispatched to GetKeysRecordsTime");
                let response = self
                    .rpc
                    .get_keys_records_time(proto::GetKeysRecordsTimeRequest {
                        keys,
                        records,
                        time,
                        creds: self.creds(),
                        transaction: self.tx(),
                        environment: self.env(),
                    })
                    .await?;
                Ok(GetResult::PerKeyRecord(convert::record_key_values(
                    response.records,
                )?))
            }
            (Keys::Many(keys), Records::Many(records), Some(Timestamp::Phrase(time))) => {
                trace!("get dispatched to GetKeysRecordsTimestr");
                let response = self
                    .rpc
                    .get_keys_records_timestr(proto::GetKeysRecordsTimestrRequest {
                        keys,
                        records,
                        time,
                        creds: self.creds(),
                        transaction: self.tx(),
                        environment: self.env(),
                    })
                    .await?;
                Ok(GetResult::PerKeyRecord(convert::record_key_values(
                    response.records,
                )?))
            }
        }
    }

    /// List the keys that hold data in a record, optionally as of a
    /// timestamp.
    pub async fn describe(&mut self, args: impl Into<DescribeArgs>) -> Result<BTreeSet<String>> {
        let DescribeArgs { record, time } = args.into();
        let record = require(record, "describe", "a record")?;
        let response = match time {
            None => {
                trace!("describe dispatched to DescribeRecord");
                self.rpc
                    .describe_record(proto::DescribeRecordRequest {
                        record,
                        creds: self.creds(),
                        transaction: self.tx(),
                        environment: self.env(),
                    })
                    .await?
            }
            Some(Timestamp::Micros(time)) => {
                trace!("describe dispatched to DescribeRecordTime");
                self.rpc
                    .describe_record_time(proto::DescribeRecordTimeRequest {
                        record,
                        time,
                        creds: self.creds(),
                        transaction: self.tx(),
                        environment: self.env(),
                    })
                    .await?
            }
            Some(Timestamp::Phrase(time)) => {
                trace!("describe dispatched to DescribeRecordTimestr");
                self.rpc
                    .describe_record_timestr(proto::DescribeRecordTimestrRequest {
                        record,
                        time,
                        creds: self.creds(),
                        transaction: self.tx(),
                        environment: self.env(),
                    })
                    .await?
            }
        };
        Ok(response.keys.into_iter().collect())
    }

    /// Whether `key` = `value` is stored in a record, optionally as of a
    /// timestamp.
    pub async fn verify(&mut self, args: impl Into<VerifyArgs>) -> Result<bool> {
        let VerifyArgs { key, value, record, time } = args.into();
        let key = require(key, "verify", "a key")?;
        let value = require(value, "verify", "a value")?;
        let record = require(record, "verify", "a record")?;
        let value = Some(convert::value_to_proto(&value));
        let response = match time {
            None => {
                trace!("verify dispatched to VerifyKeyValueRecord");
                self.rpc
                    .verify_key_value_record(proto::VerifyKeyValueRecordRequest {
                        key,
                        value,
                        record,
                        creds: self.creds(),
                        transaction: self.tx(),
                        environment: self.env(),
                    })
                    .await?
            }
            Some(Timestamp::Micros(time)) => {
                trace!("verify dispatched to VerifyKeyValueRecordTime");
                self.rpc
                    .verify_key_value_record_time(proto::VerifyKeyValueRecordTimeRequest {
                        key,
                        value,
                        record,
                        time,
                        creds: self.creds(),
                        transaction: self.tx(),
                        environment: self.env(),
                    })
                    .await?
            }
            Some(Timestamp::Phrase(time)) => {
                trace!("verify dispatched to VerifyKeyValueRecordTimestr");
                self.rpc
                    .verify_key_value_record_timestr(proto::VerifyKeyValueRecordTimestrRequest {
                        key,
                        value,
                        record,
                        time,
                        creds: self.creds(),
                        transaction: self.tx(),
                        environment: self.env(),
                    })
                    .await?
            }
        };
        Ok(response.verified)
    }

    /// Whether a record currently holds any data.
    pub async fn ping(&mut self, record: i64) -> Result<bool> {
        let response = self
            .rpc
            .ping_record(proto::PingRecordRequest {
                record,
                creds: self.creds(),
                transaction: self.tx(),
                environment: self.env(),
            })
            .await?;
        Ok(response.alive)
    }

    /// Release and build metadata of the server.
    pub async fn server_version(&mut self) -> Result<String> {
        let response = self
            .rpc
            .get_server_version(proto::GetServerVersionRequest {
                creds: self.creds(),
                environment: self.env(),
            })
            .await?;
        Ok(response.version)
    }

    fn creds(&self) -> Option<proto::AccessToken> {
        Some(self.creds.clone())
    }

    fn tx(&self) -> Option<proto::TransactionToken> {
        self.transaction.clone()
    }

    fn env(&self) -> String {
        self.environment.clone()
    }
}

fn require<T>(field: Option<T>, op: &str, what: &str) -> Result<T> {
    field.ok_or_else(|| ClientError::InvalidArgument(format!("{} requires {}", op, what)))
}

/// Integration tests for argument-shape dispatch
///
/// Every operation must pick exactly one wire method from the shape of
/// its arguments, and argument combinations that fit no wire method must
/// fail locally without touching the transport.

use anyhow::Result;
use concourse_client::{
    AddArgs, AddResult, AuditArgs, CallLog, ClientError, Concourse, ConnectArgs, GetArgs,
    GetResult, MockRpc, RemoveArgs, RemoveResult, SetArgs, Value,
};
use concourse_proto as proto;

async fn connect_with(mock: MockRpc) -> Result<(Concourse<MockRpc>, CallLog)> {
    let log = mock.log();
    let db = Concourse::login_with(mock, ConnectArgs::new()).await?;
    Ok((db, log))
}

async fn connect_mock() -> Result<(Concourse<MockRpc>, CallLog)> {
    connect_with(MockRpc::new()).await
}

fn string_value(s: &str) -> proto::Value {
    proto::Value {
        value: Some(proto::value::Value::StringValue(s.to_string())),
    }
}

fn integer_value(i: i64) -> proto::Value {
    proto::Value {
        value: Some(proto::value::Value::IntegerValue(i)),
    }
}

#[tokio::test]
async fn test_add_dispatches_by_record_shape() -> Result<()> {
    let (mut db, log) = connect_mock().await?;

    let created = db.add(("name", "jeff")).await?;
    assert_eq!(created, AddResult::Created(1));

    let applied = db.add(("name", "jeff", 1)).await?;
    assert_eq!(applied, AddResult::Applied(true));

    db.add(AddArgs::new().key("vip").value(true).records(vec![1, 2]))
        .await?;

    assert_eq!(
        log.methods(),
        vec![
            "Login",
            "AddKeyValue",
            "AddKeyValueRecord",
            "AddKeyValueRecords"
        ]
    );
    Ok(())
}

#[tokio::test]
async fn test_add_without_record_returns_the_new_id() -> Result<()> {
    let mut mock = MockRpc::new();
    mock.record_id = 42;
    let (mut db, _log) = connect_with(mock).await?;

    let result = db.add(("name", "jeff")).await?;
    assert_eq!(result.created(), Some(42));
    assert_eq!(result.applied(), None);
    Ok(())
}

#[tokio::test]
async fn test_set_returns_a_record_only_on_create() -> Result<()> {
    let (mut db, log) = connect_mock().await?;

    assert_eq!(db.set(("name", "x")).await?, Some(1));
    assert_eq!(db.set(("name", "x", 5)).await?, None);
    assert_eq!(
        db.set(SetArgs::new().key("name").value("x").records(vec![5, 6]))
            .await?,
        None
    );

    assert_eq!(
        log.methods(),
        vec![
            "Login",
            "SetKeyValue",
            "SetKeyValueRecord",
            "SetKeyValueRecords"
        ]
    );
    Ok(())
}

#[tokio::test]
async fn test_remove_dispatches_by_record_shape() -> Result<()> {
    let (mut db, log) = connect_mock().await?;

    let applied = db.remove(("name", "jeff", 1)).await?;
    assert_eq!(applied, RemoveResult::Applied(true));

    db.remove(("name", "jeff", vec![1, 2])).await?;

    assert_eq!(
        log.methods(),
        vec!["Login", "RemoveKeyValueRecord", "RemoveKeyValueRecords"]
    );
    Ok(())
}

#[tokio::test]
async fn test_single_element_list_dispatches_to_plural_method() -> Result<()> {
    let (mut db, log) = connect_mock().await?;

    db.add(AddArgs::new().key("k").value(1).records(vec![9]))
        .await?;
    db.get(("k", vec![9i64])).await?;

    assert_eq!(
        log.methods(),
        vec!["Login", "AddKeyValueRecords", "GetKeyRecords"]
    );
    Ok(())
}

#[tokio::test]
async fn test_missing_arguments_fail_before_any_wire_call() -> Result<()> {
    let (mut db, log) = connect_mock().await?;

    let err = db.add(AddArgs::new().value(1)).await.unwrap_err();
    assert!(matches!(err, ClientError::InvalidArgument(_)));

    let err = db.add(AddArgs::new().key("name")).await.unwrap_err();
    assert!(matches!(err, ClientError::InvalidArgument(_)));

    // remove has no create-a-record variant, so records are mandatory
    let err = db
        .remove(RemoveArgs::new().key("name").value(1))
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::InvalidArgument(_)));

    let err = db.get(GetArgs::new().key("name")).await.unwrap_err();
    assert!(matches!(err, ClientError::InvalidArgument(_)));

    let err = db.audit(AuditArgs::new().key("name")).await.unwrap_err();
    assert!(matches!(err, ClientError::InvalidArgument(_)));

    assert_eq!(log.methods(), vec!["Login"]);
    Ok(())
}

#[tokio::test]
async fn test_audit_dispatches_across_range_shapes() -> Result<()> {
    let (mut db, log) = connect_mock().await?;

    db.audit(1).await?;
    db.audit(AuditArgs::new().record(1).start(100)).await?;
    db.audit(AuditArgs::new().record(1).start("last week")).await?;
    db.audit(AuditArgs::new().record(1).start(100).end(200)).await?;
    db.audit(
        AuditArgs::new()
            .record(1)
            .start("last week")
            .end("yesterday"),
    )
    .await?;
    db.audit(("name", 1)).await?;
    db.audit(("name", 1, 100)).await?;
    db.audit(("name", 1, "last week")).await?;
    db.audit(AuditArgs::new().key("name").record(1).start(100).end(200))
        .await?;
    db.audit(
        AuditArgs::new()
            .key("name")
            .record(1)
            .start("last week")
            .end("yesterday"),
    )
    .await?;

    assert_eq!(
        log.methods(),
        vec![
            "Login",
            "AuditRecord",
            "AuditRecordStart",
            "AuditRecordStartstr",
            "AuditRecordStartEnd",
            "AuditRecordStartstrEndstr",
            "AuditKeyRecord",
            "AuditKeyRecordStart",
            "AuditKeyRecordStartstr",
            "AuditKeyRecordStartEnd",
            "AuditKeyRecordStartstrEndstr"
        ]
    );
    Ok(())
}

#[tokio::test]
async fn test_audit_rejects_ranges_that_fit_no_wire_method() -> Result<()> {
    let (mut db, log) = connect_mock().await?;

    // end without start
    let err = db
        .audit(AuditArgs::new().record(1).end(200))
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::InvalidArgument(_)));

    // instant start with phrase end
    let err = db
        .audit(AuditArgs::new().record(1).start(100).end("now"))
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::InvalidArgument(_)));

    // phrase start with instant end
    let err = db
        .audit(AuditArgs::new().record(1).start("last week").end(200))
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::InvalidArgument(_)));

    assert_eq!(log.methods(), vec!["Login"]);
    Ok(())
}

#[tokio::test]
async fn test_audit_log_is_ordered_by_version() -> Result<()> {
    let mut mock = MockRpc::new();
    mock.revision_log.insert(30, "ADD name AS jeff".to_string());
    mock.revision_log.insert(10, "ADD name AS jeffery".to_string());
    mock.revision_log
        .insert(20, "REMOVE name AS jeffery".to_string());
    let (mut db, _log) = connect_with(mock).await?;

    let audit = db.audit(1).await?;
    let versions: Vec<i64> = audit.keys().copied().collect();
    assert_eq!(versions, vec![10, 20, 30]);
    Ok(())
}

#[tokio::test]
async fn test_browse_dispatches_by_key_shape_and_timestamp_kind() -> Result<()> {
    let (mut db, log) = connect_mock().await?;

    db.browse("name").await?;
    db.browse(("name", 123)).await?;
    db.browse(("name", "yesterday")).await?;
    db.browse(vec!["name", "age"]).await?;
    db.browse((vec!["name", "age"], 123)).await?;
    db.browse((vec!["name", "age"], "yesterday")).await?;

    assert_eq!(
        log.methods(),
        vec![
            "Login",
            "BrowseKey",
            "BrowseKeyTime",
            "BrowseKeyTimestr",
            "BrowseKeys",
            "BrowseKeysTime",
            "BrowseKeysTimestr"
        ]
    );
    Ok(())
}

#[tokio::test]
async fn test_browse_collates_the_index_by_value() -> Result<()> {
    let mut mock = MockRpc::new();
    mock.index = vec![
        proto::ValueRecords {
            value: Some(integer_value(30)),
            records: vec![2, 1],
        },
        proto::ValueRecords {
            value: Some(integer_value(25)),
            records: vec![3],
        },
    ];
    let (mut db, _log) = connect_with(mock).await?;

    let result = db.browse("age").await?;
    let index = result.index().ok_or_else(|| anyhow::anyhow!("wrong shape"))?;

    let values: Vec<&Value> = index.keys().collect();
    assert_eq!(values, vec![&Value::integer(25), &Value::integer(30)]);

    let records: Vec<i64> = index[&Value::integer(30)].iter().copied().collect();
    assert_eq!(records, vec![1, 2]);
    Ok(())
}

#[tokio::test]
async fn test_get_dispatches_across_all_shapes() -> Result<()> {
    let (mut db, log) = connect_mock().await?;

    db.get(("name", 1)).await?;
    db.get(GetArgs::new().key("name").record(1).time(123)).await?;
    db.get(("name", 1, "last week")).await?;
    db.get(("name", vec![1i64, 2])).await?;
    db.get(("name", vec![1i64, 2], 123)).await?;
    db.get(("name", vec![1i64, 2], "last week")).await?;
    db.get((vec!["name", "age"], 1)).await?;
    db.get((vec!["name", "age"], 1, 123)).await?;
    db.get((vec!["name", "age"], 1, "last week")).await?;
    db.get((vec!["name", "age"], vec![1i64, 2])).await?;
    db.get((vec!["name", "age"], vec![1i64, 2], 123)).await?;
    db.get((vec!["name", "age"], vec![1i64, 2], "last week"))
        .await?;

    assert_eq!(
        log.methods(),
        vec![
            "Login",
            "GetKeyRecord",
            "GetKeyRecordTime",
            "GetKeyRecordTimestr",
            "GetKeyRecords",
            "GetKeyRecordsTime",
            "GetKeyRecordsTimestr",
            "GetKeysRecord",
            "GetKeysRecordTime",
            "GetKeysRecordTimestr",
            "GetKeysRecords",
            "GetKeysRecordsTime",
            "GetKeysRecordsTimestr"
        ]
    );
    Ok(())
}

#[tokio::test]
async fn test_get_result_shape_matches_request_shape() -> Result<()> {
    let mut mock = MockRpc::new();
    mock.value = Some(string_value("jeff"));
    mock.values_by_record.insert(1, integer_value(17));
    mock.values_by_key
        .insert("name".to_string(), string_value("jeff"));
    let (mut db, _log) = connect_with(mock).await?;

    let one = db.get(("name", 1)).await?;
    assert_eq!(one.value(), Some(&Value::string("jeff")));

    let per_record = db.get(("age", vec![1i64])).await?;
    match per_record {
        GetResult::PerRecord(map) => assert_eq!(map.get(&1), Some(&Value::integer(17))),
        other => panic!("unexpected shape: {:?}", other),
    }

    let per_key = db.get((vec!["name", "age"], 1)).await?;
    match per_key {
        GetResult::PerKey(map) => assert_eq!(map.get("name"), Some(&Value::string("jeff"))),
        other => panic!("unexpected shape: {:?}", other),
    }
    Ok(())
}

#[tokio::test]
async fn test_get_missing_value_is_none() -> Result<()> {
    let (mut db, _log) = connect_mock().await?;

    let result = db.get(("name", 1)).await?;
    assert_eq!(result.value(), None);
    Ok(())
}

#[tokio::test]
async fn test_describe_and_verify_dispatch_by_timestamp_kind() -> Result<()> {
    let (mut db, log) = connect_mock().await?;

    db.describe(1).await?;
    db.describe((1, 123)).await?;
    db.describe((1, "yesterday")).await?;
    db.verify(("name", "jeff", 1)).await?;
    db.verify(("name", "jeff", 1, 123)).await?;
    db.verify(("name", "jeff", 1, "yesterday")).await?;
    db.ping(1).await?;

    assert_eq!(
        log.methods(),
        vec![
            "Login",
            "DescribeRecord",
            "DescribeRecordTime",
            "DescribeRecordTimestr",
            "VerifyKeyValueRecord",
            "VerifyKeyValueRecordTime",
            "VerifyKeyValueRecordTimestr",
            "PingRecord"
        ]
    );
    Ok(())
}

#[tokio::test]
async fn test_describe_returns_sorted_keys() -> Result<()> {
    let mut mock = MockRpc::new();
    mock.keys = vec!["b".to_string(), "a".to_string(), "c".to_string()];
    let (mut db, _log) = connect_with(mock).await?;

    let keys = db.describe(1).await?;
    let keys: Vec<String> = keys.into_iter().collect();
    assert_eq!(keys, vec!["a", "b", "c"]);
    Ok(())
}

#[tokio::test]
async fn test_clock_and_version() -> Result<()> {
    let mut mock = MockRpc::new();
    mock.micros = 1_234_567;
    mock.version = "0.12.3".to_string();
    let (mut db, log) = connect_with(mock).await?;

    assert_eq!(db.time().await?, 1_234_567);
    assert_eq!(db.time_phrase("three seconds ago").await?, 1_234_567);
    assert_eq!(db.server_version().await?, "0.12.3");

    assert_eq!(
        log.methods(),
        vec!["Login", "Time", "TimePhrase", "GetServerVersion"]
    );
    Ok(())
}

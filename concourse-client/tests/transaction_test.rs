/// Integration tests for the session and transaction lifecycle
///
/// A handle holds at most one staged transaction. While it is open every
/// request carries the transaction token; commit and abort clear it, and
/// exit tears the whole session down.

use anyhow::Result;
use concourse_client::{CallLog, ClientError, Concourse, ConnectArgs, GetArgs, MockRpc};

async fn connect_with(mock: MockRpc) -> Result<(Concourse<MockRpc>, CallLog)> {
    let log = mock.log();
    let db = Concourse::login_with(mock, ConnectArgs::new()).await?;
    Ok((db, log))
}

async fn connect_mock() -> Result<(Concourse<MockRpc>, CallLog)> {
    connect_with(MockRpc::new()).await
}

#[tokio::test]
async fn test_operations_carry_token_and_environment() -> Result<()> {
    let mock = MockRpc::new();
    let log = mock.log();
    let mut db =
        Concourse::login_with(mock, ConnectArgs::new().environment("production")).await?;
    assert_eq!(db.environment(), "production");

    db.time().await?;

    let calls = log.calls();
    assert_eq!(calls[0].method, "Login");
    assert_eq!(calls[0].creds, None);
    assert_eq!(calls[1].method, "Time");
    assert_eq!(calls[1].creds.as_deref(), Some(&b"mock-token"[..]));
    assert_eq!(calls[1].environment, "production");
    assert!(calls[1].transaction.is_none());
    Ok(())
}

#[tokio::test]
async fn test_login_resolves_positional_connect_tuple() -> Result<()> {
    let db = Concourse::login_with(
        MockRpc::new(),
        ("remote.example.com", 1818, "bob", "secret", "staging"),
    )
    .await?;

    assert_eq!(db.host(), "remote.example.com");
    assert_eq!(db.port(), 1818);
    assert_eq!(db.environment(), "staging");
    Ok(())
}

#[tokio::test]
async fn test_stage_attaches_token_until_abort() -> Result<()> {
    let (mut db, log) = connect_mock().await?;
    assert!(!db.in_transaction());

    db.stage().await?;
    assert!(db.in_transaction());

    db.add(("name", "jeff")).await?;
    db.abort().await?;
    assert!(!db.in_transaction());
    db.add(("name", "jeff")).await?;

    assert_eq!(
        log.methods(),
        vec!["Login", "Stage", "AddKeyValue", "Abort", "AddKeyValue"]
    );

    let calls = log.calls();
    let staged = calls[2].transaction.clone().expect("add was staged");
    assert_eq!(staged.timestamp, 1);
    assert!(calls[3].transaction.is_some());
    assert!(calls[4].transaction.is_none());
    Ok(())
}

#[tokio::test]
async fn test_stage_while_staged_is_rejected_locally() -> Result<()> {
    let (mut db, log) = connect_mock().await?;

    db.stage().await?;
    let err = db.stage().await.unwrap_err();
    assert!(matches!(err, ClientError::InvalidArgument(_)));

    // the original transaction is untouched and no second Stage was sent
    assert!(db.in_transaction());
    assert_eq!(log.methods(), vec!["Login", "Stage"]);
    Ok(())
}

#[tokio::test]
async fn test_abort_without_transaction_is_a_local_noop() -> Result<()> {
    let (mut db, log) = connect_mock().await?;

    db.abort().await?;

    assert_eq!(log.methods(), vec!["Login"]);
    Ok(())
}

#[tokio::test]
async fn test_commit_applies_and_clears() -> Result<()> {
    let (mut db, log) = connect_mock().await?;

    db.stage().await?;
    assert!(db.commit().await?);
    assert!(!db.in_transaction());

    // nothing staged, so this answers false without a wire call
    assert!(!db.commit().await?);

    assert_eq!(log.methods(), vec!["Login", "Stage", "Commit"]);
    Ok(())
}

#[tokio::test]
async fn test_commit_reports_server_rejection() -> Result<()> {
    let mut mock = MockRpc::new();
    mock.committed = false;
    let (mut db, _log) = connect_with(mock).await?;

    db.stage().await?;
    assert!(!db.commit().await?);
    assert!(!db.in_transaction());
    Ok(())
}

#[tokio::test]
async fn test_exit_aborts_staged_transaction_then_logs_out() -> Result<()> {
    let (mut db, log) = connect_mock().await?;

    db.stage().await?;
    db.exit().await?;

    assert_eq!(log.methods(), vec!["Login", "Stage", "Abort", "Logout"]);
    Ok(())
}

#[tokio::test]
async fn test_exit_without_transaction_only_logs_out() -> Result<()> {
    let (db, log) = connect_mock().await?;

    db.exit().await?;

    assert_eq!(log.methods(), vec!["Login", "Logout"]);
    Ok(())
}

#[tokio::test]
async fn test_rejected_arguments_do_not_disturb_the_transaction() -> Result<()> {
    let (mut db, log) = connect_mock().await?;

    db.stage().await?;
    let err = db.get(GetArgs::new()).await.unwrap_err();
    assert!(matches!(err, ClientError::InvalidArgument(_)));

    assert!(db.in_transaction());
    assert_eq!(log.methods(), vec!["Login", "Stage"]);
    Ok(())
}

#[tokio::test]
async fn test_server_version_is_session_scoped() -> Result<()> {
    let (mut db, log) = connect_mock().await?;

    db.stage().await?;
    db.server_version().await?;

    // the version request has no transaction scope on the wire
    let calls = log.calls();
    assert_eq!(calls[2].method, "GetServerVersion");
    assert!(calls[2].transaction.is_none());
    Ok(())
}

/// Concourse Rust Driver
///
/// This crate provides a Rust client for connecting to Concourse Server.

pub mod args;
pub mod client;
pub mod convert;
pub mod error;
pub mod prefs;
pub mod results;
pub mod rpc;
pub mod timestamp;
pub mod value;

// Re-export key types
pub use args::{
    AddArgs, AuditArgs, BrowseArgs, ConnectArgs, DescribeArgs, GetArgs, Keys, Records, RemoveArgs,
    SetArgs, VerifyArgs, DEFAULT_HOST, DEFAULT_PASSWORD, DEFAULT_PORT, DEFAULT_USERNAME,
};
pub use client::Concourse;
pub use error::{ClientError, Result};
pub use prefs::Preferences;
pub use results::{AddResult, BrowseResult, GetResult, RemoveResult};
pub use rpc::{CallLog, ConcourseRpc, GrpcRpc, Invocation, MockRpc};
pub use timestamp::Timestamp;
pub use value::Value;

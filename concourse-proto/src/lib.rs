//! Protocol definitions for the Concourse gRPC API.
//!
//! The canonical contract is `proto/concourse.proto`. The generated-style
//! messages and client in `src/concourse.rs` are maintained by hand and kept
//! in lockstep with the proto file so that building this crate does not
//! require `protoc`.
//!
//! Every remote method is a unary rpc. Requests carry the payload fields
//! first, then the ambient session fields (`creds`, `transaction`,
//! `environment`) that the driver attaches to every call.

mod concourse;

pub use concourse::*;

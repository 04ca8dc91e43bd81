/// Error types for the Concourse client
use thiserror::Error;
use tonic::Status;

#[derive(Error, Debug)]
pub enum ClientError {
    /// The server could not be reached or the session could not be
    /// established.
    #[error("Connection error: {0}")]
    Connect(String),

    /// The supplied arguments do not resolve to any method variant. Raised
    /// locally, before anything is sent to the server.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Transaction failed: {0}")]
    TransactionFailed(String),

    #[error("Server unavailable: {0}")]
    Unavailable(String),

    #[error("Server error: {0}")]
    Server(String),
}

pub type Result<T> = std::result::Result<T, ClientError>;

/// Convert gRPC Status to ClientError
impl From<Status> for ClientError {
    fn from(status: Status) -> Self {
        let msg = status.message().to_string();

        match status.code() {
            tonic::Code::InvalidArgument => ClientError::InvalidArgument(msg),
            tonic::Code::PermissionDenied => ClientError::PermissionDenied(msg),
            tonic::Code::Unauthenticated => ClientError::PermissionDenied(msg),
            tonic::Code::Aborted => ClientError::TransactionFailed(msg),
            tonic::Code::FailedPrecondition => ClientError::TransactionFailed(msg),
            tonic::Code::Unavailable => ClientError::Unavailable(msg),
            _ => ClientError::Server(msg),
        }
    }
}

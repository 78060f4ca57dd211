//! Failure reported by every storage port.

use tracing::error;

use super::define_port_error;
use crate::domain::{Error, TraceId};

define_port_error! {
    /// Errors raised by storage adapters.
    ///
    /// "Not found" is never an error: lookups return `None` and deletes
    /// return `false`.
    pub enum StorageError {
        /// The backing store could not be reached.
        Connection { message: String } => "storage connection failed: {message}",
        /// A query or in-memory operation failed.
        Query { message: String } => "storage query failed: {message}",
        /// A uniqueness constraint rejected the write.
        Conflict { message: String } => "storage conflict: {message}",
        /// A stored row could not be converted into a domain record.
        CorruptRow { message: String } => "stored row is invalid: {message}",
    }
}

impl From<StorageError> for Error {
    fn from(err: StorageError) -> Self {
        // Causes are logged here and redacted from the response body.
        let trace_id = TraceId::current().map(|id| id.to_string());
        error!(error = %err, trace_id = ?trace_id, "storage operation failed");
        Error::internal(err.to_string())
    }
}

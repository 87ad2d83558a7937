use crate::{
    error::{DecodeError, LowerError},
    native::NativeRequest,
    value::Value,
};
use std::collections::BTreeMap;
use thiserror::Error as ThisError;

///
/// AttributeMap
///
/// Raw row shape exchanged with the persistence session: attribute name
/// to value, ordered for deterministic iteration.
///

pub type AttributeMap = BTreeMap<String, Value>;

///
/// Session
///
/// Contract surface of the external persistence store.
///
/// The core only builds and lowers requests; execution, I/O, retries,
/// and cancellation are entirely the session's responsibility, and its
/// errors propagate through `FetchError::Execute` unchanged.
///

pub trait Session {
    type Error: std::error::Error + 'static;

    /// Execute a fetch and return matching rows in request order.
    fn fetch(&self, request: &NativeRequest) -> Result<Vec<AttributeMap>, Self::Error>;

    /// Execute a count without materializing rows.
    fn count(&self, request: &NativeRequest) -> Result<u64, Self::Error>;
}

///
/// FetchError
///
/// Failure surface of request execution: lowering failures, pass-through
/// session errors, and row-decoding mismatches.
///

#[derive(Debug, ThisError)]
pub enum FetchError<E: std::error::Error> {
    #[error("{0}")]
    Lower(#[from] LowerError),

    #[error("{0}")]
    Execute(E),

    #[error("{0}")]
    Decode(#[from] DecodeError),
}

//! The three observable states of a backend query.
//!
//! Every read the dashboard makes resolves to one of these; errors are
//! folded into `Failed` at this boundary so pages only ever branch on the
//! state, never on a transport error type.

use crate::error::ClientError;

#[derive(Debug, Clone, PartialEq)]
pub enum QueryState<T> {
    Pending,
    Ready(T),
    Failed(String),
}

impl<T> QueryState<T> {
    pub fn from_result(result: Result<T, ClientError>) -> Self {
        match result {
            Ok(value) => QueryState::Ready(value),
            Err(err)  => QueryState::Failed(err.to_string()),
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, QueryState::Pending)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, QueryState::Ready(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, QueryState::Failed(_))
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            QueryState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            QueryState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> QueryState<U> {
        match self {
            QueryState::Pending         => QueryState::Pending,
            QueryState::Ready(value)    => QueryState::Ready(f(value)),
            QueryState::Failed(message) => QueryState::Failed(message),
        }
    }
}

impl<T> QueryState<Vec<T>> {
    /// The payload when ready, an empty slice otherwise — "no data" is a
    /// valid, renderable input for every pipeline stage.
    pub fn records(&self) -> &[T] {
        match self {
            QueryState::Ready(items) => items,
            _ => &[],
        }
    }
}

//! Error types for qmap.
//!
//! This module provides the structured failure taxonomy using `thiserror`:
//!
//! - [`RegistryBuildError`] - Construction-time errors during registry assembly
//! - [`DispatchError`] - Runtime errors during query dispatch
//!
//! Exactly one kind is reported per failed request; the dispatch layer never
//! discards a failure and never falls back to dispatching a different query.

use thiserror::Error;

/// A boxed error type for handler-originated failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors raised while assembling the registry at startup.
///
/// Both variants are fatal to process initialization: a registry that failed
/// to build must not start accepting requests.
#[derive(Error, Debug)]
pub enum RegistryBuildError {
    /// Two handlers were registered under the same query identifier.
    #[error("duplicate query identifier: {0}")]
    DuplicateIdentifier(String),

    /// A handler was registered under the empty identifier.
    #[error("empty query identifier")]
    EmptyIdentifier,
}

/// Errors raised while dispatching a single request.
///
/// The two variants are deliberately distinct so the request consumer can
/// apply different remediation: an unroutable request is rejected, while a
/// failed handler may be requeued or dead-lettered depending on its cause.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// No handler is bound to the requested identifier.
    ///
    /// Empty and malformed identifiers take this path too; identifiers are
    /// exact-match only.
    #[error("no handler registered for query: {0}")]
    UnknownQuery(String),

    /// The resolved handler itself failed.
    ///
    /// The handler's original error is preserved unmodified as the source.
    #[error("handler for query {query} failed")]
    HandlerFailed {
        /// The identifier the failing handler was resolved under.
        query: String,
        /// The handler's original error.
        #[source]
        source: BoxError,
    },
}

impl DispatchError {
    /// The query identifier the failed request named.
    pub fn query(&self) -> &str {
        match self {
            DispatchError::UnknownQuery(query) => query,
            DispatchError::HandlerFailed { query, .. } => query,
        }
    }

    /// Whether this is a routing failure rather than an execution failure.
    pub fn is_unknown_query(&self) -> bool {
        matches!(self, DispatchError::UnknownQuery(_))
    }
}

//! # qmap - Query Dispatch Registry
//!
//! qmap binds stable query identifiers to analytics job handlers and routes
//! each inbound request to exactly the handler bound to its identifier.
//!
//! The registry is assembled once at startup and immutable afterwards, so
//! runtime dispatch is a lock-free read shared by any number of tasks. A
//! request fails with exactly one of two kinds: [`UnknownQuery`] when the
//! identifier is unbound (empty and malformed identifiers included; matching
//! is exact, never fuzzy) or [`HandlerFailed`] when the resolved handler
//! itself failed, with its original error preserved.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use qmap::{Dispatcher, Registry};
//!
//! let mut builder = Registry::builder();
//! builder.register("stats.user.entity", |params| async move {
//!     // long-running distributed aggregation ...
//!     Ok(entity_stats(params).await?)
//! })?;
//! builder.register("similarity.artist", SimilarityJob::new(config))?;
//! let dispatcher = Dispatcher::new(builder.build());
//!
//! // in the request consumer loop:
//! let result = dispatcher.invoke(&request.query, request.params).await;
//! ```
//!
//! [`UnknownQuery`]: DispatchError::UnknownQuery
//! [`HandlerFailed`]: DispatchError::HandlerFailed

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub mod dispatcher;
pub mod provider;
pub mod registry;
pub mod testing;

pub use dispatcher::Dispatcher;
pub use provider::{HandlerEntry, HandlerProvider};
pub use registry::{Registry, RegistryBuilder};

pub use qmap_core::{
    BoxError, Dispatch, DispatchError, DynDispatch, DynJobHandler, JobHandler, JobOutput, Payload,
    RegistryBuildError,
};

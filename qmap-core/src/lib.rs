//! # qmap-core
//!
//! Contract traits for the qmap query dispatch registry.
//!
//! qmap is the seam between an open-ended set of independently authored
//! analytics jobs and the single request-consumer loop that invokes them: a
//! stable string identifier (`stats.user.entity`,
//! `cf.recommendations.recording.train_model`, ...) is bound to one job
//! handler at process startup, and every inbound request is routed through
//! that binding by exact match.
//!
//! This crate has minimal dependencies and is the one job-implementing
//! subsystems depend on: it defines WHAT a handler is, not how the registry
//! stores or resolves it.
//!
//! # Pieces
//!
//! - [`JobHandler`] — the contract every job satisfies: one async call taking
//!   an owned parameter payload, producing a result or a failure. Closures
//!   qualify via a blanket impl.
//! - [`DynJobHandler`] — the object-safe twin, used wherever handlers of
//!   different concrete types live in one collection.
//! - [`Dispatch`] / [`DynDispatch`] — the invocation seam the request
//!   consumer drives; implemented by the registry-backed dispatcher in the
//!   `qmap` crate.
//! - [`RegistryBuildError`] / [`DispatchError`] — the failure taxonomy. A
//!   duplicate or empty identifier aborts startup assembly; at runtime a
//!   request fails with exactly one of `UnknownQuery` (routing) or
//!   `HandlerFailed` (execution, original cause preserved).

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod dispatch;
mod error;
mod handler;
mod payload;

pub use dispatch::{Dispatch, DynDispatch};
pub use error::{BoxError, DispatchError, RegistryBuildError};
pub use handler::{DynJobHandler, JobHandler, JobOutput};
pub use payload::Payload;

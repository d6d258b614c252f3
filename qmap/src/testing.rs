//! Testing utilities for qmap.
//!
//! This module provides reusable test doubles for exercising registries and
//! dispatchers without real job implementations:
//!
//! - [`RecordingHandler`]: records every payload it receives and returns a
//!   fixed result
//! - [`CountingHandler`]: counts invocations, ignoring payloads
//! - [`FailingHandler`]: always fails with a [`JobFailure`]

use qmap_core::{BoxError, JobHandler, JobOutput, Payload};
use std::marker::PhantomData;
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};
use thiserror::Error;

/// The error type [`FailingHandler`] fails with.
///
/// Tests downcast a dispatch error's source to this type to verify the
/// original handler failure is preserved unmodified.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct JobFailure(pub String);

/// A handler that records all payloads it receives.
///
/// Clone it before registering; clones share the same recording.
///
/// # Example
///
/// ```rust,ignore
/// let recorder = RecordingHandler::new(json!({"ok": true}));
/// builder.register("stats.user.entity", recorder.clone())?;
///
/// dispatcher.invoke("stats.user.entity", params).await?;
/// assert_eq!(recorder.count(), 1);
/// ```
pub struct RecordingHandler<P: Clone, R: Clone> {
    payloads: Arc<Mutex<Vec<P>>>,
    result: R,
}

impl<P: Clone, R: Clone> Clone for RecordingHandler<P, R> {
    fn clone(&self) -> Self {
        Self {
            payloads: Arc::clone(&self.payloads),
            result: self.result.clone(),
        }
    }
}

impl<P: Clone, R: Clone> RecordingHandler<P, R> {
    /// Create a recording handler that returns `result` on every call.
    pub fn new(result: R) -> Self {
        Self {
            payloads: Arc::new(Mutex::new(Vec::new())),
            result,
        }
    }

    /// Get a clone of the recorded payloads, in call order.
    pub fn payloads(&self) -> Vec<P> {
        self.payloads.lock().unwrap().clone()
    }

    /// Get the number of recorded calls.
    pub fn count(&self) -> usize {
        self.payloads.lock().unwrap().len()
    }

    /// Clear all recorded payloads.
    pub fn clear(&self) {
        self.payloads.lock().unwrap().clear();
    }
}

impl<P, R> JobHandler<P> for RecordingHandler<P, R>
where
    P: Payload + Clone,
    R: JobOutput + Clone,
{
    type Output = R;

    async fn run(&self, params: P) -> Result<R, BoxError> {
        self.payloads.lock().unwrap().push(params);
        Ok(self.result.clone())
    }
}

/// A handler that counts invocations and succeeds with `()`.
pub struct CountingHandler {
    count: Arc<AtomicUsize>,
}

impl Clone for CountingHandler {
    fn clone(&self) -> Self {
        Self {
            count: Arc::clone(&self.count),
        }
    }
}

impl Default for CountingHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl CountingHandler {
    /// Create a counting handler with a zeroed counter.
    pub fn new() -> Self {
        Self {
            count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// The number of invocations so far.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}

impl<P: Payload> JobHandler<P> for CountingHandler {
    type Output = ();

    async fn run(&self, _params: P) -> Result<(), BoxError> {
        self.count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// A handler that always fails with a [`JobFailure`].
///
/// `R` fixes the result type it would have produced, matching the registry
/// it is registered into.
pub struct FailingHandler<R> {
    message: String,
    _result: PhantomData<fn() -> R>,
}

impl<R> FailingHandler<R> {
    /// Create a failing handler with the given failure message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            _result: PhantomData,
        }
    }
}

impl<P: Payload, R: JobOutput> JobHandler<P> for FailingHandler<R> {
    type Output = R;

    async fn run(&self, _params: P) -> Result<R, BoxError> {
        Err(Box::new(JobFailure(self.message.clone())))
    }
}

//! Dispatcher: the lookup/invocation boundary.
//!
//! Every request the consumer decodes passes through [`Dispatcher::invoke`],
//! which makes it the single chokepoint for observing query volume and
//! failure rate; with the `tracing` feature enabled, dispatch outcomes are
//! recorded here.
//!
//! The dispatcher holds no mutable state of its own, only a shared reference
//! to the frozen registry, so concurrent invocations never interfere. It
//! imposes no timeout: handler duration is unbounded (distributed batch jobs
//! can run for hours), and cancellation policy belongs to the request
//! consumer and to each handler's own execution environment.

use qmap_core::{Dispatch, DispatchError, DynJobHandler, JobOutput, Payload};
use std::sync::Arc;

use crate::registry::Registry;

/// Resolves query identifiers against the registry and invokes the bound
/// handler, normalizing failures into [`DispatchError`].
///
/// Cheap to clone; clones share the same registry.
pub struct Dispatcher<P: Payload, R: JobOutput> {
    registry: Arc<Registry<P, R>>,
}

impl<P: Payload, R: JobOutput> Clone for Dispatcher<P, R> {
    fn clone(&self) -> Self {
        Self {
            registry: Arc::clone(&self.registry),
        }
    }
}

impl<P: Payload, R: JobOutput> Dispatcher<P, R> {
    /// Create a dispatcher over a freshly built registry.
    pub fn new(registry: Registry<P, R>) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    /// Create a dispatcher over an already shared registry.
    pub fn from_shared(registry: Arc<Registry<P, R>>) -> Self {
        Self { registry }
    }

    /// The registry this dispatcher resolves against.
    pub fn registry(&self) -> &Registry<P, R> {
        &self.registry
    }

    /// Resolve the handler bound to `query`.
    ///
    /// Fails with [`DispatchError::UnknownQuery`] when no binding exists;
    /// empty and malformed identifiers take the same path. No fuzzy matching
    /// is performed: silently dispatching a long-running distributed job
    /// under a near-miss identifier is an unacceptable correctness risk.
    pub fn resolve(&self, query: &str) -> Result<Arc<dyn DynJobHandler<P, R>>, DispatchError> {
        match self.registry.get(query) {
            Some(handler) => Ok(Arc::clone(handler)),
            None => {
                #[cfg(feature = "tracing")]
                tracing::warn!(query, "no handler registered for query");
                Err(DispatchError::UnknownQuery(query.to_owned()))
            }
        }
    }

    /// Resolve `query` and run the bound handler with `params`.
    ///
    /// A handler failure propagates as [`DispatchError::HandlerFailed`] with
    /// the original error as its source; the dispatcher adds no retry of its
    /// own, since remediation differs per job and belongs to the request
    /// consumer.
    pub async fn invoke(&self, query: &str, params: P) -> Result<R, DispatchError> {
        let handler = self.resolve(query)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(query, "dispatching query");

        match handler.run_dyn(params).await {
            Ok(result) => Ok(result),
            Err(source) => {
                #[cfg(feature = "tracing")]
                tracing::error!(query, error = %source, "query handler failed");
                Err(DispatchError::HandlerFailed {
                    query: query.to_owned(),
                    source,
                })
            }
        }
    }
}

impl<P, R> Dispatch<P, R> for Dispatcher<P, R>
where
    P: Payload,
    R: JobOutput,
{
    async fn invoke(&self, query: &str, params: P) -> Result<R, DispatchError> {
        Dispatcher::invoke(self, query, params).await
    }
}

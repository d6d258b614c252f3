//! Registration interface for job-implementing subsystems.
//!
//! Each subsystem (stats, recommendations, similarity, dump import, ...)
//! owns its handlers and exposes them as a [`HandlerProvider`]; startup
//! assembly folds every provider into one [`RegistryBuilder`] before the
//! process begins accepting requests.
//!
//! [`RegistryBuilder`]: crate::registry::RegistryBuilder

use qmap_core::{DynJobHandler, JobHandler, JobOutput, Payload};
use std::sync::Arc;

/// One `(identifier, handler)` pair contributed by a subsystem.
///
/// Identifiers are namespaced with a dot-separated subsystem prefix
/// (`stats.*`, `cf.*`, `similarity.*`, `import.*`, `year_in_music.*`,
/// `releases.*`); uniqueness is enforced at registration, not here.
pub struct HandlerEntry<P: Payload, R: JobOutput> {
    query: String,
    handler: Arc<dyn DynJobHandler<P, R>>,
}

impl<P: Payload, R: JobOutput> HandlerEntry<P, R> {
    /// Create an entry binding `handler` to `query`.
    pub fn new<H>(query: impl Into<String>, handler: H) -> Self
    where
        H: JobHandler<P, Output = R>,
    {
        Self {
            query: query.into(),
            handler: Arc::new(handler),
        }
    }

    /// Create an entry from an already type-erased handler.
    pub fn from_dyn(query: impl Into<String>, handler: Arc<dyn DynJobHandler<P, R>>) -> Self {
        Self {
            query: query.into(),
            handler,
        }
    }

    /// The query identifier this entry binds.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Split the entry into its identifier and handler.
    pub fn into_parts(self) -> (String, Arc<dyn DynJobHandler<P, R>>) {
        (self.query, self.handler)
    }
}

/// A provider of handler bindings for startup assembly.
///
/// Implementors enumerate their bindings; they never register directly, so
/// duplicate detection stays in one place.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a valid HandlerProvider",
    label = "missing `HandlerProvider` implementation",
    note = "Implement `HandlerProvider<{P}, {R}>` to contribute handler bindings at startup."
)]
pub trait HandlerProvider<P: Payload, R: JobOutput>: Send + Sync {
    /// Enumerate the bindings this subsystem contributes.
    fn handlers(&self) -> Vec<HandlerEntry<P, R>>;
}

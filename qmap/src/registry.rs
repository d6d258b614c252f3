//! Registry module for query-to-handler bindings.
//!
//! This module provides a builder pattern for construction-time registration
//! and a frozen registry for immutable, lock-free lookup.
//!
//! Registration and lookup are deliberately separated: every binding is
//! validated while the process is still single-threaded (duplicate and empty
//! identifiers abort startup), and the built [`Registry`] is then a strictly
//! read-only table that any number of concurrent invocations may consult
//! without synchronization.

use qmap_core::{DynJobHandler, JobHandler, JobOutput, Payload, RegistryBuildError};
use std::collections::HashMap;
use std::sync::Arc;

use crate::provider::HandlerProvider;

/// The immutable query-identifier-to-handler mapping.
///
/// `P` is the parameter payload type and `R` the result type, fixed
/// registry-wide; handlers of any concrete type plug in behind
/// [`DynJobHandler`]. There is no mutation path on this type: all
/// registration happens through [`RegistryBuilder`] before the first lookup.
pub struct Registry<P: Payload, R: JobOutput> {
    handlers: HashMap<String, Arc<dyn DynJobHandler<P, R>>>,
}

impl<P: Payload, R: JobOutput> Registry<P, R> {
    /// Create a builder for startup assembly.
    pub fn builder() -> RegistryBuilder<P, R> {
        RegistryBuilder::new()
    }

    /// Look up the handler bound to `query`.
    ///
    /// Pure read; exact match only. Repeated calls for the same identifier
    /// return the same handler reference.
    pub fn get(&self, query: &str) -> Option<&Arc<dyn DynJobHandler<P, R>>> {
        self.handlers.get(query)
    }

    /// Whether a handler is bound to `query`.
    pub fn contains(&self, query: &str) -> bool {
        self.handlers.contains_key(query)
    }

    /// Number of registered bindings.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Whether no bindings are registered.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Iterate over the registered query identifiers, in no particular order.
    ///
    /// Useful for the request consumer to report its supported query set at
    /// startup.
    pub fn queries(&self) -> impl Iterator<Item = &str> {
        self.handlers.keys().map(String::as_str)
    }
}

/// Builder for [`Registry`], used only during startup assembly.
///
/// Each job-implementing subsystem contributes its bindings here, either
/// directly via [`register`](Self::register) or in bulk via
/// [`install`](Self::install). A failed registration leaves the builder
/// exactly as it was before the call.
pub struct RegistryBuilder<P: Payload, R: JobOutput> {
    handlers: HashMap<String, Arc<dyn DynJobHandler<P, R>>>,
}

impl<P: Payload, R: JobOutput> Default for RegistryBuilder<P, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Payload, R: JobOutput> RegistryBuilder<P, R> {
    /// Create a new empty registry builder.
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Bind `handler` to `query`.
    ///
    /// Fails with [`RegistryBuildError::DuplicateIdentifier`] when `query` is
    /// already bound and [`RegistryBuildError::EmptyIdentifier`] when it is
    /// empty; either must abort startup rather than be ignored.
    pub fn register<H>(
        &mut self,
        query: impl Into<String>,
        handler: H,
    ) -> Result<(), RegistryBuildError>
    where
        H: JobHandler<P, Output = R>,
    {
        self.register_dyn(query.into(), Arc::new(handler))
    }

    /// Bind an already type-erased handler to `query`.
    pub fn register_dyn(
        &mut self,
        query: String,
        handler: Arc<dyn DynJobHandler<P, R>>,
    ) -> Result<(), RegistryBuildError> {
        if query.is_empty() {
            return Err(RegistryBuildError::EmptyIdentifier);
        }
        if self.handlers.contains_key(&query) {
            return Err(RegistryBuildError::DuplicateIdentifier(query));
        }
        self.handlers.insert(query, handler);
        Ok(())
    }

    /// Fold all bindings supplied by `provider` into the builder.
    ///
    /// Stops at the first failing binding; bindings registered before the
    /// failure remain.
    pub fn install<Pr>(&mut self, provider: &Pr) -> Result<(), RegistryBuildError>
    where
        Pr: HandlerProvider<P, R> + ?Sized,
    {
        for entry in provider.handlers() {
            let (query, handler) = entry.into_parts();
            self.register_dyn(query, handler)?;
        }
        Ok(())
    }

    /// Freeze the builder into an immutable [`Registry`].
    pub fn build(self) -> Registry<P, R> {
        Registry {
            handlers: self.handlers,
        }
    }
}

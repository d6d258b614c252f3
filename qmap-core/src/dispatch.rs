//! Dispatch seam consumed by the request consumer.
//!
//! The consumer loop decodes an identifier and a payload from each inbound
//! request and drives exactly this interface; it never touches the registry
//! directly. Keeping the seam a trait lets tests substitute a double for the
//! registry-backed dispatcher.

use crate::error::DispatchError;
use crate::handler::JobOutput;
use crate::payload::Payload;
use std::{future::Future, pin::Pin};

/// The invocation boundary: resolve an identifier and run the bound handler.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot dispatch queries with payload `{P}`",
    label = "missing `Dispatch` implementation",
    note = "Implement `Dispatch<{P}, {R}>` to route query requests to handlers."
)]
pub trait Dispatch<P: Payload, R: JobOutput>: Send + Sync {
    /// Resolves `query` and invokes the bound handler with `params`.
    ///
    /// Fails with [`DispatchError::UnknownQuery`] when no handler is bound,
    /// or [`DispatchError::HandlerFailed`] when the handler itself fails.
    fn invoke(
        &self,
        query: &str,
        params: P,
    ) -> impl Future<Output = Result<R, DispatchError>> + Send;
}

/// Object-safe version of [`Dispatch`] for dynamic dispatch.
pub trait DynDispatch<P: Payload, R: JobOutput>: Send + Sync {
    /// Resolves `query` and invokes the bound handler with `params`
    /// (dynamic dispatch version).
    fn invoke<'a>(
        &'a self,
        query: &'a str,
        params: P,
    ) -> Pin<Box<dyn Future<Output = Result<R, DispatchError>> + Send + 'a>>
    where
        P: 'a;
}

// Blanket implementation: any Dispatch is a DynDispatch automatically.
impl<T, P, R> DynDispatch<P, R> for T
where
    T: Dispatch<P, R>,
    P: Payload,
    R: JobOutput,
{
    fn invoke<'a>(
        &'a self,
        query: &'a str,
        params: P,
    ) -> Pin<Box<dyn Future<Output = Result<R, DispatchError>> + Send + 'a>>
    where
        P: 'a,
    {
        Box::pin(Dispatch::invoke(self, query, params))
    }
}

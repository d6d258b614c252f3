//! # Job Handler Contract
//!
//! The contract every analytics job satisfies to be invocable through the
//! registry. A handler is a single atomic call from the dispatcher's point of
//! view: it receives a fully owned parameter payload, runs for as long as it
//! needs (these are distributed batch jobs; hours are normal), and produces
//! either a result value or a failure.
//!
//! # Design
//!
//! - **Opaque payloads**: the registry imposes no parameter schema; each
//!   handler interprets its own payload.
//! - **No registry state**: handlers must not require anything from the
//!   registry beyond their invocation; each call acquires and releases its
//!   own resources.
//! - **Static vs dynamic dispatch**: [`JobHandler`] uses native `async fn`
//!   for zero-cost static dispatch. The registry stores handlers of different
//!   concrete types behind [`DynJobHandler`], the object-safe twin, which
//!   every `JobHandler` implements automatically.
//!
//! # Usage patterns
//!
//! 1. **Direct closure**: `|params| async move { ... }`
//! 2. **Struct implementation**: `impl JobHandler<MyParams> for TrainModel`

use crate::error::BoxError;
use crate::payload::Payload;
use std::{future::Future, pin::Pin};

/// A marker trait for the result value a handler produces.
pub trait JobOutput: Send + Sync + 'static {}
impl<T: Send + Sync + 'static> JobOutput for T {}

/// The callable unit bound to one query identifier.
///
/// Handlers are authored and owned by their originating subsystem; the
/// registry only indexes them. From the dispatcher's perspective an
/// invocation is one unbounded, opaque call.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot handle a payload of type `{P}`",
    label = "missing `JobHandler<{P}>` implementation",
    note = "Job handlers must implement the `run` method for the payload type `{P}`."
)]
pub trait JobHandler<P: Payload>: Send + Sync + 'static {
    /// The result value this handler produces on success.
    type Output: JobOutput;

    /// Executes the job with the given parameter payload.
    fn run(&self, params: P) -> impl Future<Output = Result<Self::Output, BoxError>> + Send;
}

// Blanket impl for closures
impl<F, P, Out, Fut> JobHandler<P> for F
where
    P: Payload,
    Out: JobOutput,
    F: Fn(P) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Out, BoxError>> + Send,
{
    type Output = Out;

    fn run(&self, params: P) -> impl Future<Output = Result<Self::Output, BoxError>> + Send {
        (self)(params)
    }
}

/// Object-safe version of [`JobHandler`].
///
/// The registry stores `Arc<dyn DynJobHandler<P, R>>` so handlers with
/// different concrete types share one table; `R` fixes the result type
/// registry-wide.
pub trait DynJobHandler<P: Payload, R: JobOutput>: Send + Sync + 'static {
    /// Executes the job (dynamic dispatch version).
    fn run_dyn<'a>(
        &'a self,
        params: P,
    ) -> Pin<Box<dyn Future<Output = Result<R, BoxError>> + Send + 'a>>
    where
        P: 'a;
}

// Blanket implementation: any JobHandler is a DynJobHandler automatically.
impl<T, P, R> DynJobHandler<P, R> for T
where
    T: JobHandler<P, Output = R>,
    P: Payload,
    R: JobOutput,
{
    fn run_dyn<'a>(
        &'a self,
        params: P,
    ) -> Pin<Box<dyn Future<Output = Result<R, BoxError>> + Send + 'a>>
    where
        P: 'a,
    {
        Box::pin(self.run(params))
    }
}

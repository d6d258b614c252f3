//! Payload marker for query parameters.

/// A marker trait for query parameter payloads.
///
/// Payloads are fully opaque to the registry and dispatcher: they are moved
/// into the resolved handler untouched, and each handler interprets its own.
/// Any `Send + Sync + 'static` value qualifies; a deployment decoding JSON
/// requests would typically use `serde_json::Value` here.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a valid Payload",
    label = "must be `Send + Sync + 'static`",
    note = "Query payloads cross task boundaries and must be thread-safe and static."
)]
pub trait Payload: Send + Sync + 'static {}
impl<T: Send + Sync + 'static> Payload for T {}

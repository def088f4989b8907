//! Fire-and-forget user notification sink.

/// Receives exactly one settlement signal per drive operation.
///
/// Implementations must not block: the engine calls these from async
/// context and expects them to return immediately (queueing or logging,
/// never awaiting).
pub trait Notifier: Send + Sync + std::fmt::Debug + 'static {
    /// A long-running operation started.
    fn loading_started(&self, message: &str);

    /// The operation settled successfully.
    fn success(&self, message: &str);

    /// The operation settled with an error.
    fn error(&self, message: &str);
}

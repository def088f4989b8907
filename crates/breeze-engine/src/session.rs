//! Session collaborator signals.

/// The two booleans the auth layer exposes to the engine.
///
/// The composition root only acts on `established && !resolving`; it
/// never inspects credentials or tokens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSignals {
    /// A session exists.
    pub established: bool,
    /// The auth layer is still resolving (initial token refresh, etc.).
    pub resolving: bool,
}

impl SessionSignals {
    /// A fully established, settled session.
    pub fn established() -> Self {
        Self {
            established: true,
            resolving: false,
        }
    }

    /// Whether the initial load may run.
    pub fn ready(&self) -> bool {
        self.established && !self.resolving
    }
}

//! Error types for the orchestration facade.

use thiserror::Error;

use crate::stack::ModalKey;

/// Errors surfaced by [`Orchestrator`](crate::facade::Orchestrator) operations.
///
/// Everything here indicates a programming error at the call site, not a
/// runtime condition: the stack is left untouched and there is nothing to
/// retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrchestratorError {
    /// A push or handle lookup referenced a key absent from the registry.
    #[error("unknown modal key `{key}`")]
    UnknownKey {
        /// The key that was not registered.
        key: ModalKey,
    },
}

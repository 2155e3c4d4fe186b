//! Error type shared by the catalog and the flow controller.

use crate::cards::PackId;
use crate::flow::FlowState;

/// Result alias used throughout the crate.
pub type FlowResult<T> = Result<T, FlowError>;

/// Errors raised by catalog loading and flow transitions.
#[derive(Debug, thiserror::Error)]
pub enum FlowError {
    /// An operation was invoked outside its precondition state.
    ///
    /// The session is left unchanged. Callers should ignore these, e.g. a
    /// late animation-completion event after a reset.
    #[error("invalid transition: {operation} is not allowed from {from}")]
    InvalidTransition {
        operation: &'static str,
        from: FlowState,
    },

    /// The drawn card count does not match the configured draw size.
    #[error("reveal incomplete: {drawn} of {expected} cards drawn")]
    IncompleteDraw { drawn: usize, expected: usize },

    #[error("draw size must be at least 1")]
    ZeroDrawSize,

    #[error("card pool has {pool} cards but each pack draws {draw_size}")]
    PoolTooSmall { pool: usize, draw_size: usize },

    #[error("unknown pack: {0}")]
    UnknownPack(PackId),

    #[error("card pool is empty")]
    EmptyCardPool,

    #[error("duplicate catalog id: {0}")]
    DuplicateId(String),

    #[error("failed to parse catalog: {0}")]
    CatalogParse(String),

    #[error("catalog I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl FlowError {
    /// Whether the caller can simply ignore the error and carry on.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            FlowError::InvalidTransition { .. }
                | FlowError::IncompleteDraw { .. }
                | FlowError::UnknownPack(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_transition_message() {
        let err = FlowError::InvalidTransition {
            operation: "complete_opening",
            from: FlowState::Selection,
        };
        assert_eq!(
            err.to_string(),
            "invalid transition: complete_opening is not allowed from selection"
        );
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_catalog_errors_not_recoverable() {
        assert!(!FlowError::EmptyCardPool.is_recoverable());
        assert!(!FlowError::DuplicateId("1".into()).is_recoverable());
        assert!(FlowError::UnknownPack(PackId::new("nope")).is_recoverable());
        assert!(!FlowError::ZeroDrawSize.is_recoverable());
        assert!(!FlowError::PoolTooSmall { pool: 2, draw_size: 5 }.is_recoverable());
    }

    #[test]
    fn test_construction_error_messages() {
        let err = FlowError::PoolTooSmall { pool: 2, draw_size: 5 };
        assert_eq!(err.to_string(), "card pool has 2 cards but each pack draws 5");

        let err = FlowError::IncompleteDraw { drawn: 3, expected: 5 };
        assert_eq!(err.to_string(), "reveal incomplete: 3 of 5 cards drawn");
    }
}

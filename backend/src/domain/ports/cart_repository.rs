//! Driven port for cart persistence.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{Cart, CartId};

/// Errors surfaced by cart repository adapters.
///
/// Adapters map their driver failures into these variants so the service
/// layer never sees driver types. Connectivity problems are not retried at
/// this level; retry policy, if any, belongs to the store client.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartRepositoryError {
    /// Store connection could not be established or was lost.
    #[error("cart repository connection failed: {message}")]
    Connection {
        /// Driver detail describing the connection failure.
        message: String,
    },
    /// Query or mutation failed during execution.
    #[error("cart repository query failed: {message}")]
    Query {
        /// Driver detail describing the failed operation.
        message: String,
    },
}

impl CartRepositoryError {
    /// Helper for connection oriented failures.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Helper for query failures.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Persistence port for cart aggregates.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CartRepository: Send + Sync {
    /// Insert a new cart record and return the cart as saved, including the
    /// store-assigned id. The mapping is lossless and order-preserving in
    /// both directions.
    async fn create(&self, cart: &Cart) -> Result<Cart, CartRepositoryError>;

    /// Look up a single cart by id; no match is `Ok(None)`, not an error.
    async fn find_by_id(&self, id: &CartId) -> Result<Option<Cart>, CartRepositoryError>;
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn connection_error_formats_detail() {
        let err = CartRepositoryError::connection("no reachable servers");
        assert_eq!(
            err.to_string(),
            "cart repository connection failed: no reachable servers"
        );
    }

    #[rstest]
    fn query_error_formats_detail() {
        let err = CartRepositoryError::query("duplicate key");
        assert_eq!(err.to_string(), "cart repository query failed: duplicate key");
    }
}

//! Driving port for cart creation.

use async_trait::async_trait;

use crate::domain::{CartId, Error};

/// Unvalidated item payload carried by a creation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDraft {
    /// Product identifier as submitted by the caller.
    pub product_id: String,
    /// Requested quantity as submitted by the caller.
    pub quantity: i64,
}

/// Request to create a cart for a user.
///
/// Fields are unvalidated on purpose; the service validates them into domain
/// types before any persistence call. `items` may be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCartRequest {
    /// Identifier of the user the cart belongs to.
    pub user_id: String,
    /// Items the cart starts with, in submission order.
    pub items: Vec<ItemDraft>,
}

/// Result of a successful cart creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCartResponse {
    /// Store-assigned identifier of the new cart.
    pub cart_id: CartId,
}

/// Port for recording new carts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CartCommand: Send + Sync {
    /// Validate the request, persist a new cart, and return its id.
    async fn create_cart(&self, request: CreateCartRequest) -> Result<CreateCartResponse, Error>;
}

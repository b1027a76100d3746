//! Driving port for cart lookups.

use async_trait::async_trait;

use crate::domain::{Cart, Error};

/// Request to fetch a cart by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetCartRequest {
    /// Raw cart identifier from the request path; validated by the service.
    pub cart_id: String,
}

/// Port for reading carts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CartQuery: Send + Sync {
    /// Fetch a cart by id.
    ///
    /// Absence is a valid outcome, returned as `Ok(None)`; the inbound
    /// adapter decides how to render it. Only a blank id is an error.
    async fn get_cart(&self, request: GetCartRequest) -> Result<Option<Cart>, Error>;
}

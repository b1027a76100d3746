//! Cart domain service.
//!
//! Implements the driving ports over a cart repository: validation happens
//! eagerly here, before any persistence call, and repository failures are
//! folded into the domain error taxonomy. There is exactly one store call
//! per operation; no retries, caching, or batching.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{
    CartCommand, CartQuery, CartRepository, CartRepositoryError, CreateCartRequest,
    CreateCartResponse, GetCartRequest,
};
use crate::domain::{Cart, CartId, CartValidationError, Error, Item, UserId};

fn invalid_request(error: CartValidationError) -> Error {
    Error::invalid_request(error.to_string())
}

fn map_repository_error(error: CartRepositoryError) -> Error {
    match error {
        CartRepositoryError::Connection { message } => {
            Error::internal(format!("cart repository unavailable: {message}"))
        }
        CartRepositoryError::Query { message } => {
            Error::internal(format!("cart repository error: {message}"))
        }
    }
}

/// Cart service implementing the command and query driving ports.
#[derive(Clone)]
pub struct CartService<R> {
    cart_repo: Arc<R>,
}

impl<R> CartService<R> {
    /// Create a new service over the given cart repository.
    pub fn new(cart_repo: Arc<R>) -> Self {
        Self { cart_repo }
    }
}

#[async_trait]
impl<R> CartCommand for CartService<R>
where
    R: CartRepository,
{
    async fn create_cart(&self, request: CreateCartRequest) -> Result<CreateCartResponse, Error> {
        let CreateCartRequest { user_id, items } = request;

        let user_id = UserId::new(user_id).map_err(invalid_request)?;
        let items = items
            .into_iter()
            .map(|draft| Item::new(draft.product_id, draft.quantity))
            .collect::<Result<Vec<_>, _>>()
            .map_err(invalid_request)?;

        let cart = Cart::new(user_id, items);
        let saved = self
            .cart_repo
            .create(&cart)
            .await
            .map_err(map_repository_error)?;

        // A saved cart without an id violates the persistence contract.
        let cart_id = saved
            .id()
            .cloned()
            .ok_or_else(|| Error::internal("saved cart record carries no identifier"))?;

        Ok(CreateCartResponse { cart_id })
    }
}

#[async_trait]
impl<R> CartQuery for CartService<R>
where
    R: CartRepository,
{
    async fn get_cart(&self, request: GetCartRequest) -> Result<Option<Cart>, Error> {
        let cart_id = CartId::new(request.cart_id).map_err(invalid_request)?;

        self.cart_repo
            .find_by_id(&cart_id)
            .await
            .map_err(map_repository_error)
    }
}

#[cfg(test)]
#[path = "cart_service_tests.rs"]
mod tests;

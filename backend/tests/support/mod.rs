//! Shared fixtures for the endpoint tests.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;

use carts_backend::domain::ports::{CartRepository, CartRepositoryError};
use carts_backend::domain::{Cart, CartId};

/// Map-backed repository assigning sequential ids, mirroring the store's
/// insert-then-read-back contract without any I/O.
#[derive(Default)]
pub struct InMemoryCartRepository {
    sequence: AtomicU64,
    store: Mutex<HashMap<String, Cart>>,
}

#[async_trait]
impl CartRepository for InMemoryCartRepository {
    async fn create(&self, cart: &Cart) -> Result<Cart, CartRepositoryError> {
        let id = format!("cart-{:04}", self.sequence.fetch_add(1, Ordering::Relaxed));
        let saved = Cart::restored(
            CartId::new(id.clone()).expect("generated id is non-blank"),
            cart.user_id().clone(),
            cart.items().to_vec(),
        );
        self.store
            .lock()
            .expect("store poisoned")
            .insert(id, saved.clone());
        Ok(saved)
    }

    async fn find_by_id(&self, id: &CartId) -> Result<Option<Cart>, CartRepositoryError> {
        Ok(self
            .store
            .lock()
            .expect("store poisoned")
            .get(id.as_str())
            .cloned())
    }
}

/// Repository whose every call reports a lost store connection.
pub struct FailingCartRepository;

#[async_trait]
impl CartRepository for FailingCartRepository {
    async fn create(&self, _cart: &Cart) -> Result<Cart, CartRepositoryError> {
        Err(CartRepositoryError::connection("no reachable servers"))
    }

    async fn find_by_id(&self, _id: &CartId) -> Result<Option<Cart>, CartRepositoryError> {
        Err(CartRepositoryError::connection("no reachable servers"))
    }
}

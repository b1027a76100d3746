//! Shared HTTP adapter state.
//!
//! Handlers receive this state via `actix_web::web::Data`, so they depend
//! only on the driving ports and stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{CartCommand, CartQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Port for recording new carts.
    pub carts: Arc<dyn CartCommand>,
    /// Port for reading carts.
    pub carts_query: Arc<dyn CartQuery>,
}

impl HttpState {
    /// Construct state from the driving-port implementations.
    pub fn new(carts: Arc<dyn CartCommand>, carts_query: Arc<dyn CartQuery>) -> Self {
        Self { carts, carts_query }
    }
}

//! Transport-agnostic domain core.
//!
//! Holds the cart aggregate and its value objects, the domain error
//! taxonomy, the cart service, and the ports that define the hexagon's
//! edges. Nothing in this tree depends on actix or the store driver.

pub mod cart;
pub mod cart_service;
pub mod error;
pub mod ports;

pub use cart::{Cart, CartId, CartValidationError, Item, UserId};
pub use cart_service::CartService;
pub use error::{Error, ErrorCode, ErrorValidationError};

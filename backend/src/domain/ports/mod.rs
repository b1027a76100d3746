//! Domain ports defining the edges of the hexagon.
//!
//! Driving ports ([`CartCommand`], [`CartQuery`]) describe what inbound
//! adapters may ask of the domain; the driven port ([`CartRepository`])
//! describes what the domain expects from persistence adapters. Each driven
//! port exposes strongly typed errors so adapters map their failures into
//! predictable variants.

mod cart_command;
mod cart_query;
mod cart_repository;

#[cfg(test)]
pub use cart_command::MockCartCommand;
pub use cart_command::{CartCommand, CreateCartRequest, CreateCartResponse, ItemDraft};
#[cfg(test)]
pub use cart_query::MockCartQuery;
pub use cart_query::{CartQuery, GetCartRequest};
#[cfg(test)]
pub use cart_repository::MockCartRepository;
pub use cart_repository::{CartRepository, CartRepositoryError};

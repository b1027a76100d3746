//! MongoDB persistence adapters.
//!
//! Concrete implementations of the domain repository ports backed by the
//! async MongoDB driver. Record structs are internal implementation details
//! and never cross into the domain layer; all driver errors are mapped into
//! the port error types.

mod mongo_cart_repository;

pub use mongo_cart_repository::MongoCartRepository;

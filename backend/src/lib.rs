//! Carts backend: a minimal shopping-cart service over MongoDB.
//!
//! Two endpoints, one aggregate: `POST /carts` creates a cart for a user,
//! `GET /carts/{cart_id}` fetches it back. The interesting part is the
//! validation and error-mapping contract between the HTTP adapter, the cart
//! service, and the persistence adapter; everything else is the ambient
//! plumbing a small service carries.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;

pub use doc::ApiDoc;
pub use middleware::Trace;

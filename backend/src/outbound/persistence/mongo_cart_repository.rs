//! MongoDB-backed `CartRepository` implementation.
//!
//! A thin adapter: it only translates between storage records and domain
//! carts and issues single-document driver calls. Record decoding re-runs
//! the domain constructors, so a corrupted document surfaces as a repository
//! error instead of an invalid aggregate.

use async_trait::async_trait;
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;
use mongodb::{Client, Collection};
use serde::{Deserialize, Serialize};

use crate::domain::ports::{CartRepository, CartRepositoryError};
use crate::domain::{Cart, CartId, CartValidationError, Item, UserId};

/// Collection holding cart documents.
pub(crate) const CARTS_COLLECTION: &str = "carts";

/// Stored item shape: `{ productId, quantity }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ItemRecord {
    product_id: String,
    quantity: i64,
}

/// Stored cart shape: `{ _id, userId, items }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CartRecord {
    #[serde(rename = "_id")]
    id: String,
    user_id: String,
    items: Vec<ItemRecord>,
}

fn cart_to_record(cart: &Cart, id: String) -> CartRecord {
    CartRecord {
        id,
        user_id: cart.user_id().as_str().to_owned(),
        items: cart
            .items()
            .iter()
            .map(|item| ItemRecord {
                product_id: item.product_id().to_owned(),
                quantity: i64::from(item.quantity()),
            })
            .collect(),
    }
}

fn invalid_record(error: CartValidationError) -> CartRepositoryError {
    CartRepositoryError::query(format!("stored cart record is invalid: {error}"))
}

fn record_to_cart(record: CartRecord) -> Result<Cart, CartRepositoryError> {
    let CartRecord { id, user_id, items } = record;

    let id = CartId::new(id).map_err(invalid_record)?;
    let user_id = UserId::new(user_id).map_err(invalid_record)?;
    let items = items
        .into_iter()
        .map(|item| Item::new(item.product_id, item.quantity))
        .collect::<Result<Vec<_>, _>>()
        .map_err(invalid_record)?;

    Ok(Cart::restored(id, user_id, items))
}

/// Classify driver failures into the port error variants.
fn map_driver_error(error: mongodb::error::Error) -> CartRepositoryError {
    use mongodb::error::ErrorKind;

    match error.kind.as_ref() {
        ErrorKind::ServerSelection { .. }
        | ErrorKind::Io(_)
        | ErrorKind::ConnectionPoolCleared { .. }
        | ErrorKind::Authentication { .. } => CartRepositoryError::connection(error.to_string()),
        _ => CartRepositoryError::query(error.to_string()),
    }
}

/// MongoDB implementation of the cart repository port.
#[derive(Clone)]
pub struct MongoCartRepository {
    carts: Collection<CartRecord>,
}

impl MongoCartRepository {
    /// Create a repository over the `carts` collection of the given database.
    pub fn new(client: &Client, database: &str) -> Self {
        Self {
            carts: client.database(database).collection(CARTS_COLLECTION),
        }
    }
}

#[async_trait]
impl CartRepository for MongoCartRepository {
    async fn create(&self, cart: &Cart) -> Result<Cart, CartRepositoryError> {
        // The driver assigns document ids client-side; `_id` stays a plain
        // string so the record round-trips without bson-specific types.
        let record = cart_to_record(cart, ObjectId::new().to_hex());

        self.carts
            .insert_one(&record)
            .await
            .map_err(map_driver_error)?;

        record_to_cart(record)
    }

    async fn find_by_id(&self, id: &CartId) -> Result<Option<Cart>, CartRepositoryError> {
        let record = self
            .carts
            .find_one(doc! { "_id": id.as_str() })
            .await
            .map_err(map_driver_error)?;

        record.map(record_to_cart).transpose()
    }
}

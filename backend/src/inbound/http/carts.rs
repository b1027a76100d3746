//! Cart HTTP handlers.
//!
//! ```text
//! POST /carts
//! GET  /carts/{cart_id}
//! ```

use actix_web::{get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::{CreateCartRequest, GetCartRequest, ItemDraft};
use crate::domain::{Cart, Error, Item};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::state::HttpState;

/// Item payload shared by request and response bodies.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItemBody {
    /// Product identifier.
    pub product_id: String,
    /// Number of units; must be positive.
    pub quantity: i64,
}

/// Request payload for creating a cart.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCartRequestBody {
    /// Identifier of the cart's owner; must not be blank.
    pub user_id: String,
    /// Items the cart starts with; omitted means empty.
    #[serde(default)]
    pub items: Vec<ItemBody>,
}

/// Response payload for a created cart.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCartResponseBody {
    /// Store-assigned identifier of the new cart.
    pub cart_id: String,
}

/// Full cart representation returned by lookups.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CartBody {
    /// Store-assigned cart identifier.
    pub id: String,
    /// Identifier of the cart's owner.
    pub user_id: String,
    /// Items in insertion order; may be empty.
    pub items: Vec<ItemBody>,
}

impl From<ItemBody> for ItemDraft {
    fn from(value: ItemBody) -> Self {
        Self {
            product_id: value.product_id,
            quantity: value.quantity,
        }
    }
}

impl From<&Item> for ItemBody {
    fn from(value: &Item) -> Self {
        Self {
            product_id: value.product_id().to_owned(),
            quantity: i64::from(value.quantity()),
        }
    }
}

fn cart_to_body(cart: &Cart) -> ApiResult<CartBody> {
    let id = cart
        .id()
        .map(ToString::to_string)
        .ok_or_else(|| Error::internal("fetched cart carries no identifier"))?;

    Ok(CartBody {
        id,
        user_id: cart.user_id().to_string(),
        items: cart.items().iter().map(ItemBody::from).collect(),
    })
}

/// Create a cart for a user.
#[utoipa::path(
    post,
    path = "/carts",
    request_body = CreateCartRequestBody,
    responses(
        (status = 200, description = "Cart created", body = CreateCartResponseBody),
        (status = 400, description = "Invalid request", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["carts"],
    operation_id = "createCart"
)]
#[post("/carts")]
pub async fn create_cart(
    state: web::Data<HttpState>,
    payload: web::Json<CreateCartRequestBody>,
) -> ApiResult<web::Json<CreateCartResponseBody>> {
    let body = payload.into_inner();
    let response = state
        .carts
        .create_cart(CreateCartRequest {
            user_id: body.user_id,
            items: body.items.into_iter().map(ItemDraft::from).collect(),
        })
        .await?;

    Ok(web::Json(CreateCartResponseBody {
        cart_id: response.cart_id.to_string(),
    }))
}

/// Fetch a cart by id.
#[utoipa::path(
    get,
    path = "/carts/{cart_id}",
    params(
        ("cart_id" = String, Path, description = "Store-assigned cart identifier")
    ),
    responses(
        (status = 200, description = "Cart found", body = CartBody),
        (status = 404, description = "No cart with that id", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["carts"],
    operation_id = "getCart"
)]
#[get("/carts/{cart_id}")]
pub async fn get_cart(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<CartBody>> {
    let cart_id = path.into_inner();
    let found = state
        .carts_query
        .get_cart(GetCartRequest {
            cart_id: cart_id.clone(),
        })
        .await?;

    // Absence is a valid service outcome; it becomes a 404 only here.
    let cart = found.ok_or_else(|| Error::not_found(format!("Cart with ID '{cart_id}' not found")))?;

    Ok(web::Json(cart_to_body(&cart)?))
}

#[cfg(test)]
#[path = "carts_tests.rs"]
mod tests;

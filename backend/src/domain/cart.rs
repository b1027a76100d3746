//! Cart aggregate and its value objects.
//!
//! A [`Cart`] is created in memory without an identifier, handed to the
//! persistence port, and comes back carrying the store-assigned [`CartId`].
//! Carts are never mutated after creation; updates are out of scope.

use std::fmt;

use thiserror::Error as ThisError;

/// Validation failures raised by the cart value-object constructors.
///
/// The `Display` text of these variants is the exact validation message
/// surfaced to clients in 400 responses.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum CartValidationError {
    /// The user identifier was empty or whitespace-only.
    #[error("User ID is required")]
    MissingUserId,
    /// The cart identifier was empty or whitespace-only.
    #[error("Cart ID is required")]
    MissingCartId,
    /// An item carried an empty product identifier.
    #[error("Product ID is required")]
    MissingProductId,
    /// An item quantity was zero or negative.
    #[error("Item quantity must be positive")]
    NonPositiveQuantity,
    /// An item quantity exceeded the representable range.
    #[error("Item quantity is out of range")]
    QuantityOutOfRange,
}

fn require_non_blank(value: String, error: CartValidationError) -> Result<String, CartValidationError> {
    if value.trim().is_empty() {
        return Err(error);
    }
    Ok(value)
}

/// Identifier of a persisted cart, assigned by the store on insert.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CartId(String);

impl CartId {
    /// Validate and construct a [`CartId`]; blank input is rejected.
    pub fn new(id: impl Into<String>) -> Result<Self, CartValidationError> {
        require_non_blank(id.into(), CartValidationError::MissingCartId).map(Self)
    }

    /// Borrow the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for CartId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for CartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<CartId> for String {
    fn from(value: CartId) -> Self {
        value.0
    }
}

/// Identifier of the user owning a cart.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(String);

impl UserId {
    /// Validate and construct a [`UserId`]; blank input is rejected.
    pub fn new(id: impl Into<String>) -> Result<Self, CartValidationError> {
        require_non_blank(id.into(), CartValidationError::MissingUserId).map(Self)
    }

    /// Borrow the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        value.0
    }
}

/// A product/quantity pair within a cart.
///
/// ## Invariants
/// - `product_id` is non-blank.
/// - `quantity` is positive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    product_id: String,
    quantity: u32,
}

impl Item {
    /// Validate and construct an [`Item`].
    pub fn new(
        product_id: impl Into<String>,
        quantity: i64,
    ) -> Result<Self, CartValidationError> {
        let product_id =
            require_non_blank(product_id.into(), CartValidationError::MissingProductId)?;
        if quantity <= 0 {
            return Err(CartValidationError::NonPositiveQuantity);
        }
        let quantity =
            u32::try_from(quantity).map_err(|_| CartValidationError::QuantityOutOfRange)?;
        Ok(Self {
            product_id,
            quantity,
        })
    }

    /// Product identifier.
    pub fn product_id(&self) -> &str {
        self.product_id.as_str()
    }

    /// Number of units of the product.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }
}

/// One user's in-progress order.
///
/// ## Invariants
/// - A persisted cart has a present, stable `id`.
/// - `items` preserves insertion order; it may be empty, a cart is a
///   container that can legitimately start with nothing in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cart {
    id: Option<CartId>,
    user_id: UserId,
    items: Vec<Item>,
}

impl Cart {
    /// Build an unpersisted cart; the store assigns the id on insert.
    pub fn new(user_id: UserId, items: Vec<Item>) -> Self {
        Self {
            id: None,
            user_id,
            items,
        }
    }

    /// Rebuild a persisted cart from its stored parts.
    pub fn restored(id: CartId, user_id: UserId, items: Vec<Item>) -> Self {
        Self {
            id: Some(id),
            user_id,
            items,
        }
    }

    /// Store-assigned identifier; `None` until the cart is persisted.
    pub fn id(&self) -> Option<&CartId> {
        self.id.as_ref()
    }

    /// Owning user.
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn user_id_rejects_blank(#[case] value: &str) {
        let err = UserId::new(value).expect_err("blank user id rejected");
        assert_eq!(err, CartValidationError::MissingUserId);
        assert_eq!(err.to_string(), "User ID is required");
    }

    #[rstest]
    #[case("")]
    #[case(" \t ")]
    fn cart_id_rejects_blank(#[case] value: &str) {
        let err = CartId::new(value).expect_err("blank cart id rejected");
        assert_eq!(err, CartValidationError::MissingCartId);
        assert_eq!(err.to_string(), "Cart ID is required");
    }

    #[rstest]
    fn item_rejects_blank_product_id() {
        let err = Item::new("", 1).expect_err("blank product id rejected");
        assert_eq!(err, CartValidationError::MissingProductId);
    }

    #[rstest]
    #[case(0)]
    #[case(-3)]
    fn item_rejects_non_positive_quantity(#[case] quantity: i64) {
        let err = Item::new("sku-1", quantity).expect_err("quantity rejected");
        assert_eq!(err, CartValidationError::NonPositiveQuantity);
    }

    #[rstest]
    fn item_rejects_oversized_quantity() {
        let err = Item::new("sku-1", i64::from(u32::MAX) + 1).expect_err("quantity rejected");
        assert_eq!(err, CartValidationError::QuantityOutOfRange);
    }

    #[rstest]
    fn new_cart_has_no_id_and_keeps_item_order() {
        let items = vec![
            Item::new("sku-1", 2).expect("valid item"),
            Item::new("sku-2", 1).expect("valid item"),
        ];
        let cart = Cart::new(UserId::new("user-1").expect("valid user id"), items.clone());

        assert!(cart.id().is_none());
        assert_eq!(cart.items(), items.as_slice());
    }

    #[rstest]
    fn restored_cart_exposes_its_id() {
        let cart = Cart::restored(
            CartId::new("cart-1").expect("valid cart id"),
            UserId::new("user-1").expect("valid user id"),
            Vec::new(),
        );

        assert_eq!(cart.id().map(CartId::as_str), Some("cart-1"));
        assert!(cart.items().is_empty());
    }
}

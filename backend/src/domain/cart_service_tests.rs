//! Tests for the cart service.

use std::sync::Arc;

use super::*;
use crate::domain::ports::{ItemDraft, MockCartRepository};
use crate::domain::ErrorCode;

fn sample_request() -> CreateCartRequest {
    CreateCartRequest {
        user_id: "user-1".to_owned(),
        items: vec![
            ItemDraft {
                product_id: "sku-1".to_owned(),
                quantity: 2,
            },
            ItemDraft {
                product_id: "sku-2".to_owned(),
                quantity: 1,
            },
        ],
    }
}

fn saved_copy(cart: &Cart, id: &str) -> Cart {
    Cart::restored(
        CartId::new(id).expect("valid id"),
        cart.user_id().clone(),
        cart.items().to_vec(),
    )
}

#[tokio::test]
async fn create_cart_returns_store_assigned_id() {
    let mut repo = MockCartRepository::new();
    repo.expect_create()
        .withf(|cart| cart.id().is_none() && cart.items().len() == 2)
        .times(1)
        .returning(|cart| Ok(saved_copy(cart, "68a1c0ffee")));

    let service = CartService::new(Arc::new(repo));
    let response = service
        .create_cart(sample_request())
        .await
        .expect("create succeeds");

    assert_eq!(response.cart_id.as_str(), "68a1c0ffee");
}

#[tokio::test]
async fn create_cart_rejects_blank_user_id_before_store_access() {
    let mut repo = MockCartRepository::new();
    repo.expect_create().times(0);

    let service = CartService::new(Arc::new(repo));
    let mut request = sample_request();
    request.user_id = "   ".to_owned();

    let error = service
        .create_cart(request)
        .await
        .expect_err("blank user id rejected");

    assert_eq!(error.code(), ErrorCode::InvalidRequest);
    assert_eq!(error.message(), "User ID is required");
}

#[tokio::test]
async fn create_cart_rejects_non_positive_item_quantity() {
    let mut repo = MockCartRepository::new();
    repo.expect_create().times(0);

    let service = CartService::new(Arc::new(repo));
    let mut request = sample_request();
    request.items[0].quantity = 0;

    let error = service
        .create_cart(request)
        .await
        .expect_err("zero quantity rejected");

    assert_eq!(error.code(), ErrorCode::InvalidRequest);
    assert_eq!(error.message(), "Item quantity must be positive");
}

#[tokio::test]
async fn create_cart_accepts_empty_items() {
    let mut repo = MockCartRepository::new();
    repo.expect_create()
        .withf(|cart| cart.items().is_empty())
        .times(1)
        .returning(|cart| Ok(saved_copy(cart, "68aempty01")));

    let service = CartService::new(Arc::new(repo));
    let response = service
        .create_cart(CreateCartRequest {
            user_id: "user-2".to_owned(),
            items: Vec::new(),
        })
        .await
        .expect("empty carts are allowed");

    assert_eq!(response.cart_id.as_str(), "68aempty01");
}

#[tokio::test]
async fn create_cart_fails_when_saved_cart_has_no_id() {
    let mut repo = MockCartRepository::new();
    repo.expect_create()
        .times(1)
        .returning(|cart| Ok(Cart::new(cart.user_id().clone(), cart.items().to_vec())));

    let service = CartService::new(Arc::new(repo));
    let error = service
        .create_cart(sample_request())
        .await
        .expect_err("id-less save is a contract violation");

    assert_eq!(error.code(), ErrorCode::InternalError);
}

#[tokio::test]
async fn create_cart_maps_connection_failure_to_internal_error() {
    let mut repo = MockCartRepository::new();
    repo.expect_create()
        .times(1)
        .returning(|_| Err(CartRepositoryError::connection("no reachable servers")));

    let service = CartService::new(Arc::new(repo));
    let error = service
        .create_cart(sample_request())
        .await
        .expect_err("store outage surfaces as internal");

    assert_eq!(error.code(), ErrorCode::InternalError);
    assert!(error.message().contains("no reachable servers"));
}

#[tokio::test]
async fn get_cart_rejects_blank_id_before_store_access() {
    let mut repo = MockCartRepository::new();
    repo.expect_find_by_id().times(0);

    let service = CartService::new(Arc::new(repo));
    let error = service
        .get_cart(GetCartRequest {
            cart_id: "  ".to_owned(),
        })
        .await
        .expect_err("blank cart id rejected");

    assert_eq!(error.code(), ErrorCode::InvalidRequest);
    assert_eq!(error.message(), "Cart ID is required");
}

#[tokio::test]
async fn get_cart_returns_cart_when_found() {
    let mut repo = MockCartRepository::new();
    repo.expect_find_by_id()
        .withf(|id| id.as_str() == "68a1c0ffee")
        .times(1)
        .returning(|id| {
            Ok(Some(Cart::restored(
                id.clone(),
                UserId::new("user-1").expect("valid user id"),
                vec![Item::new("sku-1", 2).expect("valid item")],
            )))
        });

    let service = CartService::new(Arc::new(repo));
    let cart = service
        .get_cart(GetCartRequest {
            cart_id: "68a1c0ffee".to_owned(),
        })
        .await
        .expect("lookup succeeds")
        .expect("cart present");

    assert_eq!(cart.user_id().as_str(), "user-1");
    assert_eq!(cart.items().len(), 1);
}

#[tokio::test]
async fn get_cart_returns_none_when_absent() {
    let mut repo = MockCartRepository::new();
    repo.expect_find_by_id().times(1).returning(|_| Ok(None));

    let service = CartService::new(Arc::new(repo));
    let found = service
        .get_cart(GetCartRequest {
            cart_id: "never-created".to_owned(),
        })
        .await
        .expect("lookup succeeds");

    assert!(found.is_none());
}

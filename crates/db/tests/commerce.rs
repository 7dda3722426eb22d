//! Integration tests for orders, subscribers, settings, and media rows.

use sqlx::PgPool;

use folio_db::models::order::CreateOrder;
use folio_db::models::media::CreateMedia;
use folio_db::models::product::CreateProduct;
use folio_db::models::site_setting::UpsertSiteSetting;
use folio_db::models::status::OrderStatus;
use folio_db::models::subscriber::CreateSubscriber;
use folio_db::repositories::{
    MediaRepo, OrderRepo, ProductRepo, SettingRepo, SubscriberRepo,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn seed_product(pool: &PgPool, slug: &str, price: f64) -> folio_db::models::product::Product {
    ProductRepo::create(
        pool,
        &CreateProduct {
            slug: slug.to_string(),
            description: String::new(),
            price,
            category: "prints".to_string(),
            image_url: None,
            in_stock: None,
        },
    )
    .await
    .expect("product creation should succeed")
}

fn new_order(product_id: folio_core::types::DbId, amount: f64) -> CreateOrder {
    CreateOrder {
        customer_name: "Ada Lovelace".to_string(),
        customer_email: "ada@example.com".to_string(),
        product_id,
        amount,
    }
}

// ---------------------------------------------------------------------------
// Orders
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn order_starts_pending_and_walks_the_chain(pool: PgPool) {
    let product = seed_product(&pool, "night-print", 80.0).await;

    let order = OrderRepo::create(&pool, &new_order(product.id, 80.0))
        .await
        .unwrap();
    assert_eq!(order.status, OrderStatus::Pending);

    let order = OrderRepo::update_status(&pool, order.id, OrderStatus::Processing)
        .await
        .unwrap()
        .expect("order should exist");
    assert_eq!(order.status, OrderStatus::Processing);

    let order = OrderRepo::update_status(&pool, order.id, OrderStatus::Shipped)
        .await
        .unwrap()
        .unwrap();
    let order = OrderRepo::update_status(&pool, order.id, OrderStatus::Delivered)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(order.status, OrderStatus::Delivered);
}

#[sqlx::test]
async fn order_listing_joins_products(pool: PgPool) {
    let product = seed_product(&pool, "dune-print", 60.0).await;
    OrderRepo::create(&pool, &new_order(product.id, 60.0))
        .await
        .unwrap();

    let listed = OrderRepo::list_with_products(&pool).await.unwrap();
    assert_eq!(listed.len(), 1);
    let joined = listed[0]
        .product
        .as_ref()
        .expect("product should be joined");
    assert_eq!(joined.slug, "dune-print");
}

// ---------------------------------------------------------------------------
// Subscribers
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn duplicate_subscribe_reactivates_instead_of_erroring(pool: PgPool) {
    let input = CreateSubscriber {
        email: "reader@example.com".to_string(),
        name: None,
    };

    let first = SubscriberRepo::subscribe(&pool, &input).await.unwrap();
    assert!(first.subscribed);

    // Unsubscribe (soft delete), then sign up again with a name.
    SubscriberRepo::set_subscribed(&pool, first.id, false)
        .await
        .unwrap()
        .expect("subscriber should exist");

    let again = SubscriberRepo::subscribe(
        &pool,
        &CreateSubscriber {
            email: "reader@example.com".to_string(),
            name: Some("Reader".to_string()),
        },
    )
    .await
    .unwrap();

    assert_eq!(again.id, first.id, "same row must be reused");
    assert!(again.subscribed, "resubscribe must reactivate");
    assert_eq!(again.name.as_deref(), Some("Reader"));
    assert_eq!(
        again.created_at, first.created_at,
        "original signup date must be kept"
    );

    let all = SubscriberRepo::list(&pool).await.unwrap();
    assert_eq!(all.len(), 1);
}

// ---------------------------------------------------------------------------
// Settings
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn setting_upsert_is_idempotent_per_key(pool: PgPool) {
    let first = SettingRepo::upsert(
        &pool,
        &UpsertSiteSetting {
            key: "hero_tagline".to_string(),
            value: serde_json::json!("developer / photographer"),
        },
    )
    .await
    .unwrap();

    let second = SettingRepo::upsert(
        &pool,
        &UpsertSiteSetting {
            key: "hero_tagline".to_string(),
            value: serde_json::json!({"text": "updated", "accent": true}),
        },
    )
    .await
    .unwrap();

    assert_eq!(second.id, first.id, "same key must keep one row");
    assert_eq!(second.value["text"], "updated");
    assert!(second.updated_at >= first.updated_at);

    let all = SettingRepo::list(&pool).await.unwrap();
    assert_eq!(all.len(), 1);

    let fetched = SettingRepo::get(&pool, "hero_tagline").await.unwrap();
    assert!(fetched.is_some());
    assert!(SettingRepo::get(&pool, "missing_key").await.unwrap().is_none());
}

// ---------------------------------------------------------------------------
// Media rows
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn media_row_round_trip(pool: PgPool) {
    let created = MediaRepo::create(
        &pool,
        &CreateMedia {
            filename: "1717243800000-alley.jpg".to_string(),
            url: "http://localhost:3000/media/1717243800000-alley.jpg".to_string(),
            content_type: "image/jpeg".to_string(),
            size_bytes: 182_044,
        },
    )
    .await
    .unwrap();

    let listed = MediaRepo::list(&pool).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, created.id);

    assert!(MediaRepo::delete(&pool, created.id).await.unwrap());
    assert!(MediaRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .is_none());
}

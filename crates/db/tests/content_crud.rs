//! Integration tests for the content repositories (posts, products,
//! projects): CRUD, publication filtering, slug uniqueness, and the
//! atomic view counter.

use sqlx::PgPool;

use folio_db::models::post::{CreateBlogPost, UpdateBlogPost};
use folio_db::models::product::{CreateProduct, UpdateProduct};
use folio_db::models::project::CreateProject;
use folio_db::repositories::{PostRepo, ProductRepo, ProjectRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_post(title: &str, published: bool) -> CreateBlogPost {
    CreateBlogPost {
        title: title.to_string(),
        slug: None,
        excerpt: "excerpt".to_string(),
        content: "# body".to_string(),
        category: "dev".to_string(),
        image_url: None,
        read_time: Some("4 min".to_string()),
        featured: None,
        published: Some(published),
    }
}

fn new_product(slug: &str, price: f64) -> CreateProduct {
    CreateProduct {
        slug: slug.to_string(),
        description: "A print".to_string(),
        price,
        category: "prints".to_string(),
        image_url: None,
        in_stock: None,
    }
}

fn new_project(title: &str, category: &str) -> CreateProject {
    CreateProject {
        title: title.to_string(),
        slug: None,
        description: String::new(),
        category: category.to_string(),
        project_type: None,
        tech_stack: vec!["rust".to_string()],
        location: None,
        image_url: None,
        gallery: vec![],
        link: None,
        featured: None,
    }
}

// ---------------------------------------------------------------------------
// Posts
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn post_create_and_lookup_by_slug(pool: PgPool) {
    let created = PostRepo::create(&pool, "first-light", &new_post("First Light", true))
        .await
        .expect("create should succeed");
    assert_eq!(created.slug, "first-light");
    assert!(created.published);
    assert_eq!(created.views, 0);

    let found = PostRepo::find_published_by_slug(&pool, "first-light")
        .await
        .expect("lookup should succeed")
        .expect("post should exist");
    assert_eq!(found.id, created.id);

    // Identical repeated lookup returns the same row (idempotent read).
    let again = PostRepo::find_published_by_slug(&pool, "first-light")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(again.id, found.id);
    assert_eq!(again.views, found.views);
}

#[sqlx::test]
async fn unpublished_posts_hidden_from_public_lookups(pool: PgPool) {
    let draft = PostRepo::create(&pool, "draft-notes", &new_post("Draft Notes", false))
        .await
        .expect("create should succeed");

    assert!(PostRepo::find_published_by_slug(&pool, "draft-notes")
        .await
        .unwrap()
        .is_none());
    assert!(PostRepo::find_published_by_id(&pool, draft.id)
        .await
        .unwrap()
        .is_none());

    let public = PostRepo::list_published(&pool).await.unwrap();
    assert!(public.iter().all(|p| p.id != draft.id));

    // Admin listing still sees the draft.
    let all = PostRepo::list_all(&pool).await.unwrap();
    assert!(all.iter().any(|p| p.id == draft.id));
}

#[sqlx::test]
async fn duplicate_slug_violates_unique_constraint(pool: PgPool) {
    PostRepo::create(&pool, "same-slug", &new_post("One", true))
        .await
        .expect("first create should succeed");

    let err = PostRepo::create(&pool, "same-slug", &new_post("Two", true))
        .await
        .expect_err("duplicate slug must fail");

    match err {
        sqlx::Error::Database(db_err) => {
            assert_eq!(db_err.code().as_deref(), Some("23505"));
            assert_eq!(db_err.constraint(), Some("uq_blog_posts_slug"));
        }
        other => panic!("expected a database error, got {other:?}"),
    }
}

#[sqlx::test]
async fn post_update_applies_only_provided_fields(pool: PgPool) {
    let created = PostRepo::create(&pool, "patch-me", &new_post("Patch Me", false))
        .await
        .unwrap();

    let patch = UpdateBlogPost {
        title: None,
        slug: None,
        excerpt: None,
        content: None,
        category: None,
        image_url: None,
        read_time: None,
        featured: None,
        published: Some(true),
    };
    let updated = PostRepo::update(&pool, created.id, &patch)
        .await
        .unwrap()
        .expect("row should exist");

    assert!(updated.published, "published flag should change");
    assert_eq!(updated.title, "Patch Me", "title should be untouched");
    assert!(updated.updated_at >= created.updated_at);
}

#[sqlx::test]
async fn increment_views_twice_sequentially_adds_two(pool: PgPool) {
    let post = PostRepo::create(&pool, "counted", &new_post("Counted", true))
        .await
        .unwrap();

    // Seed the counter at 5 to match the documented property.
    sqlx::query("UPDATE blog_posts SET views = 5 WHERE id = $1")
        .bind(post.id)
        .execute(&pool)
        .await
        .unwrap();

    assert!(PostRepo::increment_views(&pool, post.id).await.unwrap());
    assert!(PostRepo::increment_views(&pool, post.id).await.unwrap());

    let after = PostRepo::find_by_id(&pool, post.id).await.unwrap().unwrap();
    assert_eq!(after.views, 7, "5 + two awaited increments must equal 7");
}

#[sqlx::test]
async fn increment_views_on_missing_post_reports_false(pool: PgPool) {
    let missing = uuid::Uuid::new_v4();
    assert!(!PostRepo::increment_views(&pool, missing).await.unwrap());
}

#[sqlx::test]
async fn post_delete_removes_the_row(pool: PgPool) {
    let post = PostRepo::create(&pool, "to-delete", &new_post("To Delete", true))
        .await
        .unwrap();

    assert!(PostRepo::delete(&pool, post.id).await.unwrap());
    assert!(PostRepo::find_by_id(&pool, post.id).await.unwrap().is_none());

    // Second delete is a no-op.
    assert!(!PostRepo::delete(&pool, post.id).await.unwrap());
}

// ---------------------------------------------------------------------------
// Products
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn product_crud_round_trip(pool: PgPool) {
    let created = ProductRepo::create(&pool, &new_product("dusk-print", 45.0))
        .await
        .expect("create should succeed");
    assert!(created.in_stock, "in_stock defaults to true");

    let found = ProductRepo::find_by_slug(&pool, "dusk-print")
        .await
        .unwrap()
        .expect("product should exist");
    assert_eq!(found.price, 45.0);

    let patch = UpdateProduct {
        slug: None,
        description: None,
        price: Some(39.0),
        category: None,
        image_url: None,
        in_stock: Some(false),
    };
    let updated = ProductRepo::update(&pool, created.id, &patch)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.price, 39.0);
    assert!(!updated.in_stock);

    assert!(ProductRepo::delete(&pool, created.id).await.unwrap());
    assert!(ProductRepo::find_by_slug(&pool, "dusk-print")
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test]
async fn negative_price_rejected_by_check_constraint(pool: PgPool) {
    let err = ProductRepo::create(&pool, &new_product("bad-price", -1.0))
        .await
        .expect_err("negative price must fail");
    assert_matches::assert_matches!(err, sqlx::Error::Database(_));
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn project_list_filters_by_category(pool: PgPool) {
    ProjectRepo::create(&pool, "city-grid", &new_project("City Grid", "dev"))
        .await
        .unwrap();
    ProjectRepo::create(&pool, "alley-nights", &new_project("Alley Nights", "photo"))
        .await
        .unwrap();

    let all = ProjectRepo::list(&pool, None).await.unwrap();
    assert_eq!(all.len(), 2);

    let photo_only = ProjectRepo::list(&pool, Some("photo")).await.unwrap();
    assert_eq!(photo_only.len(), 1);
    assert_eq!(photo_only[0].slug, "alley-nights");

    let none = ProjectRepo::list(&pool, Some("film")).await.unwrap();
    assert!(none.is_empty());
}

#[sqlx::test]
async fn project_arrays_round_trip(pool: PgPool) {
    let mut input = new_project("Gallery Walk", "photo");
    input.gallery = vec![
        "https://cdn.example.com/a.jpg".to_string(),
        "https://cdn.example.com/b.jpg".to_string(),
    ];
    input.tech_stack = vec!["fuji-xt4".to_string(), "35mm".to_string()];

    let created = ProjectRepo::create(&pool, "gallery-walk", &input).await.unwrap();
    let found = ProjectRepo::find_by_slug(&pool, "gallery-walk")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(found.gallery, input.gallery, "gallery order must be kept");
    assert_eq!(found.tech_stack, input.tech_stack);
    assert_eq!(found.id, created.id);
}

//! Scalar aggregation queries backing the admin analytics dashboard.
//!
//! Each method is one independent query returning one number, so the
//! caller can fan out concurrently and degrade per branch instead of
//! failing the whole dashboard.

use sqlx::PgPool;

/// Provides the scalar counters shown on the admin dashboard.
pub struct DashboardRepo;

impl DashboardRepo {
    /// Sum of all recorded page views across all pages and days.
    pub async fn total_views(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COALESCE(SUM(views), 0)::bigint FROM analytics")
            .fetch_one(pool)
            .await
    }

    /// Sum of order amounts, excluding cancelled orders.
    pub async fn total_revenue(pool: &PgPool) -> Result<f64, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT COALESCE(SUM(amount), 0)::double precision
             FROM orders WHERE status <> 'cancelled'",
        )
        .fetch_one(pool)
        .await
    }

    /// Count of all blog posts, drafts included.
    pub async fn total_posts(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM blog_posts")
            .fetch_one(pool)
            .await
    }

    /// Count of all products.
    pub async fn total_products(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(pool)
            .await
    }

    /// Count of all orders, cancelled included.
    pub async fn total_orders(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM orders")
            .fetch_one(pool)
            .await
    }

    /// Count of subscribers with the subscribed flag set.
    pub async fn total_subscribers(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM subscribers WHERE subscribed = true")
            .fetch_one(pool)
            .await
    }

    /// Count of unread contact messages.
    pub async fn unread_messages(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM contact_messages WHERE read = false")
            .fetch_one(pool)
            .await
    }
}

//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Absent rows are `None`,
//! never errors; every other failure surfaces as `sqlx::Error` for the
//! caller to translate.

pub mod analytics_repo;
pub mod contact_repo;
pub mod dashboard_repo;
pub mod media_repo;
pub mod order_repo;
pub mod post_repo;
pub mod product_repo;
pub mod project_repo;
pub mod session_repo;
pub mod setting_repo;
pub mod subscriber_repo;
pub mod user_repo;

pub use analytics_repo::AnalyticsRepo;
pub use contact_repo::ContactRepo;
pub use dashboard_repo::DashboardRepo;
pub use media_repo::MediaRepo;
pub use order_repo::OrderRepo;
pub use post_repo::PostRepo;
pub use product_repo::ProductRepo;
pub use project_repo::ProjectRepo;
pub use session_repo::SessionRepo;
pub use setting_repo::SettingRepo;
pub use subscriber_repo::SubscriberRepo;
pub use user_repo::UserRepo;

//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod analytics;
pub mod contact_message;
pub mod media;
pub mod order;
pub mod post;
pub mod product;
pub mod project;
pub mod session;
pub mod site_setting;
pub mod status;
pub mod subscriber;
pub mod user;

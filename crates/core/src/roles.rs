//! Role name constants used in JWT claims and authorization checks.

/// Full access to the admin area and all content mutations.
pub const ROLE_ADMIN: &str = "admin";

/// Authenticated but without admin privileges.
pub const ROLE_USER: &str = "user";

//! Domain logic for the folio backend.
//!
//! Pure, I/O-free building blocks shared by the database and API crates:
//! the error taxonomy, common ID/timestamp types, slug derivation, and
//! role constants.

pub mod error;
pub mod roles;
pub mod slug;
pub mod types;

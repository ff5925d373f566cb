//! Domain model for banners and documents.
//!
//! # Responsibility
//! - Define the canonical records used by core business logic.
//! - Keep banner activity a pure function of an explicit evaluation date.
//!
//! # Invariants
//! - Every domain object is identified by a stable UUID.
//! - Banner retirement is one-way; banner deletion is a hard delete.

pub mod banner;
pub mod document;
pub mod window;

//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep host/admin layers decoupled from storage details.

pub mod banner_service;
pub mod document_service;

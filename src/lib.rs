//! Critiq - Content-Review API Core
//!
//! This crate implements the identity and access-control core of a
//! content-review service: passwordless signup via confirmation codes,
//! code-for-token exchange, and role-gated CRUD over the nested
//! Title -> Review -> Comment resource tree.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

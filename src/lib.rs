//! Mercado API Library
//!
//! In-memory e-commerce CRUD API managing products and users,
//! including domain logic, repositories, and the HTTP adapter layer.

pub mod api;
pub mod domain;
pub mod infrastructure;
pub mod services;
pub mod state;

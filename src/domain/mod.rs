// Domain layer module exports
// Following Hexagonal Architecture principles
// Domain is independent of infrastructure concerns

pub mod errors;
pub mod product;
pub mod repositories;
pub mod user;

// Infrastructure layer module exports
// Adapters implementing the domain's storage contracts

pub mod repositories;

pub mod in_memory_product_repository;
pub mod in_memory_user_repository;

pub use in_memory_product_repository::InMemoryProductRepository;
pub use in_memory_user_repository::InMemoryUserRepository;

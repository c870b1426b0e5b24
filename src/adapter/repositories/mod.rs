//! Repository Implementations
//!
//! Domain層のRepositoryトレイトの実装

pub mod in_memory_repository;
pub mod json_file_repository;

pub use in_memory_repository::InMemoryRepository;
pub use json_file_repository::JsonFileRepository;

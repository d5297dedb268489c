//! Infrastructure adapters for application ports.

#![forbid(unsafe_code)]

mod in_memory_directory_repository;
mod in_memory_field_catalog;
mod in_memory_search_index;

pub use in_memory_directory_repository::InMemoryDirectoryRepository;
pub use in_memory_field_catalog::InMemoryFieldCatalog;
pub use in_memory_search_index::InMemorySearchIndex;

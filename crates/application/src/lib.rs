//! Application services and ports.

#![forbid(unsafe_code)]

mod access_service;
mod search_service;
mod visibility_service;

pub use access_service::{AccessService, DirectoryRepository};
pub use search_service::{
    FieldCatalog, MatchedField, SearchIndex, SearchOptions, SearchResult, SearchService,
};
pub use visibility_service::FieldVisibilityService;

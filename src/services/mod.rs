pub mod catalog_service;
pub mod context;
pub mod favorite_service;

pub use context::ServiceContext;

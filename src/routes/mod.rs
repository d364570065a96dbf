pub mod catalog;
mod entry;
pub mod extract;
pub mod favorites;
pub mod public;
pub mod route_list;

pub use entry::{app, router, service};

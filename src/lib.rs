pub mod model;
pub mod service;

pub use model::{RouteDestination, UpdateMode};
pub use service::{validate_update, ValidationError};

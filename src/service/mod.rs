mod destination;
mod destinations;
mod fields;

use thiserror::Error;

/// Accumulated validation failures for one update request. Every violation
/// found in the payload is reported; nothing short-circuits past the first
/// error except the structural check on the destinations array itself.
#[derive(Debug, Clone, Error)]
#[error("{}", .details.join(" "))]
pub struct ValidationError {
    pub details: Vec<String>,
}

impl ValidationError {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            details: vec![detail.into()],
        }
    }

    pub fn with_details(details: Vec<String>) -> Self {
        Self { details }
    }
}

pub use destinations::validate_update;

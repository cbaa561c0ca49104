// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::SearchQuery;
pub use requests::SearchParams;
pub use responses::{Envelope, HealthResponse, CREATOR};

// Request pipeline stages
pub mod auth;
pub mod query;

pub use auth::ApiKeys;
pub use query::{parse_query, parse_query_param};

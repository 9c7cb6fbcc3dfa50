//! Data transfer objects for the web API.

pub mod response;
pub mod validation;

pub use response::{ContactResponse, FeedErrorResponse};
pub use validation::ValidatedJson;

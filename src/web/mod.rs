//! Web API module.
//!
//! Serves the channel feed proxy at `/api/youtube` and the contact relay at
//! `/api/contact`.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod server;

pub use error::ApiError;
pub use handlers::AppState;
pub use router::create_router;
pub use server::WebServer;

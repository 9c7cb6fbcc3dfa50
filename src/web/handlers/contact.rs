//! Contact form handler.

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::contact::ContactSubmission;
use crate::web::dto::{ContactResponse, ValidatedJson};
use crate::web::error::ApiError;
use crate::web::handlers::AppState;

/// POST /api/contact - Validate a submission and relay it.
pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    ValidatedJson(submission): ValidatedJson<ContactSubmission>,
) -> Result<Json<ContactResponse>, ApiError> {
    if submission.botcheck {
        tracing::info!("Contact submission with honeypot set");
    }

    state.contact_client.submit(&submission).await?;

    Ok(Json(ContactResponse { success: true }))
}

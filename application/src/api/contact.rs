//! Contact channels HTTP API.

use std::sync::Arc;

use axum::{Extension, Json};

use crate::config;

/// `GET /api/contact`
///
/// Returns the configured contact channels of the agency.
#[expect(clippy::unused_async, reason = "`axum` handler signature")]
pub async fn show(
    Extension(contact): Extension<Arc<config::Contact>>,
) -> Json<config::Contact> {
    Json(contact.as_ref().clone())
}

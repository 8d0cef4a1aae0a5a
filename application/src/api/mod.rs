//! HTTP API definitions.

pub mod contact;
pub mod lead;
pub mod property;

use axum::{
    routing::{get, post},
    Router,
};

/// Builds the [`Router`] of the HTTP API.
///
/// Expects [`Service`], [`Provider`], [`Notifier`], [`Auth`] and
/// [`config::Contact`] [`Extension`]s to be layered on top.
///
/// [`Auth`]: crate::Auth
/// [`Extension`]: axum::Extension
/// [`Notifier`]: crate::Notifier
/// [`Provider`]: crate::Provider
/// [`Service`]: crate::Service
/// [`config::Contact`]: crate::config::Contact
pub fn router() -> Router {
    Router::new()
        .route(
            "/api/properties",
            get(property::list).post(property::create),
        )
        .route("/api/properties/featured", get(property::featured))
        .route(
            "/api/properties/:id",
            get(property::by_id)
                .patch(property::update)
                .delete(property::remove),
        )
        .route("/api/catalog/refresh", post(property::refresh))
        .route("/api/leads", post(lead::submit).get(lead::list))
        .route("/api/contact", get(contact::show))
}

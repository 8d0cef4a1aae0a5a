//! Wire representations of stored documents.

use common::datetime;
use serde::Deserialize;

use crate::domain::{lead, property, Lead, Property};

/// [`Property`] document as returned by the store.
///
/// Documents inserted by older tooling may lack timestamps, which then
/// default to the read time.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct PropertyDocument {
    /// ID assigned by the store.
    id: property::Id,

    /// [`property::Details`] of the document.
    #[serde(flatten)]
    details: property::Details,

    /// Creation timestamp, if recorded.
    #[serde(default, with = "datetime::serde::rfc3339::option")]
    created_at: Option<property::CreationDateTime>,

    /// Last mutation timestamp, if recorded.
    #[serde(default, with = "datetime::serde::rfc3339::option")]
    updated_at: Option<property::UpdateDateTime>,
}

impl From<PropertyDocument> for Property {
    fn from(doc: PropertyDocument) -> Self {
        let created_at = doc
            .created_at
            .unwrap_or_else(property::CreationDateTime::now);
        Self {
            id: doc.id,
            details: doc.details,
            created_at,
            updated_at: doc.updated_at.unwrap_or_else(|| created_at.coerce()),
        }
    }
}

/// [`Lead`] document as returned by the store.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct LeadDocument {
    /// ID assigned by the store.
    #[serde(default)]
    id: Option<lead::Id>,

    /// [`lead::Name`] of the document.
    name: lead::Name,

    /// [`lead::Phone`] of the document, possibly empty.
    #[serde(default)]
    phone: lead::Phone,

    /// Email address, if captured.
    #[serde(default)]
    email: Option<String>,

    /// Free-form message, if captured.
    #[serde(default)]
    message: Option<String>,

    /// ID of the [`Property`] asked about, if any.
    #[serde(default)]
    property_id: Option<property::Id>,

    /// Capture timestamp, if recorded.
    #[serde(default, with = "datetime::serde::rfc3339::option")]
    created_at: Option<lead::CreationDateTime>,
}

impl From<LeadDocument> for Lead {
    fn from(doc: LeadDocument) -> Self {
        Self {
            id: doc.id,
            name: doc.name,
            phone: doc.phone,
            email: doc.email,
            message: doc.message,
            property_id: doc.property_id,
            created_at: doc
                .created_at
                .unwrap_or_else(lead::CreationDateTime::now),
        }
    }
}

//! Lead-related HTTP API.

use std::sync::Arc;

use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use service::{
    command::SubmitLead,
    domain::{lead, property, Lead},
    query::ListLeads,
    Command as _,
};

use crate::{
    config, define_error, notify, AsError as _, Context, Error, Notifier,
    Service,
};

/// Body of a [`submit()`] request.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Submission {
    /// Name of the person submitting the form.
    pub name: Option<String>,

    /// Phone number, as typed in, possibly with localized numerals.
    pub phone: Option<String>,

    /// Email address, if provided.
    pub email: Option<String>,

    /// Free-form message, if provided.
    pub message: Option<String>,

    /// ID of the property the submission is about, if any.
    pub property_id: Option<String>,

    /// Title of the property the submission is about, if any.
    ///
    /// Used only for the notification and the WhatsApp deep link text.
    pub property_title: Option<String>,
}

/// Body of a [`submit()`] response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reply {
    /// ID the captured lead was assigned by the store.
    pub id: lead::Id,

    /// WhatsApp deep link with a prefilled message for the submitter.
    pub whatsapp: String,
}

/// `POST /api/leads`
///
/// Captures a new [`Lead`].
///
/// The lead is persisted before any notification is attempted, so a
/// successful response means the lead reached the store even if the
/// notification side channel is down.
pub async fn submit(
    Extension(service): Extension<Service>,
    Extension(notifier): Extension<Notifier>,
    Extension(contact): Extension<Arc<config::Contact>>,
    Json(submission): Json<Submission>,
) -> Result<Json<Reply>, Error> {
    let Submission {
        name,
        phone,
        email,
        message,
        property_id,
        property_title,
    } = submission;

    let name = name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .and_then(lead::Name::new)
        .ok_or(ApiError::NameRequired)?;
    let phone =
        lead::Phone::from(phone.unwrap_or_default()).normalized();

    let id = service
        .execute(SubmitLead {
            name: name.clone(),
            phone: phone.clone(),
            email: email.clone(),
            message: message.clone(),
            property_id: property_id.clone().map(property::Id::from),
        })
        .await
        .map_err(|e| e.into_error())?;

    _ = notifier
        .dispatch(&notify::Payload {
            name: name.to_string(),
            phone: phone.to_string(),
            email,
            message,
            property_id,
            property_title: property_title.clone(),
        })
        .await;

    Ok(Json(Reply {
        id,
        whatsapp: whatsapp_link(
            &contact.whatsapp_number,
            name.as_ref(),
            property_title.as_deref(),
        ),
    }))
}

/// `GET /api/leads`
///
/// Lists the captured [`Lead`]s, newest first.
///
/// Requires an admin [`Session`].
///
/// [`Session`]: crate::Session
pub async fn list(ctx: Context) -> Result<Json<Vec<Lead>>, Error> {
    _ = ctx.admin_session().await?;

    ctx.service()
        .execute(ListLeads)
        .await
        .map(Json)
        .map_err(|e| e.into_error())
}

/// Builds a [`wa.me`] deep link to the provided `number` with a message
/// prefilled from the submitter's `name` and the `property_title` (if any).
///
/// [`wa.me`]: https://wa.me
fn whatsapp_link(
    number: &str,
    name: &str,
    property_title: Option<&str>,
) -> String {
    let base = format!("https://wa.me/{number}");
    let text = property_title.map_or_else(
        || format!("Hello! I'm {name}. I'd like to know more."),
        |title| format!("Hello! I'm {name}. I'm interested in \"{title}\"."),
    );

    match url::Url::parse(&base) {
        Ok(mut url) => {
            _ = url.query_pairs_mut().append_pair("text", &text);
            url.into()
        }
        Err(_) => base,
    }
}

define_error! {
    enum ApiError {
        #[code = "NAME_REQUIRED"]
        #[status = BAD_REQUEST]
        #[message = "A name is required"]
        NameRequired,
    }
}


#[cfg(test)]
mod whatsapp_link_spec {
    use super::whatsapp_link;

    #[test]
    fn points_at_the_configured_number() {
        let link = whatsapp_link("201224470757", "Jane", None);

        assert!(link.starts_with("https://wa.me/201224470757?text="));
    }

    #[test]
    fn mentions_the_property_title() {
        let link = whatsapp_link(
            "201224470757",
            "Jane",
            Some("Lagoon-front villa in El Gouna"),
        );

        assert!(link.contains("Lagoon-front+villa+in+El+Gouna"));
    }

    #[test]
    fn encodes_the_text_as_a_query_value() {
        let link = whatsapp_link("201224470757", "Jane Doe", None);

        assert!(!link.contains(' '));
        assert!(link.contains("Jane+Doe"));
    }
}

//! [`Command`] capturing a new [`Lead`].

use common::operations::Insert;
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{lead, property, Lead},
    infra::{store, Store},
    Service,
};

use super::Command;

/// [`Command`] capturing a new [`Lead`].
///
/// The durable store write is the source of truth for success. Any
/// notification side channel lives outside the [`Service`] and never
/// affects this [`Command`]'s result.
///
/// [`Service`]: crate::Service
#[derive(Clone, Debug)]
pub struct SubmitLead {
    /// [`lead::Name`] the prospect introduced themselves with.
    pub name: lead::Name,

    /// [`lead::Phone`] of the prospect, possibly empty.
    pub phone: lead::Phone,

    /// Email address of the prospect, if provided.
    pub email: Option<String>,

    /// Free-form message of the prospect, if provided.
    pub message: Option<String>,

    /// ID of the [`Property`] the prospect asked about, if any.
    ///
    /// [`Property`]: crate::domain::Property
    pub property_id: Option<property::Id>,
}

impl<S> Command<SubmitLead> for Service<S>
where
    S: Store<Insert<lead::Draft>, Ok = Lead, Err = Traced<store::Error>>,
{
    type Ok = lead::Id;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: SubmitLead) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let SubmitLead {
            name,
            phone,
            email,
            message,
            property_id,
        } = cmd;

        let captured = self
            .store()
            .execute(Insert(lead::Draft {
                name,
                phone: phone.normalized(),
                email,
                message,
                property_id,
                created_at: lead::CreationDateTime::now(),
            }))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        captured
            .id
            .ok_or_else(|| tracerr::new!(E::MissingId))
    }
}

/// Error of [`SubmitLead`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// Store returned a [`Lead`] representation without an ID.
    ///
    /// [`Lead`]: crate::domain::Lead
    #[display("store returned no ID for the captured lead")]
    MissingId,

    /// [`Store`] error.
    #[display("`Store` operation failed: {_0}")]
    Store(store::Error),
}

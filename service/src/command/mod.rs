//! [`Command`] definition.

pub mod create_property;
pub mod delete_property;
pub mod submit_lead;
pub mod update_property;

/// [`Command`] of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::Handler as Command;

pub use self::{
    create_property::CreateProperty, delete_property::DeleteProperty,
    submit_lead::SubmitLead, update_property::UpdateProperty,
};

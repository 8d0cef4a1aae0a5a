//! [`Query`] definition.

pub mod featured;
pub mod leads;
pub mod properties;
pub mod property;

/// [`Query`] of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::Handler as Query;

pub use self::{
    featured::Featured, leads::ListLeads, properties::FetchAll,
    property::ById,
};

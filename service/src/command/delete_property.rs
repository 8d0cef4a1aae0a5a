//! [`Command`] deleting a [`Property`].

use common::operations::{By, Delete};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{property, Property},
    infra::{store, Store},
    Service,
};

use super::Command;

/// [`Command`] deleting a [`Property`].
///
/// Deleting an already-deleted [`Property`] is not an error: the store
/// treats the removal as a no-op and so does the cache.
#[derive(Clone, Debug, From)]
pub struct DeleteProperty(pub property::Id);

impl<S> Command<DeleteProperty> for Service<S>
where
    S: Store<
        Delete<By<Property, property::Id>>,
        Ok = (),
        Err = Traced<store::Error>,
    >,
{
    type Ok = ();
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        DeleteProperty(id): DeleteProperty,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        self.store()
            .execute(Delete(By::new(id.clone())))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        // Single-entry removal keeps the rest of the warm cache intact.
        self.catalog().remove(&id).await;

        Ok(())
    }
}

/// Error of [`DeleteProperty`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Store`] error.
    #[display("`Store` operation failed: {_0}")]
    Store(store::Error),
}

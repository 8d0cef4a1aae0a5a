//! [`Command`] updating an existing [`Property`].

use common::operations::{By, Update};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{property, Property},
    infra::{store, Store},
    Service,
};

use super::Command;

/// [`Command`] updating an existing [`Property`].
///
/// Last-write-wins: no optimistic-concurrency check is performed, so a
/// concurrent edit of the same [`Property`] silently overwrites.
#[derive(Clone, Debug)]
pub struct UpdateProperty {
    /// ID of the [`Property`] to update.
    pub id: property::Id,

    /// [`property::Patch`] to apply.
    pub patch: property::Patch,
}

impl<S> Command<UpdateProperty> for Service<S>
where
    S: Store<
        Update<By<Property, (property::Id, property::Patch)>>,
        Ok = (),
        Err = Traced<store::Error>,
    >,
{
    type Ok = ();
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: UpdateProperty,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let UpdateProperty { id, mut patch } = cmd;
        patch.updated_at = Some(property::UpdateDateTime::now());

        self.store()
            .execute(Update(By::new((id, patch))))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        self.catalog().invalidate().await;

        Ok(())
    }
}

/// Error of [`UpdateProperty`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Store`] error.
    #[display("`Store` operation failed: {_0}")]
    Store(store::Error),
}

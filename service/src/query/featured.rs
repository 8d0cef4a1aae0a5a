//! [`Query`] fetching the featured [`Property`] selection.

use std::convert::Infallible;

use crate::{domain::Property, Service};

use super::{FetchAll, Query};

/// [`Query`] fetching the [`Property`] entries promoted on the landing
/// page.
///
/// Always a subset of the cached catalog: delegates to an unforced
/// [`FetchAll`], so it inherits its cache and fallback behavior and never
/// errors either.
#[derive(Clone, Copy, Debug, Default)]
pub struct Featured;

impl<S> Query<Featured> for Service<S>
where
    Self: Query<FetchAll, Ok = Vec<Property>, Err = Infallible>,
{
    type Ok = Vec<Property>;
    type Err = Infallible;

    async fn execute(&self, _: Featured) -> Result<Self::Ok, Self::Err> {
        let props = match self.execute(FetchAll::default()).await {
            Ok(props) => props,
            Err(e) => match e {},
        };
        Ok(props.into_iter().filter(|p| p.is_featured).collect())
    }
}

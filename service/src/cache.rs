//! Process-wide [`Property`] catalog cache.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::{property, Property};

/// Shared in-memory cache of the [`Property`] catalog.
///
/// Cheap to [`Clone`]: all clones observe and mutate the same [`State`].
#[derive(Clone, Debug, Default)]
pub struct Catalog(Arc<RwLock<State>>);

/// State of a [`Catalog`].
#[derive(Clone, Debug, Default)]
pub enum State {
    /// Nothing is cached yet, or the cache was invalidated.
    #[default]
    Unfetched,

    /// Catalog fetched from the document store.
    ///
    /// May be empty, if the store genuinely holds no [`Property`].
    Live(Vec<Property>),

    /// Built-in sample catalog served instead of the store contents.
    Fallback(Vec<Property>),
}

impl State {
    /// Returns the cached [`Property`] entries, if any.
    #[must_use]
    pub fn entries(&self) -> Option<&[Property]> {
        match self {
            Self::Live(props) | Self::Fallback(props) => Some(props),
            Self::Unfetched => None,
        }
    }

    /// Indicates whether this [`State`] serves the sample catalog.
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }
}

impl Catalog {
    /// Returns a snapshot of the current [`State`] of this [`Catalog`].
    pub async fn state(&self) -> State {
        self.0.read().await.clone()
    }

    /// Returns the cached [`Property`] entries, if any.
    pub async fn entries(&self) -> Option<Vec<Property>> {
        self.0.read().await.entries().map(<[Property]>::to_vec)
    }

    /// Replaces the whole [`Catalog`] with the given store-fetched entries.
    pub async fn replace_live(&self, props: Vec<Property>) {
        *self.0.write().await = State::Live(props);
    }

    /// Replaces the whole [`Catalog`] with the given sample entries.
    pub async fn replace_fallback(&self, props: Vec<Property>) {
        *self.0.write().await = State::Fallback(props);
    }

    /// Drops everything cached in this [`Catalog`].
    ///
    /// The next catalog read will go to the document store again.
    pub async fn invalidate(&self) {
        *self.0.write().await = State::Unfetched;
    }

    /// Removes the single [`Property`] with the given `id` from this
    /// [`Catalog`], keeping the rest of the cache intact.
    ///
    /// No-op when nothing is cached or no such [`Property`] is cached.
    pub async fn remove(&self, id: &property::Id) {
        let mut state = self.0.write().await;
        match &mut *state {
            State::Live(props) | State::Fallback(props) => {
                props.retain(|p| &p.id != id);
            }
            State::Unfetched => {}
        }
    }
}

#[cfg(test)]
mod spec {
    use super::{Catalog, State};
    use crate::sample;

    #[tokio::test]
    async fn starts_unfetched() {
        let cache = Catalog::default();

        assert!(matches!(cache.state().await, State::Unfetched));
        assert_eq!(cache.entries().await, None);
    }

    #[tokio::test]
    async fn replaces_and_invalidates() {
        let cache = Catalog::default();

        cache.replace_live(sample::properties()).await;
        assert!(!cache.state().await.is_fallback());
        assert!(cache.entries().await.is_some_and(|e| !e.is_empty()));

        cache.invalidate().await;
        assert!(matches!(cache.state().await, State::Unfetched));
    }

    #[tokio::test]
    async fn fallback_state_is_distinguishable() {
        let cache = Catalog::default();

        cache.replace_fallback(sample::properties()).await;

        assert!(cache.state().await.is_fallback());
    }

    #[tokio::test]
    async fn removes_single_entry_in_place() {
        let cache = Catalog::default();
        let props = sample::properties();
        let victim = props[0].id.clone();
        let total = props.len();

        cache.replace_live(props).await;
        cache.remove(&victim).await;

        let left = cache.entries().await.unwrap();
        assert_eq!(left.len(), total - 1);
        assert!(left.iter().all(|p| p.id != victim));
        assert!(!cache.state().await.is_fallback());
    }

    #[tokio::test]
    async fn remove_on_unfetched_is_noop() {
        let cache = Catalog::default();

        cache.remove(&"missing".into()).await;

        assert!(matches!(cache.state().await, State::Unfetched));
    }

    #[tokio::test]
    async fn clones_share_state() {
        let cache = Catalog::default();
        let twin = cache.clone();

        cache.replace_live(sample::properties()).await;

        assert!(twin.entries().await.is_some());
    }
}

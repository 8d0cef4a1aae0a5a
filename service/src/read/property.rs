//! [`Property`]-related read definitions.

use rust_decimal::Decimal;

use crate::domain::{property, Property};

/// Filter narrowing down a [`Property`] catalog.
///
/// Every active predicate must hold for a [`Property`] to pass
/// (conjunction). A default [`Filter`] passes everything.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Filter {
    /// Text to search for, case-insensitively, in the title, label,
    /// description or region name (disjunction among those four).
    ///
    /// An empty string is no constraint.
    pub search: Option<String>,

    /// Exact [`property::Region`] to match.
    pub region: Option<property::Region>,

    /// Exact [`property::Kind`] to match.
    pub kind: Option<property::Kind>,

    /// Keep for-rent offers only.
    ///
    /// One-way: `false` is no constraint, not an exclusion.
    pub for_rent: bool,

    /// Keep for-sale offers only.
    ///
    /// One-way: `false` is no constraint, not an exclusion.
    pub for_sale: bool,

    /// Lowest acceptable [`property::Price`], inclusive.
    ///
    /// Zero counts as unset: UI sliders report an untouched handle as zero.
    pub min_price: Option<Decimal>,

    /// Highest acceptable [`property::Price`], inclusive.
    ///
    /// Never swapped with [`Filter::min_price`]: contradictory bounds
    /// simply match nothing.
    pub max_price: Option<Decimal>,

    /// Lowest acceptable number of bedrooms.
    ///
    /// Zero counts as unset.
    pub min_bedrooms: Option<property::Bedrooms>,

    /// Lowest acceptable number of bathrooms.
    ///
    /// Zero counts as unset.
    pub min_bathrooms: Option<property::Bathrooms>,
}

impl Filter {
    /// Checks whether the given [`Property`] passes this [`Filter`].
    #[must_use]
    pub fn matches(&self, p: &Property) -> bool {
        self.matches_search(p)
            && self.region.is_none_or(|r| p.region == r)
            && self.kind.is_none_or(|k| p.kind == k)
            && (!self.for_rent || p.for_rent)
            && (!self.for_sale || p.for_sale)
            && self
                .min_price
                .filter(|min| !min.is_zero())
                .is_none_or(|min| p.price.get() >= min)
            && self.max_price.is_none_or(|max| p.price.get() <= max)
            && self
                .min_bedrooms
                .filter(|min| *min > 0)
                .is_none_or(|min| p.bedrooms >= min)
            && self
                .min_bathrooms
                .filter(|min| *min > 0)
                .is_none_or(|min| p.bathrooms >= min)
    }

    /// Checks whether the given [`Property`] passes the search predicate of
    /// this [`Filter`].
    fn matches_search(&self, p: &Property) -> bool {
        let Some(needle) = self.search.as_deref().filter(|s| !s.is_empty())
        else {
            return true;
        };
        let needle = needle.to_lowercase();

        [
            p.title.as_ref(),
            p.label.as_ref(),
            p.description.as_ref(),
            p.region.to_string().as_str(),
        ]
        .into_iter()
        .any(|hay: &str| hay.to_lowercase().contains(&needle))
    }

    /// Applies this [`Filter`] to the given catalog, keeping the original
    /// order of the passing entries.
    #[must_use]
    pub fn apply(&self, catalog: &[Property]) -> Vec<Property> {
        catalog.iter().filter(|p| self.matches(p)).cloned().collect()
    }
}

#[cfg(test)]
mod filter_spec {
    use rust_decimal::Decimal;

    use super::Filter;
    use crate::{
        domain::property::{Kind, Region},
        sample,
    };

    #[test]
    fn default_is_identity() {
        let catalog = sample::properties();

        assert_eq!(Filter::default().apply(&catalog), catalog);
    }

    #[test]
    fn searches_case_insensitively_across_fields() {
        let catalog = sample::properties();

        let by_title = Filter {
            search: Some("LAGOON".into()),
            ..Filter::default()
        }
        .apply(&catalog);
        assert!(!by_title.is_empty());

        let by_region_name = Filter {
            search: Some("soma".into()),
            ..Filter::default()
        }
        .apply(&catalog);
        assert!(by_region_name.iter().any(|p| p.region == Region::SomaBay));

        let no_match = Filter {
            search: Some("ski chalet".into()),
            ..Filter::default()
        }
        .apply(&catalog);
        assert!(no_match.is_empty());
    }

    #[test]
    fn empty_search_is_no_constraint() {
        let catalog = sample::properties();

        let filtered = Filter {
            search: Some(String::new()),
            ..Filter::default()
        }
        .apply(&catalog);

        assert_eq!(filtered.len(), catalog.len());
    }

    #[test]
    fn narrows_by_region_and_kind() {
        let catalog = sample::properties();

        let villas = Filter {
            kind: Some(Kind::Villa),
            ..Filter::default()
        }
        .apply(&catalog);
        assert!(!villas.is_empty());
        assert!(villas.iter().all(|p| p.kind == Kind::Villa));

        let in_soma_bay = Filter {
            region: Some(Region::SomaBay),
            ..Filter::default()
        }
        .apply(&catalog);
        assert!(!in_soma_bay.is_empty());
        assert!(in_soma_bay.iter().all(|p| p.region == Region::SomaBay));
    }

    #[test]
    fn offering_flags_are_one_way() {
        let catalog = sample::properties();

        let for_rent = Filter {
            for_rent: true,
            ..Filter::default()
        }
        .apply(&catalog);
        assert!(!for_rent.is_empty());
        assert!(for_rent.iter().all(|p| p.for_rent));

        // Unset flags put no constraint, not an exclusion.
        let unconstrained = Filter::default().apply(&catalog);
        assert!(unconstrained.iter().any(|p| p.for_rent));
        assert!(unconstrained.iter().any(|p| !p.for_rent));
    }

    #[test]
    fn price_bounds_are_inclusive() {
        let catalog = sample::properties();
        let price = catalog[0].price.get();

        let exact = Filter {
            min_price: Some(price),
            max_price: Some(price),
            ..Filter::default()
        }
        .apply(&catalog);

        assert!(exact.iter().any(|p| p.id == catalog[0].id));
        assert!(exact.iter().all(|p| p.price.get() == price));
    }

    #[test]
    fn contradictory_price_bounds_match_nothing() {
        let filtered = Filter {
            min_price: Some(Decimal::from(2_000_000_u32)),
            max_price: Some(Decimal::from(1_000_000_u32)),
            ..Filter::default()
        }
        .apply(&sample::properties());

        assert!(filtered.is_empty());
    }

    #[test]
    fn zero_minimums_mean_no_bound() {
        let catalog = sample::properties();

        let unbounded = Filter {
            min_price: Some(Decimal::ZERO),
            min_bedrooms: Some(0),
            min_bathrooms: Some(0),
            ..Filter::default()
        }
        .apply(&catalog);

        assert_eq!(unbounded.len(), catalog.len());
    }

    #[test]
    fn narrows_by_room_minimums() {
        let filtered = Filter {
            min_bedrooms: Some(3),
            min_bathrooms: Some(3),
            ..Filter::default()
        }
        .apply(&sample::properties());

        assert!(!filtered.is_empty());
        assert!(filtered
            .iter()
            .all(|p| p.bedrooms >= 3 && p.bathrooms >= 3));
    }

    #[test]
    fn predicates_are_conjunctive() {
        let catalog = sample::properties();

        let filtered = Filter {
            region: Some(Region::Hurghada),
            kind: Some(Kind::Studio),
            for_rent: true,
            ..Filter::default()
        }
        .apply(&catalog);
        assert!(filtered.iter().all(|p| {
            p.region == Region::Hurghada
                && p.kind == Kind::Studio
                && p.for_rent
        }));

        let contradictory = Filter {
            kind: Some(Kind::Shop),
            min_bedrooms: Some(2),
            ..Filter::default()
        }
        .apply(&catalog);
        assert!(contradictory.is_empty());
    }

    #[test]
    fn keeps_catalog_order() {
        let filtered = Filter {
            region: Some(Region::Hurghada),
            ..Filter::default()
        }
        .apply(&sample::properties());

        assert!(filtered
            .windows(2)
            .all(|pair| pair[0].created_at >= pair[1].created_at));
    }
}

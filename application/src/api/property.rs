//! Property-related HTTP API.

use std::{fmt, str::FromStr};

use axum::{
    extract::{Path, Query},
    Extension, Json,
};
use http::StatusCode;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use serde_json::json;
use service::{
    command::{CreateProperty, DeleteProperty, UpdateProperty},
    domain::{
        property::{self, Kind, Region},
        Property,
    },
    query::{ById, Featured},
    read,
    Command as _,
};

use crate::{define_error, AsError as _, Context, Error, Provider, Service};

/// Query string parameters of [`list()`].
///
/// Empty string values are treated the same as absent parameters.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListParams {
    /// Case-insensitive needle to search textual fields for.
    #[serde(deserialize_with = "empty_as_none")]
    pub search: Option<String>,

    /// Exact [`Region`] to filter by.
    #[serde(deserialize_with = "empty_as_none")]
    pub region: Option<Region>,

    /// Exact [`Kind`] to filter by.
    #[serde(rename = "type", deserialize_with = "empty_as_none")]
    pub kind: Option<Kind>,

    /// Indicator whether only rentable properties should be returned.
    #[serde(deserialize_with = "empty_as_none")]
    pub for_rent: Option<bool>,

    /// Indicator whether only purchasable properties should be returned.
    #[serde(deserialize_with = "empty_as_none")]
    pub for_sale: Option<bool>,

    /// Inclusive lower price bound.
    #[serde(deserialize_with = "empty_as_none")]
    pub min_price: Option<Decimal>,

    /// Inclusive upper price bound.
    #[serde(deserialize_with = "empty_as_none")]
    pub max_price: Option<Decimal>,

    /// Minimum number of bedrooms.
    #[serde(deserialize_with = "empty_as_none")]
    pub min_bedrooms: Option<u16>,

    /// Minimum number of bathrooms.
    #[serde(deserialize_with = "empty_as_none")]
    pub min_bathrooms: Option<u16>,
}

impl From<ListParams> for read::Filter {
    fn from(params: ListParams) -> Self {
        let ListParams {
            search,
            region,
            kind,
            for_rent,
            for_sale,
            min_price,
            max_price,
            min_bedrooms,
            min_bathrooms,
        } = params;

        Self {
            search,
            region,
            kind,
            for_rent: for_rent.unwrap_or(false),
            for_sale: for_sale.unwrap_or(false),
            min_price,
            max_price,
            min_bedrooms,
            min_bathrooms,
        }
    }
}

/// Deserializes an absent or empty string as [`None`], parsing anything else
/// via [`FromStr`].
fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    use serde::de::Error as _;

    Option::<String>::deserialize(deserializer)?
        .filter(|raw| !raw.is_empty())
        .map(|raw| raw.parse().map_err(D::Error::custom))
        .transpose()
}

/// `GET /api/properties`
///
/// Lists the catalog, narrowed down by the provided [`ListParams`].
pub async fn list(
    Extension(provider): Extension<Provider>,
    Query(params): Query<ListParams>,
) -> Json<Vec<Property>> {
    provider.ensure_fetched().await;

    let filter = read::Filter::from(params);
    let snapshot = provider.snapshot().await;

    Json(filter.apply(&snapshot.properties))
}

/// `GET /api/properties/featured`
///
/// Lists the featured subset of the catalog.
pub async fn featured(
    Extension(service): Extension<Service>,
) -> Json<Vec<Property>> {
    Json(match service.execute(Featured).await {
        Ok(props) => props,
        Err(e) => match e {},
    })
}

/// `GET /api/properties/:id`
///
/// Returns a single property by its ID.
pub async fn by_id(
    Extension(service): Extension<Service>,
    Path(id): Path<String>,
) -> Result<Json<Property>, Error> {
    match service.execute(ById(property::Id::from(id))).await {
        Ok(Some(prop)) => Ok(Json(prop)),
        Ok(None) => Err(ApiError::PropertyNotFound.into()),
        Err(e) => match e {},
    }
}

/// `POST /api/properties`
///
/// Creates a new property out of the provided [`property::Details`].
///
/// Requires an admin [`Session`].
///
/// [`Session`]: crate::Session
pub async fn create(
    ctx: Context,
    Json(details): Json<property::Details>,
) -> Result<Json<serde_json::Value>, Error> {
    _ = ctx.admin_session().await?;

    let id = ctx
        .service()
        .execute(CreateProperty { details })
        .await
        .map_err(|e| e.into_error())?;

    Ok(Json(json!({ "id": id })))
}

/// `PATCH /api/properties/:id`
///
/// Applies the provided [`property::Patch`] to an existing property.
///
/// Requires an admin [`Session`].
///
/// [`Session`]: crate::Session
pub async fn update(
    ctx: Context,
    Path(id): Path<String>,
    Json(patch): Json<property::Patch>,
) -> Result<StatusCode, Error> {
    _ = ctx.admin_session().await?;

    ctx.service()
        .execute(UpdateProperty {
            id: property::Id::from(id),
            patch,
        })
        .await
        .map_err(|e| e.into_error())?;

    Ok(StatusCode::NO_CONTENT)
}

/// `DELETE /api/properties/:id`
///
/// Deletes an existing property.
///
/// Requires an admin [`Session`].
///
/// [`Session`]: crate::Session
pub async fn remove(
    ctx: Context,
    Path(id): Path<String>,
) -> Result<StatusCode, Error> {
    _ = ctx.admin_session().await?;

    ctx.service()
        .execute(DeleteProperty(property::Id::from(id)))
        .await
        .map_err(|e| e.into_error())?;

    Ok(StatusCode::NO_CONTENT)
}

/// `POST /api/catalog/refresh`
///
/// Forces a catalog refetch from the property store.
///
/// Requires an admin [`Session`].
///
/// [`Session`]: crate::Session
pub async fn refresh(
    ctx: Context,
    Extension(provider): Extension<Provider>,
) -> Result<StatusCode, Error> {
    _ = ctx.admin_session().await?;

    provider.refetch(true).await;

    Ok(StatusCode::NO_CONTENT)
}

define_error! {
    enum ApiError {
        #[code = "PROPERTY_NOT_FOUND"]
        #[status = NOT_FOUND]
        #[message = "Property not found"]
        PropertyNotFound,
    }
}

#[cfg(test)]
mod list_params_spec {
    use service::{domain::property::Region, read};

    use super::ListParams;

    #[test]
    fn empty_values_are_absent() {
        let params: ListParams = serde_urlencoded::from_str(
            "search=&region=&type=&forRent=&minPrice=",
        )
        .unwrap();

        assert_eq!(params.search, None);
        assert_eq!(params.region, None);
        assert_eq!(params.kind, None);
        assert_eq!(params.for_rent, None);
        assert_eq!(params.min_price, None);
    }

    #[test]
    fn parses_multi_word_region() {
        let params: ListParams =
            serde_urlencoded::from_str("region=Sahl+Hasheesh").unwrap();

        assert_eq!(params.region, Some(Region::SahlHasheesh));
    }

    #[test]
    fn rejects_unknown_region() {
        let res =
            serde_urlencoded::from_str::<ListParams>("region=Atlantis");

        assert!(res.is_err());
    }

    #[test]
    fn absent_flags_relax_the_filter() {
        let params: ListParams = serde_urlencoded::from_str("").unwrap();

        let filter = read::Filter::from(params);
        assert!(!filter.for_rent);
        assert!(!filter.for_sale);
    }
}

//! [`Property`] definitions.

use std::str::FromStr;

#[cfg(doc)]
use common::DateTime;
use common::{unit, DateTimeOf};
use derive_more::{AsRef, Deref, Display, From, Into};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Real estate listing offered by the agency.
#[derive(Clone, Debug, Deref, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    /// ID of this [`Property`].
    pub id: Id,

    /// [`Details`] of this [`Property`].
    #[deref]
    #[serde(flatten)]
    pub details: Details,

    /// [`DateTime`] when this [`Property`] was created.
    #[serde(with = "common::datetime::serde::rfc3339")]
    pub created_at: CreationDateTime,

    /// [`DateTime`] when this [`Property`] was mutated last time.
    #[serde(with = "common::datetime::serde::rfc3339")]
    pub updated_at: UpdateDateTime,
}

/// ID of a [`Property`].
///
/// Assigned by the document store on creation, and so is opaque for the
/// application.
#[derive(
    AsRef,
    Clone,
    Debug,
    Deserialize,
    Display,
    Eq,
    From,
    Hash,
    Into,
    PartialEq,
    Serialize,
)]
#[as_ref(forward)]
pub struct Id(String);

impl From<&str> for Id {
    fn from(s: &str) -> Self {
        Self(s.into())
    }
}

/// Attributes of a [`Property`] provided by an administrator.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Details {
    /// [`Title`] of the [`Property`].
    pub title: Title,

    /// Short [`Label`] rendered on the [`Property`] card.
    pub label: Label,

    /// Full [`Description`] of the [`Property`].
    pub description: Description,

    /// [`Region`] the [`Property`] is located in.
    pub region: Region,

    /// [`Kind`] of the [`Property`].
    #[serde(rename = "type")]
    pub kind: Kind,

    /// Indicator whether the [`Property`] is offered for rent.
    #[serde(default)]
    pub for_rent: bool,

    /// Indicator whether the [`Property`] is offered for sale.
    #[serde(default)]
    pub for_sale: bool,

    /// Indicator whether the [`Property`] is promoted on the landing page.
    #[serde(default)]
    pub is_featured: bool,

    /// [`Price`] of the [`Property`].
    pub price: Price,

    /// [`Currency`] the [`Price`] is nominated in.
    pub currency: Currency,

    /// Number of bedrooms in the [`Property`].
    pub bedrooms: Bedrooms,

    /// Number of bathrooms in the [`Property`].
    pub bathrooms: Bathrooms,

    /// [`Area`] of the [`Property`] in square meters.
    pub area: Area,

    /// Amenities the [`Property`] provides.
    #[serde(default)]
    pub amenities: Vec<String>,

    /// URL of the main image of the [`Property`].
    pub main_image: String,

    /// URLs of the gallery images of the [`Property`].
    #[serde(default)]
    pub gallery_images: Vec<String>,

    /// Geographic [`Coordinates`] of the [`Property`], if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
}

/// Title of a [`Property`].
#[derive(
    AsRef, Clone, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize,
)]
#[as_ref(forward)]
#[serde(try_from = "String")]
pub struct Title(String);

impl Title {
    /// Creates a new [`Title`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `title` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(title: impl Into<String>) -> Self {
        Self(title.into())
    }

    /// Creates a new [`Title`] if the given `title` is valid.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Option<Self> {
        let title = title.into();
        Self::check(&title).then_some(Self(title))
    }

    /// Checks whether the given `title` is a valid [`Title`].
    fn check(title: impl AsRef<str>) -> bool {
        let title = title.as_ref();
        title.trim() == title && !title.is_empty() && title.len() <= 512
    }
}

impl FromStr for Title {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Title`")
    }
}

impl TryFrom<String> for Title {
    type Error = &'static str;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s).ok_or("invalid `Title`")
    }
}

/// Short label of a [`Property`] rendered on its card.
#[derive(
    AsRef, Clone, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize,
)]
#[as_ref(forward)]
#[serde(try_from = "String")]
pub struct Label(String);

impl Label {
    /// Creates a new [`Label`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `label` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Creates a new [`Label`] if the given `label` is valid.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Option<Self> {
        let label = label.into();
        Self::check(&label).then_some(Self(label))
    }

    /// Checks whether the given `label` is a valid [`Label`].
    fn check(label: impl AsRef<str>) -> bool {
        let label = label.as_ref();
        label.trim() == label && !label.is_empty() && label.len() <= 128
    }
}

impl FromStr for Label {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Label`")
    }
}

impl TryFrom<String> for Label {
    type Error = &'static str;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s).ok_or("invalid `Label`")
    }
}

/// Full description of a [`Property`].
#[derive(
    AsRef, Clone, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize,
)]
#[as_ref(forward)]
#[serde(try_from = "String")]
pub struct Description(String);

impl Description {
    /// Creates a new [`Description`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `desc` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(desc: impl Into<String>) -> Self {
        Self(desc.into())
    }

    /// Creates a new [`Description`] if the given `desc` is valid.
    #[must_use]
    pub fn new(desc: impl Into<String>) -> Option<Self> {
        let desc = desc.into();
        Self::check(&desc).then_some(Self(desc))
    }

    /// Checks whether the given `desc` is a valid [`Description`].
    fn check(desc: impl AsRef<str>) -> bool {
        let desc = desc.as_ref();
        desc.trim() == desc && !desc.is_empty() && desc.len() <= 8192
    }
}

impl FromStr for Description {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Description`")
    }
}

impl TryFrom<String> for Description {
    type Error = &'static str;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s).ok_or("invalid `Description`")
    }
}

/// Resort region a [`Property`] may be located in.
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Eq,
    Hash,
    PartialEq,
    Serialize,
    strum::Display,
    strum::EnumString,
)]
pub enum Region {
    /// Hurghada city itself.
    Hurghada,

    /// Sahl Hasheesh bay south of Hurghada.
    #[serde(rename = "Sahl Hasheesh")]
    #[strum(serialize = "Sahl Hasheesh")]
    SahlHasheesh,

    /// El Gouna resort town north of Hurghada.
    #[serde(rename = "El Gouna")]
    #[strum(serialize = "El Gouna")]
    ElGouna,

    /// Soma Bay peninsula.
    #[serde(rename = "Soma Bay")]
    #[strum(serialize = "Soma Bay")]
    SomaBay,
}

/// Kind of a [`Property`].
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Eq,
    Hash,
    PartialEq,
    Serialize,
    strum::Display,
    strum::EnumString,
)]
pub enum Kind {
    /// Standalone villa.
    Villa,

    /// Apartment in a residential compound.
    Apartment,

    /// Single-room studio.
    Studio,

    /// Commercial shop unit.
    Shop,
}

/// Price of a [`Property`].
///
/// Guaranteed to be positive.
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Display,
    Eq,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
#[serde(try_from = "Decimal")]
pub struct Price(Decimal);

impl Price {
    /// Creates a new [`Price`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `amount` is positive.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Creates a new [`Price`] if the given `amount` is positive.
    #[must_use]
    pub fn new(amount: Decimal) -> Option<Self> {
        (amount > Decimal::ZERO).then_some(Self(amount))
    }

    /// Returns the amount of this [`Price`].
    #[must_use]
    pub fn get(self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Price {
    type Error = &'static str;

    fn try_from(amount: Decimal) -> Result<Self, Self::Error> {
        Self::new(amount).ok_or("`Price` must be positive")
    }
}

/// Area of a [`Property`] in square meters.
///
/// Guaranteed to be positive.
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Display,
    Eq,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
#[serde(try_from = "Decimal")]
pub struct Area(Decimal);

impl Area {
    /// Creates a new [`Area`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `value` is positive.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(value: Decimal) -> Self {
        Self(value)
    }

    /// Creates a new [`Area`] if the given `value` is positive.
    #[must_use]
    pub fn new(value: Decimal) -> Option<Self> {
        (value > Decimal::ZERO).then_some(Self(value))
    }

    /// Returns the value of this [`Area`].
    #[must_use]
    pub fn get(self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Area {
    type Error = &'static str;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value).ok_or("`Area` must be positive")
    }
}

/// Number of bedrooms in a [`Property`].
pub type Bedrooms = u16;

/// Number of bathrooms in a [`Property`].
pub type Bathrooms = u16;

/// Currency code of a [`Property`] price.
pub type Currency = String;

/// Geographic coordinates of a [`Property`].
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub struct Coordinates {
    /// Latitude in decimal degrees.
    pub lat: f64,

    /// Longitude in decimal degrees.
    pub lng: f64,
}

/// New [`Property`] as written to the document store.
///
/// Carries no [`Id`]: the store assigns one on insertion.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Draft {
    /// [`Details`] of the new [`Property`].
    #[serde(flatten)]
    pub details: Details,

    /// [`DateTime`] when the new [`Property`] is created.
    #[serde(with = "common::datetime::serde::rfc3339")]
    pub created_at: CreationDateTime,

    /// [`DateTime`] when the new [`Property`] is mutated last time.
    #[serde(with = "common::datetime::serde::rfc3339")]
    pub updated_at: UpdateDateTime,
}

/// Partial update of a [`Property`].
///
/// Only the provided fields are written to the document store.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Patch {
    /// New [`Title`] of the [`Property`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,

    /// New [`Label`] of the [`Property`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<Label>,

    /// New [`Description`] of the [`Property`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Description>,

    /// New [`Region`] of the [`Property`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<Region>,

    /// New [`Kind`] of the [`Property`].
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<Kind>,

    /// New for-rent indicator of the [`Property`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub for_rent: Option<bool>,

    /// New for-sale indicator of the [`Property`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub for_sale: Option<bool>,

    /// New featured indicator of the [`Property`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,

    /// New [`Price`] of the [`Property`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Price>,

    /// New [`Currency`] of the [`Property`] price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,

    /// New number of bedrooms in the [`Property`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bedrooms: Option<Bedrooms>,

    /// New number of bathrooms in the [`Property`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bathrooms: Option<Bathrooms>,

    /// New [`Area`] of the [`Property`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<Area>,

    /// New amenities of the [`Property`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amenities: Option<Vec<String>>,

    /// New main image URL of the [`Property`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_image: Option<String>,

    /// New gallery image URLs of the [`Property`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gallery_images: Option<Vec<String>>,

    /// New [`Coordinates`] of the [`Property`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,

    /// [`DateTime`] when the [`Property`] is mutated.
    ///
    /// Refreshed by the update operation itself, never accepted from the
    /// outside.
    #[serde(
        default,
        skip_deserializing,
        skip_serializing_if = "Option::is_none",
        serialize_with = "common::datetime::serde::rfc3339::option::serialize"
    )]
    pub updated_at: Option<UpdateDateTime>,
}

/// [`DateTime`] when a [`Property`] was created.
pub type CreationDateTime = DateTimeOf<(Property, unit::Creation)>;

/// [`DateTime`] when a [`Property`] was mutated last time.
pub type UpdateDateTime = DateTimeOf<(Property, unit::Update)>;

//! [`Lead`] definitions.

use std::str::FromStr;

#[cfg(doc)]
use common::DateTime;
use common::{to_ascii_digits, unit, DateTimeOf};
use derive_more::{AsRef, Display, From, Into};
use serde::{Deserialize, Serialize};

use super::property;

/// Prospective customer captured via a contact form.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    /// ID of this [`Lead`], if it reached the store already.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Id>,

    /// [`Name`] the prospect introduced themselves with.
    pub name: Name,

    /// [`Phone`] of the prospect.
    pub phone: Phone,

    /// Email address of the prospect, if provided.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Free-form message of the prospect, if provided.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// ID of the [`Property`] the prospect asked about, if any.
    ///
    /// Weak reference: never validated against the catalog, so may point to
    /// a [`Property`] deleted since the [`Lead`] was captured.
    ///
    /// [`Property`]: property::Property
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_id: Option<property::Id>,

    /// [`DateTime`] when this [`Lead`] was captured.
    #[serde(with = "common::datetime::serde::rfc3339")]
    pub created_at: CreationDateTime,
}

/// ID of a [`Lead`].
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

/// Name of a [`Lead`].
#[derive(
    AsRef, Clone, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize,
)]
#[as_ref(forward)]
#[serde(try_from = "String")]
pub struct Name(String);

impl Name {
    /// Creates a new [`Name`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `name` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Creates a new [`Name`] if the given `name` is valid.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        Self::check(&name).then_some(Self(name))
    }

    /// Checks whether the given `name` is a valid [`Name`].
    fn check(name: impl AsRef<str>) -> bool {
        let name = name.as_ref();
        name.trim() == name && !name.is_empty() && name.len() <= 512
    }
}

impl FromStr for Name {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Name`")
    }
}

impl TryFrom<String> for Name {
    type Error = &'static str;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s).ok_or("invalid `Name`")
    }
}

/// Phone number of a [`Lead`].
///
/// May be empty: the general contact form does not require one.
#[derive(
    AsRef,
    Clone,
    Debug,
    Default,
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
pub struct Phone(String);

impl Phone {
    /// Returns this [`Phone`] with localized numeral glyphs replaced by
    /// their ASCII equivalents.
    #[must_use]
    pub fn normalized(&self) -> Self {
        Self(to_ascii_digits(&self.0))
    }

    /// Returns only the ASCII digits of this [`Phone`].
    ///
    /// Suitable for building messenger deep links.
    #[must_use]
    pub fn digits(&self) -> String {
        to_ascii_digits(&self.0)
            .chars()
            .filter(char::is_ascii_digit)
            .collect()
    }
}

/// New [`Lead`] as written to the document store.
///
/// Carries no [`Id`]: the store assigns one on insertion.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Draft {
    /// [`Name`] of the new [`Lead`].
    pub name: Name,

    /// [`Phone`] of the new [`Lead`].
    pub phone: Phone,

    /// Email address of the new [`Lead`], if provided.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Free-form message of the new [`Lead`], if provided.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// ID of the [`Property`] the new [`Lead`] asked about, if any.
    ///
    /// [`Property`]: property::Property
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_id: Option<property::Id>,

    /// [`DateTime`] when the new [`Lead`] is captured.
    #[serde(with = "common::datetime::serde::rfc3339")]
    pub created_at: CreationDateTime,
}

/// [`DateTime`] when a [`Lead`] was captured.
pub type CreationDateTime = DateTimeOf<(Lead, unit::Creation)>;

#[cfg(test)]
mod phone_spec {
    use super::Phone;

    #[test]
    fn normalizes_localized_digits() {
        let phone = Phone::from("+٢٠١٢٢٤٤٧٠٧٥٧".to_owned());

        assert_eq!(phone.normalized(), Phone::from("+201224470757".to_owned()));
    }

    #[test]
    fn extracts_digits_only() {
        let phone = Phone::from("+20 (122) 447-07-57".to_owned());

        assert_eq!(phone.digits(), "201224470757");
    }
}

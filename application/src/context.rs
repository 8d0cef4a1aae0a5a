//! [`Context`]-related definitions.

use axum::{async_trait, extract::FromRequestParts, RequestPartsExt as _};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use common::DateTime;
use derive_more::Debug;
use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use serde::Deserialize;
use tokio::sync::OnceCell;

use crate::{define_error, AsError as _, Error, Service};

/// Application context.
#[derive(Debug)]
pub struct Context {
    /// [`Service`] instance.
    service: Service,

    /// Admin token verification material.
    auth: Auth,

    /// Parts of the HTTP request.
    parts: http::request::Parts,

    /// Authenticated admin [`Session`].
    admin: OnceCell<Session>,
}

/// Admin token verification material, shared via an [`Extension`].
///
/// [`Extension`]: axum::Extension
#[derive(Clone, Debug)]
pub struct Auth {
    /// Key the admin [JWT]s are verified with.
    ///
    /// [JWT]: https://wikipedia.org/wiki/JSON_Web_Token
    #[debug(skip)]
    decoding_key: DecodingKey,
}

impl Auth {
    /// Creates a new [`Auth`] verifying tokens signed with the provided
    /// `secret`.
    #[must_use]
    pub fn new(secret: &str) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
        }
    }
}

impl Context {
    /// Returns [`Service`] instance of this [`Context`].
    #[must_use]
    pub fn service(&self) -> &Service {
        &self.service
    }

    /// Returns the admin [`Session`] of the current HTTP request.
    ///
    /// # Errors
    ///
    /// Errors if:
    /// - the current HTTP request is not authorized;
    /// - the provided authentication token is invalid.
    pub async fn admin_session(&self) -> Result<Session, Error> {
        self.admin
            .get_or_try_init(|| self.authenticate())
            .await
            .cloned()
    }

    /// Performs the admin [`Session`] authentication.
    async fn authenticate(&self) -> Result<Session, Error> {
        let res = self
            .parts
            .clone()
            .extract::<TypedHeader<Authorization<Bearer>>>()
            .await;
        match res {
            Ok(TypedHeader(Authorization(bearer))) => jsonwebtoken::decode::<
                Claims,
            >(
                bearer.token(),
                &self.auth.decoding_key,
                &Validation::new(Algorithm::HS256),
            )
            .map(|token| Session {
                subject: token.claims.sub,
                expires_at: DateTime::from_unix_timestamp(token.claims.exp)
                    .unwrap_or(DateTime::UNIX_EPOCH),
            })
            .map_err(|_| AuthError::InvalidToken.into()),
            Err(e) => {
                if e.is_missing() {
                    Err(AuthError::AuthorizationRequired.into())
                } else {
                    Err(e.into_error())
                }
            }
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Context
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(
        parts: &mut http::request::Parts,
        _: &S,
    ) -> Result<Self, Self::Rejection> {
        let service = parts
            .extensions
            .get::<Service>()
            .cloned()
            .ok_or_else(|| Error::internal(&"missing `Service` extension"))?;
        let auth = parts
            .extensions
            .get::<Auth>()
            .cloned()
            .ok_or_else(|| Error::internal(&"missing `Auth` extension"))?;

        Ok(Self {
            service,
            auth,
            parts: parts.clone(),
            admin: OnceCell::new(),
        })
    }
}

/// Claims carried by an admin [JWT].
///
/// [JWT]: https://wikipedia.org/wiki/JSON_Web_Token
#[derive(Debug, Deserialize)]
struct Claims {
    /// Subject of the token.
    sub: String,

    /// Expiration timestamp of the token, in Unix seconds.
    exp: i64,
}

/// Admin session.
#[derive(Clone, Debug)]
pub struct Session {
    /// Subject the admin token was issued to.
    pub subject: String,

    /// [`DateTime`] when this [`Session`] expires.
    pub expires_at: DateTime,
}

define_error! {
    enum AuthError {
        #[code = "AUTHORIZATION_REQUIRED"]
        #[status = UNAUTHORIZED]
        #[message = "Authorization required"]
        AuthorizationRequired,

        #[code = "INVALID_TOKEN"]
        #[status = UNAUTHORIZED]
        #[message = "Invalid authorization token"]
        InvalidToken,
    }
}

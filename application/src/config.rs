//! [`Config`]-related definitions.

use config::{builder::DefaultState, ConfigBuilder, ConfigError};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use smart_default::SmartDefault;

/// Application configuration.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    /// Server configuration.
    pub server: Server,

    /// Document store configuration.
    pub store: Store,

    /// Service configuration.
    pub service: Service,

    /// Contact channels configuration.
    pub contact: Contact,

    /// Lead notification configuration.
    pub notify: Notify,

    /// Log configuration.
    pub log: Log,
}

impl Config {
    /// Creates a new [`Config`] by:
    /// - loading it from the provided `path` (if any);
    /// - merging it with the environment variables (if any);
    /// - using default values for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(path: impl AsRef<str>) -> Result<Self, ConfigError> {
        ConfigBuilder::<DefaultState>::default()
            .add_source(config::File::with_name(path.as_ref()).required(false))
            .add_source(config::Environment::with_prefix("CONF").separator("."))
            .build()?
            .try_deserialize()
    }
}

/// Server configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Server {
    /// Host to bind the server to.
    #[default("0.0.0.0".to_owned())]
    pub host: String,

    /// Port to bind the server to.
    #[default(8080)]
    pub port: u16,

    /// [CORS] configuration.
    ///
    /// [CORS]: https://developer.mozilla.org/en-US/docs/Web/HTTP/CORS
    pub cors: Cors,
}

/// [CORS] configuration.
///
/// [CORS]: https://developer.mozilla.org/en-US/docs/Web/HTTP/CORS
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Cors {
    /// List of allowed origins.
    #[default(vec!["*".to_owned()])]
    pub origins: Vec<String>,
}

/// Document store configuration.
#[derive(Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Store {
    /// Base URL of the store REST API.
    #[default("http://127.0.0.1:8090/rest/v1".to_owned())]
    pub base_url: String,

    /// API key to authenticate with.
    #[default(SecretString::from(String::new()))]
    pub api_key: SecretString,

    /// Collection holding property documents.
    #[default("properties".to_owned())]
    pub properties_collection: String,

    /// Collection holding lead documents.
    #[default("leads".to_owned())]
    pub leads_collection: String,
}

// Duplicating the `api_key` requires exposing it.
impl Clone for Store {
    fn clone(&self) -> Self {
        use secrecy::ExposeSecret as _;

        Self {
            base_url: self.base_url.clone(),
            api_key: SecretString::from(
                self.api_key.expose_secret().to_owned(),
            ),
            properties_collection: self.properties_collection.clone(),
            leads_collection: self.leads_collection.clone(),
        }
    }
}

impl From<Store> for service::infra::store::rest::Config {
    fn from(value: Store) -> Self {
        let Store {
            base_url,
            api_key,
            properties_collection,
            leads_collection,
        } = value;

        Self {
            base_url,
            api_key,
            properties_collection,
            leads_collection,
        }
    }
}

/// Service configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Service {
    /// [JWT] secret the admin tokens are verified with.
    ///
    /// [JWT]: https://wikipedia.org/wiki/JSON_Web_Token
    #[default("secret".to_owned())]
    pub admin_jwt_secret: String,

    /// Indicator whether the sample catalog should be served without ever
    /// touching the property store.
    pub force_sample_catalog: bool,
}

impl From<Service> for service::Config {
    fn from(value: Service) -> Self {
        Self {
            force_sample_catalog: value.force_sample_catalog,
        }
    }
}

/// Contact channels configuration.
///
/// Every channel may be overridden independently; an absent override uses
/// the documented fallback literal.
#[derive(Clone, Debug, Deserialize, Serialize, SmartDefault)]
#[serde(default, rename_all(serialize = "camelCase"))]
pub struct Contact {
    /// Email address of the agency owner.
    #[default("mafdyzakaria2050@gmail.com".to_owned())]
    pub email: String,

    /// Phone number of the agency owner.
    #[default("+201224470757".to_owned())]
    pub phone: String,

    /// WhatsApp number the lead deep links point at.
    #[default("201224470757".to_owned())]
    pub whatsapp_number: String,

    /// WhatsApp profile URL.
    #[default("https://wa.me/201224470757".to_owned())]
    pub whatsapp_url: String,

    /// Telegram profile URL.
    #[default("https://t.me/+201224470757".to_owned())]
    pub telegram_url: String,

    /// Viber deep link.
    #[default("viber://chat?number=201224470757".to_owned())]
    pub viber_url: String,

    /// Facebook page URL.
    #[default("https://www.facebook.com/share/1EbKv5MC5t/".to_owned())]
    pub facebook_url: String,

    /// Instagram profile URL.
    #[default(
        "https://www.instagram.com/mafdylabib?igsh=NDYxNzc0d3c3Nmxk"
            .to_owned()
    )]
    pub instagram_url: String,
}

/// Lead notification configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Notify {
    /// URL of the endpoint to `POST` captured leads to.
    ///
    /// No outbound notifications are dispatched when absent, which is a
    /// supported degraded mode rather than an error.
    pub endpoint: Option<String>,
}

/// Log configuration.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Log {
    /// Log level.
    pub level: LogLevel,
}

/// Log level.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogLevel {
    /// Designates very low priority, often extremely verbose, information.
    Trace,

    /// Designates lower priority information.
    Debug,

    /// Designates useful information.
    #[default]
    Info,

    /// Designates hazardous situations.
    Warn,

    /// Designates very serious errors.
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Trace => Self::TRACE,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Info => Self::INFO,
            LogLevel::Warn => Self::WARN,
            LogLevel::Error => Self::ERROR,
        }
    }
}

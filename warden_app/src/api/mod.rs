//! Clients for the third-party lookup APIs.
//!
//! All commands share one [`Client`]. Every request is a bounded,
//! single-attempt GET; there are no retries.

use std::time::Duration;

use serde::Deserialize;

mod giphy;
mod image_search;
mod inspirobot;
pub mod memegen;
mod r6stats;
mod weather;

pub use r6stats::{PlayerStats, QueueStats};
pub use weather::WeatherReport;

/// Bound for every outbound request.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

const USER_AGENT: &str = concat!("warden/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The upstream answered with a non-success status.
    ///
    /// These are reported back to the invoking user with the exact code.
    #[error("{status}: {message}")]
    Status { status: u16, message: String },

    /// The upstream answered successfully but with an empty result set.
    ///
    /// Also reported back to the invoking user.
    #[error("no {what} found")]
    NotFound { what: &'static str },

    /// Transport-level failure. Only the operator gets to see these.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API needs a key that isn't configured.
    #[error("missing {0} API key")]
    MissingKey(&'static str),
}

/// API keys for the lookup providers. All optional; commands whose
/// provider has no key are not registered.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Credentials {
    pub image_search_key: Option<String>,
    pub giphy_key: Option<String>,
    pub r6stats_key: Option<String>,
}

/// Base URLs of the lookup providers, overridable for tests.
#[derive(Debug, Clone)]
pub struct Endpoints {
    pub image_search: String,
    pub giphy: String,
    pub inspirobot: String,
    pub r6stats: String,
    pub weather: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            image_search: "https://api.cognitive.microsoft.com/bing/v7.0/images/search".to_owned(),
            giphy: "https://api.giphy.com/v1/gifs/search".to_owned(),
            inspirobot: "https://inspirobot.me/api".to_owned(),
            r6stats: "https://api2.r6stats.com/public-api".to_owned(),
            weather: "https://wttr.in".to_owned(),
        }
    }
}

/// Shared client for all lookup providers.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    credentials: Credentials,
    endpoints: Endpoints,
}

impl Client {
    /// Creates a client against the real provider endpoints.
    pub fn new(credentials: Credentials) -> anyhow::Result<Self> {
        Self::with_endpoints(credentials, Endpoints::default())
    }

    /// Creates a client against custom endpoints.
    pub fn with_endpoints(credentials: Credentials, endpoints: Endpoints) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            http,
            credentials,
            endpoints,
        })
    }

    fn image_search_key(&self) -> Result<&str, Error> {
        self.credentials
            .image_search_key
            .as_deref()
            .ok_or(Error::MissingKey("image search"))
    }

    fn giphy_key(&self) -> Result<&str, Error> {
        self.credentials
            .giphy_key
            .as_deref()
            .ok_or(Error::MissingKey("giphy"))
    }

    fn r6stats_key(&self) -> Result<&str, Error> {
        self.credentials
            .r6stats_key
            .as_deref()
            .ok_or(Error::MissingKey("r6stats"))
    }
}

/// Maps a non-success response to [`Error::Status`] with the status line
/// the upstream answered with.
fn check_status(response: reqwest::Response) -> Result<reqwest::Response, Error> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(Error::Status {
            status: status.as_u16(),
            message: status.canonical_reason().unwrap_or("Unknown Error").to_owned(),
        })
    }
}

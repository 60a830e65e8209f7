//! REST client configuration
//!
//! Configuration consumed by the transport layer when it builds requests:
//! the bot token, the API version to target, and an optional proxy base URL.

use url::Url;

use crate::error::Result;

/// Base URL of Guilded's REST API
pub const GUILDED_API_URL: &str = "https://www.guilded.gg/api";

/// API versions this library supports
///
/// Currently only v1 exists. Kept as a closed enum so the accepted set stays
/// literal-narrowed rather than an arbitrary integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApiVersion {
    #[default]
    V1,
}

impl ApiVersion {
    /// Get the numeric version used in request paths
    pub fn number(&self) -> u8 {
        match self {
            ApiVersion::V1 => 1,
        }
    }
}

/// HTTP methods the Guilded API accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

impl RequestMethod {
    /// Get the wire representation of the method
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestMethod::Get => "GET",
            RequestMethod::Post => "POST",
            RequestMethod::Put => "PUT",
            RequestMethod::Delete => "DELETE",
            RequestMethod::Patch => "PATCH",
        }
    }
}

/// Options for the REST client
///
/// The token is the only required field. Version and proxy URL are
/// independently overridable.
#[derive(Debug, Clone)]
pub struct RestOptions {
    /// The bot token to be used for making requests
    token: String,
    /// The version of the API to be used for making requests
    version: ApiVersion,
    /// If set, all requests are sent to this base URL instead of Guilded's
    /// REST API. Meant for bot developers running a proxy rest system.
    proxy_url: Option<Url>,
}

impl RestOptions {
    /// Create options with the default API version and no proxy
    pub fn new(token: impl Into<String>) -> Self {
        RestOptions {
            token: token.into(),
            version: ApiVersion::default(),
            proxy_url: None,
        }
    }

    /// Target a specific API version
    pub fn with_version(mut self, version: ApiVersion) -> Self {
        self.version = version;
        self
    }

    /// Redirect all requests to a proxy base URL
    pub fn with_proxy_url(mut self, proxy_url: &str) -> Result<Self> {
        self.proxy_url = Some(Url::parse(proxy_url)?);
        Ok(self)
    }

    /// The bot token
    pub fn token(&self) -> &str {
        &self.token
    }

    /// The API version requests should target
    pub fn version(&self) -> ApiVersion {
        self.version
    }

    /// The proxy base URL, if one was set
    pub fn proxy_url(&self) -> Option<&Url> {
        self.proxy_url.as_ref()
    }

    /// The effective base URL for requests
    ///
    /// The proxy URL verbatim when set, otherwise Guilded's API host with the
    /// version segment appended.
    pub fn base_url(&self) -> String {
        match &self.proxy_url {
            Some(url) => url.as_str().trim_end_matches('/').to_string(),
            None => format!("{}/v{}", GUILDED_API_URL, self.version.number()),
        }
    }
}

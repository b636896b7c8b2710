//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around the connection settings
//! of an appliance. Invalid values are rejected on construction with clear
//! error messages.

use crate::error::ConfigError;
use std::fmt;
use url::Url;

/// A validated root URL of the appliance REST API.
///
/// The URL must be absolute, use `http` or `https`, and name a host. It may
/// either be a bare host (`https://lb.example.com:9070`) or already point at
/// the configuration root (`https://lb.example.com:9070/api/tm/3.5/config/active/`).
///
/// # Example
///
/// ```rust
/// use stingray_api::ApiUrl;
///
/// let url = ApiUrl::new("https://lb.example.com:9070").unwrap();
/// assert_eq!(url.host_name(), Some("lb.example.com"));
/// assert!(url.is_bare_host());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiUrl(Url);

impl ApiUrl {
    /// Creates a new validated API URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL cannot be parsed,
    /// uses a scheme other than `http`/`https`, or has no host.
    pub fn new(url: impl AsRef<str>) -> Result<Self, ConfigError> {
        let raw = url.as_ref().trim();
        let invalid = |reason: &str| ConfigError::InvalidBaseUrl {
            url: raw.to_string(),
            reason: reason.to_string(),
        };

        let parsed = Url::parse(raw).map_err(|e| invalid(&e.to_string()))?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(invalid("scheme must be http or https"));
        }
        if parsed.host_str().map_or(true, str::is_empty) {
            return Err(invalid("missing host"));
        }

        Ok(Self(parsed))
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> Option<&str> {
        self.0.host_str()
    }

    /// Returns `true` when the URL carries no path beyond the root `/`.
    #[must_use]
    pub fn is_bare_host(&self) -> bool {
        matches!(self.0.path(), "" | "/")
    }

    /// Returns the parsed URL.
    #[must_use]
    pub const fn as_url(&self) -> &Url {
        &self.0
    }
}

impl AsRef<str> for ApiUrl {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for ApiUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}

/// A validated API username.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Username(String);

impl Username {
    /// Creates a new validated username.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyUsername`] if the username is empty.
    pub fn new(username: impl Into<String>) -> Result<Self, ConfigError> {
        let username = username.into();
        if username.is_empty() {
            return Err(ConfigError::EmptyUsername);
        }
        Ok(Self(username))
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated API password.
///
/// The `Debug` implementation masks the value, displaying only
/// `Password(*****)`, so it cannot leak into logs.
///
/// # Example
///
/// ```rust
/// use stingray_api::Password;
///
/// let password = Password::new("hunter2").unwrap();
/// assert_eq!(format!("{:?}", password), "Password(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    /// Creates a new validated password.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyPassword`] if the password is empty.
    pub fn new(password: impl Into<String>) -> Result<Self, ConfigError> {
        let password = password.into();
        if password.is_empty() {
            return Err(ConfigError::EmptyPassword);
        }
        Ok(Self(password))
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(*****)")
    }
}

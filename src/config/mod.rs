//! Configuration types for the Stingray API client.
//!
//! This module provides the connection settings used to construct a
//! [`StingrayClient`](crate::clients::StingrayClient).
//!
//! # Overview
//!
//! - [`StingrayConfig`]: The configuration struct holding all client settings
//! - [`StingrayConfigBuilder`]: A builder for constructing [`StingrayConfig`] instances
//! - [`ApiUrl`]: A validated root URL of the appliance API
//! - [`Username`]: A validated API username
//! - [`Password`]: A validated API password with masked debug output
//!
//! # Example
//!
//! ```rust
//! use stingray_api::{StingrayConfig, ApiUrl, Username, Password};
//!
//! let config = StingrayConfig::builder()
//!     .base_url(ApiUrl::new("https://lb.example.com:9070").unwrap())
//!     .username(Username::new("admin").unwrap())
//!     .password(Password::new("secret").unwrap())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;

pub use newtypes::{ApiUrl, Password, Username};

use crate::error::ConfigError;

/// Connection settings for a Stingray appliance.
///
/// `StingrayConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct StingrayConfig {
    base_url: ApiUrl,
    username: Username,
    password: Password,
    user_agent_prefix: Option<String>,
}

impl StingrayConfig {
    /// Creates a new builder for constructing a `StingrayConfig`.
    #[must_use]
    pub fn builder() -> StingrayConfigBuilder {
        StingrayConfigBuilder::new()
    }

    /// Returns the root URL of the appliance API.
    #[must_use]
    pub const fn base_url(&self) -> &ApiUrl {
        &self.base_url
    }

    /// Returns the API username.
    #[must_use]
    pub const fn username(&self) -> &Username {
        &self.username
    }

    /// Returns the API password.
    #[must_use]
    pub const fn password(&self) -> &Password {
        &self.password
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify StingrayConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StingrayConfig>();
};

/// Builder for constructing [`StingrayConfig`] instances.
///
/// Required fields are `base_url`, `username` and `password`.
#[derive(Debug, Default)]
pub struct StingrayConfigBuilder {
    base_url: Option<ApiUrl>,
    username: Option<Username>,
    password: Option<Password>,
    user_agent_prefix: Option<String>,
}

impl StingrayConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the root URL of the appliance API (required).
    #[must_use]
    pub fn base_url(mut self, url: ApiUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the API username (required).
    #[must_use]
    pub fn username(mut self, username: Username) -> Self {
        self.username = Some(username);
        self
    }

    /// Sets the API password (required).
    #[must_use]
    pub fn password(mut self, password: Password) -> Self {
        self.password = Some(password);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`StingrayConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `base_url`,
    /// `username` or `password` are not set.
    pub fn build(self) -> Result<StingrayConfig, ConfigError> {
        let base_url = self
            .base_url
            .ok_or(ConfigError::MissingRequiredField { field: "base_url" })?;
        let username = self
            .username
            .ok_or(ConfigError::MissingRequiredField { field: "username" })?;
        let password = self
            .password
            .ok_or(ConfigError::MissingRequiredField { field: "password" })?;

        Ok(StingrayConfig {
            base_url,
            username,
            password,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

//! The two API namespaces a resource can live in.
//!
//! Configuration resources sit under `/api/tm/{version}/config/active/` and
//! statistics resources under the sibling
//! `/api/tm/{version}/status/local_tm/statistics/`. A resource fixes its
//! namespace at the type level by naming one of the [`NamespacePolicy`]
//! markers, [`Configuration`] or [`Statistics`].

use std::fmt;
use std::str::FromStr;

use crate::clients::ClientError;

/// Which API sub-tree a resource belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Namespace {
    /// The configuration tree (read/write).
    Configuration,
    /// The runtime statistics tree (read-only).
    Statistics,
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration => f.write_str("config"),
            Self::Statistics => f.write_str("statistics"),
        }
    }
}

impl FromStr for Namespace {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "config" | "configuration" => Ok(Self::Configuration),
            "stats" | "statistics" => Ok(Self::Statistics),
            _ => Err(ClientError::InvalidNamespace {
                namespace: s.to_string(),
            }),
        }
    }
}

/// A type-level namespace choice for a resource.
pub trait NamespacePolicy {
    /// The namespace this policy selects.
    const NAMESPACE: Namespace;
}

/// Places a resource in the configuration namespace.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Configuration;

impl NamespacePolicy for Configuration {
    const NAMESPACE: Namespace = Namespace::Configuration;
}

/// Places a resource in the statistics namespace.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Statistics;

impl NamespacePolicy for Statistics {
    const NAMESPACE: Namespace = Namespace::Statistics;
}

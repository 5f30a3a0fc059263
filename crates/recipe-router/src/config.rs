// File: src/config.rs
// Purpose: Route table configuration parsed from routes.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::table::DEFAULT_MAX_REDIRECTS;
use crate::{RouteEntry, RouteError, RouteKey, RouteTable, TableVersion, ViewId};

/// Route table configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct RouterConfig {
    #[serde(default)]
    pub routing: RoutingConfig,

    #[serde(default)]
    pub routes: Vec<RouteConfig>,
}

/// Matching behavior shared by every route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutingConfig {
    /// Whether static segments compare case-insensitively (default: false)
    #[serde(default = "default_false")]
    pub case_insensitive: bool,

    /// History base stripped from every location (e.g. "/app")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_path: Option<String>,

    /// Redirect hops followed before giving up
    #[serde(default = "default_max_redirects")]
    pub max_redirects: usize,
}

/// One `[[routes]]` entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteConfig {
    pub path: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view: Option<ViewId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,

    #[serde(default = "default_false", skip_serializing_if = "is_false")]
    pub props: bool,

    /// Parameter whose value keys the view instance
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub meta: BTreeMap<String, String>,
}

fn default_false() -> bool {
    false
}

fn is_false(value: &bool) -> bool {
    !*value
}

fn default_max_redirects() -> usize {
    DEFAULT_MAX_REDIRECTS
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            case_insensitive: false,
            base_path: None,
            max_redirects: default_max_redirects(),
        }
    }
}

impl RouteConfig {
    /// Builds the entry, rejecting view/redirect combinations that make no sense
    pub fn to_entry(&self) -> Result<RouteEntry, RouteError> {
        let entry = match (&self.view, &self.redirect) {
            (Some(view), None) => RouteEntry::view(&self.path, view.clone())?,
            (None, Some(to)) => RouteEntry::redirect(&self.path, to.as_str())?,
            _ => {
                return Err(RouteError::InvalidEntry {
                    pattern: self.path.clone(),
                })
            }
        };

        if entry.is_redirect() && (self.props || self.key.is_some()) {
            return Err(RouteError::InvalidEntry {
                pattern: self.path.clone(),
            });
        }

        let entry = self
            .meta
            .iter()
            .fold(entry.with_props_enabled(self.props), |entry, (k, v)| {
                entry.with_meta(k.as_str(), v.as_str())
            });

        let entry = match &self.key {
            Some(param) => entry.with_key(RouteKey::param(param.as_str()))?,
            None => entry,
        };

        Ok(match &self.name {
            Some(name) => entry.with_name(name.as_str()),
            None => entry,
        })
    }

    /// Config form of an entry; custom key functions cannot be expressed and are dropped
    pub fn from_entry(entry: &RouteEntry) -> Self {
        Self {
            path: entry.pattern.clone(),
            view: entry.view_id().cloned(),
            redirect: entry.redirect_to().map(str::to_string),
            props: entry.props,
            key: entry
                .key
                .as_ref()
                .and_then(|key| key.param_name())
                .map(str::to_string),
            name: entry.name.clone(),
            meta: entry
                .metadata
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        }
    }
}

impl RouterConfig {
    /// Load configuration from a routes.toml file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // Missing file means an empty table
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read route config: {:?}", path))?;

        Self::parse(&content).with_context(|| format!("Failed to parse route config: {:?}", path))
    }

    /// Parse configuration from TOML text; blank text gives the default config
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        Ok(toml::from_str(content)?)
    }

    /// Config describing one of the built-in recipe tables
    pub fn from_version(version: TableVersion) -> Result<Self, RouteError> {
        Ok(Self::from_table(&version.table()?))
    }

    pub fn from_table(table: &RouteTable) -> Self {
        Self {
            routing: RoutingConfig {
                case_insensitive: table.is_case_insensitive(),
                base_path: table.base_path().map(str::to_string),
                max_redirects: table.max_redirects(),
            },
            routes: table.routes().iter().map(RouteConfig::from_entry).collect(),
        }
    }

    /// Builds the route table, failing on the first invalid route
    pub fn build_table(&self) -> Result<RouteTable, RouteError> {
        let entries = self
            .routes
            .iter()
            .map(RouteConfig::to_entry)
            .collect::<Result<Vec<_>, _>>()?;

        let table = RouteTable::new()
            .with_case_sensitivity(self.routing.case_insensitive)
            .with_max_redirects(self.routing.max_redirects)
            .with_routes(entries);

        Ok(match &self.routing.base_path {
            Some(base) => table.with_base_path(base.as_str()),
            None => table,
        })
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize route config")
    }
}

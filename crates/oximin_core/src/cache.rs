use anyhow::{Context, Result};
use indexmap::IndexMap;
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;

use crate::host::Host;

/// Keys are stored with a `$` prefix so names like `__proto__` are safe as
/// plain object keys in the JSON file.
const KEY_PREFIX: char = '$';

/// One namespace (variables or properties) of the rename cache.
///
/// Serialized as `{ "cname": <last counter used>, "props": { "$name": "a" } }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MangleCache {
    #[serde(default = "unused_counter")]
    pub cname: i64,
    #[serde(default)]
    props: IndexMap<String, String>,
}

impl Default for MangleCache {
    fn default() -> Self {
        Self { cname: unused_counter(), props: IndexMap::new() }
    }
}

impl MangleCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.props.get(&prefixed(name)).map(String::as_str)
    }

    /// Records `name -> mangled`, returning the previous assignment if any.
    pub fn insert(&mut self, name: &str, mangled: impl Into<String>) -> Option<String> {
        self.props.insert(prefixed(name), mangled.into())
    }

    pub fn len(&self) -> usize {
        self.props.len()
    }

    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    pub fn mangled_names(&self) -> impl Iterator<Item = &str> {
        self.props.values().map(String::as_str)
    }

    /// First counter value that has not been handed out yet.
    pub fn next_counter(&self) -> usize {
        usize::try_from(self.cname + 1).unwrap_or(0)
    }

    /// Marks every counter value below `next` as used.
    pub fn advance_counter(&mut self, next: usize) {
        let last = i64::try_from(next).unwrap_or(i64::MAX) - 1;
        self.cname = self.cname.max(last);
    }
}

/// The persistent rename cache: a `vars` and a `props` namespace.
///
/// Any other top-level keys found in the file are carried through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NameCache {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vars: Option<MangleCache>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub props: Option<MangleCache>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl NameCache {
    pub fn parse(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// Loads the cache at `path`, starting fresh when the file is missing or
    /// does not hold a valid cache.
    pub fn load<H: Host + ?Sized>(host: &H, path: &Path) -> Self {
        trace!("Loading name cache from {}", path.display());
        let text = match host.read_file(path) {
            Ok(text) => text,
            Err(e) => {
                debug!("Name cache {} not readable ({}), starting empty", path.display(), e);
                return Self::default();
            }
        };

        match Self::parse(&text) {
            Ok(cache) => {
                debug!(
                    "Loaded name cache with {} vars and {} props",
                    cache.vars.as_ref().map_or(0, MangleCache::len),
                    cache.props.as_ref().map_or(0, MangleCache::len)
                );
                cache
            }
            Err(e) => {
                debug!("Name cache {} is not valid ({}), starting empty", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn save<H: Host + ?Sized>(&self, host: &H, path: &Path) -> Result<()> {
        let json = self.to_json().context("Failed to serialize name cache")?;
        host.write_file(path, &json)
            .with_context(|| format!("Failed to write name cache {}", path.display()))?;
        debug!("Wrote name cache to {}", path.display());
        Ok(())
    }
}

fn prefixed(name: &str) -> String {
    let mut key = String::with_capacity(name.len() + 1);
    key.push(KEY_PREFIX);
    key.push_str(name);
    key
}

fn unused_counter() -> i64 {
    -1
}

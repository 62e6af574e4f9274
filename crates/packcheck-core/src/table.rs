//! Immutable resource table: symbolic identifiers to packaged text values.
//!
//! The table is populated once when a bundle is opened and is read-only
//! afterwards; there is deliberately no insertion or mutation API.

use std::collections::BTreeMap;

use crate::check::CheckError;

/// Build-time-populated mapping of string ids to human-readable values.
#[derive(Debug, Clone, Default)]
pub struct ResourceTable {
    entries: BTreeMap<String, String>,
}

impl ResourceTable {
    /// Parse a flat JSON object (`{"app_name": "..."}`) into a table.
    /// Non-string values are a parse error, not a silent coercion.
    pub fn from_json_str(data: &str) -> Result<Self, serde_json::Error> {
        let entries: BTreeMap<String, String> = serde_json::from_str(data)?;
        Ok(ResourceTable { entries })
    }

    /// Build a table from already-resolved entries (used by fake providers).
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        ResourceTable {
            entries: entries.into_iter().collect(),
        }
    }

    /// Look up an identifier, `None` if absent.
    pub fn get(&self, id: &str) -> Option<&str> {
        self.entries.get(id).map(String::as_str)
    }

    /// Look up an identifier, typed error if absent.
    pub fn resolve(&self, id: &str) -> Result<&str, CheckError> {
        self.get(id).ok_or_else(|| CheckError::StringMissing {
            id: id.to_string(),
        })
    }

    /// Iterate entries in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

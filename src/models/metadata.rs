use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::DocsError;

/// Site-level documentation metadata published next to the static pages.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct DocumentationMetadata {
    #[serde(default)]
    pub last_updated: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub features: Option<FeatureMap>,
}

/// Describes one product feature shown in the features grid.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FeatureDescriptor {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub ai_powered: bool,
    #[serde(default)]
    pub needs_documentation: bool,
}

/// Feature key to descriptor, kept in the order the JSON document lists them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureMap(Vec<(String, FeatureDescriptor)>);

impl FeatureMap {
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FeatureDescriptor)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Insert or replace; a replaced key keeps its original position.
    pub fn insert(&mut self, key: String, feature: FeatureDescriptor) {
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = feature,
            None => self.0.push((key, feature)),
        }
    }
}

impl FromIterator<(String, FeatureDescriptor)> for FeatureMap {
    fn from_iter<I: IntoIterator<Item = (String, FeatureDescriptor)>>(iter: I) -> Self {
        let mut map = FeatureMap::default();
        for (key, feature) in iter {
            map.insert(key, feature);
        }
        map
    }
}

impl<'de> Deserialize<'de> for FeatureMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct FeatureMapVisitor;

        impl<'de> Visitor<'de> for FeatureMapVisitor {
            type Value = FeatureMap;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of feature keys to feature descriptors")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut map = FeatureMap::default();
                while let Some((key, feature)) = access.next_entry::<String, FeatureDescriptor>()? {
                    map.insert(key, feature);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(FeatureMapVisitor)
    }
}

/// Parse an ISO date as published in `last_updated`.
///
/// Accepts RFC 3339 timestamps, offset-less `YYYY-MM-DDTHH:MM:SS[.f]`
/// timestamps and plain `YYYY-MM-DD` dates.
pub fn parse_iso_date(raw: &str) -> Result<NaiveDate, DocsError> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(dt.date());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|e| DocsError::Parse(format!("Invalid date '{raw}': {e}")))
}

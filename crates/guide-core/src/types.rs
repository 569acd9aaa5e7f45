//! Core types for guide mappings
//!
//! Defines the values the reconciler works on:
//! - [`GuideEntry`]: default guide plus optional administrator override
//! - [`GuideMapping`]: the persisted content type → entry table
//! - [`DefaultConfig`]: read-only defaults from the static resource
//! - [`NewGuide`]: one row of a create batch

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Content type identifier as used by the host platform
pub type ContentTypeId = String;

/// Tutorial guide assignment for a single content type
///
/// Both identifiers may be absent; such an entry resolves to no tutorial.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuideEntry {
    /// Baseline guide from the default configuration
    #[serde(default)]
    pub default_guide_id: Option<String>,
    /// Administrator override, takes precedence when present
    #[serde(default)]
    pub guide_id: Option<String>,
}

impl GuideEntry {
    /// Create entry from both identifiers
    #[inline]
    #[must_use]
    pub fn new(default_guide_id: Option<String>, guide_id: Option<String>) -> Self {
        Self {
            default_guide_id,
            guide_id,
        }
    }

    /// Create entry carrying only a default guide
    #[inline]
    #[must_use]
    pub fn from_default(default_guide_id: Option<String>) -> Self {
        Self::new(default_guide_id, None)
    }

    /// Guide to display: the override if set, else the default
    #[inline]
    #[must_use]
    pub fn resolve(&self) -> Option<&str> {
        self.guide_id
            .as_deref()
            .or(self.default_guide_id.as_deref())
    }

    /// Check if an override is set
    #[inline]
    #[must_use]
    pub fn has_override(&self) -> bool {
        self.guide_id.is_some()
    }
}

/// Mapping from content type to its guide entry
///
/// This is the whole of the persisted installation state. Keys are kept
/// ordered so listings and serialized output are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GuideMapping {
    entries: BTreeMap<ContentTypeId, GuideEntry>,
}

impl GuideMapping {
    /// Create empty mapping
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of content types mapped
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing is mapped
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get entry for content type
    #[inline]
    #[must_use]
    pub fn get(&self, content_type: &str) -> Option<&GuideEntry> {
        self.entries.get(content_type)
    }

    /// Check if content type has an entry
    #[inline]
    #[must_use]
    pub fn contains(&self, content_type: &str) -> bool {
        self.entries.contains_key(content_type)
    }

    /// Insert or replace an entry, returning the previous one
    #[inline]
    pub fn insert(
        &mut self,
        content_type: impl Into<ContentTypeId>,
        entry: GuideEntry,
    ) -> Option<GuideEntry> {
        self.entries.insert(content_type.into(), entry)
    }

    /// Remove an entry, returning it if present
    #[inline]
    pub fn remove(&mut self, content_type: &str) -> Option<GuideEntry> {
        self.entries.remove(content_type)
    }

    /// Iterate entries in content type order
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&ContentTypeId, &GuideEntry)> {
        self.entries.iter()
    }

    /// Iterate content types in order
    #[inline]
    pub fn content_types(&self) -> impl Iterator<Item = &ContentTypeId> {
        self.entries.keys()
    }
}

impl<K: Into<ContentTypeId>> FromIterator<(K, GuideEntry)> for GuideMapping {
    fn from_iter<I: IntoIterator<Item = (K, GuideEntry)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl IntoIterator for GuideMapping {
    type Item = (ContentTypeId, GuideEntry);
    type IntoIter = std::collections::btree_map::IntoIter<ContentTypeId, GuideEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a GuideMapping {
    type Item = (&'a ContentTypeId, &'a GuideEntry);
    type IntoIter = std::collections::btree_map::Iter<'a, ContentTypeId, GuideEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Default guide per content type, from the static configuration resource
///
/// Read-only once built. A `None` value is a content type the resource
/// lists without a video.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DefaultConfig {
    guides: BTreeMap<ContentTypeId, Option<String>>,
}

impl DefaultConfig {
    /// Build from entries that may lack a video
    #[must_use]
    pub fn from_optional<K, I>(entries: I) -> Self
    where
        K: Into<ContentTypeId>,
        I: IntoIterator<Item = (K, Option<String>)>,
    {
        Self {
            guides: entries.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// Default guide for content type
    ///
    /// Outer `None` means the content type is not listed at all.
    #[inline]
    #[must_use]
    pub fn get(&self, content_type: &str) -> Option<Option<&str>> {
        self.guides.get(content_type).map(Option::as_deref)
    }

    /// Check if content type is listed
    #[inline]
    #[must_use]
    pub fn contains(&self, content_type: &str) -> bool {
        self.guides.contains_key(content_type)
    }

    /// Number of listed content types
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.guides.len()
    }

    /// Check if no content type is listed
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.guides.is_empty()
    }

    /// Iterate listed content types with their default guide
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&ContentTypeId, Option<&str>)> {
        self.guides.iter().map(|(k, v)| (k, v.as_deref()))
    }
}

impl<K: Into<ContentTypeId>, V: Into<String>> FromIterator<(K, V)> for DefaultConfig {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_optional(iter.into_iter().map(|(k, v)| (k, Some(v.into()))))
    }
}

/// Single row of a create batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGuide {
    /// Content type to create a guide for
    pub content_type: ContentTypeId,
    /// Default guide, usually absent for administrator-created rows
    #[serde(default)]
    pub default_guide_id: Option<String>,
    /// Override guide
    #[serde(default)]
    pub guide_id: Option<String>,
}

impl NewGuide {
    /// Create batch row with only an override guide
    #[inline]
    #[must_use]
    pub fn new(content_type: impl Into<ContentTypeId>, guide_id: impl Into<String>) -> Self {
        Self {
            content_type: content_type.into(),
            default_guide_id: None,
            guide_id: Some(guide_id.into()),
        }
    }

    /// Set default guide
    #[inline]
    #[must_use]
    pub fn with_default(mut self, default_guide_id: impl Into<String>) -> Self {
        self.default_guide_id = Some(default_guide_id.into());
        self
    }

    /// Entry this row produces
    #[inline]
    #[must_use]
    pub fn to_entry(&self) -> GuideEntry {
        GuideEntry::new(self.default_guide_id.clone(), self.guide_id.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_resolve_prefers_override() {
        let entry = GuideEntry::new(Some("d".into()), Some("g".into()));
        assert_eq!(entry.resolve(), Some("g"));
        assert!(entry.has_override());
    }

    #[test]
    fn entry_resolve_falls_back_to_default() {
        let entry = GuideEntry::from_default(Some("d".into()));
        assert_eq!(entry.resolve(), Some("d"));
        assert_eq!(GuideEntry::default().resolve(), None);
    }

    #[test]
    fn entry_serializes_camel_case_with_nulls() {
        let entry = GuideEntry::from_default(Some("vid".into()));
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"defaultGuideId":"vid","guideId":null}"#);
    }

    #[test]
    fn entry_accepts_missing_fields() {
        let entry: GuideEntry = serde_json::from_str(r#"{"guideId":"g"}"#).unwrap();
        assert_eq!(entry, GuideEntry::new(None, Some("g".into())));
    }

    #[test]
    fn mapping_is_transparent_object() {
        let mapping: GuideMapping = [("blogPost", GuideEntry::from_default(Some("a".into())))]
            .into_iter()
            .collect();
        let json = serde_json::to_value(&mapping).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"blogPost": {"defaultGuideId": "a", "guideId": null}})
        );

        let back: GuideMapping = serde_json::from_value(json).unwrap();
        assert_eq!(back, mapping);
    }

    #[test]
    fn mapping_iterates_in_key_order() {
        let mapping: GuideMapping = [
            ("page", GuideEntry::default()),
            ("article", GuideEntry::default()),
        ]
        .into_iter()
        .collect();
        let keys: Vec<_> = mapping.content_types().cloned().collect();
        assert_eq!(keys, vec!["article".to_string(), "page".to_string()]);
    }

    #[test]
    fn default_config_keeps_unset_videos() {
        let defaults: DefaultConfig =
            serde_json::from_str(r#"{"page": "v1", "asset": null}"#).unwrap();
        assert_eq!(defaults.get("page"), Some(Some("v1")));
        assert_eq!(defaults.get("asset"), Some(None));
        assert_eq!(defaults.get("missing"), None);
        assert_eq!(defaults.len(), 2);
    }

    #[test]
    fn new_guide_builder() {
        let guide = NewGuide::new("faq", "g1").with_default("d1");
        assert_eq!(
            guide.to_entry(),
            GuideEntry::new(Some("d1".into()), Some("g1".into()))
        );
    }
}

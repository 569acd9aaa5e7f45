//! Guide mapping reconciliation
//!
//! Every operation takes the current mapping by reference and returns the
//! next one. Nothing here mutates its input, so a caller can compute a
//! candidate, inspect it, and only then decide whether to keep it.

use crate::error::{CollisionError, ReconcileResult};
use crate::types::{ContentTypeId, DefaultConfig, GuideEntry, GuideMapping, NewGuide};
use std::collections::HashSet;

/// Outcome of a successful batch creation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkCreated {
    /// Mapping with the batch applied
    pub mapping: GuideMapping,
    /// Content types from the batch, in input order
    pub added: Vec<ContentTypeId>,
}

/// Build the starting mapping for a configuration session
///
/// A non-empty persisted mapping is returned verbatim and never merged with
/// `defaults`. Otherwise every default content type gets an entry without
/// an override.
#[must_use]
pub fn initialize(persisted: Option<GuideMapping>, defaults: &DefaultConfig) -> GuideMapping {
    match persisted {
        Some(mapping) if !mapping.is_empty() => mapping,
        _ => defaults
            .iter()
            .map(|(content_type, default_guide_id)| {
                (
                    content_type.clone(),
                    GuideEntry::from_default(default_guide_id.map(str::to_owned)),
                )
            })
            .collect(),
    }
}

/// Insert or overwrite the entry for one content type
#[must_use]
pub fn upsert(
    mapping: &GuideMapping,
    content_type: impl Into<ContentTypeId>,
    default_guide_id: Option<String>,
    guide_id: Option<String>,
) -> GuideMapping {
    let mut next = mapping.clone();
    next.insert(content_type, GuideEntry::new(default_guide_id, guide_id));
    next
}

/// Remove the entry for one content type
///
/// Removing an absent content type returns an equal mapping.
#[must_use]
pub fn delete(mapping: &GuideMapping, content_type: &str) -> GuideMapping {
    let mut next = mapping.clone();
    next.remove(content_type);
    next
}

/// Candidates that already have an entry, in candidate order
///
/// An empty result means the whole batch may be created.
#[must_use]
pub fn validate_no_collision<S: AsRef<str>>(
    mapping: &GuideMapping,
    candidates: &[S],
) -> Vec<ContentTypeId> {
    candidates
        .iter()
        .map(AsRef::as_ref)
        .filter(|candidate| mapping.contains(candidate))
        .map(str::to_owned)
        .collect()
}

/// Insert a batch of new guides
///
/// The batch is rejected in full if any content type already has an entry.
/// Duplicates inside the batch are not merged: the later row wins and both
/// occurrences stay in [`BulkCreated::added`].
///
/// # Errors
/// Returns [`CollisionError`] listing every content type already present.
pub fn bulk_create(mapping: &GuideMapping, batch: &[NewGuide]) -> ReconcileResult<BulkCreated> {
    let candidates: Vec<&str> = batch.iter().map(|g| g.content_type.as_str()).collect();

    let conflicts = validate_no_collision(mapping, &candidates);
    if !conflicts.is_empty() {
        return Err(CollisionError::new(conflicts));
    }

    let repeated = repeated_content_types(&candidates);
    if !repeated.is_empty() {
        tracing::warn!(
            content_types = ?repeated,
            "create batch repeats content types; later rows win"
        );
    }

    let mut next = mapping.clone();
    for guide in batch {
        next.insert(guide.content_type.clone(), guide.to_entry());
    }

    Ok(BulkCreated {
        mapping: next,
        added: candidates.into_iter().map(str::to_owned).collect(),
    })
}

/// Candidate mapping with defaults refreshed from `defaults`
///
/// Overrides are kept; an empty override is dropped. Content types missing
/// from `defaults` pass through untouched.
#[must_use]
pub fn sync(mapping: &GuideMapping, defaults: &DefaultConfig) -> GuideMapping {
    let mut next = mapping.clone();
    for (content_type, default_guide_id) in defaults.iter() {
        let guide_id = mapping
            .get(content_type)
            .and_then(|entry| entry.guide_id.clone())
            .filter(|id| !id.is_empty());
        next.insert(
            content_type.clone(),
            GuideEntry::new(default_guide_id.map(str::to_owned), guide_id),
        );
    }
    next
}

/// Guide to display for an entry
#[inline]
#[must_use]
pub fn resolve(entry: &GuideEntry) -> Option<&str> {
    entry.resolve()
}

fn repeated_content_types<'a>(candidates: &[&'a str]) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    let mut repeated = Vec::new();
    for candidate in candidates {
        if !seen.insert(*candidate) && !repeated.contains(candidate) {
            repeated.push(*candidate);
        }
    }
    repeated
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn entry(default_guide_id: Option<&str>, guide_id: Option<&str>) -> GuideEntry {
        GuideEntry::new(
            default_guide_id.map(str::to_owned),
            guide_id.map(str::to_owned),
        )
    }

    fn defaults_ab() -> DefaultConfig {
        [("A", "v1"), ("B", "v2")].into_iter().collect()
    }

    #[test]
    fn initialize_from_defaults_without_persisted() {
        let mapping = initialize(None, &defaults_ab());
        let expected: GuideMapping = [
            ("A", entry(Some("v1"), None)),
            ("B", entry(Some("v2"), None)),
        ]
        .into_iter()
        .collect();
        assert_eq!(mapping, expected);
    }

    #[test]
    fn initialize_treats_empty_persisted_as_missing() {
        let mapping = initialize(Some(GuideMapping::new()), &defaults_ab());
        assert_eq!(mapping.len(), 2);
    }

    #[test]
    fn initialize_keeps_persisted_verbatim() {
        let persisted: GuideMapping = [("Z", entry(None, Some("g")))].into_iter().collect();
        let mapping = initialize(Some(persisted.clone()), &defaults_ab());
        assert_eq!(mapping, persisted);
    }

    #[test]
    fn initialize_keeps_unset_default() {
        let defaults = DefaultConfig::from_optional([("asset", None)]);
        let mapping = initialize(None, &defaults);
        assert_eq!(mapping.get("asset"), Some(&GuideEntry::default()));
    }

    #[test]
    fn upsert_last_write_wins() {
        let base = GuideMapping::new();
        let once = upsert(&base, "A", Some("d".into()), Some("g1".into()));
        let twice = upsert(&once, "A", Some("d".into()), None);
        assert_eq!(twice.len(), 1);
        assert_eq!(twice.get("A"), Some(&entry(Some("d"), None)));
    }

    #[test]
    fn upsert_leaves_other_entries() {
        let base: GuideMapping = [("A", entry(Some("a"), None)), ("B", entry(Some("b"), None))]
            .into_iter()
            .collect();
        let next = upsert(&base, "A", Some("a".into()), Some("o".into()));
        assert_eq!(next.get("B"), base.get("B"));
        assert_eq!(base.get("A"), Some(&entry(Some("a"), None)));
    }

    #[test]
    fn delete_absent_is_noop() {
        let base: GuideMapping = [("A", entry(Some("a"), None))].into_iter().collect();
        assert_eq!(delete(&base, "missing"), base);
    }

    #[test]
    fn delete_removes_entry() {
        let base: GuideMapping = [("A", entry(Some("a"), None))].into_iter().collect();
        assert!(delete(&base, "A").is_empty());
    }

    #[test]
    fn validate_reports_existing_only() {
        let base: GuideMapping = [("A", entry(Some("a"), None))].into_iter().collect();
        assert_eq!(validate_no_collision(&base, &["A", "C"]), vec!["A".to_string()]);
        assert!(validate_no_collision(&base, &["C"]).is_empty());
    }

    #[test]
    fn bulk_create_inserts_all_in_order() {
        let base: GuideMapping = [("A", entry(Some("a"), None))].into_iter().collect();
        let batch = vec![NewGuide::new("C", "g3"), NewGuide::new("B", "g2")];

        let created = bulk_create(&base, &batch).unwrap();
        assert_eq!(created.added, vec!["C".to_string(), "B".to_string()]);
        assert_eq!(created.mapping.len(), 3);
        assert_eq!(created.mapping.get("C"), Some(&entry(None, Some("g3"))));
    }

    #[test]
    fn bulk_create_rejects_whole_batch() {
        let base: GuideMapping = [("A", entry(Some("a"), None))].into_iter().collect();
        let batch = vec![NewGuide::new("C", "g3"), NewGuide::new("A", "g1")];

        let err = bulk_create(&base, &batch).unwrap_err();
        assert_eq!(err.conflicts, vec!["A".to_string()]);
    }

    #[test]
    fn bulk_create_later_duplicate_wins() {
        let batch = vec![NewGuide::new("C", "first"), NewGuide::new("C", "second")];

        let created = bulk_create(&GuideMapping::new(), &batch).unwrap();
        assert_eq!(created.mapping.get("C"), Some(&entry(None, Some("second"))));
        assert_eq!(created.added, vec!["C".to_string(), "C".to_string()]);
    }

    #[test]
    fn sync_preserves_override() {
        let base: GuideMapping = [("A", entry(Some("old"), Some("override")))]
            .into_iter()
            .collect();
        let defaults: DefaultConfig = [("A", "new")].into_iter().collect();

        let synced = sync(&base, &defaults);
        assert_eq!(synced.get("A"), Some(&entry(Some("new"), Some("override"))));
    }

    #[test]
    fn sync_clears_empty_override() {
        let base: GuideMapping = [("A", entry(Some("old"), Some("")))].into_iter().collect();
        let defaults: DefaultConfig = [("A", "new")].into_iter().collect();

        let synced = sync(&base, &defaults);
        assert_eq!(synced.get("A"), Some(&entry(Some("new"), None)));
        assert_eq!(synced.get("A").and_then(GuideEntry::resolve), Some("new"));
    }

    #[test]
    fn sync_adds_missing_and_keeps_unknown() {
        let base: GuideMapping = [("custom", entry(Some("c"), Some("x")))]
            .into_iter()
            .collect();

        let synced = sync(&base, &defaults_ab());
        assert_eq!(synced.get("custom"), Some(&entry(Some("c"), Some("x"))));
        assert_eq!(synced.get("A"), Some(&entry(Some("v1"), None)));
        assert_eq!(synced.get("B"), Some(&entry(Some("v2"), None)));
        assert_eq!(base.len(), 1);
    }

    #[test]
    fn resolve_cases() {
        assert_eq!(resolve(&entry(Some("d"), None)), Some("d"));
        assert_eq!(resolve(&entry(Some("d"), Some("g"))), Some("g"));
        assert_eq!(resolve(&entry(None, None)), None);
    }

    #[test]
    fn repeated_content_types_listed_once() {
        assert_eq!(repeated_content_types(&["a", "b", "a", "a"]), vec!["a"]);
        assert!(repeated_content_types(&["a", "b"]).is_empty());
    }
}

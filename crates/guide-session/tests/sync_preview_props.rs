//! Property tests for the two-phase sync preview.

use guide_session::prelude::*;
use guide_test_utils::MemoryHost;
use proptest::prelude::*;
use std::sync::Arc;

fn guide_id() -> impl Strategy<Value = Option<String>> {
    proptest::option::of("[a-z0-9]{1,6}")
}

fn persisted() -> impl Strategy<Value = GuideMapping> {
    proptest::collection::btree_map(
        "[a-z]{1,5}",
        (guide_id(), guide_id()).prop_map(|(d, g)| GuideEntry::new(d, g)),
        1..6,
    )
    .prop_map(|entries| entries.into_iter().collect())
}

fn defaults() -> impl Strategy<Value = DefaultConfig> {
    proptest::collection::btree_map("[a-z]{1,5}", guide_id(), 0..6)
        .prop_map(DefaultConfig::from_optional)
}

fn open(mapping: GuideMapping, defaults: DefaultConfig) -> ConfigSession<MemoryHost> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap();
    runtime
        .block_on(ConfigSession::open(
            MemoryHost::new().with_mapping(mapping),
            Arc::new(defaults),
        ))
        .unwrap()
}

proptest! {
    #[test]
    fn prop_reject_leaves_mapping_untouched(mapping in persisted(), defaults in defaults()) {
        let mut session = open(mapping, defaults);
        let before = serde_json::to_vec(session.mapping()).unwrap();

        session.propose_sync();
        session.reject_sync();

        prop_assert_eq!(serde_json::to_vec(session.mapping()).unwrap(), before);
    }

    #[test]
    fn prop_accept_equals_pure_sync(mapping in persisted(), defaults in defaults()) {
        let expected = reconciler::sync(&mapping, &defaults);
        let mut session = open(mapping, defaults);

        let proposed = session.propose_sync().clone();
        prop_assert!(session.accept_sync());

        prop_assert_eq!(&proposed, &expected);
        prop_assert_eq!(session.mapping(), &expected);
    }
}

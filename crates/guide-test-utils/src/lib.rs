//! Testing utilities for Guide Hub workspace
//!
//! Shared test helpers, fixtures, and an in-memory host platform.

#![allow(missing_docs)]

use async_trait::async_trait;
use guide_core::{DefaultConfig, GuideEntry, GuideMapping};
use guide_session::{ConfigurePayload, HostError, HostPlatform, InstallationParameters};
use parking_lot::Mutex;
use serde_json::Value;
use std::sync::Arc;

#[derive(Debug, Default)]
struct HostState {
    persisted: Option<InstallationParameters>,
    target_state: Option<Value>,
    commits: Vec<ConfigurePayload>,
    ready: bool,
    fail_load: bool,
    fail_commit: bool,
}

/// Host platform that keeps everything in memory
///
/// Clones share state, so a test can keep a handle after moving one into a
/// session.
#[derive(Debug, Clone, Default)]
pub struct MemoryHost {
    state: Arc<Mutex<HostState>>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_persisted(self, params: InstallationParameters) -> Self {
        self.state.lock().persisted = Some(params);
        self
    }

    pub fn with_mapping(self, mapping: GuideMapping) -> Self {
        self.with_persisted(InstallationParameters::new(mapping))
    }

    pub fn with_target_state(self, target_state: Value) -> Self {
        self.state.lock().target_state = Some(target_state);
        self
    }

    pub fn failing_load(self) -> Self {
        self.state.lock().fail_load = true;
        self
    }

    pub fn failing_commit(self) -> Self {
        self.state.lock().fail_commit = true;
        self
    }

    pub fn persisted(&self) -> Option<InstallationParameters> {
        self.state.lock().persisted.clone()
    }

    pub fn commits(&self) -> Vec<ConfigurePayload> {
        self.state.lock().commits.clone()
    }

    pub fn is_ready(&self) -> bool {
        self.state.lock().ready
    }
}

#[async_trait]
impl HostPlatform for MemoryHost {
    async fn load_persisted_state(&self) -> Result<Option<InstallationParameters>, HostError> {
        let state = self.state.lock();
        if state.fail_load {
            return Err(HostError::Load("memory host configured to fail".into()));
        }
        Ok(state.persisted.clone())
    }

    async fn current_state(&self) -> Result<Option<Value>, HostError> {
        Ok(self.state.lock().target_state.clone())
    }

    async fn commit_state(&self, payload: ConfigurePayload) -> Result<(), HostError> {
        let mut state = self.state.lock();
        if state.fail_commit {
            return Err(HostError::Commit("memory host configured to fail".into()));
        }
        state.persisted = Some(payload.parameters.clone());
        state.commits.push(payload);
        Ok(())
    }

    async fn set_ready(&self) {
        self.state.lock().ready = true;
    }
}

pub fn defaults(pairs: &[(&str, &str)]) -> Arc<DefaultConfig> {
    Arc::new(pairs.iter().copied().collect())
}

pub fn entry(default_guide_id: Option<&str>, guide_id: Option<&str>) -> GuideEntry {
    GuideEntry::new(
        default_guide_id.map(str::to_owned),
        guide_id.map(str::to_owned),
    )
}

pub fn mapping(rows: &[(&str, Option<&str>, Option<&str>)]) -> GuideMapping {
    rows.iter()
        .map(|(content_type, default_guide_id, guide_id)| {
            (*content_type, entry(*default_guide_id, *guide_id))
        })
        .collect()
}

/// Install a test subscriber honouring `RUST_LOG`; safe to call repeatedly
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::cache::entry::{Request, StoredResponse};
use crate::cache::fetcher::ResourceFetcher;
use crate::cache::lifecycle::{LifecycleError, LifecyclePhase, OperatorMessage};
use crate::cache::offline;
use crate::cache::router::{classify, RequestClass};
use crate::cache::store::BucketStore;
use crate::types::{BucketName, BucketRole, RequestKey};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Monotonically increasing build identifier, e.g. `v1`. Bucket names
    /// are derived from it; bumping it is what rolls the caches over.
    pub version: String,
    /// Asset paths precached into the static bucket at install. The install
    /// is atomic over this list.
    pub precache_manifest: Vec<String>,
    /// Dynamic routes warmed into the dynamic bucket at install,
    /// best-effort. Empty disables the warmup.
    pub precache_dynamic: Vec<String>,
    /// Path of the precached shell page served to offline HTML navigations.
    pub offline_shell: Option<String>,
    /// URL patterns classified Dynamic (network-first).
    pub dynamic_patterns: Vec<String>,
}

impl CacheConfig {
    pub fn new(version: impl Into<String>, precache_manifest: Vec<String>) -> Self {
        CacheConfig {
            version: version.into(),
            precache_manifest,
            precache_dynamic: Vec::new(),
            offline_shell: None,
            dynamic_patterns: vec!["/api/".to_string()],
        }
    }

    pub fn static_bucket(&self) -> BucketName {
        BucketName::new(BucketRole::Static, &self.version)
    }

    pub fn dynamic_bucket(&self) -> BucketName {
        BucketName::new(BucketRole::Dynamic, &self.version)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstallOutcome {
    pub precached: usize,
    /// Readiness signal to the runtime: skip the waiting phase and activate
    /// this version immediately.
    pub skip_waiting: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServeOutcome {
    /// Non-GET requests pass through to the network untouched.
    Passthrough,
    Response(StoredResponse),
}

/// Owns the versioned bucket pair and the lifecycle phase; serves every
/// intercepted request. Generic over the injected network fetcher and blob
/// store, which provide the only synchronization `serve` relies on.
pub struct CacheManager<F, S> {
    config: CacheConfig,
    fetcher: F,
    store: S,
    phase: Mutex<LifecyclePhase>,
    skip_waiting: AtomicBool,
}

impl<F, S> CacheManager<F, S>
where
    F: ResourceFetcher,
    S: BucketStore,
{
    pub fn new(config: CacheConfig, fetcher: F, store: S) -> Self {
        CacheManager {
            config,
            fetcher,
            store,
            phase: Mutex::new(LifecyclePhase::New),
            skip_waiting: AtomicBool::new(false),
        }
    }

    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    pub fn phase(&self) -> LifecyclePhase {
        *self
            .phase
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn transition(&self, to: LifecyclePhase) -> Result<(), LifecycleError> {
        let mut phase = self.phase.lock().unwrap_or_else(PoisonError::into_inner);
        if !phase.can_transition(to) {
            return Err(LifecycleError::InvalidTransition { from: *phase, to });
        }
        debug!(from = ?*phase, ?to, "lifecycle transition");
        *phase = to;
        Ok(())
    }

    /// Install-time precache. Fetches every manifest entry and commits them
    /// to the static bucket in one atomic bulk-add; any fetch failure aborts
    /// the whole install with nothing committed, and the phase returns to
    /// `New` so the runtime can retry on next load.
    pub fn on_install(&self) -> Result<InstallOutcome, LifecycleError> {
        self.transition(LifecyclePhase::Installing)?;
        info!(version = %self.config.version, "installing");

        let mut staged = Vec::with_capacity(self.config.precache_manifest.len());
        for path in &self.config.precache_manifest {
            let request = Request::get(path.clone());
            match self.fetcher.fetch(&request) {
                Ok(response) => staged.push((request.key(), response)),
                Err(source) => {
                    warn!(%path, %source, "precache fetch failed, aborting install");
                    self.transition(LifecyclePhase::New)?;
                    return Err(LifecycleError::Precache {
                        path: path.clone(),
                        source,
                    });
                }
            }
        }

        let precached = staged.len();
        if let Err(err) = self.store.put_all(&self.config.static_bucket(), &staged) {
            self.transition(LifecyclePhase::New)?;
            return Err(err.into());
        }

        self.warm_dynamic_routes();

        self.transition(LifecyclePhase::Waiting)?;
        info!(precached, "install complete");
        Ok(InstallOutcome {
            precached,
            skip_waiting: true,
        })
    }

    // Best-effort: freshness-preferred content may be absent without
    // breaking the static install's atomicity contract.
    fn warm_dynamic_routes(&self) {
        let dynamic = self.config.dynamic_bucket();
        for path in &self.config.precache_dynamic {
            let request = Request::get(path.clone());
            match self.fetcher.fetch(&request) {
                Ok(response) => {
                    if let Err(err) = self.store.put(&dynamic, &request.key(), &response) {
                        warn!(%path, %err, "dynamic warmup write failed");
                    }
                }
                Err(err) => warn!(%path, %err, "dynamic warmup skipped"),
            }
        }
    }

    /// Activation-time garbage collection: every bucket whose name is not
    /// the current static or dynamic bucket name is deleted. Afterwards
    /// exactly the current-version buckets exist.
    pub fn on_activate(&self) -> Result<(), LifecycleError> {
        self.transition(LifecyclePhase::Activating)?;

        let current = [self.config.static_bucket(), self.config.dynamic_bucket()];
        for bucket in self.store.list_buckets()? {
            if !current.contains(&bucket) {
                info!(bucket = %bucket, "clearing stale bucket");
                self.store.delete_bucket(&bucket)?;
            }
        }

        self.transition(LifecyclePhase::Active)?;
        info!(version = %self.config.version, "activated, claiming open clients");
        Ok(())
    }

    /// Called when a newer version has activated over this one.
    pub fn mark_superseded(&self) -> Result<(), LifecycleError> {
        self.transition(LifecyclePhase::Superseded)
    }

    /// Serve one intercepted request. Total: network failure degrades to a
    /// cached or typed fallback response, never an error.
    pub fn serve(&self, request: &Request) -> ServeOutcome {
        if !request.method.is_get() {
            return ServeOutcome::Passthrough;
        }
        match classify(&self.config, request) {
            RequestClass::Static => self.serve_cache_first(request),
            RequestClass::Dynamic => self.serve_network_first(request),
        }
    }

    fn serve_cache_first(&self, request: &Request) -> ServeOutcome {
        let key = request.key();
        if let Some(hit) = self.match_cached(&key) {
            return ServeOutcome::Response(hit);
        }
        match self.fetcher.fetch(request) {
            Ok(response) => {
                if response.is_success() {
                    self.write_through(&key, &response);
                }
                ServeOutcome::Response(response)
            }
            Err(err) => {
                debug!(url = %request.url, %err, "fetch failed, serving offline fallback");
                ServeOutcome::Response(self.offline_fallback(request))
            }
        }
    }

    fn serve_network_first(&self, request: &Request) -> ServeOutcome {
        let key = request.key();
        match self.fetcher.fetch(request) {
            Ok(response) => {
                if response.is_success() {
                    self.write_through(&key, &response);
                }
                ServeOutcome::Response(response)
            }
            Err(err) => {
                debug!(url = %request.url, %err, "network-first fetch failed, trying cache");
                match self.store.get(&self.config.dynamic_bucket(), &key) {
                    Ok(Some(hit)) => ServeOutcome::Response(hit),
                    Ok(None) => ServeOutcome::Response(self.offline_fallback(request)),
                    Err(err) => {
                        warn!(%err, "cache read failed during fallback");
                        ServeOutcome::Response(self.offline_fallback(request))
                    }
                }
            }
        }
    }

    // Current bucket pair only, static before dynamic. Read errors degrade
    // to a miss.
    fn match_cached(&self, key: &RequestKey) -> Option<StoredResponse> {
        for bucket in [self.config.static_bucket(), self.config.dynamic_bucket()] {
            match self.store.get(&bucket, key) {
                Ok(Some(response)) => return Some(response),
                Ok(None) => {}
                Err(err) => warn!(bucket = %bucket, %err, "cache read failed"),
            }
        }
        None
    }

    fn write_through(&self, key: &RequestKey, response: &StoredResponse) {
        if let Err(err) = self
            .store
            .put(&self.config.dynamic_bucket(), key, response)
        {
            warn!(key = key.as_str(), %err, "write-through failed");
        }
    }

    fn offline_fallback(&self, request: &Request) -> StoredResponse {
        let shell = self.config.offline_shell.as_ref().and_then(|path| {
            let key = RequestKey::new(path);
            match self.store.get(&self.config.static_bucket(), &key) {
                Ok(found) => found,
                Err(err) => {
                    warn!(%path, %err, "shell page read failed");
                    None
                }
            }
        });
        offline::fallback_for(request, shell)
    }

    /// Operator command channel.
    pub fn on_message(&self, message: OperatorMessage) -> Result<(), LifecycleError> {
        match message {
            OperatorMessage::ClearCache => self.clear_all(),
            OperatorMessage::SkipWaiting => {
                self.skip_waiting.store(true, Ordering::SeqCst);
                Ok(())
            }
        }
    }

    /// Deletes every bucket regardless of version. Operator reset only;
    /// nothing in the lifecycle invokes this.
    pub fn clear_all(&self) -> Result<(), LifecycleError> {
        for bucket in self.store.list_buckets()? {
            self.store.delete_bucket(&bucket)?;
        }
        info!("all buckets cleared");
        Ok(())
    }

    pub fn should_skip_waiting(&self) -> bool {
        self.skip_waiting.load(Ordering::SeqCst)
    }
}

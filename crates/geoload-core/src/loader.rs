//! Load orchestration: one live attempt at a time.
//!
//! Every attempt takes a `LoadTicket` from a generation counter when it
//! starts. A result is committed only if its ticket is still the newest, so a
//! slow attempt that was superseded can never overwrite a newer one.

use crate::decode::decode;
use crate::error::{FetchError, LoadError};
use crate::feature::FeatureList;
use crate::source::{decode_param, query_param, FetchOptions, HttpResolver, Resolver};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockWriteGuard};

/// Lifecycle of the current load attempt.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Ready,
    Error(String),
}

impl LoadState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, LoadState::Ready | LoadState::Error(_))
    }

    /// The error message, if this is `Error`.
    pub fn message(&self) -> Option<&str> {
        match self {
            LoadState::Error(m) => Some(m),
            _ => None,
        }
    }
}

impl fmt::Display for LoadState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadState::Idle => write!(f, "idle"),
            LoadState::Loading => write!(f, "loading"),
            LoadState::Ready => write!(f, "ready"),
            LoadState::Error(m) => write!(f, "error: {}", m),
        }
    }
}

/// What the renderer can observe.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoadSnapshot {
    pub state: LoadState,
    /// Features of the last committed successful attempt. `None` until one lands.
    pub features: Option<FeatureList>,
}

/// Generation an attempt was started under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

impl LoadTicket {
    pub fn generation(self) -> u64 {
        self.0
    }
}

/// Owns the load state and runs attempts against a resolver.
pub struct Loader {
    resolver: Arc<dyn Resolver>,
    generation: AtomicU64,
    snapshot: RwLock<LoadSnapshot>,
}

impl Loader {
    pub fn new(options: FetchOptions) -> Self {
        Self::with_resolver(Arc::new(HttpResolver::new(options)))
    }

    pub fn with_resolver(resolver: Arc<dyn Resolver>) -> Self {
        Self {
            resolver,
            generation: AtomicU64::new(0),
            snapshot: RwLock::new(LoadSnapshot::default()),
        }
    }

    fn write(&self) -> RwLockWriteGuard<'_, LoadSnapshot> {
        self.snapshot.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Current state and features.
    pub fn snapshot(&self) -> LoadSnapshot {
        self.snapshot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Starts a new attempt, superseding any in flight, and moves to `Loading`.
    pub fn begin(&self) -> LoadTicket {
        let mut snapshot = self.write();
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        snapshot.state = LoadState::Loading;
        tracing::debug!("load attempt {} started", generation);
        LoadTicket(generation)
    }

    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket.0
    }

    /// Commits an attempt's result. Returns false (and changes nothing) when a
    /// newer attempt has started since `ticket` was issued.
    pub fn commit(&self, ticket: LoadTicket, result: Result<FeatureList, LoadError>) -> bool {
        self.settle(ticket, result.map(Some))
    }

    fn settle(&self, ticket: LoadTicket, result: Result<Option<FeatureList>, LoadError>) -> bool {
        let mut snapshot = self.write();
        if !self.is_current(ticket) {
            tracing::debug!("discarding result of superseded load attempt {}", ticket.0);
            return false;
        }
        match result {
            Ok(Some(features)) => {
                tracing::info!("loaded {} features (attempt {})", features.len(), ticket.0);
                snapshot.features = Some(features);
                snapshot.state = LoadState::Ready;
            }
            Ok(None) => snapshot.state = LoadState::Ready,
            Err(e) => {
                tracing::warn!("load attempt {} failed: {}", ticket.0, e);
                snapshot.state = LoadState::Error(e.to_string());
            }
        }
        true
    }

    /// Loads a raw (still percent-encoded) parameter and returns the state
    /// afterwards. A missing or empty parameter means there is nothing to load:
    /// the state becomes `Ready` without touching features.
    pub async fn load(&self, param: Option<&str>) -> LoadState {
        let ticket = self.begin();
        match param.filter(|p| !p.is_empty()) {
            None => {
                tracing::debug!("no geojson parameter supplied");
                self.settle(ticket, Ok(None));
            }
            Some(raw) => {
                let result = self.run(raw).await;
                self.commit(ticket, result);
            }
        }
        self.snapshot().state
    }

    /// Extracts `param_name` from a page URL and loads it.
    pub async fn load_page(&self, page_url: &str, param_name: &str) -> LoadState {
        match query_param(page_url, param_name) {
            Ok(param) => self.load(param.as_deref()).await,
            Err(e) => {
                let ticket = self.begin();
                self.commit(ticket, Err(e.into()));
                self.snapshot().state
            }
        }
    }

    async fn run(&self, raw: &str) -> Result<FeatureList, LoadError> {
        let param = decode_param(raw)?;
        let resolver = Arc::clone(&self.resolver);
        let payload = tokio::task::spawn_blocking(move || resolver.resolve(&param))
            .await
            .map_err(|e| FetchError::Worker(e.to_string()))??;
        decode(&payload)
    }
}

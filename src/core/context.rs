use crate::config::Config;
use crate::core::builder::RecordBuilder;
use crate::core::clock::{Clock, SystemClock};
use crate::core::recorder::Recorder;
use crate::core::schedule::CollectionSchedule;
use crate::core::vlog::VlogLibrary;
use crate::errors::AppResult;
use crate::storage::{LogStore, StorageBackend, backend_for};
use std::sync::Arc;

/// Everything a command needs, wired once from the configuration.
pub struct AppContext {
    pub cfg: Config,
    pub backend: Arc<dyn StorageBackend>,
    pub store: LogStore,
    pub vlogs: VlogLibrary,
    pub builder: RecordBuilder,
    pub schedule: CollectionSchedule,
}

impl AppContext {
    /// Backend picked from `cfg.storage`, system clock.
    pub fn new(cfg: Config) -> AppResult<Self> {
        let backend = backend_for(cfg.storage);
        Self::with_parts(cfg, backend, Arc::new(SystemClock))
    }

    pub fn with_parts(
        cfg: Config,
        backend: Arc<dyn StorageBackend>,
        clock: Arc<dyn Clock>,
    ) -> AppResult<Self> {
        let offset = cfg.utc_offset()?;
        let schedule = cfg.schedule()?;

        Ok(Self {
            store: LogStore::new(backend.clone(), cfg.data_path()),
            vlogs: VlogLibrary::new(backend.clone(), cfg.vlog_path()),
            builder: RecordBuilder::new(clock, offset),
            schedule,
            backend,
            cfg,
        })
    }

    pub fn clock(&self) -> &Arc<dyn Clock> {
        self.builder.clock()
    }

    pub fn recorder(&self) -> Recorder<'_> {
        Recorder::new(&self.store, &self.builder)
    }
}

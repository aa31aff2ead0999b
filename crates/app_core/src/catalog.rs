//! Photo collection owned by one content-area mount
//!
//! Mounting starts a simulated load on a worker thread. The result comes back
//! through a oneshot channel that the UI polls once per frame. Unmounting
//! drops the receiver, so a late result is discarded and never applied.

use crate::photo::{PhotoId, PhotoRecord};
use crate::repository::PhotoRepository;
use crate::AppError;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot::{self, error::TryRecvError};

/// Lifecycle of the collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    /// Not mounted
    Idle,
    /// Simulated load in flight
    Loading,
    /// Records available (possibly empty)
    Ready,
}

/// Emitted once when a load completes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadEvent {
    Completed { total: usize },
}

/// Generated collection plus its load state
pub struct PhotoCatalog {
    records: Vec<PhotoRecord>,
    pending: Option<oneshot::Receiver<Vec<PhotoRecord>>>,
    phase: LoadPhase,
}

impl Default for PhotoCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl PhotoCatalog {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            pending: None,
            phase: LoadPhase::Idle,
        }
    }

    /// Start the simulated load; any previous mount is discarded first
    pub fn mount(
        &mut self,
        repository: Arc<dyn PhotoRepository>,
        delay: Duration,
    ) -> Result<(), AppError> {
        self.unmount();

        let (tx, rx) = oneshot::channel();

        std::thread::Builder::new()
            .name("photo-load".to_string())
            .spawn(move || {
                std::thread::sleep(delay);

                if tx.is_closed() {
                    tracing::debug!("Photo load cancelled before listing");
                    return;
                }

                let records = repository.list_records().unwrap_or_else(|e| {
                    tracing::error!("Failed to list photos: {}", e);
                    Vec::new()
                });

                if tx.send(records).is_err() {
                    tracing::debug!("Photo load finished after unmount, result dropped");
                }
            })
            .map_err(|e| AppError::Init(format!("photo loader thread: {}", e)))?;

        self.pending = Some(rx);
        self.phase = LoadPhase::Loading;
        tracing::debug!("Photo load started ({:?} delay)", delay);
        Ok(())
    }

    /// Check for a finished load; call once per frame
    pub fn poll(&mut self) -> Option<LoadEvent> {
        let rx = self.pending.as_mut()?;

        let records = match rx.try_recv() {
            Ok(records) => records,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Closed) => {
                tracing::warn!("Photo load worker exited without a result");
                Vec::new()
            }
        };

        self.pending = None;
        self.records = records;
        self.phase = LoadPhase::Ready;

        let total = self.records.len();
        tracing::info!("Photo collection ready: {} records", total);
        Some(LoadEvent::Completed { total })
    }

    /// Tear down the mount; a pending load will never be applied
    pub fn unmount(&mut self) {
        if self.pending.take().is_some() {
            tracing::debug!("Photo load cancelled by unmount");
        }
        self.records.clear();
        self.phase = LoadPhase::Idle;
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    pub fn records(&self) -> &[PhotoRecord] {
        &self.records
    }

    pub fn get(&self, id: PhotoId) -> Option<&PhotoRecord> {
        self.records.iter().find(|record| record.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockPhotoRepository;
    use crate::{ViewMode, ViewState};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Instant;

    struct CountingRepository {
        inner: MockPhotoRepository,
        calls: Arc<AtomicUsize>,
    }

    impl PhotoRepository for CountingRepository {
        fn list_records(&self) -> Result<Vec<PhotoRecord>, AppError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.inner.list_records()
        }
    }

    struct FailingRepository;

    impl PhotoRepository for FailingRepository {
        fn list_records(&self) -> Result<Vec<PhotoRecord>, AppError> {
            Err(AppError::Repository("index offline".into()))
        }
    }

    fn wait_for_load(catalog: &mut PhotoCatalog) -> LoadEvent {
        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            if let Some(event) = catalog.poll() {
                return event;
            }
            assert!(Instant::now() < deadline, "load did not complete");
            std::thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn test_loading_until_delay_elapses() {
        let mut catalog = PhotoCatalog::new();
        assert_eq!(catalog.phase(), LoadPhase::Idle);

        let repo = Arc::new(MockPhotoRepository::new(24, Some(3)));
        catalog.mount(repo, Duration::from_millis(200)).unwrap();

        assert!(catalog.is_loading());
        assert_eq!(catalog.poll(), None);
        assert!(catalog.records().is_empty());

        assert_eq!(wait_for_load(&mut catalog), LoadEvent::Completed { total: 24 });
        assert_eq!(catalog.phase(), LoadPhase::Ready);
        assert_eq!(catalog.records().len(), 24);

        // Completion is reported once
        assert_eq!(catalog.poll(), None);
    }

    #[test]
    fn test_unmount_cancels_pending_load() {
        let calls = Arc::new(AtomicUsize::new(0));
        let repo = Arc::new(CountingRepository {
            inner: MockPhotoRepository::new(24, Some(3)),
            calls: calls.clone(),
        });

        let mut catalog = PhotoCatalog::new();
        catalog.mount(repo, Duration::from_millis(50)).unwrap();
        catalog.unmount();

        std::thread::sleep(Duration::from_millis(200));
        assert_eq!(catalog.poll(), None);
        assert_eq!(catalog.phase(), LoadPhase::Idle);
        assert!(catalog.records().is_empty());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_failed_listing_yields_empty_collection() {
        let mut catalog = PhotoCatalog::new();
        catalog.mount(Arc::new(FailingRepository), Duration::ZERO).unwrap();

        assert_eq!(wait_for_load(&mut catalog), LoadEvent::Completed { total: 0 });
        assert!(catalog.records().is_empty());
    }

    #[test]
    fn test_get_by_id() {
        let mut catalog = PhotoCatalog::new();
        catalog
            .mount(Arc::new(MockPhotoRepository::new(24, Some(5))), Duration::ZERO)
            .unwrap();
        wait_for_load(&mut catalog);

        assert_eq!(catalog.get(PhotoId(5)).map(|r| r.name.as_str()), Some("photo_005.jpg"));
        assert!(catalog.get(PhotoId(99)).is_none());
    }

    #[test]
    fn test_mount_load_and_toggle_scenario() {
        let mut state = ViewState::default();
        let mut catalog = PhotoCatalog::new();
        catalog
            .mount(Arc::new(MockPhotoRepository::new(24, None)), Duration::from_millis(20))
            .unwrap();

        assert_eq!(state.file_stats().total, 0);

        let LoadEvent::Completed { total } = wait_for_load(&mut catalog);
        state.set_collection_len(total);
        assert_eq!(state.file_stats().total, 24);
        assert_eq!(state.file_stats().selected, 0);

        state.toggle_selection(PhotoId(5));
        assert_eq!(state.selection().ids(), &[PhotoId(5)]);
        assert_eq!(state.file_stats().selected, 1);

        state.set_view_mode(ViewMode::Detail);
        assert_eq!(catalog.records().len(), 24);

        state.toggle_selection(PhotoId(5));
        assert!(state.selection().is_empty());
        assert_eq!(state.file_stats().selected, 0);
        assert_eq!(state.file_stats().total, 24);
    }
}

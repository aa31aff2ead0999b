//! Photo repository capability
//!
//! The view layer only asks a repository for the current records. The mock
//! implementation generates a synthetic collection; a file-indexing backend
//! can replace it without touching anything above this trait.

use crate::photo::{ColorTag, FileSize, IssueFlags, PhotoId, PhotoRecord, PhotoStatus};
use crate::AppError;
use chrono::{DateTime, Local, TimeDelta};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of photo records for the content area
pub trait PhotoRepository: Send + Sync {
    /// List the records of the current location
    fn list_records(&self) -> Result<Vec<PhotoRecord>, AppError>;
}

/// Default number of generated photos
pub const DEFAULT_PHOTO_COUNT: u32 = 24;

const MODIFIED_WINDOW_SECS: i64 = 30 * 24 * 60 * 60;

/// Generates a fixed-size synthetic collection
pub struct MockPhotoRepository {
    count: u32,
    seed: u64,
    now: Option<DateTime<Local>>,
}

impl MockPhotoRepository {
    /// Create a repository; without a seed one is drawn from the thread RNG
    pub fn new(count: u32, seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(|| rand::rng().random());
        tracing::debug!("Mock photo repository: count={}, seed={}", count, seed);
        Self { count, seed, now: None }
    }

    /// Pin the reference time used for modified dates
    pub fn with_now(mut self, now: DateTime<Local>) -> Self {
        self.now = Some(now);
        self
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    fn generate(&self, rng: &mut StdRng, sequence: u32, now: DateTime<Local>) -> PhotoRecord {
        let age = TimeDelta::seconds(rng.random_range(0..MODIFIED_WINDOW_SECS));
        let tag = ColorTag::GENERATED[rng.random_range(0..ColorTag::GENERATED.len())];
        let status = PhotoStatus::ALL[rng.random_range(0..PhotoStatus::ALL.len())];

        PhotoRecord {
            id: PhotoId(sequence),
            name: PhotoRecord::file_name(sequence),
            size: FileSize::from_megabytes(rng.random_range(1.0..6.0)),
            kind: "JPG".to_string(),
            resolution: "3840x2160".to_string(),
            modified: (now - age).date_naive(),
            rating: rng.random_range(1..=PhotoRecord::MAX_RATING),
            tag,
            status,
            issues: IssueFlags {
                blur: rng.random_bool(0.30),
                closed_eyes: rng.random_bool(0.20),
                exposure: rng.random_bool(0.25),
                expression: rng.random_bool(0.20),
            },
        }
    }
}

impl Default for MockPhotoRepository {
    fn default() -> Self {
        Self::new(DEFAULT_PHOTO_COUNT, None)
    }
}

impl PhotoRepository for MockPhotoRepository {
    fn list_records(&self) -> Result<Vec<PhotoRecord>, AppError> {
        let now = self.now.unwrap_or_else(Local::now);
        let mut rng = StdRng::seed_from_u64(self.seed);

        let records: Vec<PhotoRecord> = (1..=self.count)
            .map(|sequence| self.generate(&mut rng, sequence, now))
            .collect();

        tracing::info!("Generated {} mock photo records", records.len());
        Ok(records)
    }
}

//! Service wiring
//!
//! Builds the pipeline and record lifecycle from a [`Config`], using the
//! filesystem photo store, the EXIF extractor and the SQLite repository.

use std::sync::Arc;

use log::debug;

use crate::adapters::exif::ExifMetadataExtractor;
use crate::adapters::file::FilePhotoStore;
use crate::adapters::sqlite::SqliteAttendanceRepository;
use crate::config::Config;
use crate::core::ports::{AttendanceRepository, MetadataExtractor, PhotoStore};
use crate::core::services::{RecordLifecycle, VerificationPipeline};

/// Fully wired services
#[derive(Debug)]
pub struct Services {
    /// Write path
    pub pipeline: VerificationPipeline,
    /// Read path
    pub records: Arc<RecordLifecycle>,
}

impl Services {
    /// Open the configured stores and wire the services
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let photos = FilePhotoStore::new(&config.upload.root, config.upload_policy())?;
        let repository = SqliteAttendanceRepository::open(&config.database.path)?;
        debug!(
            "Using uploads at {} and database at {}",
            config.upload.root.display(),
            config.database.path.display()
        );

        Ok(Self::assemble(
            config,
            Arc::new(photos),
            Arc::new(ExifMetadataExtractor),
            Arc::new(repository),
        ))
    }

    /// Wire the services over arbitrary port implementations
    pub fn assemble(
        config: &Config,
        photos: Arc<dyn PhotoStore>,
        metadata: Arc<dyn MetadataExtractor>,
        repository: Arc<dyn AttendanceRepository>,
    ) -> Self {
        let records = Arc::new(RecordLifecycle::new(
            repository,
            config.upload.public_prefix.clone(),
        ));
        let pipeline = VerificationPipeline::new(
            config.verification_policy(),
            photos,
            metadata,
            Arc::clone(&records),
        );
        Self { pipeline, records }
    }
}

//! Verification pipeline
//!
//! Orchestrates one submission:
//!
//! 1. Reject readings whose accuracy exceeds the policy (before any I/O)
//! 2. Store the photo
//! 3. Extract embedded position and capture time (failures become absence)
//! 4. Assess suspicion
//! 5. Persist the record; on failure delete the stored photo, then report
//!
//! Step 5's compensating delete runs synchronously before `submit` returns.

use std::fmt;
use std::sync::Arc;

use log::{debug, error, info, warn};

use crate::core::error::AttendanceError;
use crate::core::models::{AttendanceEntry, AttendanceRecord, PhotoMetadata, Submission};
use crate::core::ports::{MetadataExtractor, PhotoStore};

use super::lifecycle::RecordLifecycle;
use super::suspicion::assess;

/// Thresholds applied to every submission
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerificationPolicy {
    /// Largest accepted GPS accuracy radius, in meters
    pub max_gps_accuracy: f64,
    /// Largest accepted gap between claimed and photo positions, in meters
    pub max_distance_difference: f64,
}

/// Drives a submission through storage, extraction, assessment and persistence
pub struct VerificationPipeline {
    policy: VerificationPolicy,
    photos: Arc<dyn PhotoStore>,
    metadata: Arc<dyn MetadataExtractor>,
    records: Arc<RecordLifecycle>,
}

impl VerificationPipeline {
    /// Create a pipeline from its collaborators
    pub fn new(
        policy: VerificationPolicy,
        photos: Arc<dyn PhotoStore>,
        metadata: Arc<dyn MetadataExtractor>,
        records: Arc<RecordLifecycle>,
    ) -> Self {
        Self {
            policy,
            photos,
            metadata,
            records,
        }
    }

    /// The thresholds in force
    #[must_use]
    pub const fn policy(&self) -> &VerificationPolicy {
        &self.policy
    }

    /// The record lifecycle this pipeline persists through
    #[must_use]
    pub fn records(&self) -> &RecordLifecycle {
        &self.records
    }

    /// Verify and record a check-in
    pub fn submit(&self, submission: Submission<'_>) -> Result<AttendanceRecord, AttendanceError> {
        let Submission {
            employee_id,
            reading,
            device_info,
            photo,
        } = submission;

        if reading.accuracy() > self.policy.max_gps_accuracy {
            return Err(AttendanceError::AccuracyTooLow {
                accuracy: reading.accuracy(),
                max: self.policy.max_gps_accuracy,
            });
        }

        let photo_path = self.photos.save(photo)?;
        debug!("Stored photo {photo_path} for employee {employee_id}");

        let metadata = self.read_metadata(&photo_path);
        let verdict = assess(reading.position(), &metadata, self.policy.max_distance_difference);
        if verdict.is_suspicious() {
            warn!(
                "Suspicious attendance from employee {employee_id}: {}",
                verdict.reasons().join("; ")
            );
        }

        let entry = AttendanceEntry {
            employee_id,
            reading,
            photo_path: photo_path.clone(),
            photo: metadata,
            verdict,
            device_info,
        };

        match self.records.create(entry) {
            Ok(record) => {
                info!("Recorded attendance {} for employee {employee_id}", record.id);
                Ok(record)
            },
            Err(err) => {
                if let AttendanceError::PersistenceFailure(cause) = &err {
                    error!("Failed to persist attendance for employee {employee_id}: {cause:#}");
                }
                self.discard_photo(&photo_path);
                Err(err)
            },
        }
    }

    /// Compensating delete for a photo whose record could not be persisted
    ///
    /// Best effort: a failed delete is logged, not propagated. Returns whether
    /// the photo is gone.
    pub fn discard_photo(&self, photo_path: &str) -> bool {
        match self.photos.remove(photo_path) {
            Ok(()) => {
                debug!("Removed orphaned photo {photo_path}");
                true
            },
            Err(err) => {
                error!("Failed to remove orphaned photo {photo_path}: {err}");
                false
            },
        }
    }

    fn read_metadata(&self, photo_path: &str) -> PhotoMetadata {
        let path = self.photos.locate(photo_path);
        match self.metadata.extract(&path) {
            Ok(metadata) => {
                debug!(
                    "Photo {photo_path}: position {}, timestamp {}",
                    if metadata.position.is_some() { "present" } else { "absent" },
                    if metadata.taken_at.is_some() { "present" } else { "absent" },
                );
                metadata
            },
            Err(err) => {
                warn!("Could not read metadata from {}: {err}", path.display());
                PhotoMetadata::empty()
            },
        }
    }
}

impl fmt::Debug for VerificationPipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VerificationPipeline")
            .field("policy", &self.policy)
            .field("records", &self.records)
            .finish_non_exhaustive()
    }
}

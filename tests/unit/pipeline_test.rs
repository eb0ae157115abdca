//! Tests for the verification pipeline

use std::io;
use std::sync::Arc;

use chrono::NaiveDate;

use attendance::core::error::AttendanceError;
use attendance::core::models::{
    AttendanceRecord, ClaimedReading, GeoPoint, PhotoMetadata, PhotoUpload, Submission,
};
use attendance::core::ports::AttendanceRepository;
use attendance::core::services::{
    NO_GPS_REASON, RecordLifecycle, VerificationPipeline, VerificationPolicy,
};

use crate::common::fixtures::{FAR_FROM_OFFICE, NEAR_OFFICE, OFFICE, reading};
use crate::common::mocks::{
    FailingRepository, MemoryRepository, MockPhotoStore, StaticMetadata,
};

const POLICY: VerificationPolicy = VerificationPolicy {
    max_gps_accuracy: 100.0,
    max_distance_difference: 200.0,
};

struct Harness {
    photos: Arc<MockPhotoStore>,
    metadata: Arc<StaticMetadata>,
    pipeline: VerificationPipeline,
}

impl Harness {
    fn new(metadata: StaticMetadata) -> Self {
        Self::with(MockPhotoStore::new(), metadata, Arc::new(MemoryRepository::new()))
    }

    fn with(
        photos: MockPhotoStore,
        metadata: StaticMetadata,
        repository: Arc<dyn AttendanceRepository>,
    ) -> Self {
        let photos = Arc::new(photos);
        let metadata = Arc::new(metadata);
        let records = Arc::new(RecordLifecycle::new(repository, "/uploads"));
        let pipeline =
            VerificationPipeline::new(POLICY, photos.clone(), metadata.clone(), records);
        Self {
            photos,
            metadata,
            pipeline,
        }
    }

    fn submit(&self, reading: ClaimedReading) -> Result<AttendanceRecord, AttendanceError> {
        let mut content: &[u8] = b"\xFF\xD8photo bytes\xFF\xD9";
        self.pipeline.submit(Submission {
            employee_id: 7,
            reading,
            device_info: "Pixel 8".to_string(),
            photo: PhotoUpload {
                original_name: "selfie.JPG".to_string(),
                declared_size: 15,
                content: &mut content,
            },
        })
    }
}

fn photo_at(position: (f64, f64)) -> PhotoMetadata {
    PhotoMetadata {
        position: Some(GeoPoint::new(position.0, position.1).unwrap()),
        taken_at: None,
    }
}

// =============================================================================
// ACCURACY GATE
// =============================================================================

#[test]
fn test_poor_accuracy_rejected_before_any_io() {
    let harness = Harness::new(StaticMetadata::returning(photo_at(OFFICE)));

    let err = harness.submit(reading(OFFICE, 250.0)).unwrap_err();

    assert!(matches!(
        err,
        AttendanceError::AccuracyTooLow { accuracy, max } if accuracy == 250.0 && max == 100.0
    ));
    assert_eq!(err.to_string(), "GPS accuracy too low: 250.00m (max: 100.00m)");
    assert_eq!(harness.photos.save_count(), 0);
    assert!(harness.metadata.calls().is_empty());
}

#[test]
fn test_accuracy_at_threshold_is_accepted() {
    let harness = Harness::new(StaticMetadata::returning(photo_at(OFFICE)));

    let record = harness.submit(reading(OFFICE, 100.0)).unwrap();

    assert!(!record.entry.verdict.is_suspicious());
    assert_eq!(harness.photos.save_count(), 1);
}

// =============================================================================
// VERDICTS
// =============================================================================

#[test]
fn test_nearby_photo_is_trusted() {
    let harness = Harness::new(StaticMetadata::returning(photo_at(NEAR_OFFICE)));

    let record = harness.submit(reading(OFFICE, 15.0)).unwrap();

    assert!(!record.entry.verdict.is_suspicious());
    assert!(record.entry.verdict.reasons().is_empty());
    assert_eq!(record.entry.photo.position, Some(GeoPoint::new(-6.2005, 106.8168).unwrap()));
}

#[test]
fn test_distant_photo_is_flagged_with_distance() {
    let harness = Harness::new(StaticMetadata::returning(photo_at(FAR_FROM_OFFICE)));

    let record = harness.submit(reading(OFFICE, 15.0)).unwrap();

    assert!(record.entry.verdict.is_suspicious());
    assert_eq!(
        record.entry.verdict.reasons(),
        ["Location mismatch: 671.10m difference"]
    );
}

#[test]
fn test_photo_without_gps_is_flagged() {
    let harness = Harness::new(StaticMetadata::returning(PhotoMetadata::empty()));

    let record = harness.submit(reading(OFFICE, 15.0)).unwrap();

    assert!(record.entry.verdict.is_suspicious());
    assert_eq!(record.entry.verdict.reasons(), [NO_GPS_REASON]);
    assert!(record.entry.photo.position.is_none());
}

#[test]
fn test_extraction_failure_counts_as_missing_gps() {
    let harness = Harness::new(StaticMetadata::failing(io::ErrorKind::InvalidData));

    let record = harness.submit(reading(OFFICE, 15.0)).unwrap();

    assert_eq!(record.entry.verdict.reasons(), [NO_GPS_REASON]);
    assert!(record.entry.photo.is_empty());
}

#[test]
fn test_timestamp_kept_without_position() {
    let taken_at = NaiveDate::from_ymd_opt(2024, 1, 15)
        .unwrap()
        .and_hms_opt(8, 30, 0)
        .unwrap();
    let harness = Harness::new(StaticMetadata::returning(PhotoMetadata {
        position: None,
        taken_at: Some(taken_at),
    }));

    let record = harness.submit(reading(OFFICE, 15.0)).unwrap();

    assert_eq!(record.entry.photo.taken_at, Some(taken_at));
    assert_eq!(record.entry.verdict.reasons(), [NO_GPS_REASON]);
}

// =============================================================================
// STORAGE AND PERSISTENCE
// =============================================================================

#[test]
fn test_record_carries_stored_photo_and_url() {
    let harness = Harness::new(StaticMetadata::returning(photo_at(NEAR_OFFICE)));

    let record = harness.submit(reading(OFFICE, 15.0)).unwrap();

    assert_eq!(record.id, 1);
    assert_eq!(record.entry.employee_id, 7);
    assert_eq!(record.entry.device_info, "Pixel 8");
    assert_eq!(record.entry.photo_path, "photo_1.jpg");
    assert_eq!(record.photo_url, "/uploads/photo_1.jpg");
    assert_eq!(
        harness.photos.saved_bytes("photo_1.jpg").unwrap(),
        b"\xFF\xD8photo bytes\xFF\xD9"
    );
    assert_eq!(
        harness.metadata.calls(),
        [std::path::PathBuf::from("/mock/photo_1.jpg")]
    );
}

#[test]
fn test_persistence_failure_removes_photo() {
    let harness = Harness::with(
        MockPhotoStore::new(),
        StaticMetadata::returning(photo_at(NEAR_OFFICE)),
        Arc::new(FailingRepository),
    );

    let err = harness.submit(reading(OFFICE, 15.0)).unwrap_err();

    assert!(matches!(err, AttendanceError::PersistenceFailure(_)));
    assert_eq!(err.to_string(), "failed to save attendance record");
    assert_eq!(harness.photos.removed(), harness.photos.saved_names());
    assert_eq!(harness.photos.removed(), ["photo_1.jpg"]);
}

#[test]
fn test_failed_cleanup_still_reports_persistence_failure() {
    let harness = Harness::with(
        MockPhotoStore::failing_remove(),
        StaticMetadata::returning(photo_at(NEAR_OFFICE)),
        Arc::new(FailingRepository),
    );

    let err = harness.submit(reading(OFFICE, 15.0)).unwrap_err();

    assert!(matches!(err, AttendanceError::PersistenceFailure(_)));
    assert_eq!(harness.photos.removed().len(), 1);
}

#[test]
fn test_discard_photo_reports_outcome() {
    let ok = Harness::new(StaticMetadata::returning(PhotoMetadata::empty()));
    assert!(ok.pipeline.discard_photo("x.jpg"));

    let failing = Harness::with(
        MockPhotoStore::failing_remove(),
        StaticMetadata::returning(PhotoMetadata::empty()),
        Arc::new(MemoryRepository::new()),
    );
    assert!(!failing.pipeline.discard_photo("x.jpg"));
}

#[test]
fn test_records_are_readable_after_submit() {
    let harness = Harness::new(StaticMetadata::returning(photo_at(NEAR_OFFICE)));

    let first = harness.submit(reading(OFFICE, 15.0)).unwrap();
    let second = harness.submit(reading(OFFICE, 20.0)).unwrap();

    let records = harness.pipeline.records();
    assert_eq!(records.get(first.id).unwrap(), first);
    let history = records.history(7, 50).unwrap();
    assert_eq!(history, [second, first]);
}

//! Photo store backed by a directory
//!
//! Stored names look like `20240115_083000_1a2b3c4d.jpg`: a local timestamp
//! plus a random suffix. Files are opened with create-new semantics so
//! concurrent submissions can never write into the same file, and a failed
//! write removes its partial file before the error is returned.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::Local;
use log::{debug, warn};
use uuid::Uuid;

use crate::core::error::AttendanceError;
use crate::core::models::PhotoUpload;
use crate::core::ports::PhotoStore;

/// Attempts at finding an unused file name before giving up
const MAX_NAME_ATTEMPTS: usize = 4;

/// Length of the random suffix in generated names
const SUFFIX_LEN: usize = 8;

/// Which uploads the store accepts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadPolicy {
    /// Accepted extensions, lower case without the leading dot
    pub allowed_extensions: Vec<String>,
    /// Largest accepted upload in bytes
    pub max_size: u64,
}

impl UploadPolicy {
    /// Whether `extension` (already lower-cased) is on the allow-list
    #[must_use]
    pub fn allows(&self, extension: &str) -> bool {
        !extension.is_empty() && self.allowed_extensions.iter().any(|e| e == extension)
    }
}

/// Filesystem photo store rooted at a configured directory
#[derive(Debug, Clone)]
pub struct FilePhotoStore {
    root: PathBuf,
    policy: UploadPolicy,
}

impl FilePhotoStore {
    /// Open a store, creating the root directory if it does not exist
    pub fn new(root: impl Into<PathBuf>, policy: UploadPolicy) -> anyhow::Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)
            .with_context(|| format!("failed to create upload directory {}", root.display()))?;
        Ok(Self { root, policy })
    }

    /// The directory photos are written to
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The policy uploads are checked against
    #[must_use]
    pub const fn policy(&self) -> &UploadPolicy {
        &self.policy
    }

    fn validate(&self, upload: &PhotoUpload<'_>) -> Result<String, AttendanceError> {
        let extension = upload.extension();
        if !self.policy.allows(&extension) {
            return Err(AttendanceError::UnsupportedMediaType {
                extension,
                allowed: self.policy.allowed_extensions.clone(),
            });
        }

        if upload.declared_size > self.policy.max_size {
            return Err(AttendanceError::PayloadTooLarge {
                size: upload.declared_size,
                max: self.policy.max_size,
            });
        }

        Ok(extension)
    }

    /// Create a new, empty file under a freshly generated name
    fn create_unique(&self, extension: &str) -> io::Result<(String, File)> {
        for _ in 0..MAX_NAME_ATTEMPTS {
            let name = generate_name(extension);
            match OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(self.root.join(&name))
            {
                Ok(file) => return Ok((name, file)),
                Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
                    debug!("Photo name {name} already taken, retrying");
                },
                Err(err) => return Err(err),
            }
        }

        Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            "could not generate an unused photo name",
        ))
    }
}

impl PhotoStore for FilePhotoStore {
    fn save(&self, upload: PhotoUpload<'_>) -> Result<String, AttendanceError> {
        let extension = self.validate(&upload)?;
        let (name, file) = self
            .create_unique(&extension)
            .map_err(AttendanceError::StorageFailure)?;

        match write_capped(file, upload.content, self.policy.max_size) {
            Ok(written) => {
                debug!("Wrote {written} bytes to {name}");
                Ok(name)
            },
            Err(err) => {
                let path = self.root.join(&name);
                if let Err(rm) = fs::remove_file(&path) {
                    warn!("Failed to remove partial photo {}: {rm}", path.display());
                }
                Err(err)
            },
        }
    }

    fn locate(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    fn remove(&self, name: &str) -> io::Result<()> {
        match fs::remove_file(self.locate(name)) {
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            other => other,
        }
    }
}

/// `YYYYMMDD_HHMMSS_<suffix>.<ext>`
fn generate_name(extension: &str) -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!(
        "{}_{}.{extension}",
        Local::now().format("%Y%m%d_%H%M%S"),
        &suffix[..SUFFIX_LEN]
    )
}

/// Copy at most `max` bytes into `file`, failing if the stream holds more
fn write_capped(mut file: File, content: &mut dyn Read, max: u64) -> Result<u64, AttendanceError> {
    let mut limited = Read::take(content, max.saturating_add(1));
    let written = io::copy(&mut limited, &mut file).map_err(AttendanceError::StorageFailure)?;
    if written > max {
        return Err(AttendanceError::PayloadTooLarge { size: written, max });
    }

    file.flush().map_err(AttendanceError::StorageFailure)?;
    file.sync_all().map_err(AttendanceError::StorageFailure)?;
    Ok(written)
}

//! Inspect command - print the metadata embedded in a photo

use std::path::Path;

use anyhow::Context;

use attendance::adapters::exif::ExifMetadataExtractor;
use attendance::core::ports::MetadataExtractor;
use attendance::output::{MetadataReport, OutputMode};

/// Extract and print a photo's GPS position and capture time
pub fn inspect(photo: &Path, output_mode: OutputMode) -> anyhow::Result<()> {
    let metadata = ExifMetadataExtractor
        .extract(photo)
        .with_context(|| format!("failed to read {}", photo.display()))?;

    MetadataReport::new(photo.to_path_buf(), &metadata).render(output_mode);
    Ok(())
}

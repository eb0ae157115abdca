//! Submit command - record a check-in from a photo on disk

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use attendance::api::{self, SubmitRequest};
use attendance::app::Services;
use attendance::config::Config;
use attendance::core::models::PhotoUpload;
use attendance::output::{AttendanceReport, OutputMode};

/// Arguments of `attendance submit`
#[derive(Args, Debug)]
pub struct SubmitArgs {
    /// Employee submitting the check-in
    #[arg(short, long)]
    pub employee: i64,

    /// Claimed latitude in degrees
    #[arg(long, allow_negative_numbers = true)]
    pub lat: f64,

    /// Claimed longitude in degrees
    #[arg(long, allow_negative_numbers = true)]
    pub lon: f64,

    /// Claimed accuracy radius in meters
    #[arg(short, long)]
    pub accuracy: f64,

    /// Free-text address
    #[arg(long, default_value = "")]
    pub address: String,

    /// Device description
    #[arg(long, default_value = "")]
    pub device: String,

    /// Photo taken at check-in
    pub photo: PathBuf,
}

/// Record a check-in
pub fn submit(config: &Config, args: &SubmitArgs, output_mode: OutputMode) -> anyhow::Result<()> {
    let services = Services::from_config(config)?;

    let file = File::open(&args.photo)
        .with_context(|| format!("failed to open photo {}", args.photo.display()))?;
    let declared_size = file.metadata()?.len();
    let mut content = BufReader::new(file);

    let original_name = args
        .photo
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let request = SubmitRequest {
        latitude: args.lat,
        longitude: args.lon,
        accuracy: args.accuracy,
        address: args.address.clone(),
        device_info: args.device.clone(),
    };
    let photo = PhotoUpload {
        original_name,
        declared_size,
        content: &mut content,
    };

    let data = api::submit_attendance(&services.pipeline, args.employee, &request, photo)?;
    AttendanceReport::submitted(data).render(output_mode);
    Ok(())
}

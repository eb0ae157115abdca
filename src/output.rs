//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use std::path::PathBuf;

use chrono::NaiveDateTime;
use colored::Colorize;
use serde::Serialize;

use crate::api::{AttendanceView, HistoryData, SubmitData};
use crate::core::models::PhotoMetadata;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

impl OutputMode {
    /// Select JSON mode when `json` is set
    #[must_use]
    pub const fn from_flag(json: bool) -> Self {
        if json { Self::Json } else { Self::Human }
    }
}

fn print_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

fn status_label(view: &AttendanceView) -> String {
    if view.is_suspicious {
        "SUSPICIOUS".red().bold().to_string()
    } else {
        "OK".green().bold().to_string()
    }
}

fn describe_position(latitude: Option<f64>, longitude: Option<f64>) -> String {
    match (latitude, longitude) {
        (Some(lat), Some(lon)) => format!("{lat:.6}, {lon:.6}"),
        _ => "none".dimmed().to_string(),
    }
}

fn describe_timestamp(timestamp: Option<NaiveDateTime>) -> String {
    timestamp.map_or_else(|| "none".dimmed().to_string(), |t| t.to_string())
}

/// A single attendance record, optionally with a confirmation message
#[derive(Debug, Serialize)]
pub struct AttendanceReport {
    /// Confirmation message (present after a submission)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// The record
    pub attendance: AttendanceView,
}

impl AttendanceReport {
    /// Report a freshly submitted record
    #[must_use]
    pub fn submitted(data: SubmitData) -> Self {
        Self {
            message: Some(data.message),
            attendance: data.attendance,
        }
    }

    /// Report an existing record
    #[must_use]
    pub const fn existing(attendance: AttendanceView) -> Self {
        Self {
            message: None,
            attendance,
        }
    }

    /// Render the report based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        if let Some(message) = &self.message {
            println!("{message}\n");
        }

        let a = &self.attendance;
        println!("Attendance #{} [{}]", a.id, status_label(a));
        println!("  Employee:  {}", a.employee_id);
        println!("  Recorded:  {}", a.created_at.to_rfc3339());
        println!(
            "  Claimed:   {:.6}, {:.6} (±{:.1}m)",
            a.latitude, a.longitude, a.accuracy
        );
        if !a.address.is_empty() {
            println!("  Address:   {}", a.address);
        }
        println!(
            "  Photo GPS: {}",
            describe_position(a.photo_latitude, a.photo_longitude)
        );
        println!("  Taken at:  {}", describe_timestamp(a.photo_timestamp));
        println!("  Photo:     {}", a.photo_url);
        if !a.device_info.is_empty() {
            println!("  Device:    {}", a.device_info);
        }
        for reason in &a.suspicious_reasons {
            println!("  {} {reason}", "!".yellow().bold());
        }
    }
}

/// An employee's recent records
#[derive(Debug, Serialize)]
pub struct HistoryReport {
    /// The history
    #[serde(flatten)]
    pub history: HistoryData,
}

impl HistoryReport {
    /// Render the report based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        let records = &self.history.attendances;
        if records.is_empty() {
            println!("No attendance records for employee {}.", self.history.employee_id);
            return;
        }

        println!(
            "Attendance for employee {} ({} record(s)):\n",
            self.history.employee_id,
            records.len()
        );
        for a in records {
            println!(
                "  #{:<6} {}  {:.6}, {:.6}  [{}]",
                a.id,
                a.created_at.format("%Y-%m-%d %H:%M:%S"),
                a.latitude,
                a.longitude,
                status_label(a)
            );
            for reason in &a.suspicious_reasons {
                println!("          {reason}");
            }
        }
    }
}

/// Metadata extracted from a single photo file
#[derive(Debug, Serialize)]
pub struct MetadataReport {
    /// The inspected file
    pub file: PathBuf,
    /// Embedded latitude
    pub photo_latitude: Option<f64>,
    /// Embedded longitude
    pub photo_longitude: Option<f64>,
    /// Embedded capture time
    pub photo_timestamp: Option<NaiveDateTime>,
}

impl MetadataReport {
    /// Build a report from extracted metadata
    #[must_use]
    pub fn new(file: PathBuf, metadata: &PhotoMetadata) -> Self {
        Self {
            file,
            photo_latitude: metadata.position.map(|p| p.latitude()),
            photo_longitude: metadata.position.map(|p| p.longitude()),
            photo_timestamp: metadata.taken_at,
        }
    }

    /// Render the report based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        println!("{}", self.file.display());
        println!(
            "  GPS:      {}",
            describe_position(self.photo_latitude, self.photo_longitude)
        );
        println!("  Taken at: {}", describe_timestamp(self.photo_timestamp));
    }
}

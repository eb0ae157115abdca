//! Show command - print one check-in owned by the requester

use attendance::api;
use attendance::app::Services;
use attendance::config::Config;
use attendance::output::{AttendanceReport, OutputMode};

/// Print a single check-in
pub fn show(config: &Config, id: i64, employee: i64, output_mode: OutputMode) -> anyhow::Result<()> {
    let services = Services::from_config(config)?;

    let view = api::attendance_detail(&services.records, employee, id)?;
    AttendanceReport::existing(view).render(output_mode);
    Ok(())
}

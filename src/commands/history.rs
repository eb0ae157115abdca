//! History command - list an employee's recent check-ins

use attendance::api;
use attendance::app::Services;
use attendance::config::Config;
use attendance::output::{HistoryReport, OutputMode};

/// List recent check-ins, most recent first
pub fn history(
    config: &Config,
    employee: i64,
    limit: Option<usize>,
    output_mode: OutputMode,
) -> anyhow::Result<()> {
    let services = Services::from_config(config)?;
    let limit = limit.unwrap_or(config.history.limit);

    let history = api::attendance_history(&services.records, employee, limit)?;
    HistoryReport { history }.render(output_mode);
    Ok(())
}

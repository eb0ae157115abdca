//! Config command - print the effective configuration

use attendance::config::Config;
use attendance::output::OutputMode;

/// Print the configuration after file and environment overrides
pub fn config(config: &Config, output_mode: OutputMode) -> anyhow::Result<()> {
    match output_mode {
        OutputMode::Json => println!("{}", serde_json::to_string_pretty(config)?),
        OutputMode::Human => print!("{}", config.to_toml()?),
    }
    Ok(())
}

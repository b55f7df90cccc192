//! Config command handlers

use crate::cli::ConfigInitArgs;
use crate::config::DashboardConfig;
use crate::traces::TRACES_PATH;
use std::fs;

const EXAMPLE_CONFIG: &str = include_str!("../../tracedash.example.toml");

/// Handle `tracedash config init` command
///
/// Writes the example configuration, reads it back through the normal loader
/// and reports which trace endpoint it targets.
pub fn handle_config_init(args: &ConfigInitArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.output.exists() && !args.force {
        return Err(format!(
            "File already exists: {}. Use --force to overwrite.",
            args.output.display()
        )
        .into());
    }

    fs::write(&args.output, EXAMPLE_CONFIG)?;

    let config = DashboardConfig::load(Some(&args.output))?;
    config.validate()?;

    println!("✓ Configuration file created: {}", args.output.display());
    println!(
        "  Traces endpoint: {}{} (limit 1-{}, default {})",
        config.api.base_url.trim_end_matches('/'),
        TRACES_PATH,
        config.dashboard.max_limit,
        config.dashboard.default_limit
    );
    println!("  Edit [api] base_url to point at your trace service.");

    Ok(())
}

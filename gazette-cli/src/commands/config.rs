//! Read a single configuration value.

use anyhow::{Context, Result};
use gazette_core::Config;
use std::path::Path;

/// Print the value at a dotted key such as `site.title`
pub fn config_value(config_path: &Path, key: &str) -> Result<()> {
    let config = Config::from_file(config_path).with_context(|| {
        format!(
            "Failed to load configuration from {}",
            config_path.display()
        )
    })?;
    let value = config
        .get(key)
        .with_context(|| format!("No configuration value at '{}'", key))?;
    println!("{value}");
    Ok(())
}

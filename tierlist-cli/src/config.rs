/// Config file loading and creation for the tierlist CLI.
///
/// Config lives at ~/.config/tierlist/config.toml.
/// All fields are optional; CLI args override config values.
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::bail;

#[derive(Deserialize, Default)]
pub struct TierlistConfig {
    /// Band spec in the same syntax as --bands, e.g. "1%:10, 10%:9.5, 100%:6".
    pub bands: Option<String>,
    pub increment: Option<f64>,
    pub clamp_min: Option<f64>,
    pub clamp_max: Option<f64>,
    pub interpolate: Option<bool>,
}

const DEFAULT_CONFIG_TEMPLATE: &str = "\
# tierlist configuration
# All values here can be overridden by CLI flags.

# Percentile bands, ascending cumulative upper bound, ending at 100%.
# bands = \"1%:10, 10%:9.5, 25%:8.75, 75%:7.5, 100%:6\"

# Rounding granularity for scores
# increment = 0.25

# Clamp scores into a range before rounding
# clamp_min = 6.0
# clamp_max = 10.0

# Interpolate linearly between band boundaries instead of stepping
# interpolate = false
";

/// Returns the default config path: ~/.config/tierlist/config.toml
pub fn config_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| bail("HOME environment variable not set"));
    PathBuf::from(home).join(".config").join("tierlist").join("config.toml")
}

/// Load config from a file path. Returns default (all None) if file doesn't exist.
pub fn load_config(path: &Path) -> TierlistConfig {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            toml::from_str(&content)
                .unwrap_or_else(|e| bail(format!("Failed to parse config at {}: {e}", path.display())))
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => TierlistConfig::default(),
        Err(e) => bail(format!("Failed to read config at {}: {e}", path.display())),
    }
}

/// Create the default config file. Errors if it already exists.
pub fn create_default_config() -> PathBuf {
    let path = config_path();

    if path.exists() {
        bail(format!("Config file already exists at {}", path.display()));
    }

    // Create parent directories
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .unwrap_or_else(|e| bail(format!("Failed to create directory {}: {e}", parent.display())));
    }

    std::fs::write(&path, DEFAULT_CONFIG_TEMPLATE)
        .unwrap_or_else(|e| bail(format!("Failed to write config to {}: {e}", path.display())));

    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_parses_with_defaults_commented() {
        let cfg: TierlistConfig = toml::from_str(DEFAULT_CONFIG_TEMPLATE).unwrap();
        assert!(cfg.bands.is_none());
        assert!(cfg.increment.is_none());
    }

    #[test]
    fn test_populated_config_parses() {
        let cfg: TierlistConfig = toml::from_str(
            "bands = \"50%:9, 100%:6\"\nincrement = 0.5\nclamp_min = 6.0\nclamp_max = 10.0\ninterpolate = true\n",
        )
        .unwrap();
        assert_eq!(cfg.bands.as_deref(), Some("50%:9, 100%:6"));
        assert_eq!(cfg.increment, Some(0.5));
        assert_eq!(cfg.interpolate, Some(true));
    }
}

use crate::core::TrackProfile;
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub defaults: TrackProfile,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Emit the JSON report instead of the human one.
    pub json: bool,
    /// Exit 1 when the rule score falls below this value. 0 disables the gate.
    pub min_score: u8,
    /// Reject out-of-range inputs instead of warning about them.
    pub strict_domain: bool,
}

pub fn load_config(cli_config_path: Option<&Path>, cwd: &Path) -> Result<Config> {
    if let Some(path) = cli_config_path {
        if !path.exists() {
            bail!(
                "config file not found at {} (passed with --config)",
                path.display()
            );
        }

        return read_config(path);
    }

    let local_path = cwd.join("beatforecast.toml");
    if local_path.exists() {
        return read_config(&local_path);
    }

    Ok(Config::default())
}

pub fn write_default_config(path: &Path) -> Result<()> {
    if path.exists() {
        bail!(
            "refusing to overwrite existing config file: {}",
            path.display()
        );
    }

    let content = default_config_toml()?;
    fs::write(path, content).with_context(|| format!("failed writing {}", path.display()))?;
    Ok(())
}

pub fn default_config_toml() -> Result<String> {
    toml::to_string_pretty(&Config::default()).context("failed to serialize default config")
}

fn read_config(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed reading config file {}", path.display()))?;
    let config = toml::from_str::<Config>(&content)
        .with_context(|| format!("failed parsing config file {}", path.display()))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_round_trips_through_toml() {
        let serialized = default_config_toml().unwrap();
        let parsed: Config = toml::from_str(&serialized).unwrap();

        assert!(!parsed.general.json);
        assert_eq!(parsed.general.min_score, 0);
        assert!(!parsed.general.strict_domain);
        assert_eq!(parsed.defaults, TrackProfile::default());
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let parsed: Config = toml::from_str(
            r#"
[general]
min_score = 3
"#,
        )
        .unwrap();

        assert_eq!(parsed.general.min_score, 3);
        assert!(!parsed.general.json);
        assert_eq!(parsed.defaults, TrackProfile::default());
    }

    #[test]
    fn defaults_section_overlays_slider_defaults() {
        let parsed: Config = toml::from_str(
            r#"
[defaults]
followers = 250000
energy = 0.85
"#,
        )
        .unwrap();

        assert_eq!(parsed.defaults.followers, 250_000);
        assert_eq!(parsed.defaults.energy, 0.85);
        assert_eq!(parsed.defaults.tempo, 120.0);
    }
}

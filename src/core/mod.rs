pub mod engine;
pub mod report;
pub mod rules;

use crate::config::Config;
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub use self::report::FinalReport;

/// The nine inputs of a forecast run. tempo, valence, speechiness and
/// acousticness are carried through to the input summary but not scored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackProfile {
    pub followers: u64,
    pub artist_popularity: u8,
    pub danceability: f64,
    pub energy: f64,
    pub loudness: f64,
    pub tempo: f64,
    pub valence: f64,
    pub speechiness: f64,
    pub acousticness: f64,
}

impl Default for TrackProfile {
    fn default() -> Self {
        Self {
            followers: 5000,
            artist_popularity: 35,
            danceability: 0.60,
            energy: 0.70,
            loudness: -7.0,
            tempo: 120.0,
            valence: 0.50,
            speechiness: 0.10,
            acousticness: 0.10,
        }
    }
}

/// Sparse overlay for a profile, read from a track TOML file or assembled from
/// CLI flags. Fields left unset keep the base value.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PartialProfile {
    pub followers: Option<u64>,
    pub artist_popularity: Option<u8>,
    pub danceability: Option<f64>,
    pub energy: Option<f64>,
    pub loudness: Option<f64>,
    pub tempo: Option<f64>,
    pub valence: Option<f64>,
    pub speechiness: Option<f64>,
    pub acousticness: Option<f64>,
}

impl PartialProfile {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed reading track file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("failed parsing track file {}", path.display()))
    }

    pub fn apply(self, base: TrackProfile) -> TrackProfile {
        TrackProfile {
            followers: self.followers.unwrap_or(base.followers),
            artist_popularity: self.artist_popularity.unwrap_or(base.artist_popularity),
            danceability: self.danceability.unwrap_or(base.danceability),
            energy: self.energy.unwrap_or(base.energy),
            loudness: self.loudness.unwrap_or(base.loudness),
            tempo: self.tempo.unwrap_or(base.tempo),
            valence: self.valence.unwrap_or(base.valence),
            speechiness: self.speechiness.unwrap_or(base.speechiness),
            acousticness: self.acousticness.unwrap_or(base.acousticness),
        }
    }
}

/// Advisory range checks. The engine itself never rejects or clamps, so the
/// warnings only describe values the upstream widgets would not produce.
pub fn validate_domain(profile: &TrackProfile) -> Vec<String> {
    let mut warnings = Vec::new();

    if profile.artist_popularity > 100 {
        warnings.push(format!(
            "artist_popularity {} is outside 0..=100",
            profile.artist_popularity
        ));
    }

    check_float_range(&mut warnings, "danceability", profile.danceability, 0.0, 1.0);
    check_float_range(&mut warnings, "energy", profile.energy, 0.0, 1.0);
    check_float_range(&mut warnings, "loudness", profile.loudness, -60.0, 0.0);
    check_float_range(&mut warnings, "tempo", profile.tempo, 40.0, 220.0);
    check_float_range(&mut warnings, "valence", profile.valence, 0.0, 1.0);
    check_float_range(&mut warnings, "speechiness", profile.speechiness, 0.0, 1.0);
    check_float_range(&mut warnings, "acousticness", profile.acousticness, 0.0, 1.0);

    warnings
}

fn check_float_range(warnings: &mut Vec<String>, field: &str, value: f64, min: f64, max: f64) {
    if !value.is_finite() {
        warnings.push(format!("{field} is not a finite number"));
    } else if value < min || value > max {
        warnings.push(format!("{field} {value} is outside {min}..={max}"));
    }
}

pub fn run_forecast(profile: TrackProfile, cfg: &Config) -> Result<FinalReport> {
    let warnings = validate_domain(&profile);
    if cfg.general.strict_domain && !warnings.is_empty() {
        bail!(
            "track profile failed domain validation: {}",
            warnings.join("; ")
        );
    }

    let result = engine::compute(&profile);
    let exit = report::evaluate_exit(&result, cfg);

    Ok(FinalReport {
        profile,
        result,
        warnings,
        config: report::ConfigSummary {
            min_score: cfg.general.min_score,
            strict_domain: cfg.general.strict_domain,
        },
        exit,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneralConfig;

    #[test]
    fn partial_profile_overlays_base() {
        let partial = PartialProfile {
            energy: Some(0.95),
            followers: Some(80_000),
            ..PartialProfile::default()
        };

        let merged = partial.apply(TrackProfile::default());
        assert_eq!(merged.energy, 0.95);
        assert_eq!(merged.followers, 80_000);
        assert_eq!(merged.danceability, 0.60);
        assert_eq!(merged.tempo, 120.0);
    }

    #[test]
    fn empty_partial_profile_is_identity() {
        let merged = PartialProfile::default().apply(TrackProfile::default());
        assert_eq!(merged, TrackProfile::default());
    }

    #[test]
    fn partial_profile_parses_sparse_toml() {
        let partial: PartialProfile = toml::from_str(
            r#"
followers = 120000
energy = 0.82
loudness = -5.5
"#,
        )
        .unwrap();

        assert_eq!(partial.followers, Some(120_000));
        assert_eq!(partial.energy, Some(0.82));
        assert_eq!(partial.loudness, Some(-5.5));
        assert!(partial.danceability.is_none());
    }

    #[test]
    fn default_profile_passes_validation() {
        assert!(validate_domain(&TrackProfile::default()).is_empty());
    }

    #[test]
    fn validation_flags_out_of_range_fields() {
        let profile = TrackProfile {
            artist_popularity: 150,
            energy: 1.5,
            loudness: 3.0,
            tempo: 500.0,
            ..TrackProfile::default()
        };

        let warnings = validate_domain(&profile);
        assert_eq!(warnings.len(), 4);
        assert!(warnings[0].contains("artist_popularity 150"));
        assert!(warnings.iter().any(|w| w.contains("energy 1.5")));
        assert!(warnings.iter().any(|w| w.contains("tempo 500")));
    }

    #[test]
    fn validation_flags_non_finite_values() {
        let profile = TrackProfile {
            valence: f64::NAN,
            ..TrackProfile::default()
        };

        let warnings = validate_domain(&profile);
        assert_eq!(warnings, vec!["valence is not a finite number".to_string()]);
    }

    #[test]
    fn forecast_warns_but_runs_by_default() {
        let profile = TrackProfile {
            energy: 1.5,
            ..TrackProfile::default()
        };

        let report = run_forecast(profile, &Config::default()).unwrap();
        assert_eq!(report.warnings.len(), 1);
        // 1.5 still satisfies energy > 0.65, unclamped.
        assert_eq!(report.result.score, 2);
        assert!(report.exit.ok);
    }

    #[test]
    fn strict_domain_rejects_out_of_range_profiles() {
        let cfg = Config {
            general: GeneralConfig {
                strict_domain: true,
                ..GeneralConfig::default()
            },
            ..Config::default()
        };
        let profile = TrackProfile {
            danceability: -0.2,
            ..TrackProfile::default()
        };

        let err = run_forecast(profile, &cfg).unwrap_err();
        assert!(err.to_string().contains("domain validation"));
    }

    #[test]
    fn strict_domain_accepts_in_range_profiles() {
        let cfg = Config {
            general: GeneralConfig {
                strict_domain: true,
                ..GeneralConfig::default()
            },
            ..Config::default()
        };

        let report = run_forecast(TrackProfile::default(), &cfg).unwrap();
        assert!(report.warnings.is_empty());
        assert!(report.exit.ok);
    }
}

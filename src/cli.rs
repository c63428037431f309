use crate::core::PartialProfile;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "beatforecast",
    version,
    about = "Pre-release Spotify performance forecast from artist context and audio features"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the forecast for a track profile
    Forecast(RunArgs),
    /// Print the model driver table
    Rules,
    /// Write a default beatforecast.toml in the current directory
    Init(InitArgs),
}

#[derive(Debug, Args, Clone)]
pub struct RunArgs {
    /// Track profile TOML applied over the config defaults
    #[arg(long)]
    pub input: Option<PathBuf>,
    #[arg(long)]
    pub config: Option<PathBuf>,
    #[arg(long)]
    pub json: bool,
    /// Reject out-of-range inputs instead of warning
    #[arg(long)]
    pub strict: bool,

    #[command(flatten)]
    pub overrides: ProfileArgs,
}

#[derive(Debug, Args)]
pub struct InitArgs {
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Per-field overrides, highest precedence in the profile layering.
#[derive(Debug, Args, Clone, Default)]
pub struct ProfileArgs {
    #[arg(long)]
    pub followers: Option<u64>,
    #[arg(long)]
    pub artist_popularity: Option<u8>,
    #[arg(long)]
    pub danceability: Option<f64>,
    #[arg(long)]
    pub energy: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    pub loudness: Option<f64>,
    #[arg(long)]
    pub tempo: Option<f64>,
    #[arg(long)]
    pub valence: Option<f64>,
    #[arg(long)]
    pub speechiness: Option<f64>,
    #[arg(long)]
    pub acousticness: Option<f64>,
}

impl ProfileArgs {
    pub fn into_partial(self) -> PartialProfile {
        PartialProfile {
            followers: self.followers,
            artist_popularity: self.artist_popularity,
            danceability: self.danceability,
            energy: self.energy,
            loudness: self.loudness,
            tempo: self.tempo,
            valence: self.valence,
            speechiness: self.speechiness,
            acousticness: self.acousticness,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn forecast_accepts_negative_loudness() {
        let cli = Cli::parse_from(["beatforecast", "forecast", "--loudness", "-6.5"]);
        let Commands::Forecast(args) = cli.command else {
            panic!("expected forecast subcommand");
        };
        assert_eq!(args.overrides.loudness, Some(-6.5));
    }

    #[test]
    fn profile_args_map_to_partial_profile() {
        let cli = Cli::parse_from([
            "beatforecast",
            "forecast",
            "--followers",
            "75000",
            "--energy",
            "0.8",
        ]);
        let Commands::Forecast(args) = cli.command else {
            panic!("expected forecast subcommand");
        };

        let partial = args.overrides.into_partial();
        assert_eq!(partial.followers, Some(75_000));
        assert_eq!(partial.energy, Some(0.8));
        assert!(partial.valence.is_none());
    }
}

use crate::config::Config;
use crate::core::TrackProfile;
use crate::core::engine::{Recommendation, ScoreResult};
use crate::core::rules;
use colored::Colorize;
use serde::Serialize;

#[derive(Debug, Clone)]
pub struct ExitStatus {
    pub ok: bool,
    pub reasons: Vec<String>,
}

impl ExitStatus {
    pub fn reason_line(&self) -> String {
        self.reasons.join("; ")
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ConfigSummary {
    pub min_score: u8,
    pub strict_domain: bool,
}

#[derive(Debug, Clone)]
pub struct FinalReport {
    pub profile: TrackProfile,
    pub result: ScoreResult,
    pub warnings: Vec<String>,
    pub config: ConfigSummary,
    pub exit: ExitStatus,
}

/// Machine-readable projection of the report. Floats stay at full precision
/// here; only the human output rounds.
#[derive(Debug, Clone, Serialize)]
pub struct JsonReport {
    pub inputs: TrackProfile,
    pub score: u8,
    pub breakout_probability: f64,
    pub predicted_popularity: f64,
    pub recommendation: Recommendation,
    pub headline: String,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
    pub config: ConfigSummary,
}

impl From<&FinalReport> for JsonReport {
    fn from(report: &FinalReport) -> Self {
        Self {
            inputs: report.profile,
            score: report.result.score,
            breakout_probability: report.result.breakout_probability,
            predicted_popularity: report.result.predicted_popularity,
            recommendation: report.result.recommendation,
            headline: report.result.recommendation.headline().to_string(),
            strengths: report.result.strengths.clone(),
            weaknesses: report.result.weaknesses.clone(),
            warnings: report.warnings.clone(),
            config: report.config.clone(),
        }
    }
}

pub fn evaluate_exit(result: &ScoreResult, cfg: &Config) -> ExitStatus {
    let mut reasons = Vec::new();

    if result.score < cfg.general.min_score {
        reasons.push(format!(
            "score {} is below min_score {}",
            result.score, cfg.general.min_score
        ));
    }

    ExitStatus {
        ok: reasons.is_empty(),
        reasons,
    }
}

fn tier_colored(recommendation: Recommendation) -> String {
    let label = recommendation.as_str();
    match recommendation {
        Recommendation::ReleaseReady => label.green().bold().to_string(),
        Recommendation::Moderate => label.yellow().bold().to_string(),
        Recommendation::Low => label.red().bold().to_string(),
    }
}

pub fn print_human(report: &FinalReport) {
    let result = &report.result;

    println!("Rule Score: {}/5", result.score);
    println!(
        "Hit Likelihood: {:.1}%",
        result.breakout_probability * 100.0
    );
    println!(
        "Predicted Popularity (0-100): {:.1}",
        result.predicted_popularity
    );

    println!();
    println!("Recommendation: {}", tier_colored(result.recommendation));
    println!("{}", result.recommendation.headline());

    println!();
    println!("{}", "Strengths".green().bold());
    for strength in &result.strengths {
        println!("- {strength}");
    }

    println!();
    println!("{}", "Weaknesses".yellow().bold());
    for weakness in &result.weaknesses {
        println!("- {weakness}");
    }

    if !report.warnings.is_empty() {
        println!();
        println!("{}", "Input Warnings".yellow().bold());
        for warning in &report.warnings {
            println!("- {warning}");
        }
    }

    println!();
    println!("Input Summary");
    print_input_summary(&report.profile);

    println!();
    if report.exit.ok {
        println!("exit: OK");
    } else {
        println!("exit: FAILED ({})", report.exit.reason_line());
    }
}

fn print_input_summary(profile: &TrackProfile) {
    println!("followers: {}", profile.followers);
    println!("artist_popularity: {}", profile.artist_popularity);
    println!("danceability: {}", profile.danceability);
    println!("energy: {}", profile.energy);
    println!("loudness: {} dB", profile.loudness);
    println!("tempo: {} bpm", profile.tempo);
    println!("valence: {}", profile.valence);
    println!("speechiness: {}", profile.speechiness);
    println!("acousticness: {}", profile.acousticness);
}

pub fn print_rules() {
    println!("Model Drivers");

    for rule in rules::all_rules() {
        let surfaced = if rule.breakdown.is_some() {
            "scored, in breakdown"
        } else {
            "scored only"
        };
        println!("- {} {} ({})", rule.driver.as_str(), rule.threshold, surfaced);
    }

    println!();
    println!("Each satisfied driver adds one point (0-5).");
    println!("breakout probability = min(score * 0.12, 0.60)");
    println!("predicted popularity = 20 + score * 8");
    println!();
    println!("tempo, valence, speechiness and acousticness are accepted but");
    println!("reserved for a future model integration.");
}

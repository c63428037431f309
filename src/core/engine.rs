use crate::core::TrackProfile;
use crate::core::rules;
use serde::Serialize;

pub const PROBABILITY_PER_POINT: f64 = 0.12;
pub const PROBABILITY_CAP: f64 = 0.60;
pub const POPULARITY_BASE: f64 = 20.0;
pub const POPULARITY_PER_POINT: f64 = 8.0;

const RELEASE_READY_FLOOR: f64 = 0.40;
const MODERATE_FLOOR: f64 = 0.25;

pub const NO_STRENGTHS: &str = "No structural strengths identified.";
pub const NO_WEAKNESSES: &str = "No structural weaknesses identified.";

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    ReleaseReady,
    Moderate,
    Low,
}

impl Recommendation {
    /// Tier bands are exclusive at both boundaries; first match wins.
    pub fn from_probability(probability: f64) -> Self {
        if probability > RELEASE_READY_FLOOR {
            Self::ReleaseReady
        } else if probability > MODERATE_FLOOR {
            Self::Moderate
        } else {
            Self::Low
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::ReleaseReady => "RELEASE_READY",
            Self::Moderate => "MODERATE",
            Self::Low => "LOW",
        }
    }

    pub fn headline(self) -> &'static str {
        match self {
            Self::ReleaseReady => {
                "Release-ready under current production and exposure profile."
            }
            Self::Moderate => {
                "Moderate breakout potential. Consider production refinements or stronger promotion."
            }
            Self::Low => "Low projected breakout probability under current inputs.",
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScoreResult {
    pub score: u8,
    pub breakout_probability: f64,
    pub predicted_popularity: f64,
    pub recommendation: Recommendation,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
}

/// Pure rule-based forecast. Does not validate or clamp: out-of-range values
/// propagate through the arithmetic. Floats are returned at full precision;
/// rounding belongs to the presentation layer.
pub fn compute(profile: &TrackProfile) -> ScoreResult {
    let mut score: u8 = 0;
    let mut strengths = Vec::new();
    let mut weaknesses = Vec::new();

    for rule in rules::all_rules() {
        let satisfied = rule.satisfied(profile);
        if satisfied {
            score += 1;
        }

        let Some(texts) = rule.breakdown else {
            continue;
        };
        if satisfied {
            strengths.push(texts.strength.to_string());
        } else {
            weaknesses.push(texts.weakness.to_string());
        }
    }

    if strengths.is_empty() {
        strengths.push(NO_STRENGTHS.to_string());
    }
    if weaknesses.is_empty() {
        weaknesses.push(NO_WEAKNESSES.to_string());
    }

    let breakout_probability = (f64::from(score) * PROBABILITY_PER_POINT).min(PROBABILITY_CAP);
    let predicted_popularity = POPULARITY_BASE + f64::from(score) * POPULARITY_PER_POINT;

    ScoreResult {
        score,
        breakout_probability,
        predicted_popularity,
        recommendation: Recommendation::from_probability(breakout_probability),
        strengths,
        weaknesses,
    }
}

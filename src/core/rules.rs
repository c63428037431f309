use crate::core::TrackProfile;

pub const ENERGY_THRESHOLD: f64 = 0.65;
pub const DANCEABILITY_THRESHOLD: f64 = 0.60;
pub const LOUDNESS_FLOOR_DB: f64 = -8.0;
pub const FOLLOWERS_THRESHOLD: u64 = 50_000;
pub const ARTIST_POPULARITY_THRESHOLD: u8 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Driver {
    Energy,
    Danceability,
    Loudness,
    Followers,
    ArtistPopularity,
}

impl Driver {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Energy => "energy",
            Self::Danceability => "danceability",
            Self::Loudness => "loudness",
            Self::Followers => "followers",
            Self::ArtistPopularity => "artist_popularity",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct BreakdownTexts {
    pub strength: &'static str,
    pub weakness: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub driver: Driver,
    pub threshold: &'static str,
    /// Strength/weakness wording for the report breakdown. Rules with `None`
    /// still count toward the score but are not surfaced per driver.
    pub breakdown: Option<BreakdownTexts>,
}

impl Rule {
    pub fn satisfied(&self, profile: &TrackProfile) -> bool {
        match self.driver {
            Driver::Energy => profile.energy > ENERGY_THRESHOLD,
            Driver::Danceability => profile.danceability > DANCEABILITY_THRESHOLD,
            Driver::Loudness => profile.loudness > LOUDNESS_FLOOR_DB,
            Driver::Followers => profile.followers > FOLLOWERS_THRESHOLD,
            Driver::ArtistPopularity => {
                profile.artist_popularity > ARTIST_POPULARITY_THRESHOLD
            }
        }
    }
}

// Evaluation order is fixed: production drivers first, then artist leverage.
// The breakdown lists in the report follow this same order.
const RULES: [Rule; 5] = [
    Rule {
        driver: Driver::Energy,
        threshold: "> 0.65",
        breakdown: Some(BreakdownTexts {
            strength: "High-energy production suits current playlist profiles.",
            weakness: "Energy falls below the 0.65 production threshold.",
        }),
    },
    Rule {
        driver: Driver::Danceability,
        threshold: "> 0.60",
        breakdown: Some(BreakdownTexts {
            strength: "Danceability is in the club-ready range.",
            weakness: "Danceability does not clear the 0.60 threshold.",
        }),
    },
    Rule {
        driver: Driver::Loudness,
        threshold: "> -8.0 dB",
        breakdown: Some(BreakdownTexts {
            strength: "Master loudness is competitive for streaming.",
            weakness: "Loudness sits below the -8 dB competitive floor.",
        }),
    },
    Rule {
        driver: Driver::Followers,
        threshold: "> 50000",
        breakdown: Some(BreakdownTexts {
            strength: "Existing follower base can seed release momentum.",
            weakness: "Follower count is below the 50000 exposure threshold.",
        }),
    },
    Rule {
        driver: Driver::ArtistPopularity,
        threshold: "> 60",
        breakdown: None,
    },
];

pub fn all_rules() -> &'static [Rule] {
    &RULES
}

//! Footprint scoring: maps a filled-in lifestyle survey to an annual
//! kg-CO₂-equivalent estimate, a good/bad category, and an advisory tip.
//!
//! Scoring is pure arithmetic over the survey answers; the only
//! non-deterministic element is the tip, drawn at random from the fixed
//! per-category tip lists. Callers that need reproducible output inject a
//! seeded rng through [`score_with_rng`].

mod factors;
mod tips;

pub use tips::{BAD_TIPS, GOOD_TIPS};

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Annual footprint (kg CO₂e) at or below which a result counts as `good`.
pub const CATEGORY_THRESHOLD_KG: f64 = 4000.0;

/// Primary mode of transport reported in the survey.
///
/// Values persisted by older or foreign clients that no longer match a known
/// mode deserialize into `Unrecognized` and score with the default (car)
/// coefficient rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportMode {
    Car,
    Bus,
    Train,
    Bicycle,
    Walking,
    Motorcycle,
    #[serde(other)]
    Unrecognized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DietType {
    MeatHeavy,
    MeatModerate,
    Vegetarian,
    Vegan,
    #[serde(other)]
    Unrecognized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecyclingHabits {
    Always,
    Sometimes,
    Rarely,
    Never,
    #[serde(other)]
    Unrecognized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HomeSize {
    Small,
    Medium,
    Large,
    VeryLarge,
    #[serde(other)]
    Unrecognized,
}

/// A completed eight-question survey. The caller guarantees every field is
/// set and numeric values are non-negative before scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyRecord {
    pub transport_mode: TransportMode,
    /// Kilometers travelled per week by the primary mode.
    pub weekly_distance_km: f64,
    /// Monthly electricity bill in local currency units.
    pub electricity_bill: f64,
    pub diet_type: DietType,
    /// Trees planted per year.
    pub trees_planted: u32,
    pub recycling_habits: RecyclingHabits,
    pub home_size: HomeSize,
    pub flights_per_year: u32,
}

/// The six additive components of the footprint, before the recycling bonus
/// is folded into the total. Offset is the only component that can go
/// negative by construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub transport: f64,
    pub electricity: f64,
    pub diet: f64,
    pub housing: f64,
    pub flights: f64,
    pub offset: f64,
}

impl ScoreBreakdown {
    pub fn component_sum(&self) -> f64 {
        self.transport + self.electricity + self.diet + self.housing + self.flights + self.offset
    }
}

/// Two-way classification of a footprint against the fixed annual threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FootprintCategory {
    Good,
    Bad,
}

impl FootprintCategory {
    pub fn from_score(total_score: f64) -> Self {
        if total_score <= CATEGORY_THRESHOLD_KG {
            Self::Good
        } else {
            Self::Bad
        }
    }
}

/// Immutable outcome of scoring one survey.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringResult {
    /// Annual kg CO₂e, clamped at zero. The unclamped value is not retained.
    pub total_score: f64,
    pub category: FootprintCategory,
    pub breakdown: ScoreBreakdown,
    pub tip: String,
}

/// Score a survey, drawing the tip from the thread-local rng.
pub fn score(survey: &SurveyRecord) -> ScoringResult {
    score_with_rng(survey, &mut rand::thread_rng())
}

/// Score a survey with an injected rng. The rng drives only the tip choice;
/// every numeric output is deterministic in the survey answers.
pub fn score_with_rng<R: Rng + ?Sized>(survey: &SurveyRecord, rng: &mut R) -> ScoringResult {
    let electricity =
        survey.electricity_bill * factors::MONTHS_PER_YEAR * factors::ELECTRICITY_GRID_FACTOR;
    let breakdown = ScoreBreakdown {
        transport: survey.weekly_distance_km
            * factors::WEEKS_PER_YEAR
            * factors::transport_factor(survey.transport_mode),
        electricity,
        diet: factors::diet_factor(survey.diet_type) * factors::DAYS_PER_YEAR,
        // Housing scales the computed electricity component, not the raw bill.
        housing: electricity * factors::home_size_factor(survey.home_size),
        flights: f64::from(survey.flights_per_year)
            * factors::KM_PER_FLIGHT
            * factors::FLIGHT_KM_FACTOR,
        offset: -(f64::from(survey.trees_planted) * factors::TREE_OFFSET_KG),
    };

    // The recycling bonus adjusts the total only; it never appears as a
    // breakdown component. Only the final total is clamped.
    let raw_total = breakdown.component_sum() + factors::recycling_bonus(survey.recycling_habits);
    let total_score = raw_total.max(0.0);
    let category = FootprintCategory::from_score(total_score);
    let tip = tips::pick_tip(rng, category);

    ScoringResult {
        total_score,
        category,
        breakdown,
        tip,
    }
}

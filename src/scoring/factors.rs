//! Emission factor tables. Coefficients are contractual; unrecognized survey
//! answers take the documented default arm instead of erroring.

use super::{DietType, HomeSize, RecyclingHabits, TransportMode};

pub(crate) const WEEKS_PER_YEAR: f64 = 52.0;
pub(crate) const MONTHS_PER_YEAR: f64 = 12.0;
pub(crate) const DAYS_PER_YEAR: f64 = 365.0;

/// kg CO₂ per currency-unit of monthly electricity bill.
pub(crate) const ELECTRICITY_GRID_FACTOR: f64 = 0.5;
/// kg CO₂ per flight kilometer.
pub(crate) const FLIGHT_KM_FACTOR: f64 = 0.25;
/// Assumed average trip distance per flight.
pub(crate) const KM_PER_FLIGHT: f64 = 1000.0;
/// kg CO₂ absorbed per tree per year.
pub(crate) const TREE_OFFSET_KG: f64 = 22.0;

/// kg CO₂ per km for the reported transport mode.
pub(crate) fn transport_factor(mode: TransportMode) -> f64 {
    match mode {
        TransportMode::Car => 0.21,
        TransportMode::Bus => 0.08,
        TransportMode::Train => 0.04,
        TransportMode::Bicycle | TransportMode::Walking => 0.0,
        TransportMode::Motorcycle => 0.15,
        TransportMode::Unrecognized => 0.21,
    }
}

/// kg CO₂ per day for the reported diet.
pub(crate) fn diet_factor(diet: DietType) -> f64 {
    match diet {
        DietType::MeatHeavy => 3.3,
        DietType::MeatModerate => 2.5,
        DietType::Vegetarian => 1.7,
        DietType::Vegan => 1.5,
        DietType::Unrecognized => 2.5,
    }
}

/// Multiplier applied to the electricity component.
pub(crate) fn home_size_factor(size: HomeSize) -> f64 {
    match size {
        HomeSize::Small => 1.2,
        HomeSize::Medium => 1.5,
        HomeSize::Large => 2.0,
        HomeSize::VeryLarge => 2.5,
        HomeSize::Unrecognized => 1.5,
    }
}

/// Flat kg CO₂ adjustment folded into the total, never into the breakdown.
pub(crate) fn recycling_bonus(habits: RecyclingHabits) -> f64 {
    match habits {
        RecyclingHabits::Always => -200.0,
        RecyclingHabits::Sometimes => -100.0,
        RecyclingHabits::Rarely | RecyclingHabits::Never | RecyclingHabits::Unrecognized => 0.0,
    }
}

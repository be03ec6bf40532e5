use rand::seq::SliceRandom;
use rand::Rng;

use super::FootprintCategory;

/// Advisory tips shown with a `good` result.
pub const GOOD_TIPS: [&str; 4] = [
    "Keep up the great work! Consider sharing your eco-friendly habits with friends and family.",
    "You're doing amazing! Try switching to renewable energy if you haven't already.",
    "Excellent carbon footprint! Consider offsetting your remaining emissions through verified carbon credits.",
    "Outstanding! Your lifestyle choices are helping combat climate change effectively.",
];

/// Advisory tips shown with a `bad` result.
pub const BAD_TIPS: [&str; 5] = [
    "Consider using public transport or cycling more often to reduce transportation emissions.",
    "Try reducing meat consumption and eating more plant-based meals throughout the week.",
    "Plant more trees or support reforestation projects to offset your carbon emissions.",
    "Switch to energy-efficient appliances and consider renewable energy sources for your home.",
    "Reduce air travel and choose local destinations for vacations when possible.",
];

pub(crate) fn pick_tip<R: Rng + ?Sized>(rng: &mut R, category: FootprintCategory) -> String {
    let pool: &[&str] = match category {
        FootprintCategory::Good => &GOOD_TIPS,
        FootprintCategory::Bad => &BAD_TIPS,
    };
    pool.choose(rng).copied().unwrap_or(pool[0]).to_string()
}

//! Daily goal calculation

use crate::models::{DailyGoals, Profile};

/// Millilitres of water per kilogram of body weight
const WATER_PER_KG: f64 = 30.0;
/// Extra water for hot weather and for every full 30 minutes of activity
const WATER_BONUS_ML: f64 = 500.0;
/// Temperature above which the hot-weather bonus applies, in °C
const HOT_WEATHER_THRESHOLD: f64 = 25.0;

/// Daily water goal in millilitres
///
/// `temperature` is `None` when the weather lookup failed, in which case the
/// hot-weather bonus is left out.
pub fn water_goal(weight: f64, activity_minutes: u32, temperature: Option<f64>) -> f64 {
    let mut goal = weight * WATER_PER_KG;

    if temperature.is_some_and(|t| t > HOT_WEATHER_THRESHOLD) {
        goal += WATER_BONUS_ML;
    }

    goal + WATER_BONUS_ML * f64::from(activity_minutes / 30)
}

/// Daily calorie goal in kcal
pub fn calories_goal(weight: f64, height: f64, age: u32) -> f64 {
    weight * 10.0 + height * 6.25 + f64::from(age) * 5.0
}

/// Both goals for a profile
pub fn daily_goals(profile: &Profile, temperature: Option<f64>) -> DailyGoals {
    DailyGoals {
        water_ml: water_goal(profile.weight, profile.activity_minutes, temperature),
        calories: calories_goal(profile.weight, profile.height, profile.age),
    }
}

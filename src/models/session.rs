//! User session model

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

/// Upper bounds on accepted input, keeping goals and totals finite
pub const MAX_WEIGHT_KG: f64 = 500.0;
pub const MAX_HEIGHT_CM: f64 = 300.0;
pub const MAX_AGE_YEARS: u32 = 150;
pub const MAX_ACTIVITY_MINUTES: u32 = 1440;
/// Largest single `/log_water` amount, in millilitres
pub const MAX_WATER_PER_LOG_ML: f64 = 10_000.0;
/// Largest single eaten portion, in grams
pub const MAX_FOOD_PER_LOG_G: f64 = 10_000.0;
/// Energy values above this are treated as bad lookup data
pub const MAX_KCAL_PER_100G: f64 = 1_000.0;

/// Profile attributes collected by the setup dialog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Body weight in kilograms
    pub weight: f64,
    /// Height in centimetres
    pub height: f64,
    /// Age in years
    pub age: u32,
    /// Daily activity in minutes
    pub activity_minutes: u32,
    pub city: String,
}

/// Daily targets derived from a profile
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyGoals {
    /// Water target in millilitres
    pub water_ml: f64,
    /// Calorie target in kcal
    pub calories: f64,
}

/// A user's profile, goals and logged totals
///
/// Goals are fixed when the profile is committed. The accumulators only grow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSession {
    pub user_id: i64,
    pub profile: Profile,
    pub goals: DailyGoals,
    pub logged_water: f64,
    pub logged_food: f64,
    pub burned_calories: f64,
    pub created_at: DateTime<Utc>,
}

/// Snapshot of progress against the daily goals
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Progress {
    pub water_consumed: f64,
    pub water_goal: f64,
    pub water_remaining: f64,
    pub calories_consumed: f64,
    pub calories_goal: f64,
    pub calories_burned: f64,
    pub calories_balance: f64,
}

impl UserSession {
    /// Create a session with empty accumulators
    pub fn new(user_id: i64, profile: Profile, goals: DailyGoals) -> Self {
        Self {
            user_id,
            profile,
            goals,
            logged_water: 0.0,
            logged_food: 0.0,
            burned_calories: 0.0,
            created_at: Utc::now(),
        }
    }

    /// Water still needed to reach the goal; negative once it is exceeded
    pub fn water_remaining(&self) -> f64 {
        self.goals.water_ml - self.logged_water
    }

    /// Current progress, with remaining water clamped at zero
    pub fn progress(&self) -> Progress {
        Progress {
            water_consumed: self.logged_water,
            water_goal: self.goals.water_ml,
            water_remaining: self.water_remaining().max(0.0),
            calories_consumed: self.logged_food,
            calories_goal: self.goals.calories,
            calories_burned: self.burned_calories,
            calories_balance: self.logged_food - self.burned_calories,
        }
    }
}

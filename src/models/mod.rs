//! Data models module
//!
//! This module contains all data structures used throughout the application

pub mod session;
pub mod workout;

// Re-export commonly used models
pub use session::{Profile, DailyGoals, UserSession, Progress};
pub use session::{
    MAX_ACTIVITY_MINUTES, MAX_AGE_YEARS, MAX_FOOD_PER_LOG_G, MAX_HEIGHT_CM, MAX_KCAL_PER_100G,
    MAX_WATER_PER_LOG_ML, MAX_WEIGHT_KG,
};
pub use workout::{Workout, recommended_extra_water};

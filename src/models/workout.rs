//! Workout types and their energy cost

use serde::{Deserialize, Serialize};

/// Supported workout types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Workout {
    Running,
    Cycling,
    Yoga,
    Dancing,
    Tennis,
    Swimming,
    Crossfit,
}

impl Workout {
    pub const ALL: [Workout; 7] = [
        Workout::Running,
        Workout::Cycling,
        Workout::Yoga,
        Workout::Dancing,
        Workout::Tennis,
        Workout::Swimming,
        Workout::Crossfit,
    ];

    /// Calories burned per minute
    pub fn calories_per_minute(self) -> f64 {
        match self {
            Workout::Running => 10.0,
            Workout::Cycling => 30.0,
            Workout::Yoga => 15.0,
            Workout::Dancing => 25.0,
            Workout::Tennis => 25.0,
            Workout::Swimming => 30.0,
            Workout::Crossfit => 35.0,
        }
    }

    /// Names accepted from users, Russian first
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Workout::Running => &["бег", "running"],
            Workout::Cycling => &["велосипед", "cycling"],
            Workout::Yoga => &["йога", "yoga"],
            Workout::Dancing => &["танцы", "dancing"],
            Workout::Tennis => &["теннис", "tennis"],
            Workout::Swimming => &["плавание", "swimming"],
            Workout::Crossfit => &["кроссфит", "crossfit"],
        }
    }

    /// Case-insensitive lookup by name
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|workout| workout.aliases().contains(&name.as_str()))
    }

    /// Calories burned over the given number of minutes
    pub fn calories_burned(self, minutes: u32) -> f64 {
        self.calories_per_minute() * f64::from(minutes)
    }
}

/// Extra water advised after a workout: 200 mL per full 30 minutes
pub fn recommended_extra_water(minutes: u32) -> f64 {
    200.0 * f64::from(minutes / 30)
}

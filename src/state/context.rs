//! Conversation context management
//!
//! This module tracks which multi-step dialog a user is in, which step of it
//! is expected next, and the data collected so far.

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc, Duration};

use crate::models::Profile;

/// Steps of the profile setup dialog, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProfileStep {
    Weight,
    Height,
    Age,
    ActivityMinutes,
    City,
}

/// Steps of the food logging dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FoodStep {
    Quantity,
}

/// Profile fields collected so far
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileDraft {
    pub weight: Option<f64>,
    pub height: Option<f64>,
    pub age: Option<u32>,
    pub activity_minutes: Option<u32>,
}

impl ProfileDraft {
    /// Build the full profile once the city is known
    pub fn complete(&self, city: String) -> Option<Profile> {
        Some(Profile {
            weight: self.weight?,
            height: self.height?,
            age: self.age?,
            activity_minutes: self.activity_minutes?,
            city,
        })
    }
}

/// Per-user dialog state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum ConversationState {
    #[default]
    Idle,
    ProfileSetup {
        step: ProfileStep,
        draft: ProfileDraft,
    },
    FoodLog {
        step: FoodStep,
        food_name: String,
        calories_per_100g: f64,
    },
}

impl ConversationState {
    /// Scenario name for logging
    pub fn scenario(&self) -> &'static str {
        match self {
            ConversationState::Idle => "idle",
            ConversationState::ProfileSetup { .. } => "profile_setup",
            ConversationState::FoodLog { .. } => "food_log",
        }
    }

    /// Step name for logging
    pub fn step_name(&self) -> &'static str {
        match self {
            ConversationState::Idle => "none",
            ConversationState::ProfileSetup { step, .. } => match step {
                ProfileStep::Weight => "await_weight",
                ProfileStep::Height => "await_height",
                ProfileStep::Age => "await_age",
                ProfileStep::ActivityMinutes => "await_activity_minutes",
                ProfileStep::City => "await_city",
            },
            ConversationState::FoodLog { step: FoodStep::Quantity, .. } => "await_quantity",
        }
    }
}

/// User conversation context
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationContext {
    /// User ID this context belongs to
    pub user_id: i64,
    /// Current dialog and step
    pub state: ConversationState,
    /// When the current dialog was started
    pub started_at: Option<DateTime<Utc>>,
    /// When this context was last updated
    pub updated_at: DateTime<Utc>,
}

impl ConversationContext {
    /// Create a new idle context for a user
    pub fn new(user_id: i64) -> Self {
        Self {
            user_id,
            state: ConversationState::Idle,
            started_at: None,
            updated_at: Utc::now(),
        }
    }

    /// Start the profile setup dialog, replacing any active dialog
    pub fn start_profile_setup(&mut self) {
        self.start(ConversationState::ProfileSetup {
            step: ProfileStep::Weight,
            draft: ProfileDraft::default(),
        });
    }

    /// Start the food logging dialog, replacing any active dialog
    pub fn start_food_log(&mut self, food_name: String, calories_per_100g: f64) {
        self.start(ConversationState::FoodLog {
            step: FoodStep::Quantity,
            food_name,
            calories_per_100g,
        });
    }

    fn start(&mut self, state: ConversationState) {
        self.state = state;
        self.started_at = Some(Utc::now());
        self.updated_at = Utc::now();
    }

    /// Move to the next state of the current dialog
    pub fn advance(&mut self, state: ConversationState) {
        self.state = state;
        self.updated_at = Utc::now();
    }

    /// Complete the current dialog and clear context
    pub fn complete(&mut self) {
        self.state = ConversationState::Idle;
        self.started_at = None;
        self.updated_at = Utc::now();
    }

    /// Abort the current dialog
    pub fn cancel(&mut self) {
        self.complete();
    }

    /// Whether a dialog is in progress
    pub fn is_active(&self) -> bool {
        !matches!(self.state, ConversationState::Idle)
    }

    /// Check if the dialog has been running for longer than `timeout`
    pub fn is_expired(&self, timeout: Duration) -> bool {
        match self.started_at {
            Some(started_at) if self.is_active() => Utc::now() - started_at > timeout,
            _ => false,
        }
    }

    /// Set a custom start time
    pub fn set_started_at(&mut self, started_at: DateTime<Utc>) {
        self.started_at = Some(started_at);
        self.updated_at = Utc::now();
    }
}

//! State management module
//!
//! Per-user conversation state, dialog transitions and the in-memory
//! session store.

pub mod context;
pub mod scenarios;
pub mod storage;

pub use context::{ConversationContext, ConversationState, FoodStep, ProfileDraft, ProfileStep};
pub use scenarios::{step, prompt_key, Transition};
pub use storage::{SessionStore, UserGuard, UserSlot};

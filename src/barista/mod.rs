//! Brewing module
//!
//! Recipes and the cook path that runs them against the shared inventory.

pub mod engine;
pub mod recipe;

// Re-export main types
pub use engine::Barista;
pub use recipe::{steps_for, CookStage, DelayRange, Pace, RecipeStep, MAX_STEP_WAIT, MIN_SPEED};

//! egui views for the NutriAI web app.
//!
//! Panels render controller state from `nutri-core` and report what the user
//! did as action values; the app crate turns those into requests.

pub mod markdown;
pub mod panels;
pub mod state;
pub mod theme;

//! Controllers for the NutriAI views.
//!
//! Each screen owns one controller. Controllers are synchronous state
//! machines: `begin_*` methods validate and produce a request, `finish_*`
//! methods apply the outcome. The async `submit`/`upload` helpers compose the
//! two against the port traits.

pub mod ports;
pub mod event_bus;
pub mod chat;
pub mod reset;
pub mod scan;

#[cfg(test)]
mod tests;

//! Core data models for the VGC tracker.

mod game;
mod history;
mod ids;
mod match_record;
mod participant;
mod stats;

pub use game::*;
pub use history::*;
pub use ids::*;
pub use match_record::*;
pub use participant::*;
pub use stats::*;

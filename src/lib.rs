//! # VGC Tracker
//!
//! A local Pokémon VGC match tracker with best-of-three statistics.
//!
//! ## Architecture
//!
//! - **models**: Core data structures (matches, games, participants, stats)
//! - **storage**: Filesystem record store operations (JSONL)
//! - **store**: In-memory dataset snapshots and joined read queries
//! - **stats**: Win-rate aggregation engine
//! - **history**: Match history assembly
//! - **report**: Reporting facade over the store
//! - **ingest**: Bulk JSON import pipeline
//! - **api**: REST API endpoints
//! - **config**: Configuration loading and validation

pub mod api;
pub mod config;
pub mod history;
pub mod ingest;
pub mod models;
pub mod report;
pub mod stats;
pub mod storage;
pub mod store;

pub use models::*;

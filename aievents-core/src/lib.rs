//! Core types for the AI events dashboard.
//!
//! This crate provides everything below the presentation layer:
//! - `event` record types for hackathons and conferences
//! - `parse` for turning delimited text into records
//! - `filter` for search/domain/mode/month filtering
//! - `favorites` and `storage` for persisted favorites
//! - `dashboard`, the orchestrator that ties them together

pub mod config;
pub mod constants;
pub mod dashboard;
pub mod dates;
pub mod error;
pub mod event;
pub mod favorites;
pub mod filter;
pub mod parse;
pub mod source;
pub mod storage;

// Re-export the record types at crate root for convenience
pub use event::*;

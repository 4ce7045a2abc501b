//! Listing optimizer: grades a freelance service listing against a fixed
//! seven-topic rubric and returns scores, verdicts and improvement tips.

pub mod analysis;
pub mod config;
pub mod error;
pub mod fixtures;
pub mod suggestions;
pub mod telemetry;
pub mod views;

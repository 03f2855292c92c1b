//! daymark - Week-grouped day tracker
//!
//! Marks each calendar day with one of three states and keeps the marks in a
//! small versioned document behind a pluggable key-value backend.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;

pub use error::DaymarkError;

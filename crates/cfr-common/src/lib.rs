//! Common types and utilities shared by the cfr crates.
//!
//! This crate provides the foundational pieces used across the workspace:
//! - Source spans (`Span`)
//! - Loop and depth limits for walking frontend-owned data

// Span - Source location tracking (byte offsets)
pub mod span;
pub use span::Span;

// Centralized limits and thresholds
pub mod limits;

#[cfg(test)]
#[path = "../tests/span_tests.rs"]
mod span_tests;

//! Test helpers module
//!
//! This module provides utilities and helpers for testing the HealthBuddy application.
//! It includes a mock server for the weather and nutrition APIs and a test
//! context that drives the handlers directly.

pub mod api_mock;

pub use api_mock::*;
pub use test_context::*;

//! Integration tests module
//!
//! Organized by command and by multi-step scenario.

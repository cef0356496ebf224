//! Core module tests
//!
//! Contains test suites for the platform-neutral model:
//! - Signal/observable-field behaviour
//! - Bar definition, payload, and slot behaviour
//! - Traversal order and the applicable-bar rule

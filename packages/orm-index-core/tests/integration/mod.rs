//! Integration test suite.
//!
//! 1. End-to-end unification scenarios
//! 2. Cross-document ordering and access resolution
//! 3. Listeners and callbacks
//! 4. Loading inputs from JSON files

pub mod end_to_end_tests;
pub mod helpers;
pub mod json_input_tests;
pub mod listener_tests;
pub mod ordering_tests;

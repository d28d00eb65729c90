//! Property-based tests for the interview core using proptest.
//!
//! These tests verify structural invariants that must hold for arbitrary
//! inputs, not just the handful of values unit tests pin down:
//!
//! - Difficulty bands are total and never step backwards
//! - Transcript rendering emits exactly one labeled line per turn
//! - JSON salvage recovers fenced payloads and never panics
//! - Fallback reports validate against the report schema for any counters
//! - Session counters track the greeting-plus-exchanges law

//! Integration tests for the suggestion system.
//!
//! Tests for branching overrides and enforcement:
//! - Positional slot resolution and value-keyed branch descent
//! - Fallback idempotence against equivalent overlay-free trees
//! - Replacement enforcement at parse time

mod enforcement_tests;

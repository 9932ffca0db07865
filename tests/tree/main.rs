//! Integration tests for the parley_tree crate.
//!
//! Tests for tree building and compilation:
//! - Parent/child linking contract
//! - Execution compilation (completeness, ordering, determinism)
//! - Structural properties over generated trees

mod compile_tests;
mod property_tests;

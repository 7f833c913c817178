//! Behavioral tests for the navigation menu
//!
//! This module provides BDD-style tests using given-when-then naming convention.
//! Tests focus on observable behavior: the open class, the state, and what
//! observers receive.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

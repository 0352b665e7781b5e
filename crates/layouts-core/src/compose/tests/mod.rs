//! Tests for the compositor
//!
//! Organized by concern: plain folding, metadata precedence, diagnostics
//! and option layering.

use super::*;

// Test helper functions
mod helpers;

// Folding tests
mod render_basic;

//! Tests for template engine
//!
//! Organized into focused submodules.

use super::*;

// Test helper functions
mod helpers;

// TokenStream tests
mod tokenstream;

// Rendering tests
mod render_basic;

// Missing key policy tests
mod missing_keys;

//! Shared test infrastructure for swatch integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use swatch::{ColorSink, Hex};

// ============================================================================
// Mock Sink
// ============================================================================

/// Sink that records every notification for inspection
pub struct MockSink {
    applied: heapless::Vec<(Hex, Hex), 32>,
    generated: heapless::Vec<Hex, 32>,
}

impl MockSink {
    pub fn new() -> Self {
        Self {
            applied: heapless::Vec::new(),
            generated: heapless::Vec::new(),
        }
    }

    /// All (background, foreground) pairs applied so far
    pub fn applied(&self) -> &[(Hex, Hex)] {
        &self.applied
    }

    /// The most recent (background, foreground) pair
    pub fn last_applied(&self) -> Option<(Hex, Hex)> {
        self.applied.last().copied()
    }

    /// All random colors the session reported generating
    pub fn generated(&self) -> &[Hex] {
        &self.generated
    }
}

impl ColorSink for MockSink {
    fn apply(&mut self, background: Hex, foreground: Hex) {
        let _ = self.applied.push((background, foreground));
    }

    fn color_generated(&mut self, color: Hex) {
        let _ = self.generated.push(color);
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Parses a hex literal that the test knows is valid
pub fn hex(text: &str) -> Hex {
    text.parse().expect("test hex literal should be valid")
}

/// Checks a string against the canonical `#RRGGBB` form
pub fn is_canonical_hex(text: &str) -> bool {
    let mut chars = text.chars();
    chars.next() == Some('#')
        && text.len() == 7
        && chars.all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c))
}

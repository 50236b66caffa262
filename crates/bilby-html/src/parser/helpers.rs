//! Helper functions for the context parser.
//!
//! This module contains the utilities the state handlers are built from:
//! - State transitions (switch, reconsume)
//! - Fragment input handling (consume, lookahead)

use super::core::{ContextParser, ParserState};

// =============================================================================
// State Transition Helpers
// =============================================================================

impl ContextParser {
    /// Transition to a new state. The next character will be consumed on
    /// the next iteration of the main loop.
    pub(super) const fn switch_to(&mut self, new_state: ParserState) {
        self.state = new_state;
    }

    /// Transition to a new state without consuming the current character.
    /// The same character is re-dispatched in the new state.
    pub(super) const fn reconsume_in(&mut self, new_state: ParserState) {
        self.reconsume = true;
        self.state = new_state;
    }
}

// =============================================================================
// Fragment Input Helpers
// =============================================================================

impl ContextParser {
    /// Return the character at the current position within the fragment
    /// and advance past it. Returns `None` at the end of the fragment.
    pub(super) fn consume(&mut self) -> Option<char> {
        let character = self.buffer.get(self.position).copied();
        if character.is_some() {
            self.position += 1;
        }
        character
    }

    /// Check whether the characters following the current one spell
    /// `target` exactly. Lookahead never crosses the fragment boundary,
    /// and an empty target never matches.
    pub(super) fn next_few_characters_are(&self, target: &str) -> bool {
        let mut position = self.position;
        for expected in target.chars() {
            if self.buffer.get(position) != Some(&expected) {
                return false;
            }
            position += 1;
        }
        !target.is_empty()
    }

    /// Skip over `count` characters already matched by lookahead.
    pub(super) const fn skip(&mut self, count: usize) {
        self.position += count;
    }
}

// SPDX-FileCopyrightText: 2026 Agropilot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Bounded rolling window of recent conversation turns.

use std::collections::VecDeque;

use agropilot_core::{ConversationTurn, Role};

/// Fixed-capacity FIFO of conversation turns.
///
/// Capacity is `2 x max_pairs` (one user and one assistant turn per
/// exchange); the oldest turns are silently evicted on overflow. Mutated
/// only by [`append`](Self::append) and [`clear`](Self::clear); read-only
/// everywhere else.
#[derive(Debug, Clone)]
pub struct ConversationMemory {
    turns: VecDeque<ConversationTurn>,
    capacity: usize,
}

impl ConversationMemory {
    /// Create a window remembering `max_pairs` user/assistant exchanges.
    pub fn new(max_pairs: usize) -> Self {
        let capacity = max_pairs * 2;
        Self {
            turns: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Record one user/assistant exchange, evicting the oldest turns when
    /// the window is full.
    pub fn append(&mut self, user_text: &str, assistant_text: &str) {
        self.push(ConversationTurn::user(user_text));
        self.push(ConversationTurn::assistant(assistant_text));
    }

    fn push(&mut self, turn: ConversationTurn) {
        if self.capacity == 0 {
            return;
        }
        if self.turns.len() == self.capacity {
            self.turns.pop_front();
        }
        self.turns.push_back(turn);
    }

    /// Render the window as alternating "User: ..." / "Assistant: ..."
    /// lines in chronological order. Empty text means no entries: callers
    /// treat that as a first interaction.
    pub fn recent(&self) -> String {
        let mut transcript = String::new();
        for turn in &self.turns {
            transcript.push_str(&format!("{}: {}\n", turn.role, turn.content));
        }
        transcript
    }

    /// Drop every recorded turn.
    pub fn clear(&mut self) {
        self.turns.clear();
    }

    /// Number of turns (not pairs) currently held.
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Iterate the turns oldest first.
    pub fn turns(&self) -> impl Iterator<Item = &ConversationTurn> {
        self.turns.iter()
    }
}

// SPDX-FileCopyrightText: 2026 Agropilot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Deterministic ReACT-style reasoning for the Agropilot chat handler.
//!
//! The stager walks a fixed thought -> action -> observation -> strategy
//! sequence over the user message, retrieved knowledge, and conversation
//! memory. Every step is a pure keyword classifier: same inputs, same
//! [`ReasoningResult`], no randomness, no external calls.
//!
//! The action picker carries its own keyword precedence list, separate from
//! the intent router's. The two lists disagree in places (for example
//! "weather" routes to location analysis but stages as
//! `analyze_location_suitability` here) and are intentionally kept
//! unreconciled.

pub mod stager;
pub mod types;

pub use stager::ReasoningStager;
pub use types::{QuestionType, ReasoningResult, Topic};

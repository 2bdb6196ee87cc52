// SPDX-FileCopyrightText: 2026 Agropilot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Reasoning domain types.

use serde::{Deserialize, Serialize};

/// The kind of question a message asks, by interrogative/help/advice cues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestionType {
    /// How/when/what/where/why questions.
    InformationSeeking,
    /// Help/problem/issue/trouble messages.
    ProblemSolving,
    /// Should/recommend/suggest/advice messages.
    RecommendationSeeking,
    /// Everything else.
    GeneralInquiry,
}

impl std::fmt::Display for QuestionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuestionType::InformationSeeking => write!(f, "information_seeking"),
            QuestionType::ProblemSolving => write!(f, "problem_solving"),
            QuestionType::RecommendationSeeking => write!(f, "recommendation_seeking"),
            QuestionType::GeneralInquiry => write!(f, "general_inquiry"),
        }
    }
}

/// Farming topic detected in a message. Multi-label: a message can carry
/// several topics at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Topic {
    Planting,
    Disease,
    Weather,
    Harvest,
    Soil,
    General,
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Topic::Planting => write!(f, "planting"),
            Topic::Disease => write!(f, "disease"),
            Topic::Weather => write!(f, "weather"),
            Topic::Harvest => write!(f, "harvest"),
            Topic::Soil => write!(f, "soil"),
            Topic::General => write!(f, "general"),
        }
    }
}

/// The structured thought/action/observation/strategy record produced for
/// each chat message, used to steer the final LLM prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReasoningResult {
    /// What the user is asking and what they need.
    pub thought: String,
    /// The action label chosen for this message.
    pub action: String,
    /// What information is available to answer with.
    pub observation: String,
    /// How the response should be structured.
    pub strategy: String,
    /// The message the reasoning was derived from.
    pub original_message: String,
}

impl ReasoningResult {
    /// Renders the reasoning block injected into the LLM prompt.
    pub fn prompt(&self) -> String {
        format!(
            "Based on ReACT reasoning analysis:\n\n\
             THOUGHT: {}\n\
             ACTION: {}\n\
             OBSERVATION: {}\n\
             RESPONSE STRATEGY: {}\n\n\
             Now provide a helpful response to the farmer following this reasoning approach.",
            self.thought, self.action, self.observation, self.strategy
        )
    }
}

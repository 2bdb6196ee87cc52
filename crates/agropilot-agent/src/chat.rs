// SPDX-FileCopyrightText: 2026 Agropilot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The chat handler: retrieval-augmented Q&A with reasoning-staged prompts.
//!
//! Each message flows knowledge retrieval -> memory transcript -> reasoning
//! stager -> prompt assembly -> provider call -> memory update. A provider
//! failure degrades to an apology string; the exchange is still recorded so
//! follow-ups keep their context.

use std::sync::Arc;

use agropilot_core::CompletionProvider;
use agropilot_knowledge::KnowledgeBase;
use agropilot_reasoning::{ReasoningResult, ReasoningStager};
use tracing::{debug, warn};

use crate::memory::ConversationMemory;

/// System identity line opening every chat prompt.
pub const SYSTEM_IDENTITY: &str =
    "You are Agropilot, an AI agricultural assistant for soybean farmers worldwide.";

/// Greeting woven into the instructions on the first exchange of a session.
const FIRST_INTERACTION_GREETING: &str =
    "Hello! I'm Agropilot, your AI agricultural assistant for soybean farming. ";

/// Fallback context when retrieval returns nothing at all.
const NO_KNOWLEDGE_CONTEXT: &str =
    "No specific knowledge found. Provide general soybean farming advice.";

/// Informational reply when no language model is configured.
const UNCONFIGURED_REPLY: &str =
    "I'm not connected to a language model right now. Set groq.api_key (or the \
     GROQ_API_KEY environment variable) to enable chat. In the meantime you can \
     still send me leaf photos for disease detection or coordinates for a \
     climate suitability check.";

/// Retrieved snippets longer than this are truncated before prompting.
const SNIPPET_MAX_CHARS: usize = 500;

/// Tool names surfaced to the reasoning stager for traceability.
const AVAILABLE_TOOLS: &[&str] = &["knowledge_base", "conversation_memory"];

/// Retrieval-augmented chat over the knowledge base.
pub struct ChatHandler {
    provider: Option<Arc<dyn CompletionProvider>>,
    knowledge: Arc<KnowledgeBase>,
    memory: ConversationMemory,
    stager: ReasoningStager,
    top_k: usize,
}

impl ChatHandler {
    /// Create a handler for one session.
    ///
    /// `provider` is `None` when no LLM is configured; chat then answers
    /// with a fixed informational message instead of calling out.
    pub fn new(
        provider: Option<Arc<dyn CompletionProvider>>,
        knowledge: Arc<KnowledgeBase>,
        max_memory_pairs: usize,
        top_k: usize,
    ) -> Self {
        Self {
            provider,
            knowledge,
            memory: ConversationMemory::new(max_memory_pairs),
            stager: ReasoningStager::new(),
            top_k,
        }
    }

    /// Answer a general farming question.
    pub async fn process_message(&mut self, message: &str) -> String {
        let snippets = self.knowledge.retrieve(message, self.top_k);
        let context = if snippets.is_empty() {
            NO_KNOWLEDGE_CONTEXT.to_string()
        } else {
            snippets
                .iter()
                .map(|s| truncate_snippet(s))
                .collect::<Vec<_>>()
                .join("\n\n")
        };

        let memory_text = self.memory.recent();
        let first_interaction = self.memory.is_empty();

        let reasoning = self
            .stager
            .reason(message, &context, &memory_text, AVAILABLE_TOOLS);

        let prompt = build_prompt(message, &context, &memory_text, &reasoning, first_interaction);
        debug!(
            prompt_len = prompt.len(),
            snippets = snippets.len(),
            first_interaction,
            "assembled chat prompt"
        );

        let response = match &self.provider {
            Some(provider) => match provider.complete(&prompt).await {
                Ok(text) => text,
                Err(e) => {
                    warn!(error = %e, "provider call failed, degrading to apology");
                    format!(
                        "I apologize, but I'm having trouble generating a response. Error: {e}"
                    )
                }
            },
            None => UNCONFIGURED_REPLY.to_string(),
        };

        self.memory.append(message, &response);
        response
    }

    /// Read access to the session memory.
    pub fn memory(&self) -> &ConversationMemory {
        &self.memory
    }

    /// Drop the session's conversation memory and reasoning history.
    pub fn reset(&mut self) {
        self.memory.clear();
        self.stager.clear_history();
    }
}

/// Truncate a knowledge snippet to the prompt budget.
fn truncate_snippet(snippet: &str) -> String {
    if snippet.chars().count() > SNIPPET_MAX_CHARS {
        let truncated: String = snippet.chars().take(SNIPPET_MAX_CHARS).collect();
        format!("{truncated}...")
    } else {
        snippet.to_string()
    }
}

/// Assemble the full LLM prompt from its parts.
fn build_prompt(
    message: &str,
    context: &str,
    memory: &str,
    reasoning: &ReasoningResult,
    first_interaction: bool,
) -> String {
    let memory_block = if memory.is_empty() {
        String::new()
    } else {
        format!("Recent conversation:\n{memory}\n")
    };

    let greeting = if first_interaction {
        FIRST_INTERACTION_GREETING
    } else {
        ""
    };

    format!(
        "{SYSTEM_IDENTITY}\n\n\
         === RELEVANT KNOWLEDGE ===\n\
         {context}\n\
         ===========================\n\n\
         {memory_block}\n\
         Current question: {message}\n\n\
         === REACT REASONING ANALYSIS ===\n\
         {reasoning_prompt}\n\n\
         INSTRUCTIONS:\n\
         1. {greeting}Follow the ReACT reasoning analysis above to structure your response\n\
         2. Use the relevant knowledge as your primary information source\n\
         3. Provide actionable, practical advice with specific details (numbers, timing, methods)\n\
         4. Be conversational and acknowledge previous context if continuing a conversation\n\
         5. Don't mention your reasoning process in the final response - just give the helpful answer\n\
         6. Focus on what the farmer can actually implement\n\
         7. Keep responses practical and farmer-friendly\n\n\
         Response:",
        reasoning_prompt = reasoning.prompt(),
    )
}

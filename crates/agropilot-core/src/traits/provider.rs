// SPDX-FileCopyrightText: 2026 Agropilot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Completion provider trait for LLM integrations.

use async_trait::async_trait;

use crate::error::AgropilotError;

/// A single-shot text completion provider.
///
/// Callers must catch failures and substitute a user-facing apology string;
/// a provider error never propagates to the end user as an error.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Sends a prompt and returns the model's text response.
    async fn complete(&self, prompt: &str) -> Result<String, AgropilotError>;
}

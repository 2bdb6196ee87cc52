// SPDX-FileCopyrightText: 2026 Agropilot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-session orchestration for the Agropilot assistant.
//!
//! The [`Orchestrator`] is the per-session context object: it owns the
//! conversation memory, the reasoning stager, and the handler wiring for
//! one conversational session. A deployment serving multiple users
//! allocates one orchestrator per session; no locking is needed because
//! isolation is enforced at the instance level.
//!
//! [`Orchestrator::handle`] always returns text and never errors — every
//! collaborator failure degrades to a user-facing message.

pub mod chat;
pub mod memory;
pub mod orchestrator;

pub use chat::ChatHandler;
pub use memory::ConversationMemory;
pub use orchestrator::Orchestrator;

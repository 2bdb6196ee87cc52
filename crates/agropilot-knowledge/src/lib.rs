// SPDX-FileCopyrightText: 2026 Agropilot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Static knowledge base and keyword retriever for Agropilot chat.
//!
//! The base is a flat, immutable list of fact snippets built once at
//! startup: built-in soybean facts plus the paragraph-split content of any
//! `.txt`/`.md`/`.pdf` files in a configured directory. Retrieval scores
//! items by query-token overlap and never returns empty — callers can
//! always prompt the LLM with *something*.

pub mod base;
pub mod loader;

pub use base::KnowledgeBase;

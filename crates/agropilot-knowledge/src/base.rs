// SPDX-FileCopyrightText: 2026 Agropilot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The knowledge base and its keyword-overlap retriever.

use std::path::Path;

use tracing::{info, warn};

use crate::loader;

/// Query tokens this short carry no signal and are dropped before scoring.
const MIN_TOKEN_LEN: usize = 3;

/// Built-in soybean farming facts, always present regardless of on-disk
/// knowledge files.
pub const BUILTIN_FACTS: &[&str] = &[
    "Soybeans grow best in temperatures between 20°C and 30°C.",
    "Well-drained soil with pH 6.0 to 7.0 is ideal for soybeans.",
    "Soybeans need consistent moisture during flowering and pod formation.",
    "Common soybean diseases include bacterial blight, powdery mildew, and soybean rust.",
    "Soybeans should be planted when soil temperature reaches at least 15°C.",
    "Crop rotation with corn or wheat helps prevent soil-borne diseases in soybeans.",
    "Plant soybeans 5-7 cm apart in rows 45-60 cm apart.",
    "Apply 200 kg/ha of NPK fertilizer at planting.",
    "Soybeans fix nitrogen from the air, reducing fertilizer needs.",
    "Harvest when leaves turn yellow and pods are dry.",
];

/// A flat, immutable set of retrievable fact snippets.
///
/// Items never expire or update once loaded.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    items: Vec<String>,
}

impl KnowledgeBase {
    /// Build the base from the built-in facts only.
    pub fn builtin() -> Self {
        Self {
            items: BUILTIN_FACTS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Build the base from the built-in facts plus files under `dir`.
    ///
    /// A missing or unreadable directory degrades to the built-in facts;
    /// per-file load errors are logged and skipped inside the loader.
    pub fn with_files(dir: &Path) -> Self {
        let mut base = Self::builtin();

        match loader::load_directory(dir) {
            Ok(file_items) if !file_items.is_empty() => {
                info!(
                    count = file_items.len(),
                    dir = %dir.display(),
                    "loaded knowledge items from files"
                );
                base.items.extend(file_items);
            }
            Ok(_) => {
                info!(dir = %dir.display(), "no knowledge files found, using built-in facts");
            }
            Err(e) => {
                warn!(dir = %dir.display(), error = %e, "could not load knowledge files");
            }
        }

        base
    }

    /// Number of items in the base.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Retrieve up to `k` items relevant to `query`.
    ///
    /// Scoring: whitespace-tokenize the query, drop tokens of length
    /// `<= MIN_TOKEN_LEN`, count how many remaining tokens appear as a
    /// case-insensitive substring of each item. Items sort descending by
    /// count; ties keep insertion order (stable sort). When nothing scores
    /// above zero the first `k` items are returned unscored, so the result
    /// is never empty for a non-empty base.
    pub fn retrieve(&self, query: &str, k: usize) -> Vec<String> {
        let query_lower = query.to_lowercase();
        let query_tokens: Vec<&str> = query_lower
            .split_whitespace()
            .filter(|w| w.len() > MIN_TOKEN_LEN)
            .collect();

        let mut scored: Vec<(usize, &String)> = self
            .items
            .iter()
            .filter_map(|item| {
                let item_lower = item.to_lowercase();
                let score = query_tokens
                    .iter()
                    .filter(|token| item_lower.contains(**token))
                    .count();
                (score > 0).then_some((score, item))
            })
            .collect();

        // Stable sort keeps insertion order for equal scores.
        scored.sort_by(|a, b| b.0.cmp(&a.0));

        if scored.is_empty() {
            return self.items.iter().take(k).cloned().collect();
        }

        scored
            .into_iter()
            .take(k)
            .map(|(_, item)| item.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_base_has_all_facts() {
        let base = KnowledgeBase::builtin();
        assert_eq!(base.len(), BUILTIN_FACTS.len());
    }

    #[test]
    fn temperature_query_ranks_temperature_fact_first() {
        let base = KnowledgeBase::builtin();
        let results = base.retrieve("What temperature do soybeans need?", 4);
        assert_eq!(
            results[0],
            "Soybeans grow best in temperatures between 20°C and 30°C."
        );
    }

    #[test]
    fn retrieval_is_capped_at_k() {
        let base = KnowledgeBase::builtin();
        let results = base.retrieve("soybeans", 3);
        assert_eq!(results.len(), 3);
    }

    #[test]
    fn unmatched_query_falls_back_to_first_k_items() {
        let base = KnowledgeBase::builtin();
        let results = base.retrieve("zzzz qqqq xxxx", 2);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0], BUILTIN_FACTS[0]);
        assert_eq!(results[1], BUILTIN_FACTS[1]);
    }

    #[test]
    fn short_tokens_are_ignored_in_scoring() {
        let base = KnowledgeBase::builtin();
        // Every token has length <= 3, so nothing scores; fallback applies.
        let results = base.retrieve("do i sow now", 1);
        assert_eq!(results[0], BUILTIN_FACTS[0]);
    }

    #[test]
    fn retrieval_is_idempotent() {
        let base = KnowledgeBase::builtin();
        let first = base.retrieve("soybean disease prevention", 5);
        let second = base.retrieve("soybean disease prevention", 5);
        assert_eq!(first, second);
    }

    #[test]
    fn ties_preserve_insertion_order() {
        let base = KnowledgeBase::builtin();
        // "soybeans" alone matches many facts with equal score 1; the
        // earliest-inserted matching facts must come back first.
        let results = base.retrieve("soybeans", 2);
        assert_eq!(results[0], BUILTIN_FACTS[0]);
        assert_eq!(results[1], BUILTIN_FACTS[1]);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let base = KnowledgeBase::builtin();
        let results = base.retrieve("NITROGEN fixing", 1);
        assert!(results[0].contains("nitrogen"));
    }
}

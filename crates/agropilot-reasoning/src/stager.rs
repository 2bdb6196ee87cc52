// SPDX-FileCopyrightText: 2026 Agropilot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The reasoning stager: four sequential keyword classifiers over the
//! message, retrieved knowledge, and conversation memory.

use std::collections::VecDeque;

use tracing::debug;

use crate::types::{QuestionType, ReasoningResult, Topic};

/// Maximum number of reasoning results kept for follow-up inspection.
/// Oldest results are evicted first, same discipline as conversation memory.
const HISTORY_CAP: usize = 32;

/// Context longer than this (trimmed) counts as a comprehensive knowledge hit.
const COMPREHENSIVE_CONTEXT_LEN: usize = 50;

/// Memory longer than this (trimmed) counts as meaningful conversation context.
const MEANINGFUL_MEMORY_LEN: usize = 20;

/// Interrogative cues for information-seeking questions. Checked first.
const INFORMATION_KEYWORDS: &[&str] = &["how", "when", "what", "where", "why"];

/// Help cues for problem-solving messages. Checked second.
const PROBLEM_KEYWORDS: &[&str] = &["help", "problem", "issue", "trouble"];

/// Advice cues for recommendation-seeking messages. Checked third.
const RECOMMENDATION_KEYWORDS: &[&str] = &["should", "recommend", "suggest", "advice"];

/// Topic keyword sets. All matching topics are kept, not just the first.
const TOPIC_KEYWORDS: &[(Topic, &[&str])] = &[
    (Topic::Planting, &["plant", "seed", "sow", "germination"]),
    (Topic::Disease, &["disease", "sick", "infection", "pest", "problem"]),
    (Topic::Weather, &["weather", "rain", "temperature", "climate"]),
    (Topic::Harvest, &["harvest", "yield", "crop", "production"]),
    (Topic::Soil, &["soil", "fertilizer", "nutrients", "ph"]),
    (Topic::General, &["soybean", "farming", "agriculture"]),
];

/// Action labels and their keyword sets, in precedence order. This list is
/// deliberately distinct from the intent router's and stays that way.
const ACTION_KEYWORDS: &[(&str, &[&str])] = &[
    ("provide_translation_info", &["translate", "language"]),
    ("analyze_location_suitability", &["weather", "climate", "location"]),
    ("diagnose_plant_health", &["disease", "sick", "problem", "pest"]),
    ("provide_planting_guidance", &["plant", "seed", "sow"]),
    ("provide_harvest_guidance", &["harvest", "yield"]),
    ("provide_soil_management_advice", &["fertilizer", "soil", "nutrients"]),
];

/// Fallback action when no keyword set matches.
const DEFAULT_ACTION: &str = "provide_general_farming_advice";

/// Deterministic reasoning stager with a bounded result history.
#[derive(Debug, Default)]
pub struct ReasoningStager {
    history: VecDeque<ReasoningResult>,
}

impl ReasoningStager {
    pub fn new() -> Self {
        Self {
            history: VecDeque::with_capacity(HISTORY_CAP),
        }
    }

    /// Apply the thought -> action -> observation -> strategy sequence to a
    /// message and record the result in the history window.
    ///
    /// `context` is the retrieved knowledge text, `memory` the rendered
    /// conversation transcript, and `available_tools` the names appended to
    /// the action label for traceability.
    pub fn reason(
        &mut self,
        message: &str,
        context: &str,
        memory: &str,
        available_tools: &[&str],
    ) -> ReasoningResult {
        let thought = analyze_situation(message, context, memory);
        let action = determine_action(message, available_tools);
        let observation = make_observation(context, memory, &action);
        let strategy = plan_response(&thought, &action, &observation);

        let result = ReasoningResult {
            thought,
            action,
            observation,
            strategy,
            original_message: message.to_string(),
        };

        debug!(action = %result.action, "staged reasoning for message");

        if self.history.len() == HISTORY_CAP {
            self.history.pop_front();
        }
        self.history.push_back(result.clone());

        result
    }

    /// The most recent reasoning results, oldest first, at most `limit`.
    pub fn recent(&self, limit: usize) -> Vec<&ReasoningResult> {
        let skip = self.history.len().saturating_sub(limit);
        self.history.iter().skip(skip).collect()
    }

    /// Number of results currently held.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Drop all recorded reasoning results.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}

/// Classify the question type by cue precedence: information > problem >
/// recommendation > general.
pub fn classify_question(message: &str) -> QuestionType {
    let lower = message.to_lowercase();

    if INFORMATION_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
        QuestionType::InformationSeeking
    } else if PROBLEM_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
        QuestionType::ProblemSolving
    } else if RECOMMENDATION_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
        QuestionType::RecommendationSeeking
    } else {
        QuestionType::GeneralInquiry
    }
}

/// Detect every farming topic mentioned in the message.
pub fn detect_topics(message: &str) -> Vec<Topic> {
    let lower = message.to_lowercase();

    TOPIC_KEYWORDS
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|kw| lower.contains(kw)))
        .map(|(topic, _)| *topic)
        .collect()
}

/// THOUGHT: what the user is asking and what they need.
fn analyze_situation(message: &str, context: &str, memory: &str) -> String {
    let question_type = classify_question(message);
    let topics = detect_topics(message);

    let topic_summary = if topics.is_empty() {
        "general farming".to_string()
    } else {
        topics
            .iter()
            .map(Topic::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    };

    let mut thought = format!("User is asking a {question_type} question about {topic_summary}. ");

    if !memory.trim().is_empty() {
        thought.push_str("This continues a previous conversation. ");
    }

    if !context.trim().is_empty() {
        thought.push_str("Relevant knowledge is available to answer this question.");
    } else {
        thought.push_str("Limited specific knowledge available - will provide general guidance.");
    }

    thought
}

/// ACTION: pick the single action label, first keyword set to hit wins.
fn determine_action(message: &str, available_tools: &[&str]) -> String {
    let lower = message.to_lowercase();

    let label = ACTION_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| lower.contains(kw)))
        .map(|(label, _)| *label)
        .unwrap_or(DEFAULT_ACTION);

    if available_tools.is_empty() {
        label.to_string()
    } else {
        format!("{label} using available tools: {}", available_tools.join(", "))
    }
}

/// OBSERVATION: what information is available, as fixed sentences.
fn make_observation(context: &str, memory: &str, action: &str) -> String {
    let mut observations = Vec::new();

    if context.trim().len() > COMPREHENSIVE_CONTEXT_LEN {
        observations.push("Comprehensive knowledge base available with specific information");
    } else if !context.is_empty() {
        observations.push("Some relevant knowledge available");
    } else {
        observations.push("Limited specific knowledge - will rely on general expertise");
    }

    if memory.trim().len() > MEANINGFUL_MEMORY_LEN {
        observations.push("Previous conversation context provides additional insight");
    }

    if action.contains("location") || action.contains("weather") {
        observations.push("Location-specific analysis requires weather data");
    } else if action.contains("disease") || action.contains("diagnose") {
        observations.push("Plant health diagnosis benefits from visual inspection");
    } else if action.contains("translate") {
        observations.push("Translation request requires language processing");
    }

    format!("{}.", observations.join(". "))
}

/// RESPONSE STRATEGY: fixed advice fragments keyed on the thought and
/// action, always ending with the two practical-focus fragments.
fn plan_response(thought: &str, action: &str, observation: &str) -> String {
    let mut components: Vec<&str> = Vec::new();
    let thought_lower = thought.to_lowercase();

    if thought_lower.contains("problem") || action.contains("diagnose") {
        components.push("Start with problem acknowledgment");
        components.push("Provide step-by-step diagnostic approach");
        components.push("Include preventive measures");
    } else if thought_lower.contains("recommendation") || action.contains("advice") {
        components.push("Provide clear recommendations");
        components.push("Include specific timing and measurements");
        components.push("Explain reasoning behind recommendations");
    } else if thought_lower.contains("information") {
        components.push("Provide comprehensive information");
        components.push("Structure information logically");
        components.push("Include practical examples");
    }

    if observation.contains("knowledge base available") {
        components.push("Reference specific knowledge from database");
    }

    if observation.contains("conversation context") {
        components.push("Acknowledge previous discussion");
    }

    components.push("Focus on actionable, practical advice");
    components.push("Use farmer-friendly language");

    components.join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn information_questions_classified_first() {
        assert_eq!(
            classify_question("How do I plant soybeans?"),
            QuestionType::InformationSeeking
        );
        assert_eq!(
            classify_question("when is harvest time"),
            QuestionType::InformationSeeking
        );
    }

    #[test]
    fn problem_messages_classified_second() {
        assert_eq!(
            classify_question("please help, my field is in trouble"),
            QuestionType::ProblemSolving
        );
    }

    #[test]
    fn recommendation_messages_classified_third() {
        assert_eq!(
            classify_question("any advice on fertilizer?"),
            QuestionType::RecommendationSeeking
        );
    }

    #[test]
    fn everything_else_is_general_inquiry() {
        assert_eq!(classify_question("hello there"), QuestionType::GeneralInquiry);
    }

    #[test]
    fn information_cue_wins_over_problem_cue() {
        // "what" hits before "problem" in check order.
        assert_eq!(
            classify_question("what is this problem"),
            QuestionType::InformationSeeking
        );
    }

    #[test]
    fn topics_are_multi_label() {
        let topics = detect_topics("rain after planting the seed in poor soil");
        assert!(topics.contains(&Topic::Planting));
        assert!(topics.contains(&Topic::Weather));
        assert!(topics.contains(&Topic::Soil));
        assert!(!topics.contains(&Topic::Harvest));
    }

    #[test]
    fn no_topic_match_yields_empty_list() {
        assert!(detect_topics("good morning").is_empty());
    }

    #[test]
    fn action_precedence_weather_over_disease() {
        // "weather" is checked before "disease" in the action list, unlike
        // the intent router where both live in fixed slots.
        let mut stager = ReasoningStager::new();
        let result = stager.reason("weather made my plants sick", "", "", &[]);
        assert_eq!(result.action, "analyze_location_suitability");
    }

    #[test]
    fn action_defaults_to_general_advice() {
        let mut stager = ReasoningStager::new();
        let result = stager.reason("tell me something", "", "", &[]);
        assert_eq!(result.action, "provide_general_farming_advice");
    }

    #[test]
    fn tools_are_appended_to_action() {
        let mut stager = ReasoningStager::new();
        let result = stager.reason(
            "how to plant",
            "",
            "",
            &["knowledge_base", "conversation_memory"],
        );
        assert_eq!(
            result.action,
            "provide_planting_guidance using available tools: knowledge_base, conversation_memory"
        );
    }

    #[test]
    fn observation_reflects_context_richness() {
        let mut stager = ReasoningStager::new();

        let rich = "a".repeat(60);
        let result = stager.reason("how to plant", &rich, "", &[]);
        assert!(result.observation.contains("Comprehensive knowledge base"));

        let result = stager.reason("how to plant", "short fact", "", &[]);
        assert!(result.observation.contains("Some relevant knowledge"));

        let result = stager.reason("how to plant", "", "", &[]);
        assert!(result.observation.contains("Limited specific knowledge"));
    }

    #[test]
    fn observation_notes_conversation_memory() {
        let mut stager = ReasoningStager::new();
        let memory = "User: hello\nAssistant: hi, how can I help?\n";
        let result = stager.reason("how to plant", "", memory, &[]);
        assert!(result
            .observation
            .contains("Previous conversation context provides additional insight"));
    }

    #[test]
    fn strategy_always_ends_with_practical_fragments() {
        let mut stager = ReasoningStager::new();
        let result = stager.reason("anything at all", "", "", &[]);
        assert!(result
            .strategy
            .ends_with("Focus on actionable, practical advice; Use farmer-friendly language"));
    }

    #[test]
    fn diagnose_action_selects_diagnostic_strategy() {
        let mut stager = ReasoningStager::new();
        let result = stager.reason("my crop looks sick", "", "", &[]);
        assert_eq!(result.action, "diagnose_plant_health");
        assert!(result.strategy.contains("step-by-step diagnostic approach"));
    }

    #[test]
    fn reasoning_is_deterministic() {
        let mut a = ReasoningStager::new();
        let mut b = ReasoningStager::new();
        let left = a.reason("should I harvest now?", "context", "memory text here okay", &[]);
        let right = b.reason("should I harvest now?", "context", "memory text here okay", &[]);
        assert_eq!(left, right);
    }

    #[test]
    fn history_is_bounded() {
        let mut stager = ReasoningStager::new();
        for i in 0..(HISTORY_CAP + 10) {
            stager.reason(&format!("message {i}"), "", "", &[]);
        }
        assert_eq!(stager.history_len(), HISTORY_CAP);
        // Oldest evicted: the first remaining entry is message 10.
        let recent = stager.recent(HISTORY_CAP);
        assert_eq!(recent[0].original_message, "message 10");
    }

    #[test]
    fn recent_returns_newest_results() {
        let mut stager = ReasoningStager::new();
        stager.reason("first", "", "", &[]);
        stager.reason("second", "", "", &[]);
        stager.reason("third", "", "", &[]);

        let recent = stager.recent(2);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].original_message, "second");
        assert_eq!(recent[1].original_message, "third");
    }

    #[test]
    fn clear_history_empties_the_window() {
        let mut stager = ReasoningStager::new();
        stager.reason("first", "", "", &[]);
        stager.clear_history();
        assert_eq!(stager.history_len(), 0);
    }

    #[test]
    fn prompt_renders_all_four_steps() {
        let mut stager = ReasoningStager::new();
        let result = stager.reason("how to plant soybean", "facts", "", &[]);
        let prompt = result.prompt();
        assert!(prompt.contains("THOUGHT:"));
        assert!(prompt.contains("ACTION:"));
        assert!(prompt.contains("OBSERVATION:"));
        assert!(prompt.contains("RESPONSE STRATEGY:"));
        assert!(prompt.ends_with("following this reasoning approach."));
    }
}

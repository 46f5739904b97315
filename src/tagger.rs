//! Adjective extraction.
//!
//! A small rule-based part-of-speech tagger that only answers one question:
//! which words in this text act as adjectives? Words are tagged from a closed
//! list of common adjectives first, then by adjectival suffix for words that
//! are not known to be something else.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

/// Extracts adjectives from raw text.
pub trait AdjectiveTagger: Send + Sync {
    /// Surface forms in order of appearance, duplicates included.
    fn adjectives_of(&self, text: &str) -> Vec<String>;
}

static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\p{L}+(?:['-]\p{L}+)*").unwrap());

static KNOWN_ADJECTIVES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    vec![
        // surprise and astonishment
        "amazing", "astonished", "astonishing", "astounding", "incredible",
        "shocked", "shocking", "startled", "stunned", "stunning", "surprised",
        "surprising", "unbelievable", "unexpected", "unreal", "speechless",
        // evaluative
        "awesome", "awful", "bad", "best", "better", "brilliant", "cool",
        "excellent", "fantastic", "fine", "good", "great", "horrible", "nice",
        "ok", "okay", "perfect", "poor", "superb", "terrible", "wonderful",
        "worse", "worst", "lovely", "ugly", "pretty", "gorgeous", "boring",
        "weird", "odd", "strange", "crazy", "insane", "wild", "sad", "happy",
        "glad", "angry", "upset", "excited", "pleased", "disappointed",
        "satisfied", "impressed", "confused", "bored", "annoyed", "frustrated",
        "thrilled", "delighted", "worried", "scared", "afraid",
        // descriptive
        "big", "small", "large", "little", "long", "short", "high", "low",
        "new", "old", "young", "fast", "slow", "quick", "easy", "hard",
        "simple", "clear", "clean", "dirty", "cheap", "expensive", "free",
        "full", "empty", "hot", "cold", "warm", "quiet", "loud", "bright",
        "dark", "strong", "weak", "smooth", "rough", "broken", "ready",
        "busy", "rich", "safe", "real", "true", "false", "main", "whole",
        "only", "same", "different", "important", "possible", "likely",
        "friendly", "helpful", "useful", "useless", "buggy", "laggy",
        "naive", "naïve",
    ]
    .into_iter()
    .collect()
});

// Words that carry an adjectival suffix but are usually something else.
static NOT_ADJECTIVES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    vec![
        "believe", "receive", "arrive", "archive", "drive", "alive", "olive",
        "motive", "executive", "objective", "native", "relative", "detective",
        "representative", "initiative", "incentive", "alternative", "five",
        "table", "cable", "fable", "stable", "vegetable", "variable", "bible",
        "handful", "mouthful", "spoonful", "cupful", "fish", "dish", "wish",
        "finish", "polish", "publish", "establish", "punish", "vanish",
        "unless", "nevertheless", "regardless", "bless",
    ]
    .into_iter()
    .collect()
});

const ADJECTIVE_SUFFIXES: [&str; 8] = ["ful", "ous", "ive", "able", "ible", "less", "ical", "ish"];

/// Closed-list plus suffix-rule tagger for English.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleTagger;

impl RuleTagger {
    fn is_adjective(word: &str) -> bool {
        let lower = word.to_lowercase();
        if KNOWN_ADJECTIVES.contains(lower.as_str()) {
            return true;
        }
        if NOT_ADJECTIVES.contains(lower.as_str()) {
            return false;
        }
        ADJECTIVE_SUFFIXES
            .iter()
            .any(|suffix| lower.ends_with(suffix) && lower.len() > suffix.len() + 2)
    }
}

impl AdjectiveTagger for RuleTagger {
    fn adjectives_of(&self, text: &str) -> Vec<String> {
        WORD.find_iter(text)
            .map(|m| m.as_str())
            .filter(|w| Self::is_adjective(w))
            .map(str::to_string)
            .collect()
    }
}

//! Surprise detection.
//!
//! A message counts as a surprise when any of three signals fires:
//! a surprise phrase appears anywhere in the text, the tagger finds an
//! adjective that is itself a surprise phrase, or the lexicon score spikes
//! above [`SENTIMENT_SURPRISE_THRESHOLD`].

use serde::Serialize;
use std::sync::Arc;
use tracing::debug;
use utoipa::ToSchema;

use crate::lexicon::{AfinnLexicon, SentimentLexicon};
use crate::tagger::{AdjectiveTagger, RuleTagger};

/// Case-insensitive phrases indicating surprise.
pub const SURPRISE_KEYWORDS: [&str; 7] = [
    "wow",
    "amazing",
    "unbelievable",
    "no way",
    "incredible",
    "shocked",
    "unexpected",
];

/// Scores strictly above this count as an outsized emotional spike.
pub const SENTIMENT_SURPRISE_THRESHOLD: f64 = 2.0;

/// Per-message classification output.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub surprise: bool,
    #[schema(example = 4.0)]
    pub sentiment_score: f64,
    /// Lower-cased adjectives in order of appearance.
    pub adjectives: Vec<String>,
}

/// Stateless classifier over pluggable lexicon and tagger.
#[derive(Clone)]
pub struct SurpriseClassifier {
    lexicon: Arc<dyn SentimentLexicon>,
    tagger: Arc<dyn AdjectiveTagger>,
}

impl Default for SurpriseClassifier {
    fn default() -> Self {
        Self::new(Arc::new(AfinnLexicon), Arc::new(RuleTagger))
    }
}

impl SurpriseClassifier {
    pub fn new(lexicon: Arc<dyn SentimentLexicon>, tagger: Arc<dyn AdjectiveTagger>) -> Self {
        Self { lexicon, tagger }
    }

    pub fn classify(&self, text: &str) -> AnalysisResult {
        let lowered = text.to_lowercase();
        let keyword_match = SURPRISE_KEYWORDS.iter().any(|k| lowered.contains(k));

        let adjectives: Vec<String> = self
            .tagger
            .adjectives_of(text)
            .into_iter()
            .map(|a| a.to_lowercase())
            .collect();
        // exact membership here, substring above
        let adjective_match = adjectives
            .iter()
            .any(|a| SURPRISE_KEYWORDS.contains(&a.as_str()));

        let tokens: Vec<&str> = text.split_whitespace().collect();
        let sentiment_score = self.lexicon.score(&tokens);

        let surprise =
            keyword_match || adjective_match || sentiment_score > SENTIMENT_SURPRISE_THRESHOLD;

        debug!(
            keyword_match,
            adjective_match,
            sentiment_score,
            surprise,
            "classified message"
        );

        AnalysisResult {
            surprise,
            sentiment_score,
            adjectives,
        }
    }
}

//! Lexicon-based sentiment scoring.
//!
//! Scores a token sequence by summing per-word valences from the AFINN-165
//! English polarity table (integer weights in -5..=5). Words without an entry
//! fall back to their regular base form (`loves` -> `love`, `thanked` ->
//! `thank`). Anything else contributes nothing.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Anything that can turn a token sequence into a polarity score.
pub trait SentimentLexicon: Send + Sync {
    /// Sum of valences for the known tokens. `score(&[])` must be `0.0`.
    fn score(&self, tokens: &[&str]) -> f64;
}

/// AFINN-165, one `word<TAB>valence` pair per line.
const AFINN_165: &str = include_str!("data/afinn-165.txt");

static AFINN: Lazy<HashMap<&'static str, i8>> = Lazy::new(|| parse_table(AFINN_165));

// (suffix, replacement) rules tried in order when a word has no direct entry
const INFLECTIONS: [(&str, &str); 9] = [
    ("ies", "y"),
    ("ied", "y"),
    ("ily", "y"),
    ("ing", ""),
    ("ing", "e"),
    ("ed", ""),
    ("ed", "e"),
    ("es", ""),
    ("s", ""),
];

const MIN_STEM_CHARS: usize = 3;

fn parse_table(raw: &'static str) -> HashMap<&'static str, i8> {
    raw.lines()
        .filter_map(|line| {
            let (word, valence) = line.rsplit_once('\t')?;
            Some((word.trim(), valence.trim().parse().ok()?))
        })
        .collect()
}

/// The bundled English polarity table.
#[derive(Debug, Clone, Copy, Default)]
pub struct AfinnLexicon;

impl AfinnLexicon {
    /// Valence of a single word after normalization, if known.
    pub fn valence(&self, word: &str) -> Option<i8> {
        let word = normalize(word);
        AFINN.get(word.as_str()).copied().or_else(|| {
            base_forms(&word)
                .iter()
                .find_map(|form| AFINN.get(form.as_str()).copied())
        })
    }

    pub fn len(&self) -> usize {
        AFINN.len()
    }

    pub fn is_empty(&self) -> bool {
        AFINN.is_empty()
    }
}

impl SentimentLexicon for AfinnLexicon {
    fn score(&self, tokens: &[&str]) -> f64 {
        // fold from +0.0: an empty f64 `sum` is -0.0
        tokens
            .iter()
            .filter_map(|t| self.valence(t))
            .fold(0.0, |acc, v| acc + f64::from(v))
    }
}

/// Candidate base forms of a regularly inflected word, most specific first.
fn base_forms(word: &str) -> Vec<String> {
    let mut forms = Vec::new();
    for (suffix, tail) in INFLECTIONS {
        let Some(stem) = word.strip_suffix(suffix) else {
            continue;
        };
        // "class" is not a plural
        if stem.chars().count() < MIN_STEM_CHARS || (suffix == "s" && stem.ends_with('s')) {
            continue;
        }
        forms.push(format!("{stem}{tail}"));
        if tail.is_empty() && (suffix == "ed" || suffix == "ing") {
            if let Some(single) = undouble(stem) {
                forms.push(single.to_string());
            }
        }
    }
    forms
}

/// `hugg` -> `hug`: drops a doubled final consonant.
fn undouble(stem: &str) -> Option<&str> {
    let mut tail = stem.chars().rev();
    let (last, prev) = (tail.next()?, tail.next()?);
    if last == prev && !"aeiou".contains(last) {
        Some(&stem[..stem.len() - last.len_utf8()])
    } else {
        None
    }
}

/// Lower-case and strip surrounding punctuation, keeping inner apostrophes.
fn normalize(token: &str) -> String {
    token
        .trim_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase()
}

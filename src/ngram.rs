use std::collections::HashMap;

use crate::types::*;

///A bigram frequency model with add-one (Laplace) smoothing. Counts are
///cumulative over all training calls; there is no reset operation.
#[derive(Default)]
pub struct BigramModel {
    ///Occurrence count per word over all training text seen so far
    unigrams: HashMap<String, Freq>,

    ///Co-occurrence counts: previous word to (next word to count)
    bigrams: HashMap<String, HashMap<String, Freq>>,

    ///Running sum of all tokens ever trained on, the fallback
    ///denominator when the previous word was never observed
    total_tokens: u64,

    ///Number of distinct unigrams, the smoothing denominator term;
    ///recomputed after every training call
    vocabulary_size: usize,
}

impl BigramModel {
    pub fn new() -> BigramModel {
        BigramModel::default()
    }

    pub fn unigram_count(&self, word: &str) -> Freq {
        self.unigrams.get(word).copied().unwrap_or(0)
    }

    pub fn bigram_count(&self, prev: &str, next: &str) -> Freq {
        self.bigrams
            .get(prev)
            .and_then(|followers| followers.get(next))
            .copied()
            .unwrap_or(0)
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary_size
    }

    pub fn total_tokens(&self) -> u64 {
        self.total_tokens
    }

    ///Train on one pass of text, given as an ordered sequence of
    ///normalized tokens. Every token increments its unigram count and
    ///every adjacent pair increments its bigram count. An empty sequence
    ///is a no-op.
    pub fn train(&mut self, tokens: &[String]) {
        if tokens.is_empty() {
            return;
        }
        self.total_tokens += tokens.len() as u64;
        for (i, token) in tokens.iter().enumerate() {
            *self.unigrams.entry(token.clone()).or_insert(0) += 1;
            if let Some(next) = tokens.get(i + 1) {
                *self
                    .bigrams
                    .entry(token.clone())
                    .or_default()
                    .entry(next.clone())
                    .or_insert(0) += 1;
            }
        }
        self.vocabulary_size = self.unigrams.len();
    }

    ///Smoothed conditional-probability-like score of `candidate`
    ///following `prev`. When `prev` has been observed with at least one
    ///following word, this is the add-one-smoothed conditional estimate;
    ///otherwise it falls back to an add-one-smoothed unigram estimate.
    ///Absent keys count as zero, never as failures, so the score is
    ///strictly positive whenever the vocabulary is non-empty.
    pub fn score(&self, prev: &str, candidate: &str) -> f64 {
        if let Some(followers) = self.bigrams.get(prev) {
            let prev_count = self.unigram_count(prev) as f64;
            let pair_count = followers.get(candidate).copied().unwrap_or(0) as f64;
            (pair_count + 1.0) / (prev_count + self.vocabulary_size as f64)
        } else if self.total_tokens == 0 {
            1.0 / self.vocabulary_size.max(1) as f64
        } else {
            let candidate_count = self.unigram_count(candidate) as f64;
            (candidate_count + 1.0) / (self.total_tokens as f64 + self.vocabulary_size as f64)
        }
    }
}

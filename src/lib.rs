use std::collections::BinaryHeap;
use std::fs::File;
use std::io::{BufRead, BufReader};

pub mod iterators;
pub mod ngram;
pub mod tokenize;
pub mod trie;
pub mod types;

pub use crate::iterators::*;
pub use crate::ngram::*;
pub use crate::tokenize::*;
pub use crate::trie::*;
pub use crate::types::*;

pub struct SuggestionModel {
    ///The prefix index holding the completion vocabulary
    pub index: PrefixIndex,

    ///The bigram language model used to rank candidates in context
    pub model: BigramModel,

    /// Stores the names of the loaded lexicons, for provenance
    pub lexicons: Vec<String>,

    pub debug: bool,
}

impl SuggestionModel {
    pub fn new(debug: bool) -> SuggestionModel {
        SuggestionModel {
            index: PrefixIndex::new(),
            model: BigramModel::new(),
            lexicons: Vec::new(),
            debug,
        }
    }

    ///Normalize a word and insert it into the prefix index. Words that
    ///normalize to the empty string are silently skipped.
    pub fn add_to_lexicon(&mut self, word: &str) {
        let normalized = normalize(word);
        if !normalized.is_empty() {
            if self.debug {
                eprintln!(" -- Adding to lexicon: {}", normalized);
            }
            self.index.insert(&normalized);
        }
    }

    ///Load a batch of vocabulary words (normalizing each)
    pub fn load_lexicon<'a, I>(&mut self, words: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        for word in words {
            self.add_to_lexicon(word);
        }
    }

    ///Read a lexicon from a file with one candidate vocabulary word per
    ///line. Lines are normalized independently; lines that normalize to
    ///the empty string are dropped.
    pub fn read_lexicon(&mut self, filename: &str) -> Result<(), std::io::Error> {
        if self.debug {
            eprintln!("Reading lexicon from {}...", filename);
        }
        let f = File::open(filename)?;
        let f_buffer = BufReader::new(f);
        for line in f_buffer.lines() {
            let line = line?;
            self.add_to_lexicon(&line);
        }
        if self.debug {
            eprintln!(" - Lexicon size is now {}", self.index.len());
        }
        self.lexicons.push(filename.to_string());
        Ok(())
    }

    ///Tokenize free-form text and train the bigram model on it.
    ///Training is cumulative across calls.
    pub fn train(&mut self, text: &str) {
        let tokens = tokenize(text);
        if self.debug {
            eprintln!("Training on {} tokens...", tokens.len());
        }
        self.model.train(&tokens);
    }

    ///Read a training corpus from a file and train on its entire text
    pub fn read_corpus(&mut self, filename: &str) -> Result<(), std::io::Error> {
        if self.debug {
            eprintln!("Reading corpus from {}...", filename);
        }
        let text = std::fs::read_to_string(filename)?;
        self.train(&text);
        if self.debug {
            eprintln!(
                " - Trained on {} tokens total, vocabulary size {}",
                self.model.total_tokens(),
                self.model.vocabulary_size()
            );
        }
        Ok(())
    }

    /// Produce ranked completions for a partially typed input. The
    /// trailing partial word is completed against the prefix index and
    /// every candidate is scored against the word typed before it,
    /// returning the top `max_matches` (word, score) pairs in descending
    /// score order. An input whose trailing prefix matches nothing
    /// yields an empty list.
    pub fn suggest(&self, input: &str, params: &SuggestParameters) -> Vec<(String, f64)> {
        let tokens = tokenize(input);
        let prefix = trailing_prefix(input);

        //the trailing partial word is usually the last token, so the
        //context word is the one before it
        let prev = if tokens.len() >= 2 {
            tokens[tokens.len() - 2].as_str()
        } else {
            ""
        };
        if self.debug {
            eprintln!(
                "(completing prefix \"{}\" with context word \"{}\")",
                prefix, prev
            );
        }

        let candidates = self.index.autocomplete(&prefix, params.candidate_limit);
        if self.debug {
            eprintln!("(found {} candidates)", candidates.len());
        }
        if candidates.is_empty() {
            return Vec::new();
        }

        self.score_and_rank(candidates, prev, params.max_matches)
    }

    /// Score all candidates against the context word and return the top
    /// `max_matches` by descending score. Ties are broken
    /// lexicographically, smaller word first.
    pub fn score_and_rank(
        &self,
        candidates: Vec<String>,
        prev: &str,
        max_matches: usize,
    ) -> Vec<(String, f64)> {
        let mut heap: BinaryHeap<ScoredCandidate> = BinaryHeap::with_capacity(candidates.len());
        for word in candidates {
            let score = self.model.score(prev, &word);
            if self.debug {
                eprintln!("   (candidate={}, score={})", word, score);
            }
            heap.push(ScoredCandidate { score, word });
        }

        let mut results: Vec<(String, f64)> = Vec::with_capacity(max_matches.min(heap.len()));
        while results.len() < max_matches {
            match heap.pop() {
                Some(candidate) => results.push((candidate.word, candidate.score)),
                None => break,
            }
        }
        results
    }
}

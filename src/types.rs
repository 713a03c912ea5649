use std::cmp::Ordering;

///Index of a trie node in the arena, carries no further meaning
pub type NodeId = usize;

///Absolute occurrence count of a unigram or bigram
pub type Freq = u32;

///Default number of ranked suggestions returned per input
pub const DEFAULT_MAX_MATCHES: usize = 5;

///Default upper bound on the number of candidates retrieved from the
///prefix index before scoring; deliberately generous, the ranking stage
///does the actual pruning
pub const DEFAULT_CANDIDATE_LIMIT: usize = 1000;

#[derive(Debug, Clone, PartialEq)]
pub struct SuggestParameters {
    /// Number of ranked suggestions to return per input (the k in top-k)
    pub max_matches: usize,

    /// Maximum number of candidates to retrieve from the prefix index
    /// before scoring. Candidates beyond this bound are never considered.
    pub candidate_limit: usize,
}

impl Default for SuggestParameters {
    fn default() -> Self {
        Self {
            max_matches: DEFAULT_MAX_MATCHES,
            candidate_limit: DEFAULT_CANDIDATE_LIMIT,
        }
    }
}

impl SuggestParameters {
    pub fn with_max_matches(mut self, max_matches: usize) -> Self {
        self.max_matches = max_matches;
        self
    }

    pub fn with_candidate_limit(mut self, candidate_limit: usize) -> Self {
        self.candidate_limit = candidate_limit;
        self
    }
}

///A candidate word paired with its language model score, ordered for use
///in a max-heap during top-k selection. Comparison is by score first;
///equal scores are broken lexicographically with the smaller word ranking
///higher, so the final ranking is fully deterministic.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate {
    pub score: f64,
    pub word: String,
}

impl Eq for ScoredCandidate {}

impl Ord for ScoredCandidate {
    fn cmp(&self, other: &Self) -> Ordering {
        //scores are ratios of positive counts, never NaN
        self.score
            .partial_cmp(&other.score)
            .expect("scores are comparable")
            .then_with(|| other.word.cmp(&self.word))
    }
}

impl PartialOrd for ScoredCandidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

use typeahead::test::*;
use typeahead::*;

#[test]
fn test0001_normalize() {
    assert_eq!(normalize("Hello, World!"), "helloworld");
    assert_eq!(normalize("CAT"), "cat");
    assert_eq!(normalize("plant"), "plant");
    assert_eq!(normalize("123 -- !"), "");
    assert_eq!(normalize(""), "");
}

#[test]
fn test0002_tokenize() {
    assert_eq!(tokenize("I want to eat!"), vec!["i", "want", "to", "eat"]);
    assert_eq!(
        tokenize("please  play,music."),
        vec!["please", "play", "music"]
    );
    assert_eq!(tokenize("42!?"), Vec::<String>::new());
    assert_eq!(tokenize(""), Vec::<String>::new());
}

#[test]
fn test0003_trailing_prefix() {
    assert_eq!(trailing_prefix("we want to pl"), "pl");
    assert_eq!(trailing_prefix("Ca"), "ca");
    assert_eq!(trailing_prefix("hello."), "");
    assert_eq!(trailing_prefix("hello "), "");
    assert_eq!(trailing_prefix(""), "");
    assert_eq!(trailing_prefix("plant"), "plant");
}

#[test]
fn test0101_insert_and_contains() {
    let mut index = PrefixIndex::new();
    index.insert("cat");
    index.insert("car");
    assert!(index.contains("cat"));
    assert!(index.contains("car"));
    assert!(!index.contains("ca")); //prefix of a word, not a word itself
    assert!(!index.contains("dog"));
    assert_eq!(index.len(), 2);
}

#[test]
fn test0102_idempotent_insertion() {
    let mut once = PrefixIndex::new();
    once.insert("cat");
    once.insert("car");

    let mut thrice = PrefixIndex::new();
    for _ in 0..3 {
        thrice.insert("cat");
        thrice.insert("car");
    }

    assert_eq!(once.len(), thrice.len());
    assert_eq!(once.node_count(), thrice.node_count());
    assert_eq!(once.autocomplete("", 100), thrice.autocomplete("", 100));
}

#[test]
fn test0103_autocomplete_lexicographic() {
    let mut index = PrefixIndex::new();
    for word in ["cat", "car", "care", "dog"] {
        index.insert(word);
    }
    assert_eq!(index.autocomplete("ca", 10), vec!["car", "care", "cat"]);
}

#[test]
fn test0104_limit_truncation() {
    let mut index = PrefixIndex::new();
    for word in ["cat", "car", "care", "dog"] {
        index.insert(word);
    }
    assert_eq!(index.autocomplete("ca", 2), vec!["car", "care"]);
    assert_eq!(index.autocomplete("ca", 0), Vec::<String>::new());

    //a bounded result is a prefix of the result for any larger limit
    let full = index.autocomplete("", 100);
    for limit in 0..full.len() {
        assert_eq!(index.autocomplete("", limit), full[..limit].to_vec());
    }
}

#[test]
fn test0105_empty_prefix_returns_whole_vocabulary() {
    let index = get_untrained_model().index;
    let all = index.autocomplete("", 1000);
    assert_eq!(all.len(), TEST_LEXICON.len());
    let mut sorted: Vec<String> = TEST_LEXICON.iter().map(|w| w.to_string()).collect();
    sorted.sort();
    assert_eq!(all, sorted);
}

#[test]
fn test0106_unknown_prefix_yields_nothing() {
    let index = get_untrained_model().index;
    assert_eq!(index.autocomplete("xyz", 10), Vec::<String>::new());
    assert_eq!(index.autocomplete("cats", 10), Vec::<String>::new());
}

#[test]
fn test0107_nonletters_dropped_from_search_path() {
    let index = get_untrained_model().index;
    assert_eq!(index.autocomplete("c-a", 10), index.autocomplete("ca", 10));
    assert_eq!(index.autocomplete("C2a!", 10), index.autocomplete("a", 10)); //uppercase dropped too
}

#[test]
fn test0108_prefix_matching_itself_is_included() {
    let mut index = PrefixIndex::new();
    index.insert("car");
    index.insert("care");
    assert_eq!(index.autocomplete("car", 10), vec!["car", "care"]);
}

#[test]
fn test0109_prefix_soundness() {
    let index = get_untrained_model().index;
    //every stored word appears under each of its prefixes
    for word in TEST_LEXICON {
        for end in 0..=word.len() {
            let results = index.autocomplete(&word[..end], 1000);
            assert!(
                results.contains(&word.to_string()),
                "{} missing under prefix {}",
                word,
                &word[..end]
            );
        }
    }
    //and nothing is ever returned that was not stored
    for result in index.autocomplete("", 1000) {
        assert!(TEST_LEXICON.contains(&result.as_str()));
    }
}

#[test]
fn test0110_lazy_iteration() {
    let index = get_untrained_model().index;
    let mut iter = index.iter_prefix("ca");
    assert_eq!(iter.next().as_deref(), Some("car"));
    assert_eq!(iter.next().as_deref(), Some("care"));
    assert_eq!(iter.next().as_deref(), Some("cat"));
    assert_eq!(iter.next(), None);
}

#[test]
fn test0201_train_counts() {
    let mut model = BigramModel::new();
    let tokens: Vec<String> = ["i", "want", "to", "eat"]
        .iter()
        .map(|t| t.to_string())
        .collect();
    model.train(&tokens);

    for token in ["i", "want", "to", "eat"] {
        assert_eq!(model.unigram_count(token), 1);
    }
    assert_eq!(model.bigram_count("i", "want"), 1);
    assert_eq!(model.bigram_count("want", "to"), 1);
    assert_eq!(model.bigram_count("to", "eat"), 1);
    assert_eq!(model.bigram_count("eat", "i"), 0);
    assert_eq!(model.total_tokens(), 4);
    assert_eq!(model.vocabulary_size(), 4);
}

#[test]
fn test0202_training_is_cumulative() {
    let mut model = BigramModel::new();
    let tokens: Vec<String> = ["to", "eat", "to", "eat"]
        .iter()
        .map(|t| t.to_string())
        .collect();
    model.train(&tokens);
    assert_eq!(model.bigram_count("to", "eat"), 2);
    assert_eq!(model.unigram_count("eat"), 2); //the final token still counts as a unigram

    model.train(&tokens);
    assert_eq!(model.bigram_count("to", "eat"), 4);
    assert_eq!(model.unigram_count("to"), 4);
    assert_eq!(model.total_tokens(), 8);
    assert_eq!(model.vocabulary_size(), 2);
}

#[test]
fn test0203_train_empty_is_noop() {
    let mut model = BigramModel::new();
    model.train(&[]);
    assert_eq!(model.total_tokens(), 0);
    assert_eq!(model.vocabulary_size(), 0);
}

#[test]
fn test0204_observed_bigram_outscores_unseen() {
    let mut model = BigramModel::new();
    let tokens: Vec<String> = ["i", "want", "to", "eat"]
        .iter()
        .map(|t| t.to_string())
        .collect();
    model.train(&tokens);

    //("want","to") was observed, ("want","eat") was not
    assert!(model.score("want", "to") > model.score("want", "eat"));
    //exact add-one values: (1+1)/(1+4) vs (0+1)/(1+4)
    assert!((model.score("want", "to") - 0.4).abs() < 1e-12);
    assert!((model.score("want", "eat") - 0.2).abs() < 1e-12);
}

#[test]
fn test0205_smoothing_is_strictly_positive() {
    let mut model = BigramModel::new();
    let tokens: Vec<String> = ["a", "b"].iter().map(|t| t.to_string()).collect();
    model.train(&tokens);

    assert!(model.score("a", "zzz") > 0.0);
    assert!(model.score("zzz", "a") > 0.0);
    assert!(model.score("zzz", "qqq") > 0.0);
    assert!(model.score("", "a") > 0.0);
}

#[test]
fn test0206_untrained_fallback() {
    let model = BigramModel::new();
    //no training data and an empty vocabulary: 1/max(1, vocab_size)
    assert_eq!(model.score("anything", "goes"), 1.0);
    assert_eq!(model.score("", ""), 1.0);
}

#[test]
fn test0207_unseen_prev_falls_back_to_unigram() {
    let mut model = BigramModel::new();
    let tokens: Vec<String> = ["to", "eat", "to", "play"]
        .iter()
        .map(|t| t.to_string())
        .collect();
    model.train(&tokens);

    //"never" was never a bigram head: (count(candidate)+1)/(total+vocab)
    let expected = (model.unigram_count("eat") as f64 + 1.0)
        / (model.total_tokens() as f64 + model.vocabulary_size() as f64);
    assert!((model.score("never", "eat") - expected).abs() < 1e-12);
    //a frequent candidate outranks a rare one under the fallback
    assert!(model.score("never", "to") > model.score("never", "eat"));
}

#[test]
fn test0301_suggest_contextual_ranking() {
    let mut model = SuggestionModel::new(false);
    model.load_lexicon(["plant", "play", "please"]);
    model.train("please play music we want to plant a tree");

    let results = model.suggest("we want to pl", &get_test_params());
    assert_eq!(results.len(), 3);
    //the observed bigram ("to","plant") boosts plant over the others
    assert_eq!(results[0].0, "plant");
    assert!(results[0].1 > results[1].1);
}

#[test]
fn test0302_suggest_without_candidates_is_empty() {
    let model = get_test_model();
    assert!(model.suggest("we want to xyz", &get_test_params()).is_empty());
}

#[test]
fn test0303_suggest_respects_max_matches() {
    let model = get_test_model();
    let params = get_test_params().with_max_matches(2);
    let results = model.suggest("", &params); //empty prefix matches the whole lexicon
    assert_eq!(results.len(), 2);
}

#[test]
fn test0304_suggest_scores_descend() {
    let model = get_test_model();
    let results = model.suggest("we want to pl", &get_test_params());
    assert!(!results.is_empty());
    for pair in results.windows(2) {
        assert!(pair[0].1 >= pair[1].1);
    }
}

#[test]
fn test0305_suggest_single_token_input() {
    let model = get_test_model();
    //only one token: there is no context word, the unigram fallback ranks
    let results = model.suggest("pl", &get_test_params());
    assert!(!results.is_empty());
    for (word, _) in &results {
        assert!(word.starts_with("pl"));
    }
}

#[test]
fn test0306_tie_break_lexicographic() {
    //an untrained model scores every candidate identically, so the
    //ranking falls through to the documented lexicographic tie-break
    let model = get_untrained_model();
    let results = model.suggest("ca", &get_test_params());
    let words: Vec<&str> = results.iter().map(|(w, _)| w.as_str()).collect();
    assert_eq!(words, vec!["car", "care", "cat"]);
    assert!(results.iter().all(|(_, score)| *score == 1.0));
}

#[test]
fn test0307_lexicon_entries_are_normalized() {
    let mut model = SuggestionModel::new(false);
    model.load_lexicon(["Cat!", "  DOG  ", "12345", "---"]);
    //entries that normalize to nothing are skipped
    assert_eq!(model.index.len(), 2);
    assert!(model.index.contains("cat"));
    assert!(model.index.contains("dog"));
}

#[test]
fn test0308_candidate_limit_bounds_retrieval() {
    let model = get_untrained_model();
    let params = get_test_params()
        .with_candidate_limit(1)
        .with_max_matches(5);
    //only one candidate survives retrieval, regardless of k
    let results = model.suggest("ca", &params);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].0, "car");
}

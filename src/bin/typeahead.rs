extern crate clap;

use std::fs::File;
use std::io::{self, Read};
use std::io::{BufRead, BufReader};

use clap::{App, Arg};
use serde::Serialize;

use typeahead::*;

///Fallback vocabulary used when no lexicon file is supplied
const DEFAULT_LEXICON: &[&str] = &[
    "the", "a", "an", "to", "eat", "play", "please", "plant", "code", "cat", "dog",
];

///Fallback training text used when no corpus file is supplied
const DEFAULT_CORPUS: &str =
    "i want to eat food. please play music. we want to plant a tree.";

#[derive(Serialize)]
struct SuggestionEntry {
    word: String,
    score: f64,
}

#[derive(Serialize)]
struct SuggestionRecord<'a> {
    input: &'a str,
    suggestions: Vec<SuggestionEntry>,
}

fn output_suggestions_as_tsv(input: &str, suggestions: &[(String, f64)]) {
    print!("{}", input);
    if suggestions.is_empty() {
        print!("\t(no suggestions)");
    }
    for (word, score) in suggestions {
        print!("\t{}\t{:.6}", word, score);
    }
    println!();
}

fn output_suggestions_as_json(input: &str, suggestions: Vec<(String, f64)>) {
    let record = SuggestionRecord {
        input,
        suggestions: suggestions
            .into_iter()
            .map(|(word, score)| SuggestionEntry { word, score })
            .collect(),
    };
    println!(
        "{}",
        serde_json::to_string(&record).expect("serializing suggestions")
    );
}

fn process(
    model: &SuggestionModel,
    inputstream: impl Read,
    params: &SuggestParameters,
    json: bool,
    interactive: bool,
) {
    let f_buffer = BufReader::new(inputstream);
    for line in f_buffer.lines() {
        if let Ok(input) = line {
            if input.is_empty() {
                if interactive {
                    //an empty line ends the interactive session
                    break;
                }
                continue;
            }
            let suggestions = model.suggest(&input, params);
            if json {
                output_suggestions_as_json(&input, suggestions);
            } else {
                output_suggestions_as_tsv(&input, &suggestions);
            }
        }
    }
}

fn main() {
    let args = App::new("Typeahead")
        .version("0.1")
        .about("Context-aware word completion: prefix matches from a lexicon, ranked by a smoothed bigram language model")
        .arg(Arg::with_name("lexicon")
            .long("lexicon")
            .short("l")
            .help("Lexicon file with one vocabulary word per line. Lines are normalized to lowercase letters; lines that normalize to nothing are dropped. May be used multiple times. A small built-in word list is used if this is not supplied.")
            .takes_value(true)
            .number_of_values(1)
            .multiple(true))
        .arg(Arg::with_name("corpus")
            .long("corpus")
            .short("f")
            .help("Training corpus with free-form text, used to estimate the bigram language model. May be used multiple times. A small built-in sentence set is used if this is not supplied.")
            .takes_value(true)
            .number_of_values(1)
            .multiple(true))
        .arg(Arg::with_name("max_matches")
            .long("max-matches")
            .short("n")
            .help("Number of ranked suggestions to return per input")
            .takes_value(true)
            .default_value("5"))
        .arg(Arg::with_name("candidate_limit")
            .long("candidate-limit")
            .help("Maximum number of prefix matches retrieved from the index before ranking")
            .takes_value(true)
            .default_value("1000"))
        .arg(Arg::with_name("json")
            .long("json")
            .short("j")
            .help("Output one json record per input line instead of tsv")
            .required(false))
        .arg(Arg::with_name("debug")
            .long("debug")
            .short("D")
            .help("Debug")
            .required(false))
        .arg(Arg::with_name("files")
            .help("Input files with one query per line; reads standard input interactively when absent")
            .takes_value(true)
            .multiple(true)
            .required(false))
        .get_matches();

    let params = SuggestParameters::default()
        .with_max_matches(
            args.value_of("max_matches")
                .unwrap()
                .parse::<usize>()
                .expect("Maximum matches should be an integer"),
        )
        .with_candidate_limit(
            args.value_of("candidate_limit")
                .unwrap()
                .parse::<usize>()
                .expect("Candidate limit should be an integer"),
        );

    let mut model = SuggestionModel::new(args.is_present("debug"));

    eprintln!("Loading lexicons...");
    if args.is_present("lexicon") {
        for filename in args.values_of("lexicon").unwrap().collect::<Vec<&str>>() {
            model
                .read_lexicon(filename)
                .expect(&format!("Error reading lexicon {}", filename));
        }
    } else {
        eprintln!("(no lexicon supplied, using built-in default word list)");
        model.load_lexicon(DEFAULT_LEXICON.iter().copied());
    }

    eprintln!("Training language model...");
    if args.is_present("corpus") {
        for filename in args.values_of("corpus").unwrap().collect::<Vec<&str>>() {
            model
                .read_corpus(filename)
                .expect(&format!("Error reading corpus {}", filename));
        }
    } else {
        eprintln!("(no corpus supplied, using built-in default sentences)");
        model.train(DEFAULT_CORPUS);
    }

    let json = args.is_present("json");

    let files: Vec<_> = if args.is_present("files") {
        args.values_of("files").unwrap().collect()
    } else {
        vec!["-"]
    };
    for filename in files {
        match filename {
            "-" | "STDIN" | "stdin" => {
                eprintln!("(accepting standard input; enter text to complete, one query per line, an empty line quits)");
                let stdin = io::stdin();
                process(&model, stdin, &params, json, true);
            }
            _ => {
                let f = File::open(filename)
                    .expect(format!("ERROR: Unable to open file {}", filename).as_str());
                process(&model, f, &params, json, false);
            }
        }
    }
}

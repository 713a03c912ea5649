///Normalize a single lexicon entry: lowercased, ASCII letters only,
///everything else removed. May yield an empty string, callers are
///expected to skip those.
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

///Split free-form text into lowercase word tokens. Any run of
///non-letter characters acts as a separator and is not part of any
///token.
pub fn tokenize(text: &str) -> Vec<String> {
    let mut tokens: Vec<String> = Vec::new();
    let mut current = String::new();
    for c in text.chars() {
        if c.is_ascii_alphabetic() {
            current.push(c.to_ascii_lowercase());
        } else if !current.is_empty() {
            tokens.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}

///Extract the partial word being typed at the end of the input: scans
///backward from the end, collecting letters until the first non-letter
///character or the start of the string. Returns the empty string when
///the input ends in a non-letter.
pub fn trailing_prefix(input: &str) -> String {
    let tail: Vec<char> = input
        .chars()
        .rev()
        .take_while(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_lowercase())
        .collect();
    tail.into_iter().rev().collect()
}

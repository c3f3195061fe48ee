//! English contraction expansion from a fixed lookup table.

use std::collections::HashMap;

use lazy_static::lazy_static;
use regex::{Captures, Regex};

/// Contraction table. Keys are lowercase and use an ASCII apostrophe; the
/// matcher also accepts the typographic `’` that Gutenberg texts use.
pub const CONTRACTIONS: &[(&str, &str)] = &[
    ("ain't", "are not"),
    ("aren't", "are not"),
    ("can't", "cannot"),
    ("can't've", "cannot have"),
    ("could've", "could have"),
    ("couldn't", "could not"),
    ("couldn't've", "could not have"),
    ("didn't", "did not"),
    ("doesn't", "does not"),
    ("don't", "do not"),
    ("hadn't", "had not"),
    ("hadn't've", "had not have"),
    ("hasn't", "has not"),
    ("haven't", "have not"),
    ("he'd", "he would"),
    ("he'd've", "he would have"),
    ("he'll", "he will"),
    ("he's", "he is"),
    ("here's", "here is"),
    ("how'd", "how did"),
    ("how'll", "how will"),
    ("how's", "how is"),
    ("i'd", "i would"),
    ("i'd've", "i would have"),
    ("i'll", "i will"),
    ("i'm", "i am"),
    ("i've", "i have"),
    ("isn't", "is not"),
    ("it'd", "it would"),
    ("it'll", "it will"),
    ("it's", "it is"),
    ("let's", "let us"),
    ("ma'am", "madam"),
    ("mayn't", "may not"),
    ("might've", "might have"),
    ("mightn't", "might not"),
    ("must've", "must have"),
    ("mustn't", "must not"),
    ("needn't", "need not"),
    ("o'clock", "of the clock"),
    ("oughtn't", "ought not"),
    ("shan't", "shall not"),
    ("she'd", "she would"),
    ("she'll", "she will"),
    ("she's", "she is"),
    ("should've", "should have"),
    ("shouldn't", "should not"),
    ("shouldn't've", "should not have"),
    ("that'd", "that would"),
    ("that's", "that is"),
    ("there'd", "there would"),
    ("there's", "there is"),
    ("they'd", "they would"),
    ("they'll", "they will"),
    ("they're", "they are"),
    ("they've", "they have"),
    ("wasn't", "was not"),
    ("we'd", "we would"),
    ("we'll", "we will"),
    ("we're", "we are"),
    ("we've", "we have"),
    ("weren't", "were not"),
    ("what'll", "what will"),
    ("what're", "what are"),
    ("what's", "what is"),
    ("what've", "what have"),
    ("when's", "when is"),
    ("where'd", "where did"),
    ("where's", "where is"),
    ("who'll", "who will"),
    ("who's", "who is"),
    ("who've", "who have"),
    ("why's", "why is"),
    ("won't", "will not"),
    ("would've", "would have"),
    ("wouldn't", "would not"),
    ("y'all", "you all"),
    ("you'd", "you would"),
    ("you'll", "you will"),
    ("you're", "you are"),
    ("you've", "you have"),
];

lazy_static! {
    static ref LOOKUP: HashMap<&'static str, &'static str> = CONTRACTIONS.iter().copied().collect();

    // One alternation over the whole table, longest keys first so
    // "can't've" wins over "can't"
    static ref TABLE_PATTERN: Regex = {
        let mut keys: Vec<&str> = CONTRACTIONS.iter().map(|(k, _)| *k).collect();
        keys.sort_by_key(|k| std::cmp::Reverse(k.len()));
        let alternation = keys
            .iter()
            .map(|k| regex::escape(k).replace('\'', "['’]"))
            .collect::<Vec<_>>()
            .join("|");
        Regex::new(&format!(r"(?i)\b(?:{alternation})\b")).unwrap()
    };

    // Clitics on words the table does not list ("children's" stays: 's is possessive)
    static ref GENERIC_NOT: Regex = Regex::new(r"(?i)\b([a-z]+)n['’]t\b").unwrap();
    static ref GENERIC_CLITIC: Regex = Regex::new(r"(?i)\b([a-z]+)['’](re|ll|ve|m)\b").unwrap();
}

/// Expand English contractions, preserving the case of the first letter
/// (and full upper case when the contraction was shouted).
///
/// A no-op on text without apostrophe contractions, so Chinese passes
/// through untouched.
pub fn expand_contractions(text: &str) -> String {
    let expanded = TABLE_PATTERN.replace_all(text, |caps: &Captures| {
        let matched = &caps[0];
        let key = matched.to_lowercase().replace('’', "'");
        match LOOKUP.get(key.as_str()) {
            Some(expansion) => match_case(matched, expansion),
            None => matched.to_string(),
        }
    });

    let expanded = GENERIC_NOT.replace_all(&expanded, |caps: &Captures| {
        let not = if is_all_upper(&caps[0]) { "NOT" } else { "not" };
        format!("{} {}", &caps[1], not)
    });

    GENERIC_CLITIC
        .replace_all(&expanded, |caps: &Captures| {
            let word = match caps[2].to_ascii_lowercase().as_str() {
                "re" => "are",
                "ll" => "will",
                "ve" => "have",
                _ => "am",
            };
            let word = if is_all_upper(&caps[0]) {
                word.to_uppercase()
            } else {
                word.to_string()
            };
            format!("{} {}", &caps[1], word)
        })
        .into_owned()
}

fn is_all_upper(s: &str) -> bool {
    s.chars().any(|c| c.is_alphabetic()) && !s.chars().any(char::is_lowercase)
}

fn match_case(original: &str, expansion: &str) -> String {
    if original.chars().count() > 1 && is_all_upper(original) {
        return expansion.to_uppercase();
    }
    let mut out = expansion.to_string();
    if original.chars().next().is_some_and(char::is_uppercase) {
        if let Some(first) = out.get(0..1) {
            let upper = first.to_uppercase();
            out.replace_range(0..1, &upper);
        }
    }
    // "I" stays capitalised inside an expansion
    if out.starts_with("i ") {
        out.replace_range(0..1, "I");
    }
    out
}

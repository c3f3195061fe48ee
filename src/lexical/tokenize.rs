//! English word-boundary tokenizer.
//!
//! Splits punctuation off words (`"fox."` -> `"fox"`, `"."`), keeps
//! hyphenated words and numbers whole, and separates clitics the way
//! Treebank tokenizers do (`"can't"` -> `"ca"`, `"n't"`).

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref WORD_OR_PUNCT: Regex =
        Regex::new(r"\w+(?:[-'’]\w+)*|\.\.\.|--|[^\w\s]").unwrap();
}

/// Tokenize English text into borrowed slices.
pub fn word_tokenize(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    for m in WORD_OR_PUNCT.find_iter(text) {
        split_clitic(m.as_str(), &mut tokens);
    }
    tokens
}

fn split_clitic<'a>(token: &'a str, out: &mut Vec<&'a str>) {
    let lower = token.to_lowercase();
    let negation = ["n't", "n’t"].into_iter().find(|n| lower.ends_with(n));
    if let Some(n) = negation {
        // a bare clitic has no head to split off
        if token.len() > n.len() {
            let cut = token.len() - n.len();
            out.push(&token[..cut]);
            out.push(&token[cut..]);
            return;
        }
    }
    if let Some(pos) = token.rfind(['\'', '’']) {
        let head = &token[..pos];
        let tail = &token[pos..];
        let clitic = tail.trim_start_matches(['\'', '’']).to_lowercase();
        if !head.is_empty() && matches!(clitic.as_str(), "s" | "re" | "ll" | "ve" | "d" | "m") {
            out.push(head);
            out.push(tail);
            return;
        }
    }
    out.push(token);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_trailing_punctuation() {
        assert_eq!(
            word_tokenize("The quick brown fox."),
            vec!["The", "quick", "brown", "fox", "."]
        );
    }

    #[test]
    fn test_keeps_hyphenated_and_numbers() {
        assert_eq!(
            word_tokenize("a well-known fact, 1999!"),
            vec!["a", "well-known", "fact", ",", "1999", "!"]
        );
    }

    #[test]
    fn test_splits_clitics() {
        assert_eq!(word_tokenize("can't"), vec!["ca", "n't"]);
        assert_eq!(word_tokenize("John's"), vec!["John", "'s"]);
        assert_eq!(word_tokenize("they’re"), vec!["they", "’re"]);
    }

    #[test]
    fn test_bare_clitic_stays_whole() {
        assert_eq!(word_tokenize("the n’t end"), vec!["the", "n’t", "end"]);
        assert_eq!(word_tokenize("n't"), vec!["n't"]);
        assert_eq!(word_tokenize("don’t"), vec!["do", "n’t"]);
        assert!(word_tokenize("n’t n't").iter().all(|t| !t.is_empty()));
    }

    #[test]
    fn test_ellipsis_is_one_token() {
        assert_eq!(word_tokenize("wait... what"), vec!["wait", "...", "what"]);
    }

    #[test]
    fn test_empty() {
        assert!(word_tokenize("   ").is_empty());
    }
}

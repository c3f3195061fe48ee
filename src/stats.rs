//! Frequency and length statistics over normalized text.

use std::cmp::Reverse;
use std::collections::{HashMap, HashSet};

use crate::error::Result;
use crate::language::Language;
use crate::resources::Resources;

/// `(token, count)`, most frequent first.
pub type FrequencyRecord = (String, usize);
/// `(token, length in characters)`, longest first.
pub type LengthRecord = (String, usize);

/// The `n` most frequent tokens and the `k` longest distinct tokens.
///
/// Frequency ties keep first-seen order. Length ties are broken by the
/// token itself so the result is fully deterministic. Blank text yields two
/// empty lists.
pub fn get_statistics(
    res: &Resources,
    text: &str,
    n: usize,
    k: usize,
    lang: Language,
) -> Result<(Vec<FrequencyRecord>, Vec<LengthRecord>)> {
    if text.trim().is_empty() {
        return Ok((Vec::new(), Vec::new()));
    }

    let tokens: Vec<&str> = res
        .analyzer(lang)?
        .tokenize(text)
        .into_iter()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect();

    Ok((top_frequent(&tokens, n), longest_unique(&tokens, k)))
}

fn top_frequent(tokens: &[&str], n: usize) -> Vec<FrequencyRecord> {
    // token -> (count, first position)
    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
    for (pos, &token) in tokens.iter().enumerate() {
        counts.entry(token).or_insert((0, pos)).0 += 1;
    }

    let mut ranked: Vec<(&str, usize, usize)> = counts
        .into_iter()
        .map(|(token, (count, first))| (token, count, first))
        .collect();
    ranked.sort_by_key(|&(_, count, first)| (Reverse(count), first));
    ranked
        .into_iter()
        .take(n)
        .map(|(token, count, _)| (token.to_string(), count))
        .collect()
}

fn longest_unique(tokens: &[&str], k: usize) -> Vec<LengthRecord> {
    let mut unique: Vec<(&str, usize)> = tokens
        .iter()
        .copied()
        .collect::<HashSet<&str>>()
        .into_iter()
        .map(|t| (t, t.chars().count()))
        .collect();
    unique.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    unique
        .into_iter()
        .take(k)
        .map(|(token, len)| (token.to_string(), len))
        .collect()
}

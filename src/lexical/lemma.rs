//! Rule-based English lemmatizer.
//!
//! Irregular forms come from exception tables; regular inflections are
//! undone by suffix rules per word class. Each rule yields a preferred
//! candidate plus alternatives. With a [`Lexicon`] loaded, the first
//! candidate the lexicon knows wins; without one the preferred candidate is
//! used as is. Adverbs are never changed.

use std::collections::HashMap;

use lazy_static::lazy_static;

use super::dictionary::Lexicon;
use super::tagger::WordClass;

const NOUN_EXCEPTIONS: &[(&str, &str)] = &[
    ("men", "man"), ("women", "woman"), ("children", "child"), ("feet", "foot"),
    ("teeth", "tooth"), ("geese", "goose"), ("mice", "mouse"), ("lice", "louse"),
    ("oxen", "ox"), ("knives", "knife"), ("wives", "wife"), ("lives", "life"),
    ("leaves", "leaf"), ("wolves", "wolf"), ("halves", "half"), ("selves", "self"),
    ("shelves", "shelf"), ("thieves", "thief"), ("loaves", "loaf"), ("calves", "calf"),
    ("series", "series"), ("species", "species"), ("news", "news"), ("means", "means"),
    ("gentlemen", "gentleman"), ("brethren", "brother"), ("dice", "die"),
];

const VERB_EXCEPTIONS: &[(&str, &str)] = &[
    ("am", "be"), ("is", "be"), ("are", "be"), ("was", "be"), ("were", "be"),
    ("been", "be"), ("being", "be"), ("art", "be"),
    ("has", "have"), ("had", "have"), ("having", "have"), ("hath", "have"),
    ("does", "do"), ("did", "do"), ("done", "do"), ("doing", "do"), ("doth", "do"),
    ("goes", "go"), ("went", "go"), ("gone", "go"),
    ("said", "say"), ("made", "make"), ("came", "come"), ("saw", "see"), ("seen", "see"),
    ("took", "take"), ("taken", "take"), ("knew", "know"), ("known", "know"),
    ("thought", "think"), ("found", "find"), ("gave", "give"), ("given", "give"),
    ("told", "tell"), ("felt", "feel"), ("became", "become"), ("left", "leave"),
    ("kept", "keep"), ("began", "begin"), ("begun", "begin"), ("brought", "bring"),
    ("ran", "run"), ("wrote", "write"), ("written", "write"), ("stood", "stand"),
    ("heard", "hear"), ("meant", "mean"), ("met", "meet"), ("paid", "pay"),
    ("sat", "sit"), ("spoke", "speak"), ("spoken", "speak"), ("led", "lead"),
    ("understood", "understand"), ("sent", "send"), ("fell", "fall"), ("fallen", "fall"),
    ("lost", "lose"), ("built", "build"), ("got", "get"), ("gotten", "get"),
    ("held", "hold"), ("bought", "buy"), ("caught", "catch"), ("taught", "teach"),
    ("sought", "seek"), ("fought", "fight"), ("ate", "eat"), ("eaten", "eat"),
    ("drank", "drink"), ("drunk", "drink"), ("sang", "sing"), ("sung", "sing"),
    ("rode", "ride"), ("ridden", "ride"), ("chose", "choose"), ("chosen", "choose"),
    ("drove", "drive"), ("driven", "drive"), ("flew", "fly"), ("flown", "fly"),
    ("grew", "grow"), ("grown", "grow"), ("threw", "throw"), ("thrown", "throw"),
    ("wore", "wear"), ("worn", "wear"), ("broke", "break"), ("broken", "break"),
    ("forgot", "forget"), ("forgotten", "forget"), ("rose", "rise"), ("risen", "rise"),
    ("lay", "lie"), ("lain", "lie"), ("slept", "sleep"), ("wept", "weep"),
    ("swore", "swear"), ("sworn", "swear"), ("won", "win"), ("sold", "sell"),
    ("stole", "steal"), ("stolen", "steal"), ("woke", "wake"), ("woken", "wake"),
    ("hid", "hide"), ("hidden", "hide"), ("shot", "shoot"), ("lit", "light"),
    ("fled", "flee"), ("dug", "dig"), ("hung", "hang"), ("struck", "strike"),
    ("spent", "spend"), ("lent", "lend"), ("bent", "bend"), ("dealt", "deal"),
    ("dreamt", "dream"), ("fed", "feed"), ("bled", "bleed"), ("bred", "breed"),
    ("shook", "shake"), ("shaken", "shake"), ("tore", "tear"), ("torn", "tear"),
    ("swam", "swim"), ("swum", "swim"), ("sank", "sink"), ("sunk", "sink"),
    ("rang", "ring"), ("rung", "ring"), ("drew", "draw"), ("drawn", "draw"),
    ("blew", "blow"), ("blown", "blow"), ("shown", "show"), ("slid", "slide"),
    ("bore", "bear"), ("borne", "bear"), ("froze", "freeze"), ("frozen", "freeze"),
    ("dying", "die"), ("lying", "lie"), ("tying", "tie"),
    ("created", "create"), ("creating", "create"), ("agreed", "agree"), ("freed", "free"),
    ("changed", "change"), ("changing", "change"), ("arranged", "arrange"),
    ("arranging", "arrange"), ("exchanged", "exchange"), ("promised", "promise"),
];

const ADJECTIVE_EXCEPTIONS: &[(&str, &str)] = &[
    ("better", "good"), ("best", "good"), ("worse", "bad"), ("worst", "bad"),
    ("further", "far"), ("farther", "far"), ("furthest", "far"), ("farthest", "far"),
    ("elder", "old"), ("eldest", "old"),
    // look inflected, are not
    ("other", "other"), ("bitter", "bitter"), ("latter", "latter"), ("proper", "proper"),
    ("clever", "clever"), ("eager", "eager"), ("tender", "tender"), ("inner", "inner"),
    ("outer", "outer"), ("upper", "upper"), ("utter", "utter"), ("honest", "honest"),
    ("modest", "modest"), ("earnest", "earnest"),
];

lazy_static! {
    static ref NOUNS: HashMap<&'static str, &'static str> = NOUN_EXCEPTIONS.iter().copied().collect();
    static ref VERBS: HashMap<&'static str, &'static str> = VERB_EXCEPTIONS.iter().copied().collect();
    static ref ADJECTIVES: HashMap<&'static str, &'static str> =
        ADJECTIVE_EXCEPTIONS.iter().copied().collect();
}

fn exception(word: &str, class: WordClass) -> Option<&'static str> {
    let table: &HashMap<&'static str, &'static str> = match class {
        WordClass::Noun => &NOUNS,
        WordClass::Verb => &VERBS,
        WordClass::Adjective => &ADJECTIVES,
        WordClass::Adverb => return None,
    };
    table.get(word).copied()
}

/// Rule output: the heuristic choice first, then weaker alternatives that
/// only win when a lexicon confirms them.
#[derive(Debug, Default)]
struct Candidates {
    preferred: Option<String>,
    alternatives: Vec<String>,
}

impl Candidates {
    fn none() -> Self {
        Self::default()
    }

    fn one(lemma: String) -> Self {
        Self {
            preferred: Some(lemma),
            alternatives: Vec::new(),
        }
    }

    fn or(mut self, alternative: String) -> Self {
        self.alternatives.push(alternative);
        self
    }
}

#[derive(Debug, Default)]
pub struct Lemmatizer {
    lexicon: Option<Lexicon>,
}

impl Lemmatizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_lexicon(lexicon: Lexicon) -> Self {
        Self {
            lexicon: Some(lexicon),
        }
    }

    pub fn has_lexicon(&self) -> bool {
        self.lexicon.is_some()
    }

    /// Base form of `word` read as `class`.
    ///
    /// A changed lemma is returned lowercase; a word no rule touches is
    /// returned exactly as given.
    pub fn lemmatize(&self, word: &str, class: WordClass) -> String {
        let lower = word.to_lowercase();
        let candidates = if let Some(lemma) = exception(&lower, class) {
            Candidates::one(lemma.to_string())
        } else {
            Self::rule_candidates(&lower, class)
        };

        let chosen = match &self.lexicon {
            Some(lexicon) => {
                let confirmed = candidates
                    .preferred
                    .iter()
                    .chain(&candidates.alternatives)
                    .find(|c| lexicon.contains(c))
                    .cloned();
                confirmed.or(candidates.preferred)
            }
            None => candidates.preferred,
        };

        match chosen {
            Some(lemma) if lemma != lower => lemma,
            _ => word.to_string(),
        }
    }

    fn rule_candidates(lower: &str, class: WordClass) -> Candidates {
        match class {
            WordClass::Noun => noun_candidates(lower),
            WordClass::Verb => verb_candidates(lower),
            WordClass::Adjective => adjective_candidates(lower),
            WordClass::Adverb => Candidates::none(),
        }
    }
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

fn has_vowel(s: &str) -> bool {
    s.chars().any(|c| is_vowel(c) || c == 'y')
}

fn vowel_groups(s: &str) -> usize {
    let mut groups = 0;
    let mut prev_vowel = false;
    for c in s.chars() {
        let v = is_vowel(c);
        if v && !prev_vowel {
            groups += 1;
        }
        prev_vowel = v;
    }
    groups
}

/// Ends consonant-vowel-consonant, the last consonant not w, x or y.
fn ends_cvc(s: &str) -> bool {
    let tail: Vec<char> = s.chars().rev().take(3).collect();
    match tail.as_slice() {
        [c3, v, c1] => {
            !is_vowel(*c1) && is_vowel(*v) && !is_vowel(*c3) && !matches!(c3, 'w' | 'x' | 'y')
        }
        _ => false,
    }
}

fn ends_double_consonant(s: &str) -> Option<char> {
    let mut rev = s.chars().rev();
    match (rev.next(), rev.next()) {
        (Some(a), Some(b)) if a == b && !is_vowel(a) => Some(a),
        _ => None,
    }
}

fn strip<'a>(word: &'a str, suffix: &str) -> Option<&'a str> {
    word.strip_suffix(suffix)
}

fn noun_candidates(word: &str) -> Candidates {
    let n = word.chars().count();
    if n <= 3 || word.ends_with("ss") || word.ends_with("us") || word.ends_with("is") {
        return Candidates::none();
    }
    if let Some(stem) = strip(word, "ies").filter(|_| n > 4) {
        return Candidates::one(format!("{stem}y")).or(format!("{stem}ie"));
    }
    if let Some(stem) = strip(word, "sses") {
        return Candidates::one(format!("{stem}ss"));
    }
    for suffix in ["xes", "ches", "shes", "zes"] {
        if word.ends_with(suffix) {
            let without_es = &word[..word.len() - 2];
            let without_s = &word[..word.len() - 1];
            return Candidates::one(without_es.to_string()).or(without_s.to_string());
        }
    }
    if word.ends_with("oes") {
        let without_es = word[..word.len() - 2].to_string();
        let without_s = word[..word.len() - 1].to_string();
        return if n <= 5 {
            Candidates::one(without_s).or(without_es)
        } else {
            Candidates::one(without_es).or(without_s)
        };
    }
    match strip(word, "s") {
        Some(stem) => Candidates::one(stem.to_string()),
        None => Candidates::none(),
    }
}

/// Suffixes after which a stripped `-ed`/`-ing` stem gets its silent e back.
const E_RESTORING_ENDINGS: &[&str] = &[
    "at", "bl", "iz", "v", "c", "dg", "rg", "u", "us", "ais", "ois", "eas", "ir", "ur",
];

fn restore_e(stem: &str) -> bool {
    if stem.ends_with("eat") || stem.ends_with("oat") {
        return false;
    }
    if E_RESTORING_ENDINGS.iter().any(|e| stem.ends_with(e)) {
        return true;
    }
    // consonant + l: "settl", "handl", "puzzl"
    let mut rev = stem.chars().rev();
    if let (Some('l'), Some(c)) = (rev.next(), rev.next()) {
        if !is_vowel(c) && !matches!(c, 'l' | 'r' | 'w' | 'y') {
            return true;
        }
    }
    ends_cvc(stem) && vowel_groups(stem) == 1
}

/// Undo `-ed`/`-ing` on a stem that still has a vowel.
fn inflection_candidates(stem: &str) -> Candidates {
    if stem.chars().count() < 2 || !has_vowel(stem) {
        return Candidates::none();
    }
    if let Some(c) = ends_double_consonant(stem) {
        let single = &stem[..stem.len() - c.len_utf8()];
        if !matches!(c, 'l' | 's' | 'z') && ends_cvc(single) {
            return Candidates::one(single.to_string()).or(stem.to_string());
        }
        return Candidates::one(stem.to_string()).or(single.to_string());
    }
    if stem.ends_with('e') {
        return Candidates::one(stem.to_string());
    }
    let with_e = format!("{stem}e");
    if restore_e(stem) {
        Candidates::one(with_e).or(stem.to_string())
    } else {
        Candidates::one(stem.to_string()).or(with_e)
    }
}

fn verb_candidates(word: &str) -> Candidates {
    let n = word.chars().count();
    if n <= 2 {
        return Candidates::none();
    }
    if let Some(stem) = strip(word, "ies") {
        return if n > 4 {
            Candidates::one(format!("{stem}y"))
        } else {
            Candidates::one(format!("{stem}ie"))
        };
    }
    for suffix in ["sses", "shes", "ches", "xes", "zzes"] {
        if word.ends_with(suffix) {
            let without_es = &word[..word.len() - 2];
            return Candidates::one(without_es.to_string()).or(word[..word.len() - 1].to_string());
        }
    }
    if word.ends_with('s') && !word.ends_with("ss") && n > 3 {
        return Candidates::one(word[..word.len() - 1].to_string());
    }
    if let Some(stem) = strip(word, "ied") {
        return if n > 4 {
            Candidates::one(format!("{stem}y"))
        } else {
            Candidates::one(format!("{stem}ie"))
        };
    }
    if word.ends_with("eed") {
        return Candidates::none().or(word[..word.len() - 1].to_string());
    }
    if let Some(stem) = strip(word, "ed").filter(|_| n > 3) {
        return inflection_candidates(stem);
    }
    if let Some(stem) = strip(word, "ing").filter(|_| n > 4) {
        return inflection_candidates(stem);
    }
    Candidates::none()
}

fn adjective_candidates(word: &str) -> Candidates {
    let n = word.chars().count();
    if n <= 3 {
        return Candidates::none();
    }
    for suffix in ["iest", "ier"] {
        if let Some(stem) = strip(word, suffix).filter(|s| s.len() > 1) {
            return Candidates::one(format!("{stem}y"));
        }
    }
    for suffix in ["est", "er"] {
        let Some(stem) = strip(word, suffix) else {
            continue;
        };
        if stem.chars().count() < 2 || !has_vowel(stem) {
            return Candidates::none();
        }
        if let Some(c) = ends_double_consonant(stem) {
            let single = &stem[..stem.len() - c.len_utf8()];
            if !matches!(c, 'l' | 's' | 'z') && ends_cvc(single) {
                return Candidates::one(single.to_string());
            }
        }
        let with_e = format!("{stem}e");
        // plain -er/-est is too ambiguous ("water", "forest") to strip unconfirmed
        return if suffix == "est" && n > 5 {
            if restore_e(stem) {
                Candidates::one(with_e).or(stem.to_string())
            } else {
                Candidates::one(stem.to_string()).or(with_e)
            }
        } else {
            Candidates::none().or(stem.to_string()).or(with_e)
        };
    }
    Candidates::none()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lemma(word: &str, class: WordClass) -> String {
        Lemmatizer::new().lemmatize(word, class)
    }

    #[test]
    fn test_nouns() {
        let cases = [
            ("cats", "cat"),
            ("flies", "fly"),
            ("classes", "class"),
            ("boxes", "box"),
            ("churches", "church"),
            ("potatoes", "potato"),
            ("shoes", "shoe"),
            ("children", "child"),
            ("wolves", "wolf"),
            ("bus", "bus"),
            ("glass", "glass"),
            ("analysis", "analysis"),
            ("status", "status"),
            ("fox", "fox"),
        ];
        for (word, expected) in cases {
            assert_eq!(lemma(word, WordClass::Noun), expected, "{word}");
        }
    }

    #[test]
    fn test_verbs() {
        let cases = [
            ("running", "run"),
            ("are", "be"),
            ("was", "be"),
            ("jumps", "jump"),
            ("tried", "try"),
            ("died", "die"),
            ("stopped", "stop"),
            ("walked", "walk"),
            ("making", "make"),
            ("hoped", "hope"),
            ("hopping", "hop"),
            ("loved", "love"),
            ("danced", "dance"),
            ("called", "call"),
            ("missed", "miss"),
            ("added", "add"),
            ("opened", "open"),
            ("visiting", "visit"),
            ("waiting", "wait"),
            ("settled", "settle"),
            ("used", "use"),
            ("watches", "watch"),
            ("went", "go"),
            ("sang", "sing"),
            ("thing", "thing"),
            ("need", "need"),
            ("playing", "play"),
            ("occurred", "occur"),
        ];
        for (word, expected) in cases {
            assert_eq!(lemma(word, WordClass::Verb), expected, "{word}");
        }
    }

    #[test]
    fn test_adjectives() {
        let cases = [
            ("happier", "happy"),
            ("happiest", "happy"),
            ("bigger", "big"),
            ("hottest", "hot"),
            ("greatest", "great"),
            ("better", "good"),
            ("other", "other"),
            ("water", "water"),
            ("quick", "quick"),
        ];
        for (word, expected) in cases {
            assert_eq!(lemma(word, WordClass::Adjective), expected, "{word}");
        }
    }

    #[test]
    fn test_adverbs_unchanged() {
        assert_eq!(lemma("quickly", WordClass::Adverb), "quickly");
        assert_eq!(lemma("fast", WordClass::Adverb), "fast");
    }

    #[test]
    fn test_unchanged_word_keeps_case() {
        assert_eq!(lemma("The", WordClass::Noun), "The");
        assert_eq!(lemma("Cats", WordClass::Noun), "cat");
    }

    #[test]
    fn test_lexicon_confirms_alternative() {
        // without a lexicon plain -er is left alone
        assert_eq!(lemma("faster", WordClass::Adjective), "faster");

        let lemmatizer = Lemmatizer::with_lexicon(Lexicon::from_words(["fast", "ride"]));
        assert_eq!(lemmatizer.lemmatize("faster", WordClass::Adjective), "fast");
        assert_eq!(lemmatizer.lemmatize("riding", WordClass::Verb), "ride");
        // unconfirmed candidates fall back to the heuristic choice
        assert_eq!(lemmatizer.lemmatize("running", WordClass::Verb), "run");
    }
}

//! Lexicon plus suffix-rule part-of-speech tagger producing Penn Treebank tags.
//!
//! Closed-class words and common irregular forms come from a fixed lexicon;
//! everything else is guessed from its shape, then a handful of contextual
//! rules fix the usual mistakes (a noun guess after a modal is a verb, and so
//! on). Accuracy only needs to be good enough to choose a lemmatization
//! rule set.

use std::collections::HashMap;

use lazy_static::lazy_static;

/// Coarse word classes understood by the lemmatizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordClass {
    Noun,
    Verb,
    Adjective,
    Adverb,
}

impl WordClass {
    /// Map a Penn tag by its first letter; anything unmapped is a noun.
    pub fn from_penn(tag: &str) -> Self {
        match tag.chars().next().map(|c| c.to_ascii_lowercase()) {
            Some('j') => WordClass::Adjective,
            Some('v') => WordClass::Verb,
            Some('r') => WordClass::Adverb,
            _ => WordClass::Noun,
        }
    }
}

const LEXICON: &[(&str, &str)] = &[
    // determiners
    ("the", "DT"), ("a", "DT"), ("an", "DT"), ("this", "DT"), ("that", "DT"),
    ("these", "DT"), ("those", "DT"), ("every", "DT"), ("each", "DT"), ("some", "DT"),
    ("any", "DT"), ("no", "DT"), ("all", "DT"), ("both", "DT"), ("another", "DT"),
    // prepositions and subordinators
    ("of", "IN"), ("in", "IN"), ("on", "IN"), ("at", "IN"), ("by", "IN"), ("for", "IN"),
    ("with", "IN"), ("from", "IN"), ("about", "IN"), ("into", "IN"), ("over", "IN"),
    ("under", "IN"), ("after", "IN"), ("before", "IN"), ("through", "IN"),
    ("between", "IN"), ("against", "IN"), ("during", "IN"), ("without", "IN"),
    ("within", "IN"), ("upon", "IN"), ("among", "IN"), ("like", "IN"), ("since", "IN"),
    ("until", "IN"), ("because", "IN"), ("if", "IN"), ("whether", "IN"),
    ("though", "IN"), ("although", "IN"), ("while", "IN"), ("as", "IN"), ("than", "IN"),
    ("towards", "IN"), ("toward", "IN"), ("across", "IN"), ("behind", "IN"),
    ("beyond", "IN"), ("near", "IN"), ("unless", "IN"), ("off", "IN"), ("out", "IN"),
    ("to", "TO"),
    // conjunctions
    ("and", "CC"), ("or", "CC"), ("but", "CC"), ("nor", "CC"), ("yet", "CC"),
    // pronouns
    ("i", "PRP"), ("you", "PRP"), ("he", "PRP"), ("she", "PRP"), ("it", "PRP"),
    ("we", "PRP"), ("they", "PRP"), ("me", "PRP"), ("him", "PRP"), ("us", "PRP"),
    ("them", "PRP"), ("myself", "PRP"), ("yourself", "PRP"), ("himself", "PRP"),
    ("herself", "PRP"), ("itself", "PRP"), ("ourselves", "PRP"), ("themselves", "PRP"),
    ("my", "PRP$"), ("your", "PRP$"), ("his", "PRP$"), ("her", "PRP$"), ("its", "PRP$"),
    ("our", "PRP$"), ("their", "PRP$"),
    ("which", "WDT"), ("who", "WP"), ("whom", "WP"), ("whose", "WP$"), ("what", "WP"),
    ("when", "WRB"), ("where", "WRB"), ("why", "WRB"), ("how", "WRB"),
    ("there", "EX"),
    // modals
    ("can", "MD"), ("could", "MD"), ("will", "MD"), ("would", "MD"), ("shall", "MD"),
    ("should", "MD"), ("may", "MD"), ("might", "MD"), ("must", "MD"), ("cannot", "MD"),
    // be / have / do
    ("be", "VB"), ("am", "VBP"), ("is", "VBZ"), ("are", "VBP"), ("was", "VBD"),
    ("were", "VBD"), ("been", "VBN"), ("being", "VBG"),
    ("have", "VBP"), ("has", "VBZ"), ("had", "VBD"), ("having", "VBG"),
    ("do", "VBP"), ("does", "VBZ"), ("did", "VBD"), ("done", "VBN"),
    // adverbs
    ("not", "RB"), ("n't", "RB"), ("very", "RB"), ("also", "RB"), ("just", "RB"),
    ("now", "RB"), ("then", "RB"), ("here", "RB"), ("never", "RB"), ("always", "RB"),
    ("often", "RB"), ("too", "RB"), ("so", "RB"), ("again", "RB"), ("already", "RB"),
    ("still", "RB"), ("only", "RB"), ("even", "RB"), ("ever", "RB"), ("quite", "RB"),
    ("rather", "RB"), ("soon", "RB"), ("perhaps", "RB"), ("indeed", "RB"),
    ("almost", "RB"), ("away", "RB"), ("fast", "RB"), ("well", "RB"), ("up", "RP"),
    ("down", "RP"),
    // adjectives
    ("good", "JJ"), ("bad", "JJ"), ("new", "JJ"), ("old", "JJ"), ("great", "JJ"),
    ("little", "JJ"), ("long", "JJ"), ("small", "JJ"), ("large", "JJ"), ("young", "JJ"),
    ("own", "JJ"), ("other", "JJ"), ("same", "JJ"), ("few", "JJ"), ("many", "JJ"),
    ("much", "JJ"), ("high", "JJ"), ("first", "JJ"), ("last", "JJ"), ("quick", "JJ"),
    ("brown", "JJ"), ("lazy", "JJ"), ("happy", "JJ"), ("poor", "JJ"), ("rich", "JJ"),
    ("dear", "JJ"), ("true", "JJ"), ("whole", "JJ"), ("sure", "JJ"), ("such", "JJ"),
    ("better", "JJR"), ("worse", "JJR"), ("more", "JJR"), ("less", "JJR"),
    ("best", "JJS"), ("worst", "JJS"), ("most", "JJS"), ("least", "JJS"),
    // irregular verb forms
    ("went", "VBD"), ("gone", "VBN"), ("said", "VBD"), ("made", "VBD"), ("came", "VBD"),
    ("saw", "VBD"), ("seen", "VBN"), ("took", "VBD"), ("taken", "VBN"), ("knew", "VBD"),
    ("known", "VBN"), ("thought", "VBD"), ("found", "VBD"), ("gave", "VBD"),
    ("given", "VBN"), ("told", "VBD"), ("felt", "VBD"), ("became", "VBD"),
    ("left", "VBD"), ("kept", "VBD"), ("began", "VBD"), ("begun", "VBN"),
    ("brought", "VBD"), ("ran", "VBD"), ("wrote", "VBD"), ("written", "VBN"),
    ("stood", "VBD"), ("heard", "VBD"), ("meant", "VBD"), ("met", "VBD"),
    ("paid", "VBD"), ("sat", "VBD"), ("spoke", "VBD"), ("spoken", "VBN"),
    ("led", "VBD"), ("understood", "VBD"), ("sent", "VBD"), ("fell", "VBD"),
    ("fallen", "VBN"), ("lost", "VBD"), ("built", "VBD"), ("got", "VBD"),
    ("gotten", "VBN"), ("held", "VBD"), ("bought", "VBD"),
    ("caught", "VBD"), ("taught", "VBD"), ("sought", "VBD"), ("fought", "VBD"),
    ("ate", "VBD"), ("eaten", "VBN"), ("drank", "VBD"), ("sang", "VBD"), ("rode", "VBD"),
    ("chose", "VBD"), ("chosen", "VBN"), ("drove", "VBD"), ("driven", "VBN"),
    ("flew", "VBD"), ("grew", "VBD"), ("grown", "VBN"), ("threw", "VBD"),
    ("thrown", "VBN"), ("wore", "VBD"), ("broke", "VBD"), ("broken", "VBN"),
    ("forgot", "VBD"), ("forgotten", "VBN"), ("rose", "VBD"), ("risen", "VBN"),
    ("lay", "VBD"), ("slept", "VBD"), ("wept", "VBD"), ("swore", "VBD"),
    // base verbs that would otherwise look like nouns
    ("go", "VB"), ("come", "VB"), ("make", "VB"), ("know", "VB"), ("think", "VB"),
    ("see", "VB"), ("take", "VB"), ("get", "VB"), ("give", "VB"), ("say", "VB"),
    ("tell", "VB"), ("want", "VB"), ("seem", "VB"), ("jump", "VB"), ("need", "VB"),
    // words whose endings look inflected
    ("nothing", "NN"), ("something", "NN"), ("anything", "NN"), ("everything", "NN"),
    ("morning", "NN"), ("evening", "NN"), ("ceiling", "NN"), ("pudding", "NN"),
    ("wedding", "NN"), ("king", "NN"), ("thing", "NN"), ("speed", "NN"),
    ("seed", "NN"), ("deed", "NN"), ("steed", "NN"), ("creed", "NN"), ("weed", "NN"),
    ("reed", "NN"), ("shed", "NN"), ("hundred", "CD"), ("thousand", "CD"),
    ("naked", "JJ"), ("wicked", "JJ"), ("sacred", "JJ"), ("wretched", "JJ"),
    ("beloved", "JJ"), ("ragged", "JJ"), ("rugged", "JJ"), ("crooked", "JJ"),
    ("early", "JJ"), ("likely", "JJ"), ("lovely", "JJ"), ("lonely", "JJ"),
    ("family", "NN"), ("reply", "NN"),
];

lazy_static! {
    static ref LEXICON_MAP: HashMap<&'static str, &'static str> = LEXICON.iter().copied().collect();
}

const ADJECTIVE_SUFFIXES: &[&str] = &[
    "ous", "ful", "able", "ible", "less", "ive", "ic", "ical", "ish", "ent", "ant", "ary",
];

#[derive(Debug, Default, Clone)]
pub struct PosTagger {
    extra: HashMap<String, &'static str>,
}

impl PosTagger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or override a lexicon entry.
    pub fn with_entry(mut self, word: &str, tag: &'static str) -> Self {
        self.extra.insert(word.to_lowercase(), tag);
        self
    }

    /// Tag each token with a Penn Treebank tag.
    pub fn tag<'a>(&self, tokens: &[&'a str]) -> Vec<(&'a str, &'static str)> {
        let mut tagged: Vec<(&'a str, &'static str)> = Vec::with_capacity(tokens.len());
        for (i, token) in tokens.iter().copied().enumerate() {
            let lower = token.to_lowercase();
            let tag = match self.lookup(&lower) {
                Some(tag) => tag,
                None => guess(token, &lower, i == 0),
            };
            let prev = tagged.last().map(|(_, t)| *t);
            tagged.push((token, contextual(prev, tag, &lower)));
        }
        tagged
    }

    fn lookup(&self, lower: &str) -> Option<&'static str> {
        self.extra
            .get(lower)
            .copied()
            .or_else(|| LEXICON_MAP.get(lower).copied())
    }
}

fn guess(token: &str, lower: &str, sentence_start: bool) -> &'static str {
    if !token.chars().any(char::is_alphanumeric) {
        return ".";
    }
    if token.chars().all(|c| c.is_ascii_digit() || c == '.' || c == ',') {
        return "CD";
    }
    if !sentence_start && token.chars().next().is_some_and(char::is_uppercase) {
        return "NNP";
    }
    let len = lower.chars().count();
    if len > 4 && lower.ends_with("ing") {
        "VBG"
    } else if len > 3 && lower.ends_with("ed") {
        "VBD"
    } else if len > 4 && lower.ends_with("ly") {
        "RB"
    } else if len > 5 && lower.ends_with("est") {
        "JJS"
    } else if len > 4 && lower.ends_with("ier") {
        "JJR"
    } else if len > 4 && ADJECTIVE_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
        "JJ"
    } else if len > 3
        && lower.ends_with('s')
        && !lower.ends_with("ss")
        && !lower.ends_with("us")
        && !lower.ends_with("is")
    {
        "NNS"
    } else {
        "NN"
    }
}

fn contextual(prev: Option<&'static str>, tag: &'static str, lower: &str) -> &'static str {
    match (prev, tag) {
        // "will go", "to run"
        (Some("MD") | Some("TO"), "NN") => "VB",
        // "he runs"
        (Some("PRP"), "NNS") if lower != "its" => "VBZ",
        // "they walk"
        (Some("PRP"), "NN") => "VBP",
        // "the running water" stays nominal
        (Some("DT"), "VBG") => "NN",
        // "was tired", "had finished"
        (Some("VBD") | Some("VBZ") | Some("VBP"), "VBD") => "VBN",
        _ => tag,
    }
}

//! Independent text cleaners. Each one is a pure `&str -> String` transform.

use lazy_static::lazy_static;
use regex::Regex;
use scraper::{Html, Node};
use unicode_normalization::UnicodeNormalization;

use crate::error::Result;
use crate::language::Language;

lazy_static! {
    static ref LINE_BREAKS: Regex = Regex::new(r"[\r\n]+").unwrap();
    static ref BROKEN_LINES: Regex = Regex::new(r"[^\S\r\n]*[\r\n][\s]*").unwrap();

    // Allow-lists, written as the complement that gets deleted
    static ref EN_SPECIAL: Regex = Regex::new(r"[^a-zA-Z0-9\s]").unwrap();
    static ref EN_SPECIAL_NO_DIGITS: Regex = Regex::new(r"[^a-zA-Z\s]").unwrap();
    static ref ZH_SPECIAL: Regex = Regex::new(r"[^\x{4e00}-\x{9fff}0-9\s]").unwrap();
    static ref ZH_SPECIAL_NO_DIGITS: Regex = Regex::new(r"[^\x{4e00}-\x{9fff}\s]").unwrap();
}

/// Elements whose whole subtree is dropped, not just the tags.
const DISCARDED_ELEMENTS: &[&str] = &["script", "iframe", "style"];

/// Elements that start a new line in the extracted text.
const LINE_ELEMENTS: &[&str] = &[
    "br", "p", "div", "li", "tr", "h1", "h2", "h3", "h4", "h5", "h6", "blockquote", "pre",
    "section", "article", "title",
];

/// Parse `text` as HTML and return its text content.
///
/// Script, iframe and style blocks vanish with their content. Every run of
/// `\r`, `\n` or `\r\n` in the result becomes a single `\n`.
///
/// ```
/// use rust_book_normalize::clean::strip_markup;
/// let raw = "<p>Hello<br>World!</p><script>alert('test')</script>";
/// assert_eq!(strip_markup(raw), "Hello\nWorld!");
/// ```
pub fn strip_markup(text: &str) -> String {
    let document = Html::parse_document(text);
    let mut out = String::with_capacity(text.len());

    for node in document.tree.root().descendants() {
        let inside_discarded = node.ancestors().any(|a| {
            a.value()
                .as_element()
                .is_some_and(|el| DISCARDED_ELEMENTS.contains(&el.name()))
        });
        if inside_discarded {
            continue;
        }
        match node.value() {
            Node::Text(t) => out.push_str(t),
            Node::Element(el) if LINE_ELEMENTS.contains(&el.name()) => out.push('\n'),
            _ => {}
        }
    }

    normalize_line_breaks(&out).trim().to_string()
}

/// Collapse every run of line-break characters into one `\n`.
pub fn normalize_line_breaks(text: &str) -> String {
    LINE_BREAKS.replace_all(text, "\n").into_owned()
}

/// Fold accented letters to their ASCII base.
///
/// Compatibility decomposition splits `é` into `e` plus a combining mark;
/// everything that is not ASCII afterwards is dropped, so characters with no
/// ASCII base disappear entirely.
pub fn remove_accented_chars(text: &str) -> String {
    text.nfkd().filter(char::is_ascii).collect()
}

/// Deletion pattern for the language's allow-list.
pub fn special_char_pattern(lang: Language, remove_digits: bool) -> Result<&'static Regex> {
    Ok(match (lang.require_known()?, remove_digits) {
        (Language::English, false) => &*EN_SPECIAL,
        (Language::English, true) => &*EN_SPECIAL_NO_DIGITS,
        (_, false) => &*ZH_SPECIAL,
        (_, true) => &*ZH_SPECIAL_NO_DIGITS,
    })
}

/// Keep only the language's letters, digits (unless `remove_digits`) and
/// whitespace.
///
/// Whitespace runs that contain a line break become one space and the result
/// is trimmed. Runs of plain spaces are kept, so the filter is idempotent and
/// `"Hello, 世界! 123"` becomes `"Hello  123"` for English.
pub fn remove_special_characters(text: &str, lang: Language, remove_digits: bool) -> Result<String> {
    Ok(delete_special(special_char_pattern(lang, remove_digits)?, text))
}

/// [`remove_special_characters`] with the deletion pattern already chosen.
pub fn delete_special(pattern: &Regex, text: &str) -> String {
    let kept = pattern.replace_all(text, "");
    let joined = BROKEN_LINES.replace_all(&kept, " ");
    joined.trim().to_string()
}

//! Gutenberg book files in, processed text files out.

use std::fs;
use std::path::{Path, PathBuf};

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, info};

use crate::error::{Error, Result};

lazy_static! {
    static ref START_MARKER: Regex =
        Regex::new(r"(?is)\*{3}\s+START OF (?:THE|THIS)?\s+PROJECT GUTENBERG EBOOK.*?\*{3}").unwrap();
    static ref END_MARKER: Regex =
        Regex::new(r"(?is)\*{3}\s+END OF (?:THE|THIS)?\s+PROJECT GUTENBERG EBOOK.*?\*{3}").unwrap();
}

/// Read a Project Gutenberg `.txt` file and return the body between the
/// START and END markers, trimmed.
///
/// The file is decoded as UTF-8, falling back to Latin-1 for older
/// releases.
pub fn load_gutenberg(path: &Path) -> Result<String> {
    if path.extension().and_then(|e| e.to_str()) != Some("txt") {
        return Err(Error::NotTextFile(path.to_path_buf()));
    }

    let bytes = fs::read(path).map_err(|e| Error::io(path, e))?;
    let text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            debug!(path = %path.display(), "not UTF-8, decoding as Latin-1");
            e.into_bytes().into_iter().map(char::from).collect()
        }
    };

    let body = extract_body(&text, path)?;
    info!(path = %path.display(), chars = body.chars().count(), "loaded book");
    Ok(body.to_string())
}

/// The trimmed text between the Gutenberg markers.
pub fn extract_body<'a>(text: &'a str, path: &Path) -> Result<&'a str> {
    let start = START_MARKER.find(text).ok_or_else(|| Error::MissingMarker {
        path: path.to_path_buf(),
        which: "START",
    })?;
    let end = END_MARKER.find(text).ok_or_else(|| Error::MissingMarker {
        path: path.to_path_buf(),
        which: "END",
    })?;
    if start.end() >= end.start() {
        return Err(Error::MarkersOutOfOrder(path.to_path_buf()));
    }
    Ok(text[start.end()..end.start()].trim())
}

/// Where the processed copy of `original` goes: `dir/name.txt` becomes
/// `dir/name-p.txt`.
pub fn processed_path(original: &Path) -> PathBuf {
    let stem = original
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match original.extension() {
        Some(ext) => format!("{stem}-p.{}", ext.to_string_lossy()),
        None => format!("{stem}-p"),
    };
    original.with_file_name(name)
}

/// Write `text` next to `original` as UTF-8 and return the new path.
pub fn save_processed_text(original: &Path, text: &str) -> Result<PathBuf> {
    let target = processed_path(original);
    if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }
    fs::write(&target, text).map_err(|e| Error::io(&target, e))?;
    info!(path = %target.display(), "saved processed text");
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOOK: &str = "Title: Test\n\
        *** START OF THE PROJECT GUTENBERG EBOOK TEST ***\n\n\
        It is a truth universally acknowledged.\n\n\
        *** END OF THE PROJECT GUTENBERG EBOOK TEST ***\n\
        License text";

    #[test]
    fn test_extracts_body() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("book.txt");
        fs::write(&path, BOOK).unwrap();
        assert_eq!(
            load_gutenberg(&path).unwrap(),
            "It is a truth universally acknowledged."
        );
    }

    #[test]
    fn test_marker_case_and_this_variant() {
        let text = "*** start of this project gutenberg ebook x ***body*** End Of The Project Gutenberg eBook x ***";
        assert_eq!(extract_body(text, Path::new("x.txt")).unwrap(), "body");
    }

    #[test]
    fn test_latin1_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("old.txt");
        let mut bytes = b"*** START OF THE PROJECT GUTENBERG EBOOK OLD ***\ncaf".to_vec();
        bytes.push(0xe9);
        bytes.extend_from_slice(b"\n*** END OF THE PROJECT GUTENBERG EBOOK OLD ***");
        fs::write(&path, bytes).unwrap();
        assert_eq!(load_gutenberg(&path).unwrap(), "café");
    }

    #[test]
    fn test_rejects_non_txt() {
        let err = load_gutenberg(Path::new("book.epub")).unwrap_err();
        assert!(matches!(err, Error::NotTextFile(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = load_gutenberg(Path::new("/no/such/book.txt")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn test_missing_and_inverted_markers() {
        let p = Path::new("b.txt");
        assert!(matches!(
            extract_body("no markers", p),
            Err(Error::MissingMarker { which: "START", .. })
        ));
        assert!(matches!(
            extract_body("*** START OF THE PROJECT GUTENBERG EBOOK A ***", p),
            Err(Error::MissingMarker { which: "END", .. })
        ));
        let inverted = "*** END OF THE PROJECT GUTENBERG EBOOK A *** x *** START OF THE PROJECT GUTENBERG EBOOK A ***";
        assert!(matches!(extract_body(inverted, p), Err(Error::MarkersOutOfOrder(_))));
    }

    #[test]
    fn test_processed_path() {
        assert_eq!(
            processed_path(Path::new("data/1342-0.txt")),
            PathBuf::from("data/1342-0-p.txt")
        );
        assert_eq!(processed_path(Path::new("notes")), PathBuf::from("notes-p"));
    }

    #[test]
    fn test_save_processed_text() {
        let dir = tempfile::tempdir().unwrap();
        let original = dir.path().join("nested").join("book.txt");
        let written = save_processed_text(&original, "cat run").unwrap();
        assert_eq!(written, dir.path().join("nested").join("book-p.txt"));
        assert_eq!(fs::read_to_string(written).unwrap(), "cat run");
    }
}

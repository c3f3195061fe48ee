//! Batch processing of a configured book list.
//!
//! Each book is loaded, normalized, saved next to its source, measured and
//! validated. Books are independent, so they may run on a thread pool; the
//! returned reports always follow book-list order.

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{info, warn};

use crate::config::{BatchConfig, NormalizeConfig};
use crate::error::{Error, Result};
use crate::language::Language;
use crate::loader::{load_gutenberg, save_processed_text};
use crate::pipeline::normalize;
use crate::resources::Resources;
use crate::stats::{FrequencyRecord, LengthRecord, get_statistics};
use crate::verify::{ValidationError, validate};

/// Sizes and language of one normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    pub original_chars: usize,
    pub language: Language,
    pub processed_chars: usize,
}

/// How far a book got.
#[derive(Debug)]
pub enum Outcome {
    /// The source could not be read or had no Gutenberg body.
    LoadFailed(Error),
    /// Normalization, saving or measuring failed after a successful load.
    Failed { original_chars: usize, error: Error },
    /// Unknown language or empty output; nothing saved or checked.
    Skipped(Normalized),
    Processed {
        normalized: Normalized,
        saved: PathBuf,
        top: Vec<FrequencyRecord>,
        longest: Vec<LengthRecord>,
        errors: Vec<ValidationError>,
    },
}

#[derive(Debug)]
pub struct BookReport {
    pub name: String,
    pub source: PathBuf,
    /// `None` when the book had no parameter entry and ran with defaults.
    pub params: Option<NormalizeConfig>,
    pub outcome: Outcome,
}

/// Load, normalize, save, measure and validate one book.
pub fn process_book(
    res: &Resources,
    name: &str,
    source: &Path,
    params: Option<&NormalizeConfig>,
    top_n: usize,
    longest_k: usize,
) -> BookReport {
    let config = params.copied().unwrap_or_default();
    let outcome = match load_gutenberg(source) {
        Err(error) => {
            warn!(book = name, %error, "skipping book");
            Outcome::LoadFailed(error)
        }
        Ok(original) => {
            let original_chars = original.chars().count();
            run_loaded(res, source, &original, &config, top_n, longest_k)
                .unwrap_or_else(|error| {
                    warn!(book = name, %error, "processing failed");
                    Outcome::Failed {
                        original_chars,
                        error,
                    }
                })
        }
    };

    BookReport {
        name: name.to_string(),
        source: source.to_path_buf(),
        params: params.copied(),
        outcome,
    }
}

fn run_loaded(
    res: &Resources,
    source: &Path,
    original: &str,
    config: &NormalizeConfig,
    top_n: usize,
    longest_k: usize,
) -> Result<Outcome> {
    let (processed, language) = normalize(res, original, config)?;
    let normalized = Normalized {
        original_chars: original.chars().count(),
        language,
        processed_chars: processed.chars().count(),
    };
    if language == Language::Unknown || processed.is_empty() {
        return Ok(Outcome::Skipped(normalized));
    }

    let saved = save_processed_text(source, &processed)?;
    let (top, longest) = get_statistics(res, &processed, top_n, longest_k, language)?;
    let errors = validate(res, &processed, language)?;
    Ok(Outcome::Processed {
        normalized,
        saved,
        top,
        longest,
        errors,
    })
}

/// Process every book in `config`, `config.jobs` at a time.
///
/// `on_done` is called as each book finishes, in completion order. The
/// returned reports are in book-list order.
pub fn run_batch<F>(res: &Resources, config: &BatchConfig, on_done: F) -> Result<Vec<BookReport>>
where
    F: Fn(&BookReport) + Sync,
{
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.jobs)
        .build()
        .map_err(|e| Error::Config(format!("cannot start {} workers: {e}", config.jobs)))?;

    info!(books = config.booklist.len(), jobs = config.jobs, "starting batch");
    let reports = pool.install(|| {
        config
            .booklist
            .par_iter()
            .map(|(name, source)| {
                let report = process_book(
                    res,
                    name,
                    source,
                    config.params_for(name),
                    config.top_n,
                    config.longest_k,
                );
                on_done(&report);
                report
            })
            .collect()
    });
    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lazy_static::lazy_static;
    use std::fs;

    lazy_static! {
        static ref RES: Resources = Resources::builtin();
    }

    fn gutenberg(body: &str) -> String {
        format!(
            "Header\n*** START OF THE PROJECT GUTENBERG EBOOK T ***\n{body}\n*** END OF THE PROJECT GUTENBERG EBOOK T ***\nFooter"
        )
    }

    #[test]
    fn test_processes_english_book() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("cats.txt");
        fs::write(&source, gutenberg("The cats were running quickly. The cats sat.")).unwrap();

        let report = process_book(&RES, "Cats", &source, None, 1, 2);
        assert!(report.params.is_none());
        match report.outcome {
            Outcome::Processed {
                normalized,
                saved,
                top,
                errors,
                ..
            } => {
                assert_eq!(normalized.language, Language::English);
                assert_eq!(saved, dir.path().join("cats-p.txt"));
                assert!(saved.exists());
                assert_eq!(top, [("cat".to_string(), 2)]);
                assert!(errors.is_empty());
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn test_load_failure_is_reported() {
        let report = process_book(&RES, "Gone", Path::new("/no/such/book.txt"), None, 10, 20);
        assert!(matches!(report.outcome, Outcome::LoadFailed(Error::Io { .. })));
    }

    #[test]
    fn test_unknown_language_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("digits.txt");
        fs::write(&source, gutenberg("1234 5678 !!!")).unwrap();

        let report = process_book(&RES, "Digits", &source, None, 10, 20);
        match report.outcome {
            Outcome::Skipped(n) => assert_eq!(n.language, Language::Unknown),
            other => panic!("unexpected outcome: {other:?}"),
        }
        assert!(!dir.path().join("digits-p.txt").exists());
    }

    #[test]
    fn test_batch_keeps_book_order() {
        let dir = tempfile::tempdir().unwrap();
        let mut booklist = Vec::new();
        for name in ["d", "c", "b", "a"] {
            let path = dir.path().join(format!("{name}.txt"));
            fs::write(&path, gutenberg("Quick brown foxes jumped over lazy dogs.")).unwrap();
            booklist.push((name.to_string(), path));
        }
        let config = BatchConfig {
            booklist,
            preprocessing_params: Vec::new(),
            top_n: 3,
            longest_k: 3,
            resources: Default::default(),
            jobs: 3,
        };

        let done = std::sync::atomic::AtomicUsize::new(0);
        let reports = run_batch(&RES, &config, |_| {
            done.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
        })
        .unwrap();
        let names: Vec<&str> = reports.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["d", "c", "b", "a"]);
        assert_eq!(done.into_inner(), 4);
    }
}
